use crate::commands::{read_input, write_stream};
use crate::StreamFormat;
use anyhow::{Context, Result};
use hamfec_core::{constants::MAX_PAYLOAD_LEN, Hamming74, OversizePolicy};
use tracing::{info, warn};

pub fn execute(input: &str, output: &str, truncate: bool, format: StreamFormat) -> Result<()> {
    info!("Encoding {} to {}", input, output);

    let payload = read_input(input)?;

    let codec = Hamming74::new().oversize(if truncate {
        OversizePolicy::Truncate
    } else {
        OversizePolicy::Reject
    });

    if codec.oversize_policy() == OversizePolicy::Truncate && payload.len() > MAX_PAYLOAD_LEN {
        warn!(
            "Truncating {} byte input to {} bytes",
            payload.len(),
            MAX_PAYLOAD_LEN
        );
    }

    let encoded = codec
        .encode(&payload)
        .with_context(|| format!("Failed to encode {}", input))?;

    write_stream(output, &encoded, format)?;

    info!(
        "Encoded {} bytes into {} bytes",
        payload.len().min(MAX_PAYLOAD_LEN),
        encoded.len()
    );

    Ok(())
}
