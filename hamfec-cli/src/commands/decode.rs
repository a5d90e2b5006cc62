use crate::commands::{read_stream, write_output};
use crate::StreamFormat;
use anyhow::{Context, Result};
use hamfec_core::{CorrectionEvent, Decoded, Hamming74, TruncatedPolicy};
use serde::Serialize;
use std::fs;
use tracing::{info, warn};

/// Machine-readable summary of one decode run
#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub input_bytes: usize,
    pub declared_len: Option<u8>,
    pub decoded_len: usize,
    pub complete: bool,
    pub corrected_errors: u32,
    pub codewords: u32,
    pub correction_rate: f64,
    pub corrections: Vec<CorrectionEvent>,
}

impl DecodeReport {
    fn new(input_bytes: usize, decoded: &Decoded, corrections: Vec<CorrectionEvent>) -> Self {
        Self {
            input_bytes,
            declared_len: decoded.declared_len,
            decoded_len: decoded.data.len(),
            complete: decoded.is_complete(),
            corrected_errors: decoded.corrected_errors,
            codewords: decoded.codewords,
            correction_rate: decoded.correction_rate(),
            corrections,
        }
    }
}

pub fn execute(
    input: &str,
    output: &str,
    partial: bool,
    format: StreamFormat,
    report: Option<&str>,
) -> Result<DecodeReport> {
    info!("Decoding {} to {}", input, output);

    let stream = read_stream(input, format)?;

    let codec = Hamming74::new().truncated(if partial {
        TruncatedPolicy::Partial
    } else {
        TruncatedPolicy::Error
    });

    let mut corrections = Vec::new();
    let decoded = codec
        .decode_with_sink(&stream, &mut |event: &CorrectionEvent| {
            corrections.push(*event)
        })
        .with_context(|| format!("Failed to decode {}", input))?;

    if codec.truncated_policy() == TruncatedPolicy::Partial && !decoded.is_complete() {
        warn!(
            "Stream ended early: recovered {} of {} bytes",
            decoded.data.len(),
            decoded.declared_len.unwrap_or_default()
        );
    }

    write_output(output, &decoded.data)?;

    info!(
        "Decoded {} bytes, corrected {} of {} codewords",
        decoded.data.len(),
        decoded.corrected_errors,
        decoded.codewords
    );

    let summary = DecodeReport::new(stream.len(), &decoded, corrections);

    if let Some(report_path) = report {
        let json = serde_json::to_string_pretty(&summary)
            .with_context(|| "Failed to serialize decode report")?;
        fs::write(report_path, json)
            .with_context(|| format!("Failed to write report file: {}", report_path))?;
        info!("Decode report written to: {}", report_path);
    }

    Ok(summary)
}
