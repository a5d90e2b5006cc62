//! Stream encoding
//!
//! The encoded stream is laid out as:
//! 1. Length block (14 bits): payload length as two codewords
//! 2. One 14-bit block per payload byte, high nibble first
//! 3. Zero padding on the low bits of the final byte, if needed
//!
//! Blocks are packed MSB-first with no gaps between them.

use crate::bitstream::BitAccumulator;
use crate::constants::{encoded_len, BLOCK_BITS, MAX_PAYLOAD_LEN};
use crate::error::CodecError;
use crate::nibble::encode_block;
use crate::types::OversizePolicy;
use bytes::{BufMut, Bytes, BytesMut};

#[cfg(feature = "logging")]
use tracing::debug;

/// Encode a payload of at most 255 bytes.
///
/// Longer payloads are rejected with [`CodecError::PayloadTooLarge`].
pub fn encode(data: &[u8]) -> Result<Bytes, CodecError> {
    encode_with_policy(data, OversizePolicy::Reject)
}

/// Encode a payload, applying `policy` if it is longer than 255 bytes
pub fn encode_with_policy(data: &[u8], policy: OversizePolicy) -> Result<Bytes, CodecError> {
    let payload = match policy {
        OversizePolicy::Truncate if data.len() > MAX_PAYLOAD_LEN => {
            #[cfg(feature = "logging")]
            debug!(
                "Truncating {} byte payload to {} bytes",
                data.len(),
                MAX_PAYLOAD_LEN
            );
            &data[..MAX_PAYLOAD_LEN]
        }
        _ => data,
    };

    let mut buf = BytesMut::with_capacity(encoded_len(payload.len()));
    encode_into(payload, &mut buf)?;
    Ok(buf.freeze())
}

/// Encode a payload into an existing buffer, returning the number of bytes written
pub fn encode_into<B: BufMut>(data: &[u8], out: &mut B) -> Result<usize, CodecError> {
    let len = u8::try_from(data.len())
        .map_err(|_| CodecError::PayloadTooLarge(data.len(), MAX_PAYLOAD_LEN))?;

    let mut acc = BitAccumulator::new();
    acc.push(encode_block(len) as u32, BLOCK_BITS);
    acc.drain_bytes(out);

    for &byte in data {
        acc.push(encode_block(byte) as u32, BLOCK_BITS);
        acc.drain_bytes(out);
    }

    acc.finish(out);

    let written = encoded_len(data.len());

    #[cfg(feature = "logging")]
    debug!("Encoded {} bytes into {} bytes", data.len(), written);

    Ok(written)
}
