//! Stream decoding with single-bit error correction
//!
//! The first decoded block is the payload length; every block after it is a
//! payload byte. Decoding stops as soon as the declared length is reached, so
//! padding bits and anything appended after the stream are ignored.

use crate::bitstream::BlockReader;
use crate::constants::encoded_len;
use crate::error::CodecError;
use crate::nibble::decode_block;
use crate::sink::{CorrectionSink, NoopSink};
use crate::types::{CorrectionEvent, Decoded, TruncatedPolicy};
use bytes::{BufMut, BytesMut};

#[cfg(feature = "logging")]
use tracing::trace;

/// Decode a stream, failing if it ends before the declared length
pub fn decode(encoded: &[u8]) -> Result<Decoded, CodecError> {
    decode_with_policy(encoded, TruncatedPolicy::Error, &mut NoopSink)
}

/// Decode a stream, reporting every corrected block to `sink`
pub fn decode_with_sink<S>(encoded: &[u8], sink: &mut S) -> Result<Decoded, CodecError>
where
    S: CorrectionSink + ?Sized,
{
    decode_with_policy(encoded, TruncatedPolicy::Error, sink)
}

/// Decode a stream with an explicit policy for truncated input.
///
/// A stream too short to hold the length block always fails with
/// [`CodecError::MissingLengthPrefix`]. Once the length is known, a stream that
/// runs out early either fails with [`CodecError::InsufficientData`] or returns
/// the partial payload, depending on `policy`.
pub fn decode_with_policy<S>(
    encoded: &[u8],
    policy: TruncatedPolicy,
    sink: &mut S,
) -> Result<Decoded, CodecError>
where
    S: CorrectionSink + ?Sized,
{
    let mut blocks = BlockReader::new(encoded);

    let header = match blocks.next() {
        Some(block) => decode_block(block),
        None => {
            return Err(CodecError::MissingLengthPrefix {
                available_bits: encoded.len() * 8,
            })
        }
    };

    let expected = header.byte as usize;
    let mut corrected_errors = header.corrections();
    let mut codewords = 2;

    if header.is_corrected() {
        report(
            sink,
            CorrectionEvent {
                block_index: 0,
                byte_index: None,
                high_corrected: header.high_corrected,
                low_corrected: header.low_corrected,
            },
        );
    }

    let mut data = BytesMut::with_capacity(expected);
    while data.len() < expected {
        let Some(block) = blocks.next() else {
            break;
        };

        let decoded = decode_block(block);
        codewords += 2;
        corrected_errors += decoded.corrections();

        if decoded.is_corrected() {
            report(
                sink,
                CorrectionEvent {
                    block_index: data.len() + 1,
                    byte_index: Some(data.len()),
                    high_corrected: decoded.high_corrected,
                    low_corrected: decoded.low_corrected,
                },
            );
        }

        data.put_u8(decoded.byte);
    }

    if data.len() < expected && policy == TruncatedPolicy::Error {
        return Err(CodecError::InsufficientData {
            expected,
            actual: data.len(),
        });
    }

    Ok(Decoded {
        data: data.freeze(),
        declared_len: Some(header.byte),
        corrected_errors,
        codewords,
    })
}

/// Read the declared payload length without decoding the payload.
///
/// Returns `None` if the stream is too short to hold the length block.
pub fn peek_declared_len(encoded: &[u8]) -> Option<u8> {
    BlockReader::new(encoded)
        .next()
        .map(|block| decode_block(block).byte)
}

/// Number of encoded bytes needed to decode the whole stream.
///
/// Lets a receiver tell when a packet is complete. Returns `None` until the
/// length block has arrived.
pub fn required_len(encoded: &[u8]) -> Option<usize> {
    peek_declared_len(encoded).map(|len| encoded_len(len as usize))
}

fn report<S>(sink: &mut S, event: CorrectionEvent)
where
    S: CorrectionSink + ?Sized,
{
    #[cfg(feature = "logging")]
    match event.byte_index {
        Some(index) => trace!("Corrected error in byte {}", index),
        None => trace!("Corrected error in length prefix"),
    }

    sink.on_correction(&event);
}
