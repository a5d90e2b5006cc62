//! Forward Error Correction traits and the Hamming(7,4) stream codec
//!
//! The traits let a link layer hold "some codec" without caring which one.
//! [`Hamming74`] is the codec the radio link uses and carries the policies for
//! oversized payloads and truncated streams.

use crate::constants::{encoded_len, MAX_PAYLOAD_LEN};
use crate::decoder::decode_with_policy;
use crate::encoder::encode_with_policy;
use crate::error::CodecError;
use crate::sink::{CorrectionSink, NoopSink};
use crate::types::{Decoded, OversizePolicy, TruncatedPolicy};
use bytes::Bytes;

/// Trait for encoding payloads into a protected byte stream
pub trait StreamEncoder {
    /// Encode one payload
    fn encode_stream(&self, data: &[u8]) -> Result<Bytes, CodecError>;

    /// Largest payload a single stream can carry
    fn max_payload_len(&self) -> usize;
}

/// Trait for recovering payloads from a protected byte stream
pub trait StreamDecoder {
    /// Decode one stream, correcting what the code allows
    fn decode_stream(&self, encoded: &[u8]) -> Result<Decoded, CodecError>;

    /// Check if `available_bytes` of input are enough to recover a payload of
    /// `payload_len` bytes
    fn can_decode(&self, available_bytes: usize, payload_len: usize) -> bool;
}

/// Hamming(7,4) stream codec
///
/// # Example
///
/// ```
/// use hamfec_core::{Hamming74, OversizePolicy, StreamDecoder, StreamEncoder};
///
/// let codec = Hamming74::new().oversize(OversizePolicy::Truncate);
/// let encoded = codec.encode_stream(b"ping").unwrap();
/// let decoded = codec.decode_stream(&encoded).unwrap();
/// assert_eq!(decoded.data.as_ref(), b"ping");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming74 {
    oversize: OversizePolicy,
    truncated: TruncatedPolicy,
}

impl Hamming74 {
    /// Create a codec that rejects oversized payloads and truncated streams
    pub const fn new() -> Self {
        Self {
            oversize: OversizePolicy::Reject,
            truncated: TruncatedPolicy::Error,
        }
    }

    /// Set the policy for payloads longer than 255 bytes
    pub const fn oversize(mut self, policy: OversizePolicy) -> Self {
        self.oversize = policy;
        self
    }

    /// Set the policy for streams that end before the declared length
    pub const fn truncated(mut self, policy: TruncatedPolicy) -> Self {
        self.truncated = policy;
        self
    }

    /// Current oversize policy
    pub const fn oversize_policy(&self) -> OversizePolicy {
        self.oversize
    }

    /// Current truncated-stream policy
    pub const fn truncated_policy(&self) -> TruncatedPolicy {
        self.truncated
    }

    /// Encode a payload using this codec's oversize policy
    pub fn encode(&self, data: &[u8]) -> Result<Bytes, CodecError> {
        encode_with_policy(data, self.oversize)
    }

    /// Decode a stream using this codec's truncated-stream policy
    pub fn decode(&self, encoded: &[u8]) -> Result<Decoded, CodecError> {
        decode_with_policy(encoded, self.truncated, &mut NoopSink)
    }

    /// Decode a stream, reporting every corrected block to `sink`
    pub fn decode_with_sink<S>(&self, encoded: &[u8], sink: &mut S) -> Result<Decoded, CodecError>
    where
        S: CorrectionSink + ?Sized,
    {
        decode_with_policy(encoded, self.truncated, sink)
    }
}

impl StreamEncoder for Hamming74 {
    fn encode_stream(&self, data: &[u8]) -> Result<Bytes, CodecError> {
        self.encode(data)
    }

    fn max_payload_len(&self) -> usize {
        MAX_PAYLOAD_LEN
    }
}

impl StreamDecoder for Hamming74 {
    fn decode_stream(&self, encoded: &[u8]) -> Result<Decoded, CodecError> {
        self.decode(encoded)
    }

    fn can_decode(&self, available_bytes: usize, payload_len: usize) -> bool {
        payload_len <= MAX_PAYLOAD_LEN && available_bytes >= encoded_len(payload_len)
    }
}
