//! Core types for hamfec streams

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// What `encode` does with a payload longer than the length prefix allows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OversizePolicy {
    /// Fail with [`CodecError::PayloadTooLarge`](crate::CodecError::PayloadTooLarge)
    #[default]
    Reject,
    /// Encode only the first 255 bytes
    Truncate,
}

/// What `decode` does when the stream ends before the declared length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TruncatedPolicy {
    /// Fail with [`CodecError::InsufficientData`](crate::CodecError::InsufficientData)
    #[default]
    Error,
    /// Return whatever was recovered; check [`Decoded::is_complete`]
    Partial,
}

/// Output of a stream decode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    /// Recovered payload bytes
    pub data: Bytes,

    /// Length announced by the stream's prefix, if a full length block was read
    pub declared_len: Option<u8>,

    /// Number of codewords that needed a single-bit correction
    pub corrected_errors: u32,

    /// Number of codewords processed, including the two of the length block
    pub codewords: u32,
}

impl Decoded {
    /// Check whether the full declared payload was recovered
    pub fn is_complete(&self) -> bool {
        self.declared_len
            .is_some_and(|len| self.data.len() == len as usize)
    }

    /// Fraction of processed codewords that needed correction
    pub fn correction_rate(&self) -> f64 {
        if self.codewords == 0 {
            return 0.0;
        }
        self.corrected_errors as f64 / self.codewords as f64
    }
}

/// Notification that a block needed correction during decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionEvent {
    /// Position of the block in the stream (0 is the length block)
    pub block_index: usize,

    /// Index of the recovered payload byte, `None` for the length block
    pub byte_index: Option<usize>,

    /// The high-nibble codeword was corrected
    pub high_corrected: bool,

    /// The low-nibble codeword was corrected
    pub low_corrected: bool,
}

impl CorrectionEvent {
    /// Number of codewords corrected in the block (1 or 2)
    pub fn corrections(&self) -> u32 {
        self.high_corrected as u32 + self.low_corrected as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_completeness() {
        let mut decoded = Decoded {
            data: Bytes::from_static(b"ab"),
            declared_len: Some(2),
            corrected_errors: 1,
            codewords: 6,
        };
        assert!(decoded.is_complete());
        assert!((decoded.correction_rate() - 1.0 / 6.0).abs() < 1e-12);

        decoded.declared_len = Some(3);
        assert!(!decoded.is_complete());

        decoded.declared_len = None;
        assert!(!decoded.is_complete());
    }

    #[test]
    fn test_default_policies() {
        assert_eq!(OversizePolicy::default(), OversizePolicy::Reject);
        assert_eq!(TruncatedPolicy::default(), TruncatedPolicy::Error);
    }
}
