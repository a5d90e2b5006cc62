//! Error types for hamfec operations

/// Errors that can occur while encoding or decoding a link stream
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Payload does not fit the one-byte length prefix
    #[cfg_attr(feature = "std", error("Payload size {0} exceeds maximum {1}"))]
    PayloadTooLarge(usize, usize),

    /// Stream ended before a complete length block was read
    #[cfg_attr(
        feature = "std",
        error("Missing length prefix: only {available_bits} bits available")
    )]
    MissingLengthPrefix {
        /// Number of bits present in the input.
        available_bits: usize,
    },

    /// Stream ended before the declared number of bytes was decoded
    #[cfg_attr(
        feature = "std",
        error("Insufficient data: expected {expected} bytes, decoded {actual}")
    )]
    InsufficientData {
        /// Length declared by the stream's prefix.
        expected: usize,
        /// Number of bytes recovered before the input ran out.
        actual: usize,
    },
}
