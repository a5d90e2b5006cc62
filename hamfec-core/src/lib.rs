//! # hamfec Core
//!
//! Hamming(7,4) forward error correction for byte streams sent over a
//! constrained radio link.
//!
//! Each payload byte becomes two 7-bit codewords. Codewords are packed back to
//! back, MSB-first, behind a Hamming-protected one-byte length prefix, so a
//! receiver knows where the payload ends without any side channel. Any single
//! flipped bit per codeword is corrected on decode.
//!
//! ```
//! let encoded = hamfec_core::encode(&[0xA5]).unwrap();
//! assert_eq!(encoded.as_ref(), &[0x00, 0x36, 0x8A, 0xE0]);
//!
//! let decoded = hamfec_core::decode(&encoded).unwrap();
//! assert_eq!(decoded.data.as_ref(), &[0xA5]);
//! assert_eq!(decoded.corrected_errors, 0);
//! ```
//!
//! ## Modules
//!
//! - `constants`: Wire format constants and the syndrome table
//! - `nibble`: Codeword encode/decode and 14-bit block helpers
//! - `bitstream`: Bit accumulator and block reader
//! - `encoder`: Stream encoding
//! - `decoder`: Stream decoding with correction
//! - `sink`: Correction notification sinks
//! - `fec`: Codec traits and the `Hamming74` codec
//! - `types`: Decode results and policies

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod bitstream;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod fec;
pub mod nibble;
pub mod sink;
pub mod types;

// Re-export commonly used types
pub use decoder::{decode, decode_with_policy, decode_with_sink};
pub use encoder::{encode, encode_with_policy};
pub use error::CodecError;
pub use fec::{Hamming74, StreamDecoder, StreamEncoder};
pub use nibble::{decode_nibble, encode_nibble, NibbleDecode};
pub use sink::{CorrectionSink, NoopSink};
pub use types::{CorrectionEvent, Decoded, OversizePolicy, TruncatedPolicy};

/// Result type alias for hamfec operations
pub type Result<T> = core::result::Result<T, CodecError>;
