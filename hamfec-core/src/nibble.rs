//! Hamming(7,4) nibble codec
//!
//! A codeword is systematic: the four data bits are sent unchanged in the high
//! positions and three parity bits follow.
//!
//! ```text
//!   bit:   6  5  4  3  2  1  0
//!         d3 d2 d1 d0 p2 p1 p0
//! ```
//!
//! Parity follows the generator polynomial g(x) = x^3 + x^2 + 1:
//!
//! - `p2 = d3 ^ d1 ^ d0`
//! - `p1 = d3 ^ d2 ^ d1`
//! - `p0 = d2 ^ d1 ^ d0`
//!
//! Any single flipped bit is corrected. Two flipped bits are not detected and
//! decode to the wrong nibble without any signal; that is a property of the code.

use crate::constants::{
    CODEWORD_BITS, CODEWORD_MASK, DATA_BITS, NIBBLE_MASK, PARITY_BITS, PARITY_MASK, SYNDROME_TABLE,
};
use serde::{Deserialize, Serialize};

/// Every valid codeword, indexed by the nibble it carries
pub const CODEWORDS: [u8; 16] = {
    let mut table = [0u8; 16];
    let mut nibble = 0;
    while nibble < 16 {
        table[nibble] = encode_nibble(nibble as u8);
        nibble += 1;
    }
    table
};

/// Result of decoding a single codeword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NibbleDecode {
    /// Recovered 4-bit value
    pub value: u8,
    /// Whether a single-bit error was corrected
    pub corrected: bool,
}

/// Result of decoding a 14-bit block into one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDecode {
    /// Recovered byte (`high << 4 | low`)
    pub byte: u8,
    /// The high-nibble codeword needed correction
    pub high_corrected: bool,
    /// The low-nibble codeword needed correction
    pub low_corrected: bool,
}

impl BlockDecode {
    /// Number of codewords corrected in this block (0-2)
    pub const fn corrections(&self) -> u32 {
        self.high_corrected as u32 + self.low_corrected as u32
    }

    /// Whether either codeword was corrected
    pub const fn is_corrected(&self) -> bool {
        self.high_corrected || self.low_corrected
    }
}

/// Compute the 3 parity bits `[p2 p1 p0]` for a nibble
pub const fn parity(nibble: u8) -> u8 {
    let d3 = (nibble >> 3) & 1;
    let d2 = (nibble >> 2) & 1;
    let d1 = (nibble >> 1) & 1;
    let d0 = nibble & 1;

    let p2 = d3 ^ d1 ^ d0;
    let p1 = d3 ^ d2 ^ d1;
    let p0 = d2 ^ d1 ^ d0;

    (p2 << 2) | (p1 << 1) | p0
}

/// Encode a nibble into a 7-bit codeword.
///
/// Bits above the low four are discarded.
pub const fn encode_nibble(nibble: u8) -> u8 {
    let nibble = nibble & NIBBLE_MASK;
    (nibble << PARITY_BITS) | parity(nibble)
}

/// Compute the syndrome of a received codeword (0 means consistent)
pub const fn syndrome(codeword: u8) -> u8 {
    let codeword = codeword & CODEWORD_MASK;
    parity(codeword >> PARITY_BITS) ^ (codeword & PARITY_MASK)
}

/// Decode a 7-bit codeword, correcting a single-bit error if present.
///
/// Bits above the low seven are ignored.
pub const fn decode_nibble(codeword: u8) -> NibbleDecode {
    let mut codeword = codeword & CODEWORD_MASK;
    let corrected = match SYNDROME_TABLE[syndrome(codeword) as usize] {
        Some(bit) => {
            codeword ^= 1 << bit;
            true
        }
        None => false,
    };

    NibbleDecode {
        value: codeword >> PARITY_BITS,
        corrected,
    }
}

/// Encode one byte into a 14-bit block: high-nibble codeword, then low
pub const fn encode_block(byte: u8) -> u16 {
    let high = encode_nibble(byte >> DATA_BITS) as u16;
    let low = encode_nibble(byte & NIBBLE_MASK) as u16;
    (high << CODEWORD_BITS) | low
}

/// Decode a 14-bit block back into one byte.
///
/// Bits 13-7 carry the high nibble and bits 6-0 the low nibble.
pub const fn decode_block(block: u16) -> BlockDecode {
    let high = decode_nibble((block >> CODEWORD_BITS) as u8);
    let low = decode_nibble(block as u8);

    BlockDecode {
        byte: (high.value << DATA_BITS) | low.value,
        high_corrected: high.corrected,
        low_corrected: low.corrected,
    }
}
