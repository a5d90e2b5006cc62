//! Constants and limits for the Hamming(7,4) wire format

/// Generator polynomial g(x) = x^3 + x^2 + 1
pub const GENERATOR_POLY: u8 = 0b1101;

/// Mask selecting the 4 data bits of a nibble
pub const NIBBLE_MASK: u8 = 0x0F;

/// Number of bits in one codeword (4 data + 3 parity)
pub const CODEWORD_BITS: u32 = 7;

/// Mask selecting the 7 bits of a codeword
pub const CODEWORD_MASK: u8 = 0x7F;

/// Number of data bits carried by a codeword
pub const DATA_BITS: u32 = 4;

/// Number of parity bits carried by a codeword
pub const PARITY_BITS: u32 = 3;

/// Mask selecting the parity bits `[p2 p1 p0]` of a codeword
pub const PARITY_MASK: u8 = 0b0000_0111;

/// Number of bits in one block (two codewords, one source byte)
pub const BLOCK_BITS: u32 = 2 * CODEWORD_BITS;

/// Mask selecting the 14 bits of a block
pub const BLOCK_MASK: u16 = 0x3FFF;

/// Largest payload the one-byte length prefix can describe
pub const MAX_PAYLOAD_LEN: usize = u8::MAX as usize;

/// Encoded size of an empty payload (length block only, padded to whole bytes)
pub const MIN_ENCODED_LEN: usize = encoded_len(0);

/// Encoded size of the largest payload
pub const MAX_ENCODED_LEN: usize = encoded_len(MAX_PAYLOAD_LEN);

/// Syndrome to erroneous bit position.
///
/// Index is the 3-bit syndrome `s2 s1 s0`; entry 0 means no error. Fixed by the
/// generator matrix and must match the paired encoder bit-for-bit.
pub const SYNDROME_TABLE: [Option<u8>; 8] = [
    None,
    Some(0), // p0
    Some(1), // p1
    Some(5), // d2
    Some(2), // p2
    Some(3), // d0
    Some(6), // d3
    Some(4), // d1
];

/// Number of bytes produced when encoding a payload of `payload_len` bytes.
///
/// Length block plus one block per byte, rounded up to whole bytes.
pub const fn encoded_len(payload_len: usize) -> usize {
    let bits = BLOCK_BITS as usize * (payload_len + 1);
    bits.div_ceil(8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_len() {
        assert_eq!(encoded_len(0), 2);
        assert_eq!(encoded_len(1), 4);
        assert_eq!(encoded_len(2), 6);
        assert_eq!(encoded_len(3), 7);
        assert_eq!(MIN_ENCODED_LEN, 2);
        assert_eq!(MAX_ENCODED_LEN, 448);
    }

    #[test]
    fn test_syndrome_table_is_a_permutation() {
        let mut seen = [false; 7];
        for pos in SYNDROME_TABLE.iter().flatten() {
            assert!(!seen[*pos as usize]);
            seen[*pos as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
