use crate::commands::{read_stream, write_stream};
use crate::StreamFormat;
use anyhow::{bail, Result};
use hamfec_core::constants::{BLOCK_BITS, CODEWORD_BITS};
use tracing::{debug, info};

/// Flip bits in an encoded stream to exercise error correction.
///
/// `bits` are absolute stream positions counted from the MSB of the first
/// byte. With `per_codeword`, bit `offset` of every complete codeword is also
/// flipped. Returns the number of bits flipped.
pub fn execute(
    input: &str,
    output: &str,
    bits: &[usize],
    per_codeword: Option<u32>,
    format: StreamFormat,
) -> Result<usize> {
    info!("Corrupting {} into {}", input, output);

    let mut stream = read_stream(input, format)?;
    let total_bits = stream.len() * 8;

    let mut positions: Vec<usize> = bits.to_vec();

    if let Some(offset) = per_codeword {
        if offset >= CODEWORD_BITS {
            bail!(
                "Codeword offset {} out of range (0-{})",
                offset,
                CODEWORD_BITS - 1
            );
        }
        let codewords = total_bits / BLOCK_BITS as usize * 2;
        positions.extend((0..codewords).map(|cw| cw * CODEWORD_BITS as usize + offset as usize));
    }

    for &bit in &positions {
        if bit >= total_bits {
            bail!("Bit {} is past the end of a {} bit stream", bit, total_bits);
        }
        stream[bit / 8] ^= 0x80 >> (bit % 8);
        debug!("Flipped bit {}", bit);
    }

    write_stream(output, &stream, format)?;

    info!("Flipped {} bits", positions.len());

    Ok(positions.len())
}
