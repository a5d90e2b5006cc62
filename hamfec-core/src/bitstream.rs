//! Bit accumulator and block reader for MSB-first packing
//!
//! Codewords are 7 bits wide and blocks 14, so neither lines up with byte
//! boundaries. The accumulator re-aligns them: blocks go in on one side and
//! whole bytes come out the other (and the reverse when decoding).

use crate::constants::{BLOCK_BITS, BLOCK_MASK};
use bytes::BufMut;

/// Fixed-width shift register holding up to 32 pending bits.
///
/// The oldest bit is always the most significant of the live bits. The codec
/// never holds more than 21 bits at once (7 leftover + 14 new).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitAccumulator {
    bits: u32,
    len: u32,
}

impl BitAccumulator {
    /// Maximum number of bits the accumulator can hold
    pub const CAPACITY: u32 = u32::BITS;

    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self { bits: 0, len: 0 }
    }

    /// Number of bits currently held
    pub const fn len(&self) -> u32 {
        self.len
    }

    /// Check if no bits are held
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append the low `width` bits of `value` after the bits already held
    pub fn push(&mut self, value: u32, width: u32) {
        debug_assert!(
            self.len + width <= Self::CAPACITY,
            "accumulator overflow: {} + {} bits",
            self.len,
            width
        );
        self.bits = self.bits.checked_shl(width).unwrap_or(0) | (value & low_mask(width));
        self.len += width;
    }

    /// Remove and return the oldest `width` bits, or `None` if fewer are held
    pub fn pop(&mut self, width: u32) -> Option<u32> {
        if self.len < width {
            return None;
        }

        self.len -= width;
        let value = self.bits.checked_shr(self.len).unwrap_or(0) & low_mask(width);
        self.bits &= low_mask(self.len);
        Some(value)
    }

    /// Move every complete byte into `out`, oldest first
    pub fn drain_bytes<B: BufMut>(&mut self, out: &mut B) {
        while let Some(byte) = self.pop(8) {
            out.put_u8(byte as u8);
        }
    }

    /// Drain all complete bytes, then emit any 1-7 leftover bits left-aligned
    /// in one final zero-padded byte
    pub fn finish<B: BufMut>(mut self, out: &mut B) {
        self.drain_bytes(out);
        if self.len > 0 {
            out.put_u8((self.bits << (8 - self.len)) as u8);
        }
    }
}

fn low_mask(width: u32) -> u32 {
    1u32.checked_shl(width).map_or(u32::MAX, |bit| bit - 1)
}

/// Iterator over the 14-bit blocks of an encoded stream.
///
/// Input is consumed one byte at a time; a block is yielded as soon as 14 bits
/// are buffered. Trailing bits that never complete a block are not yielded.
#[derive(Debug, Clone)]
pub struct BlockReader<'a> {
    input: &'a [u8],
    pos: usize,
    acc: BitAccumulator,
}

impl<'a> BlockReader<'a> {
    /// Create a reader over an encoded stream
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            acc: BitAccumulator::new(),
        }
    }

    /// Number of input bytes consumed so far
    pub fn bytes_consumed(&self) -> usize {
        self.pos
    }

    /// Number of bits buffered but not yet returned as a block
    pub fn pending_bits(&self) -> u32 {
        self.acc.len()
    }

    /// Number of complete blocks the input holds in total
    pub fn total_blocks(&self) -> usize {
        self.input.len() * 8 / BLOCK_BITS as usize
    }
}

impl Iterator for BlockReader<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        loop {
            if let Some(block) = self.acc.pop(BLOCK_BITS) {
                return Some(block as u16 & BLOCK_MASK);
            }
            let byte = *self.input.get(self.pos)?;
            self.pos += 1;
            self.acc.push(byte as u32, 8);
        }
    }
}
