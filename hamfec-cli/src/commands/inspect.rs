use crate::commands::read_stream;
use crate::StreamFormat;
use anyhow::Result;
use colored::*;
use hamfec_core::{
    bitstream::BlockReader,
    constants::{CODEWORD_BITS, CODEWORD_MASK, MIN_ENCODED_LEN},
    nibble::{decode_block, syndrome},
};
use serde::Serialize;
use tracing::info;

/// One 14-bit block as the decoder sees it
#[derive(Debug, Clone, Serialize)]
pub struct BlockRow {
    pub index: usize,
    pub high_codeword: u8,
    pub high_syndrome: u8,
    pub low_codeword: u8,
    pub low_syndrome: u8,
    pub byte: u8,
    pub corrected: bool,
}

/// Walk the blocks the decoder would consume, stopping at the declared length
pub fn inspect_blocks(stream: &[u8]) -> Vec<BlockRow> {
    let mut rows = Vec::new();
    let mut declared: Option<usize> = None;

    for (index, block) in BlockReader::new(stream).enumerate() {
        if declared.is_some_and(|len| index > len) {
            break;
        }

        let high = (block >> CODEWORD_BITS) as u8;
        let low = block as u8 & CODEWORD_MASK;
        let decoded = decode_block(block);

        if index == 0 {
            declared = Some(decoded.byte as usize);
        }

        rows.push(BlockRow {
            index,
            high_codeword: high,
            high_syndrome: syndrome(high),
            low_codeword: low,
            low_syndrome: syndrome(low),
            byte: decoded.byte,
            corrected: decoded.is_corrected(),
        });
    }

    rows
}

pub fn execute(input: &str, format: StreamFormat) -> Result<Vec<BlockRow>> {
    info!("Inspecting {}", input);

    let stream = read_stream(input, format)?;
    let rows = inspect_blocks(&stream);

    println!("\n=== Stream ===");
    println!("Input size:        {} bytes", stream.len());

    let Some(header) = rows.first() else {
        println!(
            "{} No length block (need at least {} bytes)",
            "✗".red(),
            MIN_ENCODED_LEN
        );
        return Ok(rows);
    };

    let declared = header.byte as usize;
    let recovered = rows.len() - 1;
    let corrected = rows.iter().filter(|r| r.corrected).count();

    println!("Declared length:   {} bytes", declared);
    println!("Blocks present:    {}", recovered);
    println!("Corrected blocks:  {}", corrected);
    println!();

    println!(
        "{:>5}  {:>7} {:>3}  {:>7} {:>3}  {:>4}",
        "block", "high", "syn", "low", "syn", "byte"
    );
    for row in &rows {
        let line = format!(
            "{:>5}  {:07b} {:03b}  {:07b} {:03b}  0x{:02x}",
            row.index,
            row.high_codeword,
            row.high_syndrome,
            row.low_codeword,
            row.low_syndrome,
            row.byte
        );
        let label = if row.index == 0 { " (length)" } else { "" };
        if row.corrected {
            println!("{}{} {}", line.yellow(), label, "corrected".yellow());
        } else {
            println!("{}{}", line, label);
        }
    }

    println!();
    if recovered < declared {
        println!(
            "{} Stream ends {} bytes short of the declared length",
            "✗".red(),
            declared - recovered
        );
    } else {
        println!("{} Complete packet", "✓".green());
    }

    Ok(rows)
}
