//! Subcommand handlers

pub mod corrupt;
pub mod decode;
pub mod encode;
pub mod inspect;

use crate::StreamFormat;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};

/// Read a file, or stdin when `path` is "-"
pub fn read_input(path: &str) -> Result<Vec<u8>> {
    if path == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read(path).with_context(|| format!("Failed to read input file: {}", path))
    }
}

/// Write a file, or stdout when `path` is "-"
pub fn write_output(path: &str, data: &[u8]) -> Result<()> {
    if path == "-" {
        io::stdout()
            .write_all(data)
            .context("Failed to write stdout")
    } else {
        fs::write(path, data).with_context(|| format!("Failed to write output file: {}", path))
    }
}

/// Read an encoded stream stored in `format`
pub fn read_stream(path: &str, format: StreamFormat) -> Result<Vec<u8>> {
    let data = read_input(path)?;
    match format {
        StreamFormat::Raw => Ok(data),
        StreamFormat::Hex => {
            let text: String = String::from_utf8(data)
                .with_context(|| format!("Hex input is not valid UTF-8: {}", path))?
                .split_whitespace()
                .collect();
            hex::decode(&text).with_context(|| format!("Invalid hex in {}", path))
        }
    }
}

/// Write an encoded stream in `format`
pub fn write_stream(path: &str, data: &[u8], format: StreamFormat) -> Result<()> {
    match format {
        StreamFormat::Raw => write_output(path, data),
        StreamFormat::Hex => {
            let mut text = hex::encode(data);
            text.push('\n');
            write_output(path, text.as_bytes())
        }
    }
}
