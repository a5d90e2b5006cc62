//! Library entry for hamfec-cli used by integration tests and embedding.

pub mod commands;

// Re-export commands for convenience
pub use commands::*;

/// On-disk representation of an encoded stream
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StreamFormat {
    /// Raw bytes exactly as sent on the air
    #[default]
    Raw,
    /// Lowercase hex text, whitespace ignored on input
    Hex,
}
