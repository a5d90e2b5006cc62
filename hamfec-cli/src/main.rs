use anyhow::Result;
use clap::{Parser, Subcommand};
use hamfec_cli::{commands, StreamFormat};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "hamfec")]
#[command(about = "hamfec - Hamming(7,4) packet codec for noisy radio links", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a payload (at most 255 bytes) into a protected packet
    Encode {
        /// Input payload file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output packet file ("-" for stdout)
        #[arg(short, long)]
        output: String,

        /// Encode only the first 255 bytes of longer input instead of failing
        #[arg(long)]
        truncate: bool,

        /// Packet file format
        #[arg(long, value_enum, default_value_t = StreamFormat::Raw)]
        format: StreamFormat,
    },

    /// Decode a packet, correcting single-bit errors
    Decode {
        /// Input packet file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output payload file ("-" for stdout)
        #[arg(short, long)]
        output: String,

        /// Write whatever was recovered when the packet is cut short
        #[arg(long)]
        partial: bool,

        /// Packet file format
        #[arg(long, value_enum, default_value_t = StreamFormat::Raw)]
        format: StreamFormat,

        /// Write a JSON decode report to this path
        #[arg(long)]
        report: Option<String>,
    },

    /// Flip bits in a packet to test error correction
    Corrupt {
        /// Input packet file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output packet file ("-" for stdout)
        #[arg(short, long)]
        output: String,

        /// Stream bit position to flip, MSB of the first byte is 0 (repeatable)
        #[arg(long = "bit")]
        bits: Vec<usize>,

        /// Flip this bit offset (0-6) in every codeword
        #[arg(long)]
        per_codeword: Option<u32>,

        /// Packet file format
        #[arg(long, value_enum, default_value_t = StreamFormat::Raw)]
        format: StreamFormat,
    },

    /// Show the codewords and syndromes of every block in a packet
    Inspect {
        /// Input packet file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Packet file format
        #[arg(long, value_enum, default_value_t = StreamFormat::Raw)]
        format: StreamFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout may carry packet data, so logs go to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Encode {
            input,
            output,
            truncate,
            format,
        } => commands::encode::execute(&input, &output, truncate, format),

        Commands::Decode {
            input,
            output,
            partial,
            format,
            report,
        } => commands::decode::execute(&input, &output, partial, format, report.as_deref())
            .map(|_| ()),

        Commands::Corrupt {
            input,
            output,
            bits,
            per_codeword,
            format,
        } => commands::corrupt::execute(&input, &output, &bits, per_codeword, format).map(|_| ()),

        Commands::Inspect { input, format } => {
            commands::inspect::execute(&input, format).map(|_| ())
        }
    }
}
