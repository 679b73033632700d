use bindec_core::Format;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "bindec: pear/scale instrument files to CSV", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug, Default)]
pub struct LayoutArgs {
    /// Header bytes to skip (decimal or 0x hex); defaults per format
    #[arg(long, value_parser = parse_size)]
    pub header_size: Option<u64>,
    /// Footer bytes to ignore (decimal or 0x hex); defaults per format
    #[arg(long, value_parser = parse_size)]
    pub footer_size: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode pear files (time/intensity pairs) to `<input>.csv`
    Pear {
        /// Files or directories; prompts for one path when empty
        inputs: Vec<PathBuf>,
        #[command(flatten)]
        layout: LayoutArgs,
        /// Output path (single input only)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Decode scale files (time + 18 wavelengths) to `<input>.csv`
    Scale {
        /// Files or directories; prompts for one path when empty
        inputs: Vec<PathBuf>,
        #[command(flatten)]
        layout: LayoutArgs,
        /// Output path (single input only)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Add a leading `Marker` column with each record's 2 marker bytes (hex)
        #[arg(long)]
        expose_marker: bool,
    },

    /// Print body offset, record count and dropped bytes without decoding
    Inspect {
        #[arg(value_parser = parse_format)]
        format: Format,
        input: PathBuf,
        #[command(flatten)]
        layout: LayoutArgs,
        /// Emit JSON instead of key=value text
        #[arg(long)]
        json: bool,
    },
}

pub fn parse_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|e| format!("invalid size {s:?}: {e}"))
}

fn parse_format(s: &str) -> Result<Format, String> {
    s.parse::<Format>().map_err(|e| e.to_string())
}
