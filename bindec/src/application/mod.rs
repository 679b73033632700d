pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use bindec_core::Format;
use bindec_core::error::Result;
use clap::Parser;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Pear {
            inputs,
            layout,
            out,
        } => handlers::handle_export(Format::Pear, inputs, layout, out, false),
        Commands::Scale {
            inputs,
            layout,
            out,
            expose_marker,
        } => handlers::handle_export(Format::Scale, inputs, layout, out, expose_marker),
        Commands::Inspect {
            format,
            input,
            layout,
            json,
        } => handlers::handle_inspect(format, input, layout, json),
    }
}
