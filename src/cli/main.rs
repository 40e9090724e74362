//! pet-system: convert and inspect persisted pet systems

use anyhow::Result;
use clap::{Parser, Subcommand};
use pet_system_sdk::cli::commands::convert::handle_convert;
use pet_system_sdk::cli::commands::inspect::handle_inspect;
use pet_system_sdk::cli::logger::init_cli_logger;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pet-system")]
#[command(about = "Convert and inspect pet system documents (JSON / XML)", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a document and write it out again, possibly in the other format
    Convert {
        /// Input file (.json or .xml)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (.json or .xml)
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// TOML file with rendering settings
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Write without indentation
        #[arg(long)]
        compact: bool,
    },

    /// Print entity counts and the pets of a document
    Inspect {
        /// Input file (.json or .xml)
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    match cli.command {
        Commands::Convert {
            input,
            output,
            config,
            compact,
        } => {
            handle_convert(&input, &output, config.as_deref(), compact)?;
        }
        Commands::Inspect { input } => handle_inspect(&input)?,
    }

    Ok(())
}
