//! snapscript CLI
//!
//! Converts processing graph documents into snappy Python scripts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// snapscript - processing graph to Python script converter
#[derive(Parser)]
#[command(name = "snapscript")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Translation options file (YAML)
    #[arg(short, long, env = "SNAPSCRIPT_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a graph document into a Python script
    Convert {
        /// Graph document to read ("-" for stdin)
        input: PathBuf,

        /// Script to write ("-" for stdout, defaults to the input with a .py extension)
        output: Option<PathBuf>,

        /// Emit Python 3 print calls
        #[arg(long)]
        python3: bool,

        /// Module to import the snappy API from (e.g. esa_snappy)
        #[arg(long)]
        module: Option<String>,

        /// Prefix for generated artifact variables
        #[arg(long)]
        prefix: Option<String>,

        /// Omit progress print statements
        #[arg(long)]
        no_progress: bool,
    },

    /// Print the parsed graph nodes as JSON
    Inspect {
        /// Graph document to read ("-" for stdin)
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout may carry the generated script
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            python3,
            module,
            prefix,
            no_progress,
        } => {
            let overrides = commands::convert::Overrides {
                python3,
                module,
                prefix,
                no_progress,
            };
            commands::convert::run(cli.config.as_deref(), &input, output.as_deref(), overrides)?;
        }
        Commands::Inspect { input } => {
            commands::inspect::run(cli.config.as_deref(), &input)?;
        }
    }

    Ok(())
}
