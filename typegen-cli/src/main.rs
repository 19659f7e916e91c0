//! typegen command line interface.
//!
//! Loads a YAML definition document, parses it into the IR and reports the
//! result.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use typegen_schema::{SchemaIr, parse_file, validate_references};

#[derive(Parser)]
#[command(name = "typegen")]
#[command(about = "Parse and check typegen definition documents")]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and list its definitions
    Check {
        /// Definition document (YAML)
        file: PathBuf,
        /// Also require every reference to name a definition
        #[arg(long)]
        strict_refs: bool,
    },

    /// Parse a document and print the IR as JSON
    Dump {
        /// Definition document (YAML)
        file: PathBuf,
        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Check { file, strict_refs } => {
            let ir = load(&file)?;
            if strict_refs {
                tracing::debug!("Checking references in {}", file.display());
                validate_references(&ir)?;
            }
            for (name, item) in ir.iter() {
                println!("{name}: {}", item.kind());
            }
            println!("{} definitions OK", ir.len());
        }
        Commands::Dump { file, compact } => {
            let ir = load(&file)?;
            let json = if compact {
                serde_json::to_string(&ir)?
            } else {
                serde_json::to_string_pretty(&ir)?
            };
            println!("{json}");
        }
    }
    Ok(())
}

fn load(file: &std::path::Path) -> anyhow::Result<SchemaIr> {
    parse_file(file).with_context(|| format!("failed to parse {}", file.display()))
}
