//! GRC CLI
//!
//! Entry point for the `grc` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use grc::{generate, CancelFlag, GenerateOptions};

#[derive(Parser)]
#[command(name = "grc")]
#[command(about = "Convert YAML mail filter rules into an importable Atom filter feed", version)]
struct Cli {
    /// Output XML file (default: input path with .xml extension)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long, short = 'f')]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Filter rules file (.yaml or .yml)
    input: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(version = env!("CARGO_PKG_VERSION"), "grc starting");

    let cancel = CancelFlag::new();
    if let Err(e) = cancel.install_ctrlc() {
        warn!("could not install interrupt handler: {}", e);
    }

    let mut options = GenerateOptions::new(cli.input).with_overwrite(cli.force);
    if let Some(output) = cli.output {
        options = options.with_output(output);
    }

    match generate(&options, &cancel) {
        Ok(path) => {
            println!("XML file successfully generated: {}", path.display());
        }
        Err(e) => {
            eprintln!("grc: {}", e);
            process::exit(e.exit_code());
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}
