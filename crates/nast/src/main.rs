//! nast CLI - Notion page dumps to HTML.
//!
//! Provides commands for:
//! - `render`: Render record dumps to HTML files
//! - `tree`: Print the assembled document tree as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, TreeArgs};
use output::Output;

/// nast - Notion page dumps to HTML.
#[derive(Parser)]
#[command(name = "nast", version, about)]
struct Cli {
    /// Enable info-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render record dump files to HTML.
    Render(RenderArgs),
    /// Print the assembled tree of a record dump as JSON.
    Tree(TreeArgs),
}

#[allow(clippy::exit)]
fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Tree(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&err);
        std::process::exit(1);
    }
}
