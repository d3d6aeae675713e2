//! Taxonet CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "taxonet")]
#[command(about = "Extract thematic networks from a notation textbase", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Notation textbase file
    #[arg(long, default_value = "notations.txt")]
    textbase: PathBuf,

    /// Directory holding per-language label files
    #[arg(long, default_value = "txt")]
    labels_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a subtree and write the thematic network as JSON
    Extract {
        /// Root of the subtree to extract
        #[arg(long, default_value = "48C51")]
        root: String,

        /// External notation anchored into the network (empty disables)
        #[arg(long, default_value = "31AA231")]
        anchor: String,

        /// Subtree notation the anchor bridges to (empty disables)
        #[arg(long, default_value = "48C514")]
        bridge: String,

        /// Label language
        #[arg(long, default_value = "en")]
        lang: String,

        /// Output file (defaults to network_<root>_<lang>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print one notation's label and record fields
    Show {
        /// Notation code to look up
        #[arg(long)]
        code: String,

        /// Label language
        #[arg(long, default_value = "en")]
        lang: String,
    },
    /// Report dangling references and cycles in the children relation
    Check,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "taxonet={}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Taxonet v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Extract {
            root,
            anchor,
            bridge,
            lang,
            output,
        } => commands::extract(
            &cli.textbase,
            &cli.labels_dir,
            &root,
            &anchor,
            &bridge,
            &lang,
            output,
        ),
        Commands::Show { code, lang } => {
            commands::show(&cli.textbase, &cli.labels_dir, &code, &lang)
        }
        Commands::Check => commands::check(&cli.textbase),
        Commands::Version => {
            println!("taxonet v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
