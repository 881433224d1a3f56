#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    ClassifyInput, ClassifyStrategy, CommandStrategy, ExtractInput, ExtractStrategy, InfoStrategy,
    InitStrategy, ProbeInput, ProbeStrategy, VersionStrategy,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ridelog")]
#[command(about = "Extract ride offers and requests from chat messages", long_about = None)]
struct Cli {
    /// Debug-level logging unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enrich a batch of messages (JSON array or JSON Lines)
    Extract {
        /// Input file, `-` for stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file, `-` for stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Places file overriding the configured one
        #[arg(short, long)]
        places: Option<PathBuf>,

        /// Write JSON Lines instead of a JSON array
        #[arg(long)]
        jsonl: bool,

        /// Process messages on the current thread only
        #[arg(long)]
        sequential: bool,

        /// Drop re-captured messages sharing date, time and phone
        #[arg(long)]
        dedup: bool,
    },
    /// Run the full pipeline on one message
    Probe {
        text: String,

        /// Reference date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        places: Option<PathBuf>,
    },
    /// Only decide ride vs general and bind places
    Classify {
        text: String,

        #[arg(short, long)]
        places: Option<PathBuf>,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Extract {
            input,
            output,
            places,
            jsonl,
            sequential,
            dedup,
        } => ExtractStrategy.execute(ExtractInput {
            input,
            output,
            places,
            jsonl,
            sequential,
            dedup,
        }),
        Commands::Probe { text, date, places } => {
            ProbeStrategy.execute(ProbeInput { text, date, places })
        }
        Commands::Classify { text, places } => {
            ClassifyStrategy.execute(ClassifyInput { text, places })
        }
        Commands::Init => InitStrategy.execute(()),
        Commands::Info => InfoStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
