//! campuscal command-line entry point.

use std::path::PathBuf;

use campuscal::Config;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

/// campuscal: day-view layout and chat event import
#[derive(Parser, Debug)]
#[command(name = "campuscal")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out one day's events into side-by-side columns
    Layout {
        /// JSON file with an array of event records
        input: PathBuf,
    },
    /// Parse a single chat message into an event
    Parse {
        /// Message text
        text: String,
        /// Channel id
        #[arg(long, default_value = "local")]
        channel_id: String,
        /// Channel name
        #[arg(long, default_value = "local")]
        channel_name: String,
        /// Message timestamp id
        #[arg(long, default_value = "0")]
        ts: String,
        /// Author display name
        #[arg(short, long)]
        author: Option<String>,
        /// Reference time (ISO 8601), defaults to the local clock
        #[arg(long)]
        now: Option<String>,
    },
    /// Parse and deduplicate a batch of chat messages
    Import {
        /// JSON file with an array of raw messages
        input: PathBuf,
        /// Reference time (ISO 8601), defaults to the local clock
        #[arg(long)]
        now: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    init_tracing(&config);

    match args.command {
        Command::Layout { input } => cli::run_layout(&config, &input, args.json),
        Command::Parse {
            text,
            channel_id,
            channel_name,
            ts,
            author,
            now,
        } => cli::run_parse(
            &config,
            cli::ParseArgs {
                text,
                channel_id,
                channel_name,
                timestamp_id: ts,
                author,
                now,
            },
            args.json,
        ),
        Command::Import { input, now } => cli::run_import(&config, &input, now, args.json),
    }
}

/// Logs go to stderr so JSON output on stdout stays clean. `RUST_LOG`
/// overrides the configured level.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    if config.logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
