use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use feedline::config::Config;
use feedline::FeedLog;

mod commands;

#[derive(Parser)]
#[command(
    name = "feedline",
    version,
    about = "Ingest record blocks into an append-only text feed"
)]
struct Cli {
    /// Feed log to append to. Overrides `[feed] path` from the config.
    #[arg(long, global = true)]
    feed: Option<PathBuf>,

    /// Load this config file instead of ~/.config/feedline/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    debug: bool,

    /// Append logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::Command,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "config not loaded, using defaults");
            Config::defaults()
        }),
    };
    let feed = FeedLog::new(cli.feed.clone().unwrap_or_else(|| config.feed.path.clone()));
    tracing::debug!(feed = %feed.path().display(), "feed log selected");

    let ctx = commands::Context {
        config,
        feed,
        json: cli.json,
    };
    commands::run(cli.command, &ctx)
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let default_level = if cli.debug { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .init();
        }
    }
    Ok(())
}
