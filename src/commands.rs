//! Subcommands of the `feedline` binary.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;
use chrono::Days;
use clap::Subcommand;
use feedline::config::Config;
use feedline::factory::{publish_ad, publish_news, publish_recipe};
use feedline::{
    Cleanup, Clock, FeedLog, FileOutcome, IngestError, Ingestor, RecordKind, SystemClock,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ingest one or more input files into the feed.
    Ingest {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Ingest every matching file in a folder (default: `[inbox] dir`).
    Inbox { dir: Option<PathBuf> },
    /// Append a single record built from command-line values.
    Publish {
        #[command(subcommand)]
        record: PublishCommand,
    },
    /// Append one sample record of each type.
    Demo,
}

#[derive(Debug, Subcommand)]
pub enum PublishCommand {
    News {
        #[arg(long)]
        text: String,
        #[arg(long)]
        city: String,
    },
    Ad {
        #[arg(long)]
        text: String,
        /// Expiration date, YYYY-MM-DD.
        #[arg(long)]
        expires: String,
    },
    Recipe {
        #[arg(long)]
        title: String,
        /// Comma- or semicolon-separated list.
        #[arg(long)]
        ingredients: String,
    },
}

pub struct Context {
    pub config: Config,
    pub feed: FeedLog,
    pub json: bool,
}

pub fn run(command: Command, ctx: &Context) -> anyhow::Result<ExitCode> {
    match command {
        Command::Ingest { files } => Ok(ingest(&files, ctx)),
        Command::Inbox { dir } => {
            let dir = dir.unwrap_or_else(|| ctx.config.inbox.dir.clone());
            inbox(&dir, ctx)
        }
        Command::Publish { record } => publish(record, ctx),
        Command::Demo => demo(ctx),
    }
}

fn ingestor(ctx: &Context) -> Ingestor {
    Ingestor::new(ctx.feed.clone()).extension(ctx.config.inbox.extension.clone())
}

// ---------------------------------------------------------------------------
// ingest / inbox
// ---------------------------------------------------------------------------

fn ingest(files: &[PathBuf], ctx: &Context) -> ExitCode {
    let ingestor = ingestor(ctx);
    let mut report = Report::new(ctx.json);

    for path in files {
        let name = path.display().to_string();
        if !path.exists() {
            report.missing(&name);
            continue;
        }
        report.file(&name, &ingestor.process_file(path));
    }

    report.finish()
}

fn inbox(dir: &Path, ctx: &Context) -> anyhow::Result<ExitCode> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create inbox folder {}", dir.display()))?;

    let results = ingestor(ctx).process_folder(dir)?;
    let mut report = Report::new(ctx.json);
    if results.is_empty() && !ctx.json {
        println!(
            "No .{} files found in {}.",
            ctx.config.inbox.extension,
            dir.display()
        );
    }
    for (name, result) in &results {
        report.file(name, result);
    }
    Ok(report.finish())
}

/// Collects per-file results and prints them as text lines or one JSON object.
struct Report {
    json: Option<serde_json::Map<String, serde_json::Value>>,
    failed: bool,
}

impl Report {
    fn new(json: bool) -> Self {
        Self {
            json: json.then(serde_json::Map::new),
            failed: false,
        }
    }

    fn missing(&mut self, name: &str) {
        self.failed = true;
        match &mut self.json {
            Some(map) => {
                map.insert(name.to_string(), json!({ "error": "input file not found" }));
            }
            None => eprintln!("Input file not found: {name}"),
        }
    }

    fn file(&mut self, name: &str, result: &Result<FileOutcome, IngestError>) {
        if result.is_err() {
            self.failed = true;
        }
        match (&mut self.json, result) {
            (Some(map), Ok(outcome)) => {
                map.insert(name.to_string(), json!(outcome));
            }
            (Some(map), Err(err)) => {
                map.insert(name.to_string(), json!({ "error": err.to_string() }));
            }
            (None, Ok(outcome)) => print_outcome(name, outcome),
            (None, Err(err)) => eprintln!("Failed {name}: {err}"),
        }
    }

    fn finish(self) -> ExitCode {
        if let Some(map) = self.json {
            println!("{}", serde_json::Value::Object(map));
        }
        if self.failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

fn print_outcome(name: &str, outcome: &FileOutcome) {
    let cleanup = match &outcome.cleanup {
        Cleanup::Removed => "removed".to_string(),
        Cleanup::Kept => "kept".to_string(),
        Cleanup::RemoveFailed(err) => format!("not removed: {err}"),
    };
    println!(
        "Processed {name}: {} ok, {} failed, {} blocks ({cleanup})",
        outcome.success_count, outcome.failed_count, outcome.total_blocks
    );
    for rejection in &outcome.rejected {
        println!(
            "  block {} (line {}): {}",
            rejection.block, rejection.start_line, rejection.reason
        );
    }
}

// ---------------------------------------------------------------------------
// publish / demo
// ---------------------------------------------------------------------------

fn publish(record: PublishCommand, ctx: &Context) -> anyhow::Result<ExitCode> {
    let clock = SystemClock;
    let (kind, rendered) = match &record {
        PublishCommand::News { text, city } => (RecordKind::News, publish_news(clock, text, city)),
        PublishCommand::Ad { text, expires } => {
            (RecordKind::PrivateAd, publish_ad(clock, text, expires))
        }
        PublishCommand::Recipe { title, ingredients } => {
            (RecordKind::Recipe, publish_recipe(clock, title, ingredients))
        }
    };

    let rendered = match rendered {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error creating {kind}: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    ctx.feed
        .append_one(&rendered)
        .with_context(|| format!("failed to append to {}", ctx.feed.path().display()))?;
    if ctx.json {
        println!("{}", json!({ "appended": 1, "kind": kind, "feed": ctx.feed.path() }));
    } else {
        println!("{kind} appended to {}.", ctx.feed.path().display());
    }
    Ok(ExitCode::SUCCESS)
}

fn demo(ctx: &Context) -> anyhow::Result<ExitCode> {
    let clock = SystemClock;
    let expires = clock
        .today()
        .checked_add_days(Days::new(30))
        .unwrap_or_else(|| clock.today())
        .format("%Y-%m-%d")
        .to_string();

    let samples = [
        publish_news(clock, "Conference scheduled", "Berlin")?,
        publish_ad(clock, "Selling mountain bike", &expires)?,
        publish_recipe(clock, "Avocado Toast", "bread, avocado, salt, pepper, lemon")?,
    ];
    append(ctx, &samples)?;
    if ctx.json {
        println!("{}", json!({ "appended": samples.len(), "feed": ctx.feed.path() }));
    } else {
        println!("Demo records appended to {}.", ctx.feed.path().display());
    }
    Ok(ExitCode::SUCCESS)
}

fn append(ctx: &Context, entries: &[String]) -> anyhow::Result<()> {
    ctx.feed
        .append(entries)
        .with_context(|| format!("failed to append to {}", ctx.feed.path().display()))?;
    Ok(())
}
