//! Configuration types for feedline.
//!
//! [`Config::load`] reads `~/.config/feedline/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist, then applies `FEEDLINE__*`
//! environment overrides. [`Config::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[feed]
path = "feed.txt"

[inbox]
dir       = "inbox"
extension = "txt"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub inbox: InboxConfig,
}

/// `[feed]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Append-only feed log that committed records are written to.
    #[serde(default = "default_feed_path")]
    pub path: PathBuf,
}

fn default_feed_path() -> PathBuf { PathBuf::from("feed.txt") }

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            path: default_feed_path(),
        }
    }
}

/// `[inbox]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct InboxConfig {
    /// Folder scanned by the batch command.
    #[serde(default = "default_inbox_dir")]
    pub dir: PathBuf,
    /// Only files with this extension (no dot, case-sensitive) are ingested.
    #[serde(default = "default_inbox_extension")]
    pub extension: String,
}

fn default_inbox_dir() -> PathBuf { PathBuf::from("inbox") }
fn default_inbox_extension() -> String { "txt".to_string() }

impl Default for InboxConfig {
    fn default() -> Self {
        Self {
            dir: default_inbox_dir(),
            extension: default_inbox_extension(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/feedline/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load from an explicit file, layered on top of the built-in defaults.
    /// A missing file is an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .add_source(
                config::Environment::with_prefix("FEEDLINE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `$XDG_CONFIG_HOME/feedline/config.toml`, falling back to `$HOME/.config`.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("feedline")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
