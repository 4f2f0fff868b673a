//! Tracing setup. The terminal UI owns the screen, so it logs to a file; CLI
//! commands log to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "RANDOMIZER_LOG";

pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// `<data_local_dir>/randomizer/randomizer.log`.
pub fn default_log_file() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .context("Failed to determine data directory")?
        .join("randomizer");
    Ok(dir.join("randomizer.log"))
}

/// File target for the terminal UI: the configured file or the default one.
pub fn file_target(config: &LoggingConfig) -> Result<LogTarget> {
    let path = match &config.file {
        Some(path) => path.clone(),
        None => default_log_file()?,
    };
    Ok(LogTarget::File(path))
}

fn directive(from_env: Option<String>, configured: &str) -> String {
    match from_env {
        Some(value) if !value.trim().is_empty() => value,
        _ => configured.to_string(),
    }
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    let directive = directive(std::env::var(LOG_ENV).ok(), &config.level);
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init(config: &LoggingConfig, target: LogTarget) -> Result<()> {
    let filter = env_filter(config);
    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
            .context("Failed to initialize logging")?,
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create log directory: {}", parent.display())
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .try_init()
                .context("Failed to initialize logging")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_overrides_configured_level() {
        assert_eq!(directive(Some("debug".to_string()), "info"), "debug");
        assert_eq!(directive(Some("  ".to_string()), "warn"), "warn");
        assert_eq!(directive(None, "randomizer=trace"), "randomizer=trace");
    }

    #[test]
    fn configured_file_wins_over_default() {
        let config = LoggingConfig {
            level: "info".to_string(),
            file: Some(PathBuf::from("/tmp/custom.log")),
        };
        match file_target(&config).unwrap() {
            LogTarget::File(path) => assert_eq!(path, PathBuf::from("/tmp/custom.log")),
            LogTarget::Stderr => panic!("expected a file target"),
        }
    }
}
