//! Tracing subscriber setup
//!
//! `SNACKQ_LOG` takes precedence over the configured level. The TUI owns
//! the terminal, so it logs to a file instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::Result;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "SNACKQ_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(config: &LogConfig, target: LogTarget) -> Result<()> {
    let filter = build_filter(std::env::var(LOG_ENV).ok(), &config.level);

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact()
                .try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
    }
    Ok(())
}

fn build_filter(env: Option<String>, level: &str) -> EnvFilter {
    if let Some(directive) = env.filter(|d| !d.trim().is_empty())
        && let Ok(filter) = EnvFilter::try_new(&directive)
    {
        return filter;
    }
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
}
