//! Tracing setup.
//!
//! The console owns the terminal while it is open, so log output must not go
//! to stdout or stderr then. It goes to `--log-file` when given and is
//! discarded otherwise. Detached mode logs to stderr.

use anyhow::Context;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Where log lines end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Discard,
}

impl<'a> LogTarget<'a> {
    pub fn select(log_file: Option<&'a Path>, detached: bool) -> Self {
        match (log_file, detached) {
            (Some(path), _) => LogTarget::File(path),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Discard,
        }
    }

    fn writer(self) -> anyhow::Result<BoxMakeWriter> {
        Ok(match self {
            LogTarget::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open log file {}", path.display()))?;
                BoxMakeWriter::new(Mutex::new(file))
            }
            LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
            LogTarget::Discard => BoxMakeWriter::new(std::io::sink),
        })
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_logging(target: LogTarget<'_>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let ansi = matches!(target, LogTarget::Stderr);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(target.writer()?)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))
}

/// Line printed to stderr once the console has given the terminal back.
pub fn console_exit_message(result: &anyhow::Result<()>, listen_addr: &str) -> String {
    match result {
        Ok(()) => format!(
            "Console closed; still serving on {listen_addr}. Press Ctrl+C to stop."
        ),
        Err(e) => format!(
            "Console failed: {e:#}; still serving on {listen_addr}. Press Ctrl+C to stop."
        ),
    }
}
