//! Tracing/logging initialization.
//!
//! JSON lines with timestamps, filtered by `RUST_LOG` (default `info`). A
//! full-screen terminal app owns stdout, so it logs to a file or not at all.

use std::fs::File;
use std::path::PathBuf;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogTarget {
    /// No subscriber is installed.
    #[default]
    Disabled,
    File(PathBuf),
}

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("failed to create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(target: &LogTarget) -> Result<(), ObservabilityError> {
    match target {
        LogTarget::Disabled => {}
        LogTarget::File(path) => {
            let file = File::create(path).map_err(|source| ObservabilityError::LogFile {
                path: path.clone(),
                source,
            })?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .json()
                .with_timer(tracing_subscriber::fmt::time::SystemTime)
                .with_target(false)
                .with_ansi(false)
                .with_writer(file)
                .try_init();
        }
    }
    Ok(())
}
