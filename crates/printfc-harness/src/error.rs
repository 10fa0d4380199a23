//! Harness error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading fixtures or writing reports.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// A fixture file did not parse as the expected JSON schema.
    #[error("fixture {path}: {source}")]
    Fixture {
        path: PathBuf,
        source: serde_json::Error,
    },
}
