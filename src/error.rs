//! Error types for egp-rates

use thiserror::Error;

/// Main error type for egp-rates
///
/// Every kind carries a human-readable detail which is also its `Display`
/// output, so the CLI can print it after its own prefix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    /// Network unreachable, timeout, or non-success HTTP status
    #[error("{0}")]
    Transport(String),

    /// Body is not the JSON shape the rate provider promises
    #[error("{0}")]
    Schema(String),

    /// CSV destination could not be opened or written
    #[error("{0}")]
    Io(String),
}

impl FxError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FxError::Transport(_) | FxError::Schema(_) => 2,
            FxError::Io(_) => 3,
        }
    }

    /// Short name of the error kind, used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            FxError::Transport(_) => "transport",
            FxError::Schema(_) => "schema",
            FxError::Io(_) => "io",
        }
    }
}

impl From<std::io::Error> for FxError {
    fn from(err: std::io::Error) -> Self {
        FxError::Io(err.to_string())
    }
}

impl From<csv::Error> for FxError {
    fn from(err: csv::Error) -> Self {
        FxError::Io(err.to_string())
    }
}

/// Result type alias for egp-rates operations
pub type Result<T> = std::result::Result<T, FxError>;
