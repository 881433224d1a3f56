use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Structural failures. A message that simply yields no ride facts is never an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot read gazetteer at {}: {source}", .path.display())]
    Gazetteer {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unrecognized message batch: {0}")]
    BatchShape(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the configuration error kind: bad gazetteer source, bad config,
    /// bad patterns or a batch in an unrecognized shape.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Gazetteer { .. } | Self::BatchShape(_) | Self::Pattern(_)
        )
    }
}
