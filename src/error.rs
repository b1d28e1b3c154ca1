use thiserror::Error;

/// Unified error type for git-release-note operations
#[derive(Error, Debug)]
pub enum ReleaseNoteError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results in git-release-note
pub type Result<T> = std::result::Result<T, ReleaseNoteError>;

impl ReleaseNoteError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseNoteError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseNoteError::Version(msg.into())
    }
}
