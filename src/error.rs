//! Error types for the maze explorer.

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while loading input or configuration.
///
/// Exploration itself never fails: given a well-formed grid the engine
/// always produces a definite found/not-found answer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Underlying file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Maze text is malformed (header, grid body, or cell characters)
    #[error("Malformed maze: {0}")]
    Parse(String),

    /// Maze text parsed but violates a structural invariant
    #[error("Invalid maze: {0}")]
    Invalid(String),

    /// Configuration file unreadable or not valid TOML
    #[error("Configuration error: {0}")]
    Config(String),
}
