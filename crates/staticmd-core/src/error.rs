//! Error types for staticmd

use thiserror::Error;

/// Main error type for staticmd operations
#[derive(Error, Debug)]
pub enum StaticmdError {
    /// An inline delimiter was opened but never closed
    #[error("missing closing delimiter: {0}")]
    UnbalancedDelimiter(String),

    /// The document has no level-1 heading to use as a title
    #[error("no level-1 heading found")]
    NoTitleFound,

    /// A parent node was rendered without a tag
    #[error("Render error: parent node has no tag")]
    MissingTag,

    /// A parent node was rendered without children
    #[error("Render error: <{0}> has no children")]
    EmptyChildren(String),

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Template error
    #[error("Template error: {0}")]
    Template(String),
}

/// Result type alias for staticmd operations
pub type Result<T> = std::result::Result<T, StaticmdError>;
