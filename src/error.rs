//! Error types for emoji_text.

use std::io;

use thiserror::Error;

/// Result type alias for emoji_text operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for emoji_text operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading a manifest or configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Manifest or configuration JSON could not be parsed.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The same token appears twice in an emoji manifest.
    #[error("duplicate emoji token in manifest: {0:?}")]
    DuplicateToken(String),
    /// A manifest token that could never appear inside a `[token]` placeholder.
    #[error("invalid emoji token {0:?}: expected one or more word characters")]
    InvalidToken(String),
    /// Cursor offset past the end of the text.
    #[error("offset {offset} out of bounds for text of length {len}")]
    OutOfBounds { offset: usize, len: usize },
    /// Range that is reversed or extends past the end of the text.
    #[error("invalid range {start}..{end} for text of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
    /// Invalid color format (e.g., malformed hex string).
    #[error("invalid color format: {0}")]
    InvalidColor(String),
    /// Configuration value outside its accepted domain.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
