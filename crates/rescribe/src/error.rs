//! Error types for `rescribe`.

use thiserror::Error;

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors that can occur around script generation.
///
/// Generation itself is infallible: every action kind in the closed set has a
/// translation, and an unmatched kind is a programming error rather than a
/// runtime failure. The fallible surface is the edges — quoting with an
/// unsupported delimiter and loading an external device catalog.
#[derive(Debug, Error)]
pub enum GenError {
    /// A string was quoted with a delimiter the target syntax has no escape for.
    #[error("unsupported quote delimiter {delimiter:?}")]
    UnsupportedQuoteDelimiter {
        /// The offending delimiter character.
        delimiter: char,
    },

    /// IO error while reading a device catalog.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error while parsing a device catalog.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
