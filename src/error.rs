//! Error types for rs-cewlio.
//!
//! Extraction from text never fails: malformed markup is repaired by the
//! HTML tree builder. Errors surface only when raw bytes cannot be decoded
//! into text, or when a caller-supplied filter pattern does not compile.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input bytes could not be decoded as text.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// An allow/deny word pattern failed to compile.
    #[error("Invalid word pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// Underlying regex compilation error.
        #[source]
        source: regex::Error,
    },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
