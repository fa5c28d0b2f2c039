//! Error types for the scour library.
//!
//! Absence is not an error in scour: missing field paths, unknown query
//! tokens and empty queries all resolve to empty results. [`ScourError`] is
//! reserved for genuine misuse, such as an invalid tokenizer pattern, a
//! document the identifier cannot identify, or a malformed index dump.
//!
//! ```
//! use scour::analysis::tokenizer::RegexTokenizer;
//! use scour::error::ScourError;
//!
//! let err = RegexTokenizer::with_pattern("(unclosed").unwrap_err();
//! assert!(matches!(err, ScourError::Analysis(_)));
//! ```

use std::io;

use thiserror::Error;

/// The main error type for scour operations.
#[derive(Error, Debug)]
pub enum ScourError {
    /// Analysis-related errors (tokenizer construction, custom tokenizers)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A document could not be assigned an identifier
    #[error("Identifier error: {0}")]
    Identifier(String),

    /// Engine settings that cannot be turned into a configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors raised while moving dumps to and from external storage
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors raised by caller-supplied strategies
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ScourError.
pub type Result<T> = std::result::Result<T, ScourError>;

impl ScourError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ScourError::Analysis(msg.into())
    }

    /// Create a new identifier error.
    pub fn identifier<S: Into<String>>(msg: S) -> Self {
        ScourError::Identifier(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ScourError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ScourError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = ScourError::identifier("no id");
        assert_eq!(error.to_string(), "Identifier error: no id");

        let error = ScourError::config("unknown tokenizer");
        assert_eq!(error.to_string(), "Configuration error: unknown tokenizer");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ScourError::from(json_error);

        match error {
            ScourError::Json(_) => {}
            _ => panic!("Expected JSON error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let error = ScourError::from(anyhow::anyhow!("strategy failed"));
        assert_eq!(error.to_string(), "Anyhow error: strategy failed");
    }
}
