//! Token normalizers.
//!
//! A normalizer turns a raw token into its canonical index key. It runs on
//! every token at index time and on every query token at search time, so
//! two spellings that normalize to the same key match each other.
//!
//! # Examples
//!
//! ```
//! use scour::analysis::normalizer::{LowercaseTrimNormalizer, Normalizer};
//!
//! let normalizer = LowercaseTrimNormalizer::new();
//! assert_eq!(normalizer.normalize("  HeLlO "), "hello");
//! ```

/// Trait for token normalizers.
///
/// Normalizers are total: every input has an output and nothing fails.
/// Any closure `Fn(&str) -> String` is a normalizer as well.
pub trait Normalizer: Send + Sync {
    /// Return the canonical form of `token`.
    fn normalize(&self, token: &str) -> String;

    /// Get the name of this normalizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

impl<F> Normalizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn normalize(&self, token: &str) -> String {
        self(token)
    }

    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Removes leading/trailing whitespace and converts the token to lowercase.
///
/// Lowercasing is Unicode-aware.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseTrimNormalizer;

impl LowercaseTrimNormalizer {
    /// Create a new lowercase-trim normalizer.
    pub fn new() -> Self {
        LowercaseTrimNormalizer
    }
}

impl Normalizer for LowercaseTrimNormalizer {
    fn normalize(&self, token: &str) -> String {
        token.trim().to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase_trim"
    }
}

/// Leaves tokens untouched, for case-sensitive indexes.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityNormalizer;

impl IdentityNormalizer {
    /// Create a new identity normalizer.
    pub fn new() -> Self {
        IdentityNormalizer
    }
}

impl Normalizer for IdentityNormalizer {
    fn normalize(&self, token: &str) -> String {
        token.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_trim() {
        let normalizer = LowercaseTrimNormalizer::new();

        assert_eq!(normalizer.normalize("HeLlO wOrLd"), "hello world");
        assert_eq!(normalizer.normalize("hello "), "hello");
        assert_eq!(normalizer.normalize(" world"), "world");
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("ÉCOLE"), "école");
    }

    #[test]
    fn test_identity() {
        assert_eq!(IdentityNormalizer::new().normalize(" MiXeD "), " MiXeD ");
    }

    #[test]
    fn test_closure_normalizer() {
        let normalizer = |token: &str| token.to_uppercase();
        assert_eq!(normalizer.normalize("abc"), "ABC");
        assert_eq!(Normalizer::name(&normalizer), "custom");
    }

    #[test]
    fn test_normalizer_names() {
        assert_eq!(LowercaseTrimNormalizer::new().name(), "lowercase_trim");
        assert_eq!(IdentityNormalizer::new().name(), "identity");
    }
}
