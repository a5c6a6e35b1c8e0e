//! Regex-based tokenization.
//!
//! Splits raw text into word tokens using a regular expression. The default
//! pattern `\w+` keeps runs of word characters and discards punctuation and
//! whitespace, which is exactly the normalization contract the rest of the
//! pipeline relies on.

use regex::Regex;

use crate::error::{AlmaError, Result};

/// Trait for tokenizers that split text into word tokens.
pub trait Tokenizer: Send + Sync {
    /// Split text into tokens. Total: never fails, may return an empty vec.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Get the name of this tokenizer.
    fn name(&self) -> &'static str;
}

/// A tokenizer that extracts tokens matching a regular expression.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens.
    pattern: Regex,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default `\w+` pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| AlmaError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer { pattern: regex })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|mat| mat.as_str().to_string())
            .collect()
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
