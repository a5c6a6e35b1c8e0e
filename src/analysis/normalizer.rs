//! Text normalization pipeline.
//!
//! Combines the tokenizer and stemmer into the single canonical preprocessing
//! step every other component shares: lowercase, strip punctuation, split into
//! tokens, stem each token. The classifier, the TF-IDF vectorizer and the
//! learned model all match on the output of this pipeline, so a question
//! always normalizes the same way no matter which tier looks at it.

use std::sync::Arc;

use crate::analysis::stemmer::{PorterStemmer, Stemmer};
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};

/// Normalizes raw text into a canonical stemmed token sequence.
///
/// Total: any input produces a (possibly empty) token vector, never an error.
#[derive(Clone)]
pub struct TextNormalizer {
    tokenizer: Arc<dyn Tokenizer>,
    stemmer: Arc<dyn Stemmer>,
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("tokenizer", &self.tokenizer.name())
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl TextNormalizer {
    /// Create a normalizer with the default word tokenizer and Porter stemmer.
    pub fn new() -> Self {
        TextNormalizer {
            tokenizer: Arc::new(RegexTokenizer::default()),
            stemmer: Arc::new(PorterStemmer::new()),
        }
    }

    /// Create a normalizer from custom components.
    pub fn with_components(tokenizer: Arc<dyn Tokenizer>, stemmer: Arc<dyn Stemmer>) -> Self {
        TextNormalizer { tokenizer, stemmer }
    }

    /// Normalize text into a stemmed token sequence.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(&text.to_lowercase())
            .iter()
            .map(|token| self.stemmer.stem(token))
            .collect()
    }

    /// Normalize text and join the tokens with single spaces.
    ///
    /// This is the canonical key form used for exact-match lookups and for
    /// storing questions in the training corpus.
    pub fn normalize_joined(&self, text: &str) -> String {
        self.normalize(text).join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let normalizer = TextNormalizer::new();

        assert_eq!(
            normalizer.normalize("What courses are available?"),
            vec!["what", "cours", "ar", "avail"]
        );
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        let normalizer = TextNormalizer::new();

        assert_eq!(
            normalizer.normalize("Hello!!! How... are -- you?"),
            normalizer.normalize("hello how are you")
        );
    }

    #[test]
    fn test_normalize_empty_and_whitespace() {
        let normalizer = TextNormalizer::new();

        assert!(normalizer.normalize("").is_empty());
        assert!(normalizer.normalize("   \t\n  ").is_empty());
        assert!(normalizer.normalize("?!., --").is_empty());
    }

    #[test]
    fn test_normalize_joined() {
        let normalizer = TextNormalizer::new();

        assert_eq!(normalizer.normalize_joined("Applying online"), "appli onlin");
        assert_eq!(normalizer.normalize_joined(""), "");
    }
}
