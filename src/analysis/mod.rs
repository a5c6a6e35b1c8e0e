//! Text analysis for alma.
//!
//! Provides the tokenization, stemming and normalization pipeline that turns
//! raw user input into the canonical stemmed token sequence the rest of the
//! system matches on.

mod normalizer;
mod stemmer;
mod tokenizer;

pub use normalizer::TextNormalizer;
pub use stemmer::{PorterStemmer, Stemmer};
pub use tokenizer::{RegexTokenizer, Tokenizer};
