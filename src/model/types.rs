//! Common types for the learned response model.

use serde::{Deserialize, Serialize};

/// A single learned (question, answer) pair.
///
/// The question is stored in normalized form (stemmed tokens joined with
/// spaces) so exact-match lookup and duplicate detection are insensitive to
/// case, punctuation and inflection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPair {
    /// Normalized question text.
    pub question: String,
    /// Answer text, returned verbatim.
    pub answer: String,
}

impl TrainingPair {
    /// Create a training pair.
    pub fn new<Q: Into<String>, A: Into<String>>(question: Q, answer: A) -> Self {
        TrainingPair {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A raw seed (question, answer) pair as loaded from JSON seed files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedPair {
    /// Question text as written, not yet normalized.
    pub question: String,
    /// Answer text.
    pub answer: String,
}
