//! The learned response model: TF-IDF vectorization, naive Bayes
//! classification, similarity search, and snapshot persistence.
//!
//! # Architecture
//!
//! - [`TfIdfVectorizer`]: feature extraction over normalized question text
//! - [`MultinomialNb`]: probabilistic classification with confidence scores
//! - [`LearnedModel`]: the three-tier lookup (exact → similar → predicted)
//!   plus the online `update` operation
//! - [`ModelSnapshot`]: persisted state, written after every mutation
//!
//! # Example
//!
//! ```
//! use alma::model::{LearnedModel, SeedPair};
//!
//! # fn main() -> alma::error::Result<()> {
//! let mut model = LearnedModel::new();
//! model.initial_train(&[SeedPair {
//!     question: "what courses are available".to_string(),
//!     answer: "We offer IT, Business, and Arts programs.".to_string(),
//! }])?;
//!
//! let answer = model.get_response("What courses are available?");
//! assert!(answer.is_some());
//! # Ok(())
//! # }
//! ```

mod bayes;
mod learned;
mod snapshot;
mod tfidf;
mod types;

pub use bayes::MultinomialNb;
pub use learned::{
    DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_MIN_PREDICT_TOKENS, DEFAULT_SIMILARITY_THRESHOLD,
    LearnedModel,
};
pub use snapshot::ModelSnapshot;
pub use tfidf::TfIdfVectorizer;
pub use types::{SeedPair, TrainingPair};
