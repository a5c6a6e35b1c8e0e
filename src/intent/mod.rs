//! Intent classification.
//!
//! Maps normalized token sequences to symbolic intent labels via an explicit
//! ordered list of keyword rules, first match wins.
//!
//! # Example
//!
//! ```
//! use alma::analysis::TextNormalizer;
//! use alma::intent::{Intent, KeywordIntentClassifier};
//!
//! let normalizer = TextNormalizer::new();
//! let classifier = KeywordIntentClassifier::university();
//!
//! let intent = classifier.classify(&normalizer.normalize("hello there"));
//! assert_eq!(intent, Intent::new("greeting"));
//! ```

mod classifier;
mod matcher;
mod types;

pub use classifier::KeywordIntentClassifier;
pub use matcher::{KeywordRule, MatchPolicy};
pub use types::Intent;
