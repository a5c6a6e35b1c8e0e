//! # alma
//!
//! A rule-based/ML-hybrid question answering assistant for a
//! university-information domain.
//!
//! ## Features
//!
//! - Text normalization: tokenization and Porter stemming
//! - Keyword-based intent classification with ordered, policy-typed rules
//! - Static response tables with protected small-talk intents
//! - SQLite-backed dynamic response lookups
//! - A learned model with exact-match, cosine-similarity, and naive Bayes
//!   lookup tiers, taught interactively at runtime
//! - Binary model snapshots persisted after every update
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use alma::model::LearnedModel;
//! use alma::pipeline::{ResponsePipeline, TEACH_PROMPT};
//! use parking_lot::Mutex;
//!
//! let model = Arc::new(Mutex::new(LearnedModel::new()));
//! let mut pipeline = ResponsePipeline::university().with_model(model);
//!
//! // Unanswerable questions enter the teach-me loop
//! assert_eq!(pipeline.resolve("xyzzy plugh"), TEACH_PROMPT);
//! pipeline.resolve("this is a test phrase");
//! assert_eq!(pipeline.resolve("xyzzy plugh"), "this is a test phrase");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod intent;
pub mod knowledge;
pub mod model;
pub mod pipeline;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
