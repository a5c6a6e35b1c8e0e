//! Model snapshot persistence.
//!
//! A snapshot is the full serialized state of the learned model: the fitted
//! vectorizer (vocabulary + IDF), the classifier parameters, the training
//! corpus and the fitted flag. It is written after every successful training
//! mutation and loaded at startup; a missing file is not an error, but a
//! corrupt or unwritable one is surfaced to the caller.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AlmaError, Result};
use crate::model::bayes::MultinomialNb;
use crate::model::types::TrainingPair;

/// Persisted state of a [`LearnedModel`](crate::model::LearnedModel).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSnapshot {
    /// Vectorizer vocabulary: token -> feature index.
    pub vocabulary: HashMap<String, usize>,
    /// Vectorizer IDF table.
    pub idf: Vec<f64>,
    /// Number of documents the vectorizer was fitted on.
    pub n_documents: usize,
    /// Fitted classifier parameters.
    pub classifier: MultinomialNb,
    /// Full training corpus.
    pub corpus: Vec<TrainingPair>,
    /// Whether the model had been fitted when the snapshot was taken.
    pub fitted: bool,
}

impl ModelSnapshot {
    /// Write the snapshot to `path` as bincode.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref()).map_err(|e| {
            AlmaError::snapshot(format!(
                "cannot create snapshot at {}: {e}",
                path.as_ref().display()
            ))
        })?;
        let writer = BufWriter::new(file);

        bincode::serialize_into(writer, self)
            .map_err(|e| AlmaError::snapshot(format!("cannot encode snapshot: {e}")))
    }

    /// Read a snapshot from `path`.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(|e| {
            AlmaError::snapshot(format!(
                "cannot open snapshot at {}: {e}",
                path.as_ref().display()
            ))
        })?;
        let reader = BufReader::new(file);

        bincode::deserialize_from(reader)
            .map_err(|e| AlmaError::snapshot(format!("cannot decode snapshot: {e}")))
    }
}
