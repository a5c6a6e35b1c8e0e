//! Runtime configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AlmaError, Result};
use crate::model::{DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_SIMILARITY_THRESHOLD};

/// Configuration for an alma instance.
///
/// Loadable from a JSON file; any omitted field falls back to its default.
/// There are no built-in defaults for the snapshot or database locations:
/// persistence and storage stay disabled until a path is supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlmaConfig {
    /// Where the model snapshot is persisted. `None` disables persistence.
    pub snapshot_path: Option<PathBuf>,

    /// SQLite database for the dynamic response store. `None` disables the
    /// store.
    pub database_path: Option<PathBuf>,

    /// Minimum cosine similarity for a semantic match.
    pub similarity_threshold: f64,

    /// Minimum classifier confidence to accept a prediction.
    pub confidence_threshold: f64,
}

impl Default for AlmaConfig {
    fn default() -> Self {
        AlmaConfig {
            snapshot_path: None,
            database_path: None,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

impl AlmaConfig {
    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            AlmaError::config(format!(
                "cannot read config at {}: {e}",
                path.as_ref().display()
            ))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| AlmaError::config(format!("invalid config: {e}")))
    }
}
