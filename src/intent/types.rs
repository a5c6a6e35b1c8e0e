//! Intent labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A symbolic category of user request.
///
/// Intents form a closed but extensible label set: the built-in university
/// rules cover the labels below, and callers may introduce new labels by
/// constructing rules with their own `Intent` values. [`Intent::unknown`]
/// always exists and is returned when no rule matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Intent(String);

impl Intent {
    /// Create an intent from a label.
    pub fn new<S: Into<String>>(label: S) -> Self {
        Intent(label.into())
    }

    /// The fallback intent for unclassifiable input.
    pub fn unknown() -> Self {
        Intent::new("unknown")
    }

    /// Get the label of this intent.
    pub fn label(&self) -> &str {
        &self.0
    }

    /// Whether this is the unknown intent.
    pub fn is_unknown(&self) -> bool {
        self.0 == "unknown"
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Intent {
    fn from(label: &str) -> Self {
        Intent::new(label)
    }
}
