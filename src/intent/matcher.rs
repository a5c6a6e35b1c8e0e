//! Keyword rules and match policies.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analysis::{PorterStemmer, Stemmer};
use crate::intent::types::Intent;

/// How a rule's keyword set is matched against a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPolicy {
    /// The rule fires when any keyword appears among the tokens.
    Any,
    /// The rule fires only when every keyword appears among the tokens.
    All,
}

/// A single (intent, keyword-set, policy) classification rule.
///
/// Keywords are stemmed at construction with the same stemmer the normalizer
/// applies to input tokens, so raw dictionary words ("apply", "courses") match
/// their normalized forms ("appli", "cours") without the caller having to
/// know stem spellings.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    intent: Intent,
    keywords: HashSet<String>,
    policy: MatchPolicy,
}

impl KeywordRule {
    /// Create a rule that fires when any of the keywords is present.
    pub fn any<I: Into<Intent>>(intent: I, keywords: &[&str]) -> Self {
        Self::with_policy(intent, keywords, MatchPolicy::Any)
    }

    /// Create a rule that fires only when all keywords are present.
    pub fn all<I: Into<Intent>>(intent: I, keywords: &[&str]) -> Self {
        Self::with_policy(intent, keywords, MatchPolicy::All)
    }

    /// Create a rule with an explicit match policy.
    pub fn with_policy<I: Into<Intent>>(intent: I, keywords: &[&str], policy: MatchPolicy) -> Self {
        let stemmer = PorterStemmer::new();
        let keywords = keywords.iter().map(|kw| stemmer.stem(kw)).collect();

        KeywordRule {
            intent: intent.into(),
            keywords,
            policy,
        }
    }

    /// The intent this rule classifies to.
    pub fn intent(&self) -> &Intent {
        &self.intent
    }

    /// The match policy of this rule.
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Check whether this rule fires on a normalized token sequence.
    pub fn matches(&self, tokens: &[String]) -> bool {
        if self.keywords.is_empty() || tokens.is_empty() {
            return false;
        }

        match self.policy {
            MatchPolicy::Any => tokens.iter().any(|token| self.keywords.contains(token)),
            MatchPolicy::All => {
                let present: HashSet<&str> = tokens.iter().map(String::as_str).collect();
                self.keywords.iter().all(|kw| present.contains(kw.as_str()))
            }
        }
    }
}
