//! Multinomial naive Bayes classifier.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Laplace smoothing constant.
const ALPHA: f64 = 1.0;

/// Multinomial naive Bayes over non-negative feature vectors.
///
/// Classes are answer strings; features are TF-IDF values. `predict` returns
/// the argmax class together with its normalized posterior probability so the
/// caller can apply a confidence threshold.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MultinomialNb {
    /// Class labels in training order.
    classes: Vec<String>,
    /// ln P(class) per class.
    class_log_prior: Vec<f64>,
    /// ln P(feature | class) per class, indexed by feature.
    feature_log_prob: Vec<Vec<f64>>,
    /// Number of features the classifier was fitted on.
    n_features: usize,
}

impl MultinomialNb {
    /// Create an unfitted classifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit the classifier on feature rows and their labels.
    ///
    /// Rows and labels must be the same length; rows must share one width.
    /// Duplicate labels are pooled into a single class.
    pub fn fit(&mut self, rows: &[Vec<f64>], labels: &[String]) {
        debug_assert_eq!(rows.len(), labels.len());

        if rows.is_empty() {
            *self = Self::default();
            return;
        }

        let n_features = rows[0].len();
        let mut class_rows: HashMap<&str, Vec<&Vec<f64>>> = HashMap::new();
        for (row, label) in rows.iter().zip(labels) {
            class_rows.entry(label.as_str()).or_default().push(row);
        }

        let mut classes: Vec<String> = Vec::with_capacity(class_rows.len());
        let mut class_log_prior = Vec::with_capacity(class_rows.len());
        let mut feature_log_prob = Vec::with_capacity(class_rows.len());
        let total = rows.len() as f64;

        // Deterministic class order keeps snapshots stable across refits
        let mut grouped: Vec<(&str, Vec<&Vec<f64>>)> = class_rows.into_iter().collect();
        grouped.sort_by_key(|(label, _)| *label);

        for (label, members) in grouped {
            let mut feature_counts = vec![0.0; n_features];
            for row in &members {
                for (count, value) in feature_counts.iter_mut().zip(row.iter()) {
                    *count += value;
                }
            }

            let total_count: f64 = feature_counts.iter().sum();
            let denominator = total_count + ALPHA * n_features as f64;
            let log_probs: Vec<f64> = feature_counts
                .iter()
                .map(|count| ((count + ALPHA) / denominator).ln())
                .collect();

            classes.push(label.to_string());
            class_log_prior.push((members.len() as f64 / total).ln());
            feature_log_prob.push(log_probs);
        }

        self.classes = classes;
        self.class_log_prior = class_log_prior;
        self.feature_log_prob = feature_log_prob;
        self.n_features = n_features;
    }

    /// Predict the most likely class and its posterior probability.
    ///
    /// Returns `None` when the classifier is unfitted or the feature width
    /// does not match the fitted width.
    pub fn predict(&self, features: &[f64]) -> Option<(String, f64)> {
        if self.classes.is_empty() || features.len() != self.n_features {
            return None;
        }

        let joint: Vec<f64> = self
            .class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_probs)| {
                prior
                    + features
                        .iter()
                        .zip(log_probs)
                        .map(|(value, log_prob)| value * log_prob)
                        .sum::<f64>()
            })
            .collect();

        // Log-sum-exp normalization of the joint log-likelihoods
        let max_joint = joint.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let denominator: f64 = joint.iter().map(|j| (j - max_joint).exp()).sum();

        let (best_idx, best_joint) = joint
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))?;

        let confidence = (best_joint - max_joint).exp() / denominator;
        Some((self.classes[best_idx].clone(), confidence))
    }

    /// Whether the classifier has been fitted.
    pub fn is_fitted(&self) -> bool {
        !self.classes.is_empty()
    }

    /// Number of distinct classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}
