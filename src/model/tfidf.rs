//! TF-IDF vectorizer for text feature extraction.

use std::collections::{HashMap, HashSet};

use crate::analysis::TextNormalizer;

/// TF-IDF vectorizer over normalized question text.
///
/// Tokenization goes through the shared [`TextNormalizer`], so the feature
/// space is built on the same stemmed tokens the rest of the pipeline uses.
/// The fitted state (vocabulary and IDF table) is exposed through accessors
/// and [`TfIdfVectorizer::from_parts`], which lets a model snapshot rebuild
/// the vectorizer without refitting.
#[derive(Clone)]
pub struct TfIdfVectorizer {
    /// Vocabulary: token -> feature index.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature index.
    idf: Vec<f64>,
    /// Number of documents seen during fitting.
    n_documents: usize,
    normalizer: TextNormalizer,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create an unfitted vectorizer.
    pub fn new() -> Self {
        TfIdfVectorizer {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            normalizer: TextNormalizer::new(),
        }
    }

    /// Rebuild a fitted vectorizer from persisted state.
    pub fn from_parts(vocabulary: HashMap<String, usize>, idf: Vec<f64>, n_documents: usize) -> Self {
        TfIdfVectorizer {
            vocabulary,
            idf,
            n_documents,
            normalizer: TextNormalizer::new(),
        }
    }

    /// Fit the vocabulary and IDF table on training documents.
    pub fn fit(&mut self, documents: &[String]) {
        self.n_documents = documents.len();
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let unique_tokens: HashSet<String> = self.normalizer.normalize(doc).into_iter().collect();

            for token in unique_tokens {
                *document_frequency.entry(token.clone()).or_insert(0) += 1;
                let next_idx = vocabulary.len();
                vocabulary.entry(token).or_insert(next_idx);
            }
        }

        // IDF = ln((N + 1) / (df + 1)) + 1
        let mut idf = vec![0.0; vocabulary.len()];
        for (token, idx) in &vocabulary {
            let df = document_frequency.get(token).copied().unwrap_or(0);
            idf[*idx] = ((self.n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
    }

    /// Transform a document into a TF-IDF feature vector.
    ///
    /// Out-of-vocabulary tokens contribute nothing; a document with no known
    /// tokens maps to the zero vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let tokens = self.normalizer.normalize(document);
        let mut tf = vec![0.0; self.vocabulary.len()];

        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                tf[idx] += 1.0;
            }
        }

        let doc_length = tokens.len() as f64;
        if doc_length > 0.0 {
            for count in &mut tf {
                *count /= doc_length;
            }
        }

        for (idx, count) in tf.iter_mut().enumerate() {
            *count *= self.idf[idx];
        }

        tf
    }

    /// Whether the vectorizer has been fitted on at least one document.
    pub fn is_fitted(&self) -> bool {
        !self.vocabulary.is_empty()
    }

    /// Size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// The fitted vocabulary (token -> feature index).
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// The fitted IDF table.
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Number of documents the vectorizer was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_fit_and_transform() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&docs(&[
            "what courses are available",
            "how to apply online",
            "where is the campus",
        ]));

        assert!(vectorizer.is_fitted());
        assert!(vectorizer.vocabulary_size() > 0);

        let features = vectorizer.transform("what courses");
        assert_eq!(features.len(), vectorizer.vocabulary_size());
        assert!(features.iter().any(|&v| v > 0.0));
    }

    #[test]
    fn test_out_of_vocabulary_is_zero_vector() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&docs(&["what courses are available"]));

        let features = vectorizer.transform("zebra quantum");
        assert!(features.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_unfitted_transform_is_empty() {
        let vectorizer = TfIdfVectorizer::new();

        assert!(!vectorizer.is_fitted());
        assert!(vectorizer.transform("anything").is_empty());
    }

    #[test]
    fn test_from_parts_reproduces_transform() {
        let mut fitted = TfIdfVectorizer::new();
        fitted.fit(&docs(&["how to apply for a scholarship", "where to apply"]));

        let rebuilt = TfIdfVectorizer::from_parts(
            fitted.vocabulary().clone(),
            fitted.idf().to_vec(),
            fitted.n_documents(),
        );

        assert_eq!(
            fitted.transform("how to apply"),
            rebuilt.transform("how to apply")
        );
    }

    #[test]
    fn test_inflected_forms_share_features() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&docs(&["applying for courses"]));

        // Stemming folds inflected forms onto the same feature
        let a = vectorizer.transform("applying");
        let b = vectorizer.transform("applies");
        assert_eq!(a, b);
        assert!(a.iter().any(|&v| v > 0.0));
    }
}
