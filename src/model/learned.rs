//! The learned response model.
//!
//! A trainable text-similarity/classification engine with three lookup tiers
//! (exact match, cosine similarity, probabilistic classification) and an
//! online update operation that appends taught pairs and retrains.
//!
//! The model is either untrained (empty, answers nothing) or trained; initial
//! training, a successful update, or loading a fitted snapshot moves it to the
//! trained state. Every mutation refits the vectorizer and classifier over
//! the full corpus and rewrites the snapshot. That refit is O(corpus) per
//! taught pair; fine at this scale, see DESIGN.md for the limit.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::analysis::TextNormalizer;
use crate::error::Result;
use crate::model::bayes::MultinomialNb;
use crate::model::snapshot::ModelSnapshot;
use crate::model::tfidf::TfIdfVectorizer;
use crate::model::types::{SeedPair, TrainingPair};

/// Minimum cosine similarity for a semantic match (strictly greater than).
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Minimum classifier confidence to accept a prediction (strictly greater than).
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Minimum token count before the classification tier is attempted.
pub const DEFAULT_MIN_PREDICT_TOKENS: usize = 3;

/// Trainable question-answering model over a corpus of taught pairs.
pub struct LearnedModel {
    normalizer: TextNormalizer,
    vectorizer: TfIdfVectorizer,
    classifier: MultinomialNb,
    corpus: Vec<TrainingPair>,
    fitted: bool,
    snapshot_path: Option<PathBuf>,
    similarity_threshold: f64,
    confidence_threshold: f64,
    min_predict_tokens: usize,
}

impl std::fmt::Debug for LearnedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LearnedModel")
            .field("corpus_len", &self.corpus.len())
            .field("fitted", &self.fitted)
            .field("snapshot_path", &self.snapshot_path)
            .finish()
    }
}

impl LearnedModel {
    /// Create an untrained model with no snapshot path.
    pub fn new() -> Self {
        LearnedModel {
            normalizer: TextNormalizer::new(),
            vectorizer: TfIdfVectorizer::new(),
            classifier: MultinomialNb::new(),
            corpus: Vec::new(),
            fitted: false,
            snapshot_path: None,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            min_predict_tokens: DEFAULT_MIN_PREDICT_TOKENS,
        }
    }

    /// Set the path the model persists snapshots to after every mutation.
    pub fn with_snapshot_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    /// Override the similarity and confidence thresholds.
    pub fn with_thresholds(mut self, similarity: f64, confidence: f64) -> Self {
        self.similarity_threshold = similarity;
        self.confidence_threshold = confidence;
        self
    }

    /// Load a model from a snapshot file.
    ///
    /// The vectorizer is rebuilt from the saved vocabulary rather than
    /// refitted; the model is trained iff the snapshot was fitted.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let snapshot = ModelSnapshot::read_from(path.as_ref())?;
        info!(
            "loaded model snapshot from {} ({} pairs, fitted={})",
            path.as_ref().display(),
            snapshot.corpus.len(),
            snapshot.fitted
        );

        let mut model = LearnedModel::new().with_snapshot_path(path.as_ref());
        model.vectorizer =
            TfIdfVectorizer::from_parts(snapshot.vocabulary, snapshot.idf, snapshot.n_documents);
        model.classifier = snapshot.classifier;
        model.corpus = snapshot.corpus;
        model.fitted = snapshot.fitted;
        Ok(model)
    }

    /// Load the snapshot at `path` if it exists, otherwise start untrained
    /// with `path` as the future snapshot location.
    pub fn load_or_new<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(LearnedModel::new().with_snapshot_path(path.as_ref()))
        }
    }

    /// Train from scratch on seed pairs, replacing any existing corpus.
    ///
    /// Pairs whose question or answer normalizes to empty are skipped. When
    /// nothing usable remains the model stays untrained and no snapshot is
    /// written.
    pub fn initial_train(&mut self, pairs: &[SeedPair]) -> Result<()> {
        let corpus: Vec<TrainingPair> = pairs
            .iter()
            .filter_map(|pair| {
                let question = self.normalizer.normalize_joined(&pair.question);
                let answer = pair.answer.trim();
                if question.is_empty() || answer.is_empty() {
                    None
                } else {
                    Some(TrainingPair::new(question, answer))
                }
            })
            .collect();

        if corpus.is_empty() {
            info!("initial training skipped: no usable seed pairs");
            return Ok(());
        }

        self.corpus = corpus;
        self.refit();
        self.fitted = true;
        info!("trained on {} seed pairs", self.corpus.len());
        self.persist()
    }

    /// Teach the model a new (question, answer) pair.
    ///
    /// Returns `Ok(false)` when either side normalizes to empty. When a
    /// sufficiently similar question is already known the pair is treated as
    /// a duplicate and the call succeeds without growing the corpus.
    /// Otherwise the pair is appended, the model is refitted on the full
    /// corpus, and a snapshot is written; a snapshot failure is surfaced.
    pub fn update(&mut self, question: &str, answer: &str) -> Result<bool> {
        let question = self.normalizer.normalize_joined(question);
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return Ok(false);
        }

        if self.fitted {
            if let Some(known) = self.find_similar(&question) {
                debug!("update treated as duplicate of known question ({known:?})");
                return Ok(true);
            }
        }

        self.corpus.push(TrainingPair::new(question, answer));
        self.refit();
        self.fitted = true;
        info!("learned new pair, corpus now {} entries", self.corpus.len());
        self.persist()?;
        Ok(true)
    }

    /// Resolve a response for the input, or `None` when the model is
    /// untrained or every tier misses.
    ///
    /// Tiers, in order, short-circuiting on the first hit:
    /// 1. exact match on the normalized question;
    /// 2. cosine similarity against every stored question, accepted above
    ///    the similarity threshold;
    /// 3. classifier prediction, only for inputs of at least
    ///    `min_predict_tokens` tokens, accepted above the confidence
    ///    threshold.
    pub fn get_response(&self, input: &str) -> Option<String> {
        if !self.fitted {
            return None;
        }

        let tokens = self.normalizer.normalize(input);
        let normalized = tokens.join(" ");

        // Tier 1: exact match
        if let Some(pair) = self.corpus.iter().find(|pair| pair.question == normalized) {
            return Some(pair.answer.clone());
        }

        // Tier 2: semantic similarity
        if let Some(answer) = self.find_similar(&normalized) {
            return Some(answer.to_string());
        }

        // Tier 3: probabilistic classification
        if tokens.len() >= self.min_predict_tokens {
            let features = self.vectorizer.transform(&normalized);
            if let Some((answer, confidence)) = self.classifier.predict(&features) {
                debug!("classifier predicted {answer:?} with confidence {confidence:.3}");
                if confidence > self.confidence_threshold {
                    return Some(answer);
                }
            }
        }

        None
    }

    /// Find the stored answer whose question is most similar to the
    /// normalized input, if the best score clears the threshold.
    fn find_similar(&self, normalized: &str) -> Option<&str> {
        let input_vector = self.vectorizer.transform(normalized);

        let mut best: Option<(&str, f64)> = None;
        for pair in &self.corpus {
            let question_vector = self.vectorizer.transform(&pair.question);
            let score = cosine_similarity(&input_vector, &question_vector);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((&pair.answer, score));
            }
        }

        best.and_then(|(answer, score)| {
            if score > self.similarity_threshold {
                Some(answer)
            } else {
                None
            }
        })
    }

    /// Refit the vectorizer and classifier on the current corpus.
    fn refit(&mut self) {
        let questions: Vec<String> = self.corpus.iter().map(|p| p.question.clone()).collect();
        self.vectorizer.fit(&questions);

        let rows: Vec<Vec<f64>> = questions
            .iter()
            .map(|q| self.vectorizer.transform(q))
            .collect();
        let answers: Vec<String> = self.corpus.iter().map(|p| p.answer.clone()).collect();
        self.classifier.fit(&rows, &answers);
    }

    /// Write a snapshot to the configured path, if one is set.
    fn persist(&self) -> Result<()> {
        match &self.snapshot_path {
            Some(path) => self.save_to(path),
            None => Ok(()),
        }
    }

    /// Write a snapshot of the full model state to `path`.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let snapshot = ModelSnapshot {
            vocabulary: self.vectorizer.vocabulary().clone(),
            idf: self.vectorizer.idf().to_vec(),
            n_documents: self.vectorizer.n_documents(),
            classifier: self.classifier.clone(),
            corpus: self.corpus.clone(),
            fitted: self.fitted,
        };
        snapshot.write_to(path)
    }

    /// Whether the model has been trained.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Number of stored training pairs.
    pub fn corpus_len(&self) -> usize {
        self.corpus.len()
    }
}

impl Default for LearnedModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Cosine similarity between two vectors; 0.0 when either has no magnitude.
fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let magnitude_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let magnitude_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        0.0
    } else {
        dot / (magnitude_a * magnitude_b)
    }
}
