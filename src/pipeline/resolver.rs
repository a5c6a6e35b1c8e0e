//! The response resolution pipeline.
//!
//! Orchestrates the fallback chain across the learned model, the keyword
//! classifier with its static response table, and the dynamic store, and
//! drives the teach-me learning loop. `resolve` is total: the user always
//! gets a response string, whatever fails underneath.

use std::sync::Arc;

use log::{error, warn};
use parking_lot::Mutex;

use crate::analysis::TextNormalizer;
use crate::intent::KeywordIntentClassifier;
use crate::knowledge::{ResponseStore, StaticResponseTable};
use crate::model::LearnedModel;
use crate::pipeline::state::ConversationState;

/// Response to empty or whitespace-only input.
pub const EMPTY_INPUT_PROMPT: &str = "Please type something...";

/// Prompt asking the user to teach an unanswerable question.
pub const TEACH_PROMPT: &str = "I don't know how to answer that. What should I say?";

/// Acknowledgment after a successful teach exchange.
pub const TEACH_SUCCESS: &str = "Thanks, I've learned from that!";

/// Acknowledgment after a failed teach exchange.
pub const TEACH_FAILURE: &str = "I couldn't learn that response.";

/// Final fallback when no learned model is wired and every tier missed.
pub const NO_ANSWER: &str = "I'm sorry, I don't have information on that topic.";

/// A shared handle to a learned model.
///
/// One model instance may back several pipelines; the mutex keeps the
/// refit-then-persist sequence in `update` atomic with respect to concurrent
/// lookups and updates.
pub type SharedModel = Arc<Mutex<LearnedModel>>;

/// The response resolution pipeline.
///
/// Fallback order per input, after the teach-mode check: protected
/// small-talk intents, learned model, static table, dynamic store, and
/// finally the teach prompt. Protected intents are resolved before the
/// learned model so taught data can never shadow them (see DESIGN.md).
pub struct ResponsePipeline {
    normalizer: TextNormalizer,
    classifier: KeywordIntentClassifier,
    static_table: StaticResponseTable,
    model: Option<SharedModel>,
    store: Option<Box<dyn ResponseStore>>,
    state: ConversationState,
}

impl std::fmt::Debug for ResponsePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponsePipeline")
            .field("has_model", &self.model.is_some())
            .field("store", &self.store.as_ref().map(|s| s.name()))
            .field("state", &self.state)
            .finish()
    }
}

impl ResponsePipeline {
    /// Create a pipeline from a classifier and static response table, with no
    /// optional collaborators wired.
    pub fn new(classifier: KeywordIntentClassifier, static_table: StaticResponseTable) -> Self {
        ResponsePipeline {
            normalizer: TextNormalizer::new(),
            classifier,
            static_table,
            model: None,
            store: None,
            state: ConversationState::new(),
        }
    }

    /// Create a pipeline with the built-in university classifier and table.
    pub fn university() -> Self {
        Self::new(
            KeywordIntentClassifier::university(),
            StaticResponseTable::university(),
        )
    }

    /// Wire a learned model.
    pub fn with_model(mut self, model: SharedModel) -> Self {
        self.model = Some(model);
        self
    }

    /// Wire a dynamic response store.
    pub fn with_store(mut self, store: Box<dyn ResponseStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Whether the pipeline is waiting for a taught answer.
    pub fn is_awaiting_teach(&self) -> bool {
        self.state.is_awaiting_teach()
    }

    /// Resolve one user input into a response.
    ///
    /// Never fails and never panics on user input; storage and model errors
    /// are logged and treated as misses.
    pub fn resolve(&mut self, input: &str) -> String {
        let input = input.trim();
        if input.is_empty() {
            return EMPTY_INPUT_PROMPT.to_string();
        }

        if self.state.is_awaiting_teach() {
            return self.learn_pending(input);
        }

        // Protected small-talk first: learned data never shadows these
        let tokens = self.normalizer.normalize(input);
        let intent = self.classifier.classify(&tokens);
        if self.static_table.is_protected(&intent)
            && let Some(response) = self.static_table.get(&intent)
        {
            return response.to_string();
        }

        // Learned model
        if let Some(model) = &self.model
            && let Some(response) = model.lock().get_response(input)
        {
            return response;
        }

        // Static responses for the classified intent
        if let Some(response) = self.static_table.get(&intent) {
            return response.to_string();
        }

        // Dynamic store, keyed by the raw question; errors fail open
        if let Some(store) = &self.store {
            match store.query(input) {
                Ok(Some(response)) => return response,
                Ok(None) => {}
                Err(e) => warn!("{} store lookup failed, continuing: {e}", store.name()),
            }
        }

        // Nothing answered; ask the user to teach us if we can learn
        if self.model.is_some() {
            self.state.begin_teach(input);
            TEACH_PROMPT.to_string()
        } else {
            NO_ANSWER.to_string()
        }
    }

    /// Consume the pending teach exchange, treating `answer` as the taught
    /// response for the stored question.
    fn learn_pending(&mut self, answer: &str) -> String {
        let Some(question) = self.state.finish_teach() else {
            // Flag without a question; treat as a fresh input
            return self.resolve(answer);
        };

        let Some(model) = &self.model else {
            return TEACH_FAILURE.to_string();
        };

        match model.lock().update(&question, answer) {
            Ok(true) => TEACH_SUCCESS.to_string(),
            Ok(false) => TEACH_FAILURE.to_string(),
            Err(e) => {
                error!("failed to persist taught answer: {e}");
                TEACH_FAILURE.to_string()
            }
        }
    }
}
