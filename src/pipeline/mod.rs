//! The response resolution pipeline and its conversational state.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use alma::model::LearnedModel;
//! use alma::pipeline::ResponsePipeline;
//! use parking_lot::Mutex;
//!
//! let model = Arc::new(Mutex::new(LearnedModel::new()));
//! let mut pipeline = ResponsePipeline::university().with_model(model);
//!
//! let response = pipeline.resolve("hello");
//! assert!(!response.is_empty());
//! ```

mod resolver;
mod state;

pub use resolver::{
    EMPTY_INPUT_PROMPT, NO_ANSWER, ResponsePipeline, SharedModel, TEACH_FAILURE, TEACH_PROMPT,
    TEACH_SUCCESS,
};
pub use state::ConversationState;
