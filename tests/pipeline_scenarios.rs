//! End-to-end scenarios for the response resolution pipeline.

use std::sync::Arc;

use parking_lot::Mutex;

use alma::error::Result;
use alma::intent::Intent;
use alma::knowledge::{MemoryResponseStore, ResponseStore, SqliteResponseStore, StaticResponseTable};
use alma::model::{LearnedModel, SeedPair};
use alma::pipeline::{
    EMPTY_INPUT_PROMPT, ResponsePipeline, SharedModel, TEACH_PROMPT, TEACH_SUCCESS,
};

fn seed(pairs: &[(&str, &str)]) -> Vec<SeedPair> {
    pairs
        .iter()
        .map(|(q, a)| SeedPair {
            question: q.to_string(),
            answer: a.to_string(),
        })
        .collect()
}

fn untrained_model() -> SharedModel {
    Arc::new(Mutex::new(LearnedModel::new()))
}

fn static_responses(intent: &str) -> Vec<String> {
    StaticResponseTable::university()
        .responses_for(&Intent::new(intent))
        .expect("intent should be configured")
        .to_vec()
}

#[test]
fn greeting_resolves_to_a_configured_greeting() {
    let mut pipeline = ResponsePipeline::university().with_model(untrained_model());
    let greetings = static_responses("greeting");

    let response = pipeline.resolve("hello");
    assert!(
        greetings.iter().any(|g| *g == response),
        "{response:?} is not a configured greeting"
    );
}

#[test]
fn scholarship_question_resolves_statically_with_untrained_model_and_empty_store() {
    let mut pipeline = ResponsePipeline::university()
        .with_model(untrained_model())
        .with_store(Box::new(MemoryResponseStore::new()));
    let scholarships = static_responses("scholarship_info");

    let response = pipeline.resolve("what scholarships are available");
    assert!(
        scholarships.iter().any(|s| *s == response),
        "{response:?} is not a configured scholarship response"
    );
}

#[test]
fn teach_me_loop_learns_and_recalls_verbatim() {
    let model = untrained_model();
    let mut pipeline = ResponsePipeline::university().with_model(Arc::clone(&model));

    // No keyword match, no store, untrained model: the pipeline asks to learn
    assert_eq!(pipeline.resolve("xyzzy plugh"), TEACH_PROMPT);
    assert!(pipeline.is_awaiting_teach());

    // The next input is the taught answer
    assert_eq!(pipeline.resolve("this is a test phrase"), TEACH_SUCCESS);
    assert!(!pipeline.is_awaiting_teach());

    // Exact match from then on, through the pipeline and the model directly
    assert_eq!(pipeline.resolve("xyzzy plugh"), "this is a test phrase");
    assert_eq!(
        model.lock().get_response("xyzzy plugh").as_deref(),
        Some("this is a test phrase")
    );
}

#[test]
fn taught_duplicates_grow_the_corpus_at_most_once() {
    let model = untrained_model();
    {
        let mut guard = model.lock();
        guard.update("xyzzy plugh", "this is a test phrase").unwrap();
        let after_first = guard.corpus_len();
        guard.update("xyzzy plugh", "this is a test phrase").unwrap();
        assert_eq!(guard.corpus_len(), after_first);
    }

    let mut pipeline = ResponsePipeline::university().with_model(model);
    assert_eq!(pipeline.resolve("xyzzy plugh"), "this is a test phrase");
}

#[test]
fn exact_match_beats_keyword_classification() {
    let model = untrained_model();
    model
        .lock()
        .update(
            "what courses run at midnight",
            "Only the night-owl seminar runs at midnight.",
        )
        .unwrap();

    let mut pipeline = ResponsePipeline::university().with_model(model);

    // "courses" would classify to course_info, but the taught answer wins
    assert_eq!(
        pipeline.resolve("what courses run at midnight"),
        "Only the night-owl seminar runs at midnight."
    );
}

#[test]
fn empty_input_prompts_and_leaves_state_alone() {
    let mut pipeline = ResponsePipeline::university().with_model(untrained_model());

    assert_eq!(pipeline.resolve(""), EMPTY_INPUT_PROMPT);
    assert_eq!(pipeline.resolve("   \t "), EMPTY_INPUT_PROMPT);
    assert!(!pipeline.is_awaiting_teach());
}

#[test]
fn dynamic_store_answers_when_model_and_static_miss() {
    let store = MemoryResponseStore::new();
    store
        .insert("is there parking on campus", "Yes, lots A through D are open to students.")
        .unwrap();

    let mut pipeline = ResponsePipeline::university()
        .with_model(untrained_model())
        .with_store(Box::new(store));

    assert_eq!(
        pipeline.resolve("is there parking on campus"),
        "Yes, lots A through D are open to students."
    );
}

#[test]
fn snapshot_round_trip_reproduces_responses() -> Result<()> {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("model.bin");

    let mut model = LearnedModel::new().with_snapshot_path(&path);
    model.initial_train(&seed(&[
        ("what courses are available", "We offer IT, Business, and Arts programs."),
        ("how to apply", "Apply through our website's admissions section."),
        ("where are you located", "Our campus is at 123 Main Street."),
    ]))?;
    model.update("xyzzy plugh", "this is a test phrase")?;

    let restored = LearnedModel::load(&path)?;
    assert!(restored.is_fitted());

    for question in [
        "what courses are available",
        "how to apply",
        "where are you located",
        "xyzzy plugh",
    ] {
        assert_eq!(
            model.get_response(question),
            restored.get_response(question),
            "mismatch for {question:?}"
        );
    }

    Ok(())
}

#[test]
fn trained_pipeline_prefers_learned_answers_for_topical_questions() {
    let model = untrained_model();
    model
        .lock()
        .initial_train(&seed(&[
            ("what courses are available", "We offer IT, Business, and Arts programs."),
            ("how to apply", "Apply through our website's admissions section."),
        ]))
        .unwrap();

    let mut pipeline = ResponsePipeline::university().with_model(model);

    // The learned model answers before the static course_info table is tried
    assert_eq!(
        pipeline.resolve("what courses are available?"),
        "We offer IT, Business, and Arts programs."
    );
}

#[test]
fn failing_store_fails_open_to_the_teach_prompt() {
    struct BrokenStore;

    impl ResponseStore for BrokenStore {
        fn query(&self, _question: &str) -> Result<Option<String>> {
            Err(alma::error::AlmaError::storage("connection refused"))
        }

        fn insert(&self, _question: &str, _response: &str) -> Result<()> {
            Err(alma::error::AlmaError::storage("connection refused"))
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    let mut pipeline = ResponsePipeline::university()
        .with_model(untrained_model())
        .with_store(Box::new(BrokenStore));

    // The storage error is swallowed and the chain continues to teach mode
    assert_eq!(pipeline.resolve("xyzzy plugh"), TEACH_PROMPT);
    assert!(pipeline.is_awaiting_teach());
}

#[test]
fn sqlite_store_round_trips_through_the_pipeline() -> Result<()> {
    let dir = tempfile::TempDir::new().unwrap();
    let db_path = dir.path().join("responses.db");

    {
        let store = SqliteResponseStore::open(&db_path)?;
        store.insert("when does the library open", "The library opens at 8am daily.")?;
    }

    // Reopen to prove the rows persisted
    let store = SqliteResponseStore::open(&db_path)?;
    let mut pipeline = ResponsePipeline::university()
        .with_model(untrained_model())
        .with_store(Box::new(store));

    assert_eq!(
        pipeline.resolve("when does the library open"),
        "The library opens at 8am daily."
    );
    Ok(())
}

#[test]
fn custom_rules_reach_additional_table_intents() {
    use alma::intent::{KeywordIntentClassifier, KeywordRule};

    // The built-in table carries more intents than the built-in rules; a
    // custom classifier can route to them.
    let classifier = KeywordIntentClassifier::new(vec![
        KeywordRule::any("campus_facilities", &["library", "lab", "gym", "facilities"]),
        KeywordRule::any("tuition_info", &["tuition", "fee", "cost"]),
    ]);
    let mut pipeline = ResponsePipeline::new(classifier, StaticResponseTable::university());

    let facilities = static_responses("campus_facilities");
    let response = pipeline.resolve("does the library have labs?");
    assert!(facilities.iter().any(|r| *r == response));

    let tuition = static_responses("tuition_info");
    let response = pipeline.resolve("how much is tuition?");
    assert!(tuition.iter().any(|r| *r == response));
}

#[test]
fn paraphrase_of_seeded_question_resolves_by_similarity() {
    let model = untrained_model();
    model
        .lock()
        .initial_train(&seed(&[
            ("what courses are available", "We offer IT, Business, and Arts programs."),
            ("how to apply", "Apply through our website's admissions section."),
            ("where are you located", "Our campus is at 123 Main Street."),
            ("can I get a scholarship", "Merit scholarships are available."),
        ]))
        .unwrap();

    let mut pipeline = ResponsePipeline::university().with_model(model);

    assert_eq!(
        pipeline.resolve("which courses are available"),
        "We offer IT, Business, and Arts programs."
    );
}
