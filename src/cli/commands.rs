//! CLI command execution.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use log::{info, warn};
use parking_lot::Mutex;

use crate::cli::args::{AlmaArgs, AskArgs, ChatArgs, Command, TrainArgs};
use crate::config::AlmaConfig;
use crate::error::{AlmaError, Result};
use crate::knowledge::SqliteResponseStore;
use crate::model::{LearnedModel, SeedPair};
use crate::pipeline::ResponsePipeline;

/// Inputs that end the interactive session.
const EXIT_SENTINELS: &[&str] = &["exit", "quit"];

/// Load seed (question, answer) pairs from a JSON file.
pub fn load_seed_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<SeedPair>> {
    let content = fs::read_to_string(path.as_ref())?;
    let pairs: Vec<SeedPair> = serde_json::from_str(&content)?;
    Ok(pairs)
}

/// Execute the parsed command.
pub fn execute_command(args: AlmaArgs) -> Result<()> {
    let config = resolve_config(&args)?;

    match args.command {
        Command::Chat(ref chat_args) => cmd_chat(&config, chat_args),
        Command::Ask(ref ask_args) => cmd_ask(&config, ask_args),
        Command::Train(ref train_args) => cmd_train(&config, train_args),
    }
}

/// Merge the config file (if any) with command-line flag overrides.
fn resolve_config(args: &AlmaArgs) -> Result<AlmaConfig> {
    let mut config = match &args.config {
        Some(path) => AlmaConfig::load(path)?,
        None => AlmaConfig::default(),
    };

    if args.snapshot.is_some() {
        config.snapshot_path = args.snapshot.clone();
    }
    if args.database.is_some() {
        config.database_path = args.database.clone();
    }

    Ok(config)
}

/// Build the pipeline from config: load or create the model, optionally seed
/// it, and wire the dynamic store when a database path is configured.
fn build_pipeline(config: &AlmaConfig, seed: Option<&Path>) -> Result<ResponsePipeline> {
    let mut model = match &config.snapshot_path {
        Some(path) => LearnedModel::load_or_new(path)?,
        None => LearnedModel::new(),
    };
    model = model.with_thresholds(config.similarity_threshold, config.confidence_threshold);

    if !model.is_fitted()
        && let Some(seed_path) = seed
    {
        let pairs = load_seed_pairs(seed_path)?;
        model.initial_train(&pairs)?;
    }

    let mut pipeline = ResponsePipeline::university().with_model(Arc::new(Mutex::new(model)));

    if let Some(database) = &config.database_path {
        // The store is optional: an unreachable database downgrades to a
        // pipeline without dynamic lookups rather than a startup failure.
        match SqliteResponseStore::open(database) {
            Ok(store) => pipeline = pipeline.with_store(Box::new(store)),
            Err(e) => warn!("dynamic store unavailable at {}: {e}", database.display()),
        }
    }

    Ok(pipeline)
}

/// Interactive chat loop. One line in, one line out, until EOF or an exit
/// sentinel.
fn cmd_chat(config: &AlmaConfig, args: &ChatArgs) -> Result<()> {
    let mut pipeline = build_pipeline(config, args.seed.as_deref())?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("alma university assistant (type 'exit' to leave)");
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let input = line.trim();
        if EXIT_SENTINELS.contains(&input.to_lowercase().as_str()) {
            println!("Goodbye!");
            break;
        }

        println!("{}", pipeline.resolve(input));
    }

    Ok(())
}

/// Resolve a single question and print the response.
fn cmd_ask(config: &AlmaConfig, args: &AskArgs) -> Result<()> {
    let mut pipeline = build_pipeline(config, args.seed.as_deref())?;
    println!("{}", pipeline.resolve(&args.question));
    Ok(())
}

/// Train from a seed file and persist a snapshot.
fn cmd_train(config: &AlmaConfig, args: &TrainArgs) -> Result<()> {
    let snapshot_path = config.snapshot_path.as_ref().ok_or_else(|| {
        AlmaError::config("training requires a snapshot path (--snapshot or config)")
    })?;

    let pairs = load_seed_pairs(&args.seed)?;
    if pairs.is_empty() {
        return Err(AlmaError::invalid_argument("seed file contains no pairs"));
    }

    let mut model = LearnedModel::new()
        .with_snapshot_path(snapshot_path)
        .with_thresholds(config.similarity_threshold, config.confidence_threshold);
    model.initial_train(&pairs)?;

    if !model.is_fitted() {
        return Err(AlmaError::invalid_argument(
            "no usable pairs in seed file after normalization",
        ));
    }

    info!("snapshot written to {}", snapshot_path.display());
    println!(
        "Trained on {} pairs; snapshot written to {}",
        model.corpus_len(),
        snapshot_path.display()
    );
    Ok(())
}
