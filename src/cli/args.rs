//! Command line argument parsing for the alma CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// alma - a university information assistant
#[derive(Parser, Debug, Clone)]
#[command(name = "alma")]
#[command(about = "A rule-based/ML-hybrid question answering assistant")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct AlmaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to the model snapshot file
    #[arg(long, env = "ALMA_SNAPSHOT", value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Path to the SQLite database backing the dynamic response store
    #[arg(long, env = "ALMA_DATABASE", value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Configuration file (JSON); flags override config values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl AlmaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start an interactive chat session
    Chat(ChatArgs),

    /// Ask a single question and print the response
    Ask(AskArgs),

    /// Train the model from a seed file and write a snapshot
    Train(TrainArgs),
}

/// Arguments for the interactive chat session
#[derive(Parser, Debug, Clone)]
pub struct ChatArgs {
    /// Seed the model from a JSON file when no snapshot exists yet
    #[arg(short, long, value_name = "FILE")]
    pub seed: Option<PathBuf>,
}

/// Arguments for a one-shot question
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// The question to resolve
    #[arg(value_name = "QUESTION")]
    pub question: String,

    /// Seed the model from a JSON file when no snapshot exists yet
    #[arg(short, long, value_name = "FILE")]
    pub seed: Option<PathBuf>,
}

/// Arguments for initial training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// JSON file of {question, answer} pairs
    #[arg(short, long, value_name = "FILE")]
    pub seed: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat() {
        let args = AlmaArgs::parse_from(["alma", "chat"]);
        assert!(matches!(args.command, Command::Chat(_)));
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_parse_ask_with_flags() {
        let args = AlmaArgs::parse_from([
            "alma",
            "-vv",
            "--snapshot",
            "model.bin",
            "ask",
            "what courses are available",
        ]);

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.snapshot.as_deref(), Some(std::path::Path::new("model.bin")));
        match args.command {
            Command::Ask(ask) => assert_eq!(ask.question, "what courses are available"),
            _ => panic!("expected ask command"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = AlmaArgs::parse_from(["alma", "-vvv", "--quiet", "chat"]);
        assert_eq!(args.verbosity(), 0);
    }
}
