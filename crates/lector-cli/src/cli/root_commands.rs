use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate comprehension questions for a text.
    Questions(QuestionsArgs),
    /// Grade an answer to a question about a text.
    Grade(GradeArgs),
    /// Detect cognitive biases and logical fallacies in a text.
    Biases(BiasesArgs),
    /// Questions and biases for a text in one run.
    Analyze(AnalyzeArgs),
    /// Tally of graded answers by correctness.
    Report,
    /// Recently generated question sets.
    History(HistoryArgs),
    /// Send a raw prompt to the model.
    Chat(ChatArgs),
}

/// Where the source text comes from.
#[derive(Clone, Debug, Args)]
#[group(required = true, multiple = false)]
pub struct TextSource {
    /// Source text, inline.
    #[arg(long)]
    pub text: Option<String>,
    /// Read the source text from a UTF-8 file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Arguments for `lector questions`.
#[derive(Clone, Debug, Args)]
pub struct QuestionsArgs {
    #[command(flatten)]
    pub source: TextSource,
}

/// Arguments for `lector grade`.
#[derive(Clone, Debug, Args)]
pub struct GradeArgs {
    #[command(flatten)]
    pub source: TextSource,
    /// Question being answered.
    #[arg(long)]
    pub question: String,
    /// The reader's answer.
    #[arg(long)]
    pub answer: String,
}

/// Arguments for `lector biases`.
#[derive(Clone, Debug, Args)]
pub struct BiasesArgs {
    #[command(flatten)]
    pub source: TextSource,
}

/// Arguments for `lector analyze`.
#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: TextSource,
}

/// Arguments for `lector history`.
#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Max question sets to return.
    #[arg(short, long, default_value_t = 10)]
    pub limit: u32,
}

/// Arguments for `lector chat`.
#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// Prompt sent as-is.
    pub prompt: String,
}
