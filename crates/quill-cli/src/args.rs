use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Main command-line interface for the Quill questionnaire tool
///
/// Quill works on questionnaire template files: the flat JSON shape the
/// backend persists, and the grouped shape editors operate on. It can
/// inspect a template, convert between the two shapes, and replay a
/// respondent's walk through the branching sections.
#[derive(Parser)]
#[command(version, about, name = "q")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Quill CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show a readable summary of a persisted template
    #[command(alias = "i")]
    Inspect(InspectArgs),
    /// Convert a persisted flat template to the grouped editing shape
    #[command(alias = "g")]
    Group(TransformArgs),
    /// Convert a grouped template back to the persisted flat shape
    #[command(alias = "f")]
    Flatten(TransformArgs),
    /// Replay a walk through a template with a given answer set
    #[command(alias = "w")]
    Walk(WalkArgs),
}

/// Inspect a template file
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the persisted template JSON file
    pub file: PathBuf,
}

/// Convert a template file between shapes
#[derive(clap::Args)]
pub struct TransformArgs {
    /// Path to the input template JSON file
    pub file: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Replay navigation over a template
#[derive(clap::Args)]
pub struct WalkArgs {
    /// Path to the persisted template JSON file
    pub file: PathBuf,

    /// Path to an answers JSON file (`{"questionId": value, ...}`)
    #[arg(short, long)]
    pub answers: Option<PathBuf>,

    /// Print the submission payload after the walk completes
    #[arg(long)]
    pub submission: bool,
}
