//! Command handlers bridging file IO and the engine.
//!
//! Each handler loads JSON from disk, runs the relevant quill-core
//! operation, and hands markdown to the renderer or JSON to a file.
//! Anyhow context is added at every IO boundary; engine semantics
//! (grouping, navigation fallbacks) stay inside quill-core.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::debug;
use quill_core::grouping::{flatten_template, group_template};
use quill_core::models::{AnswerValue, PersonalAnswers, Template};
use quill_core::navigation::{NavigationEngine, Progress};
use quill_core::wire::{to_persisted, PersistedTemplate, Submission};

use crate::args::{InspectArgs, TransformArgs, WalkArgs};
use crate::renderer::TerminalRenderer;

pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Renders a persisted template in its grouped editing shape.
    pub fn inspect(&self, args: &InspectArgs) -> Result<()> {
        let template = load_persisted(&args.file)?;
        let grouped = group_template(&template);
        self.renderer.render(&format!("{grouped}"))
    }

    /// Persisted flat shape → grouped editing shape.
    pub fn group(&self, args: &TransformArgs) -> Result<()> {
        let template = load_persisted(&args.file)?;
        let grouped = group_template(&template);
        emit_json(args.output.as_deref(), &grouped)
    }

    /// Grouped editing shape → persisted flat shape.
    pub fn flatten(&self, args: &TransformArgs) -> Result<()> {
        let raw = fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        let grouped: Template = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid grouped template in {}", args.file.display()))?;
        let persisted = to_persisted(&grouped);
        emit_json(args.output.as_deref(), &persisted)
    }

    /// Replays navigation from section 0 with the given answers.
    pub fn walk(&self, args: &WalkArgs) -> Result<()> {
        let template = load_persisted(&args.file)?;
        let grouped = group_template(&template);
        let answers = match &args.answers {
            Some(path) => load_answers(path)?,
            None => PersonalAnswers::new(),
        };

        let mut engine = NavigationEngine::new();
        let mut lines = Vec::new();
        // A branching loop with fixed answers never terminates; bound the
        // walk by a generous multiple of the section count.
        let max_steps = grouped.sections.len().max(1) * 4;

        for _ in 0..=max_steps {
            let index = engine.current_section_index();
            let title = grouped
                .sections
                .get(index)
                .map(|s| s.title.as_str())
                .unwrap_or("(no section)");
            match engine.advance(&grouped, &answers) {
                Progress::Submitted => {
                    lines.push(format!("- Section {index}: {title}"));
                    lines.push("- **Submitted**".to_string());
                    self.renderer.render(&lines.join("\n"))?;
                    if args.submission {
                        let flat = flatten_template(&grouped);
                        let submission = Submission::from_personal(&flat, &answers);
                        println!("{}", serde_json::to_string_pretty(&submission)?);
                    }
                    return Ok(());
                }
                Progress::Moved(next) => {
                    debug!("advanced from section {index} to {next}");
                    lines.push(format!("- Section {index}: {title}"));
                }
                Progress::Stayed => {
                    lines.push(format!("- Section {index}: {title}"));
                    lines.push("- **Stuck**: no valid transition".to_string());
                    self.renderer.render(&lines.join("\n"))?;
                    return Ok(());
                }
            }
        }
        bail!("walk did not terminate after {max_steps} steps (branching loop?)");
    }
}

fn load_persisted(path: &Path) -> Result<Template> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let persisted: PersistedTemplate = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid persisted template in {}", path.display()))?;
    Ok(persisted.into_template())
}

fn load_answers(path: &Path) -> Result<PersonalAnswers> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let entries: std::collections::BTreeMap<String, AnswerValue> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid answers file {}", path.display()))?;

    let mut answers = PersonalAnswers::new();
    for (key, value) in entries {
        let id = key
            .parse::<i64>()
            .with_context(|| format!("Answer key '{key}' is not a question id"))?;
        answers.insert(id, value);
    }
    Ok(answers)
}

fn emit_json<T: serde::Serialize>(output: Option<&Path>, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}
