//! Core library for the Quill branching questionnaire engine.
//!
//! This crate models multi-section questionnaire templates and implements
//! the three transforms the surrounding application is built on:
//!
//! - **Grouping** ([`grouping`]): the lossless, order-sensitive
//!   bidirectional transform between the flat persisted question list and
//!   the grouped editing shape, where runs of schedule-linked questions
//!   collapse into one multi-select control.
//! - **Answer aggregation** ([`answers`]): projecting per-schedule boolean
//!   answers into a single array-of-ids value and decomposing edits back,
//!   copy-on-write.
//! - **Navigation** ([`navigation`]): the section state machine that
//!   resolves the next section (or submission) from per-question branching
//!   rules with priority and fallback tiers, and keeps the history needed
//!   to reverse non-adjacent jumps.
//!
//! The engine is synchronous and pure: every operation takes immutable
//! inputs and returns new object graphs. IO lives behind the collaborator
//! traits in [`wire`]; [`autosave`] adds the deep-equality gate those
//! newly-allocated-but-equal graphs make necessary.
//!
//! Malformed template content never fails: unparsable option encodings,
//! dangling section targets and answers for deleted questions all degrade
//! to "continue in document order" so a partially migrated template cannot
//! strand a respondent.
//!
//! # Quick Start
//!
//! ```rust
//! use quill_core::grouping::group_template;
//! use quill_core::models::PersonalAnswers;
//! use quill_core::navigation::{NavigationEngine, Progress};
//! use quill_core::wire::PersistedTemplate;
//!
//! # fn example(json: &str) -> Result<(), Box<dyn std::error::Error>> {
//! // Load the persisted flat template and group it for editing.
//! let persisted: PersistedTemplate = serde_json::from_str(json)?;
//! let template = group_template(&persisted.into_template());
//!
//! // Walk it.
//! let answers = PersonalAnswers::new();
//! let mut engine = NavigationEngine::new();
//! match engine.advance(&template, &answers) {
//!     Progress::Submitted => println!("done"),
//!     Progress::Moved(index) => println!("now on section {index}"),
//!     Progress::Stayed => println!("nowhere to go"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod answers;
pub mod autosave;
pub mod display;
pub mod error;
pub mod grouping;
pub mod models;
pub mod navigation;
pub mod wire;

// Re-export commonly used types
pub use autosave::Autosave;
pub use error::{EngineError, Result};
pub use models::{
    AnswerValue, GroupAnswers, InputType, LinkedSchedule, NextAction, PersonalAnswers,
    Question, Section, Template, TemplateKind, COMMON_MEMBER,
};
pub use navigation::{get_next_step, NavigationEngine, NextStep, Progress};
pub use wire::{PersistedTemplate, Submission};
