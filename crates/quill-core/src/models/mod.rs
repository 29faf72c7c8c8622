//! Data models for questionnaire templates and answers.
//!
//! This module contains the core domain types: the [`Template`] /
//! [`Section`] / [`Question`] tree, the [`AnswerValue`] union, and identity
//! helpers. Display implementations live in [`crate::display::models`] to
//! keep data structures and presentation separated.
//!
//! The tree is a *value*: engine operations never mutate a shared template
//! in place. Every transform (grouping, splitting, answer write-back) takes
//! a tree and returns a new one, so callers may hand the same template to
//! any number of operations without coordination.
//!
//! Two shapes of the same question list flow through these types:
//!
//! - **Flat**: one schedule per question, `linked_schedule_id` /
//!   `linked_schedule_date` populated, `linked_schedules` empty. This is
//!   the persisted shape.
//! - **Grouped**: schedule-linked questions collapsed into one question per
//!   run, with `linked_schedules` carrying the bundled entries. This is the
//!   editing/viewing shape produced by [`crate::grouping`].

pub mod answer;
pub mod ids;
pub mod question;
pub mod section;
pub mod template;


pub use answer::{AnswerValue, GroupAnswers, PersonalAnswers, COMMON_MEMBER};
pub use ids::{next_temp_id, QuestionId, ScheduleId, SectionId, TemplateId};
pub use question::{InputType, LinkedSchedule, Question};
pub use section::{ChoiceOption, NextAction, Section};
pub use template::{Template, TemplateKind};
