//! JSON shapes exchanged with the outside world, and collaborator
//! contracts.
//!
//! Field names are the semantic contract; transport framing is somebody
//! else's problem. The persisted template is always the *flat* shape:
//! [`to_persisted`](template::to_persisted) flattens on the way out, and
//! loading immediately regroups for editing.

pub mod collaborators;
pub mod submission;
pub mod template;


pub use collaborators::{ScheduleCandidate, ScheduleLookup, SubmissionSink, TemplateStore};
pub use submission::{Submission, SubmissionAnswer};
pub use template::{
    to_persisted, PersistedQuestion, PersistedSection, PersistedTemplate,
};
