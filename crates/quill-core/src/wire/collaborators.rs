//! Contracts for the engine's external collaborators.
//!
//! The engine never performs IO itself; hosts implement these traits over
//! whatever transport they use. All three are synchronous, matching the
//! engine's execution model; hosts with async transports block or bridge
//! at this seam.

use jiff::civil::{Date, DateTime};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::LinkedSchedule;

use super::{PersistedTemplate, Submission};

/// Persistence boundary for templates.
pub trait TemplateStore {
    /// Persists a flat snapshot and returns the canonical saved form,
    /// with server-assigned ids replacing any temporary ones.
    fn save(&mut self, snapshot: &PersistedTemplate) -> Result<PersistedTemplate>;
}

/// A schedule offered for attachment to a grouped question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCandidate {
    pub schedule_id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime>,
}

impl ScheduleCandidate {
    /// Converts into a not-yet-persisted [`LinkedSchedule`] entry.
    pub fn into_linked_schedule(self) -> LinkedSchedule {
        LinkedSchedule {
            id: self.schedule_id,
            title: self.title,
            start_date: self.start_date,
            question_id: None,
        }
    }
}

/// Lookup of candidate schedules for the grouping UI.
pub trait ScheduleLookup {
    /// Schedules taking place on the given date.
    fn schedules_on(&self, date: Date) -> Result<Vec<ScheduleCandidate>>;
}

/// Receiver of completed answer submissions.
pub trait SubmissionSink {
    fn submit(&mut self, submission: &Submission) -> Result<()>;
}
