//! Identity helpers for templates, sections, questions, and schedules.
//!
//! The backend is the source of truth for identity: real ids are positive
//! and assigned on first save. Before that, the engine hands out
//! process-local temporary ids so that freshly split sub-questions stay
//! addressable. Temporary ids are negative (they can never collide with a
//! backend id) and are unstable across reloads.

use std::sync::atomic::{AtomicI64, Ordering};

/// Identifier of a template.
pub type TemplateId = i64;

/// Identifier of a section within a template.
pub type SectionId = i64;

/// Identifier of a question.
pub type QuestionId = i64;

/// Identifier of a schedule.
pub type ScheduleId = i64;

static NEXT_TEMP_ID: AtomicI64 = AtomicI64::new(-1);

/// Allocates a fresh process-local temporary id.
///
/// Returned values are strictly negative and never repeat within a process.
pub fn next_temp_id() -> QuestionId {
    NEXT_TEMP_ID.fetch_sub(1, Ordering::Relaxed)
}

/// Returns true for process-local temporary ids.
pub fn is_temp_id(id: QuestionId) -> bool {
    id < 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_ids_are_negative_and_unique() {
        let a = next_temp_id();
        let b = next_temp_id();
        assert!(is_temp_id(a));
        assert!(is_temp_id(b));
        assert_ne!(a, b);
    }

    #[test]
    fn backend_ids_are_not_temporary() {
        assert!(!is_temp_id(1));
        assert!(!is_temp_id(0));
    }
}
