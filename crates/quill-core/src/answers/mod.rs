//! Bridges per-schedule boolean storage to array-of-ids editing values.
//!
//! A grouped schedule question stores one boolean per underlying flat
//! question, but presents a single multi-select whose value is the array
//! of selected schedule ids. [`derived_selection`] projects booleans into
//! that array; [`write_selection`] decomposes an edited array back into
//! booleans, rewriting *every* underlying answer so that a deselection
//! explicitly clears its boolean instead of leaving it stale.
//!
//! All functions are copy-on-write: inputs are never mutated.

use crate::models::{
    AnswerValue, GroupAnswers, PersonalAnswers, Question, COMMON_MEMBER,
};

#[cfg(test)]
mod tests;

/// Selected schedule ids for a grouped question, in schedule-list order.
///
/// A schedule entry is selected when the answer for its underlying flat
/// question is boolean `true`. Entries without a persisted `question_id`
/// can have no stored answer and are never selected.
pub fn derived_selection(answers: &PersonalAnswers, question: &Question) -> Vec<String> {
    question
        .linked_schedules
        .iter()
        .filter(|s| {
            s.question_id
                .and_then(|qid| answers.get(&qid))
                .and_then(AnswerValue::as_bool)
                .unwrap_or(false)
        })
        .map(|s| s.id.to_string())
        .collect()
}

/// The editing value for a grouped question: its derived selection as an
/// [`AnswerValue::Selection`].
pub fn derived_value(answers: &PersonalAnswers, question: &Question) -> AnswerValue {
    AnswerValue::Selection(derived_selection(answers, question))
}

/// Writes an edited selection back onto the underlying flat questions.
///
/// Every schedule entry with a persisted `question_id` gets its boolean
/// rewritten: `true` when its id is in `selected`, `false` otherwise.
/// Returns a new answer map; the input is untouched.
pub fn write_selection(
    answers: &PersonalAnswers,
    question: &Question,
    selected: &[String],
) -> PersonalAnswers {
    let mut next = answers.clone();
    for schedule in &question.linked_schedules {
        if let Some(qid) = schedule.question_id {
            let chosen = selected.contains(&schedule.id.to_string());
            next.insert(qid, AnswerValue::Bool(chosen));
        }
    }
    next
}

/// Projects grouped values onto every answered target of a group template.
///
/// Iterates the members plus the [`COMMON_MEMBER`] bucket, skipping
/// targets with no existing answer bucket, and inserts the derived
/// selection under the grouped question's id in each. Returns a new tree.
pub fn aggregate_group(
    answers: &GroupAnswers,
    members: &[String],
    question: &Question,
) -> GroupAnswers {
    let mut next = answers.clone();
    for target in targets(members) {
        if let Some(bucket) = answers.get(&target) {
            let derived = derived_value(bucket, question);
            let mut bucket = bucket.clone();
            bucket.insert(question.id, derived);
            next.insert(target, bucket);
        }
    }
    next
}

/// Writes a grouped selection for one target of a group template.
///
/// Targets without an existing answer bucket are skipped, mirroring the
/// derivation side. Returns a new tree; the input is untouched.
pub fn write_group_selection(
    answers: &GroupAnswers,
    target: &str,
    question: &Question,
    selected: &[String],
) -> GroupAnswers {
    let Some(bucket) = answers.get(target) else {
        return answers.clone();
    };
    let mut next = answers.clone();
    next.insert(target.to_string(), write_selection(bucket, question, selected));
    next
}

/// Selected ids for one target of a group template; empty when the target
/// has no answer bucket.
pub fn derived_group_selection(
    answers: &GroupAnswers,
    target: &str,
    question: &Question,
) -> Vec<String> {
    answers
        .get(target)
        .map(|bucket| derived_selection(bucket, question))
        .unwrap_or_default()
}

fn targets(members: &[String]) -> impl Iterator<Item = String> + '_ {
    members
        .iter()
        .cloned()
        .chain(std::iter::once(COMMON_MEMBER.to_string()))
}
