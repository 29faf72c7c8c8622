//! Bidirectional transform between flat and grouped question lists.
//!
//! The persisted shape is flat: one schedule per question, identified by
//! `linked_schedule_id`. The editing/viewing shape collapses adjacent
//! schedule-linked questions of the same kind into one grouped question
//! whose `linked_schedules` carries every bundled entry, so a renderer can
//! show a single "pick any of N upcoming events" multi-select.
//!
//! [`group_questions`] is the forward transform, [`split_questions`] the
//! backward one. For any list produced by grouping and not hand-edited,
//! `split(group(flat))` reproduces `flat` up to temporary-id substitution
//! and sequential renumbering of `order_index`.
//!
//! Member-specific schedule questions never merge with others: a
//! respondent table renders one control per member per question, so each
//! stays standalone (with a single-element `linked_schedules` so the
//! renderer still sees the schedule metadata).

use log::{debug, warn};

use crate::models::{next_temp_id, LinkedSchedule, Question, Section, Template};


/// Forward transform: flat question list to grouped editing shape.
///
/// Questions are sorted by `order_index` (array position breaks ties) and
/// folded left to right. A schedule-linked, non-member-specific question
/// joins the open group when the group has the same input type and is
/// itself non-member-specific; anything else closes the group. Non-schedule
/// questions pass through unchanged.
pub fn group_questions(questions: &[Question]) -> Vec<Question> {
    let mut sorted: Vec<&Question> = questions.iter().collect();
    sorted.sort_by_key(|q| q.order_index);

    sorted.into_iter().fold(Vec::new(), |mut grouped, q| {
        let entry = schedule_entry(q);
        match entry {
            Some(entry) if !q.member_specific => {
                if let Some(open) = grouped.last_mut() {
                    if open.is_grouped()
                        && open.input_type == q.input_type
                        && !open.member_specific
                    {
                        open.linked_schedules.push(entry);
                        return grouped;
                    }
                }
                grouped.push(grouped_seed(q, entry));
            }
            // Member-specific schedule questions stay standalone, one
            // control per member per question.
            Some(entry) => grouped.push(grouped_seed(q, entry)),
            None => grouped.push(q.clone()),
        }
        grouped
    })
}

/// Backward transform: grouped editing shape back to the flat persisted
/// shape ("split").
///
/// Every grouped schedule question emits one flat question per
/// `LinkedSchedule` entry, reusing the entry's `question_id` when present
/// and allocating a fresh temporary id otherwise. The flat label is the
/// grouped question's label; the schedule title is secondary metadata and
/// is re-encoded into the side-channel field for round-trip. Output
/// `order_index` values are renumbered sequentially.
pub fn split_questions(questions: &[Question]) -> Vec<Question> {
    let mut sorted: Vec<&Question> = questions.iter().collect();
    sorted.sort_by_key(|q| q.order_index);

    let mut flat = Vec::new();
    for q in sorted {
        if q.is_grouped() {
            for entry in &q.linked_schedules {
                flat.push(Question {
                    id: entry.question_id.unwrap_or_else(next_temp_id),
                    label: q.label.clone(),
                    input_type: q.input_type,
                    required: q.required,
                    order_index: flat.len() as u32,
                    member_specific: q.member_specific,
                    options: Vec::new(),
                    linked_schedules: Vec::new(),
                    linked_schedule_id: Some(entry.id),
                    linked_schedule_date: entry.start_date,
                    meta_json: Some(encode_title(&entry.title)),
                });
            }
        } else {
            flat.push(Question {
                order_index: flat.len() as u32,
                ..q.clone()
            });
        }
    }
    flat
}

/// Applies [`group_questions`] to every section, copy-on-write.
pub fn group_template(template: &Template) -> Template {
    map_sections(template, group_questions)
}

/// Applies [`split_questions`] to every section, copy-on-write.
pub fn flatten_template(template: &Template) -> Template {
    map_sections(template, split_questions)
}

fn map_sections(template: &Template, f: fn(&[Question]) -> Vec<Question>) -> Template {
    let sorted = template.sorted();
    let sections = sorted
        .sections
        .into_iter()
        .map(|s| Section {
            questions: f(&s.questions),
            ..s
        })
        .collect();
    Template { sections, ..sorted }
}

/// The [`LinkedSchedule`] entry a flat question contributes, or `None`
/// when the question does not participate in grouping.
fn schedule_entry(q: &Question) -> Option<LinkedSchedule> {
    if !q.input_type.is_schedule() {
        return None;
    }
    let schedule_id = q.linked_schedule_id?;
    Some(LinkedSchedule {
        id: schedule_id,
        title: recovered_title(q),
        start_date: q.linked_schedule_date,
        question_id: Some(q.id),
    })
}

/// Seeds a new grouped question from its first flat member.
fn grouped_seed(q: &Question, entry: LinkedSchedule) -> Question {
    Question {
        linked_schedules: vec![entry],
        linked_schedule_id: None,
        linked_schedule_date: None,
        meta_json: None,
        ..q.clone()
    }
}

/// Best-effort recovery of the schedule title from the legacy side-channel.
///
/// Historical templates store the title inside the serialized metadata
/// field, either as a bare JSON string or as an object with a `title` key
/// (the field is overloaded with other keys in some templates). Any decode
/// failure falls back to the literal label; this must never fail.
fn recovered_title(q: &Question) -> String {
    if let Some(raw) = &q.meta_json {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::String(title)) => return title,
            Ok(serde_json::Value::Object(map)) => {
                if let Some(serde_json::Value::String(title)) = map.get("title") {
                    return title.clone();
                }
                debug!(
                    "question {}: side-channel object has no title, using label",
                    q.id
                );
            }
            Ok(_) => debug!(
                "question {}: unexpected side-channel shape, using label",
                q.id
            ),
            Err(e) => warn!(
                "question {}: unparsable side-channel metadata ({e}), using label",
                q.id
            ),
        }
    }
    q.label.clone()
}

/// Current side-channel encoding of a schedule title.
fn encode_title(title: &str) -> String {
    serde_json::json!({ "title": title }).to_string()
}
