//! Tests for the answer aggregator.

use super::*;
use crate::models::{InputType, LinkedSchedule};

fn grouped_question(entries: &[(i64, i64)]) -> Question {
    Question {
        id: 50,
        label: "Which services will you attend?".to_string(),
        input_type: InputType::ScheduleAttendance,
        required: false,
        order_index: 0,
        member_specific: false,
        options: vec![],
        linked_schedules: entries
            .iter()
            .map(|(schedule_id, question_id)| LinkedSchedule {
                id: *schedule_id,
                title: format!("Schedule {schedule_id}"),
                start_date: None,
                question_id: Some(*question_id),
            })
            .collect(),
        linked_schedule_id: None,
        linked_schedule_date: None,
        meta_json: None,
    }
}

#[test]
fn derived_selection_follows_schedule_order() {
    let q = grouped_question(&[(101, 1), (102, 2), (103, 3)]);
    let mut answers = PersonalAnswers::new();
    // Insertion order deliberately scrambled.
    answers.insert(3, AnswerValue::Bool(true));
    answers.insert(1, AnswerValue::Bool(true));
    answers.insert(2, AnswerValue::Bool(false));

    assert_eq!(derived_selection(&answers, &q), vec!["101", "103"]);
}

#[test]
fn missing_and_non_boolean_answers_are_unselected() {
    let q = grouped_question(&[(101, 1), (102, 2)]);
    let mut answers = PersonalAnswers::new();
    answers.insert(2, AnswerValue::Text("yes".to_string()));

    assert!(derived_selection(&answers, &q).is_empty());
}

#[test]
fn unsaved_entries_are_never_selected() {
    let mut q = grouped_question(&[(101, 1)]);
    q.linked_schedules.push(LinkedSchedule {
        id: 102,
        title: "Unsaved".to_string(),
        start_date: None,
        question_id: None,
    });
    let mut answers = PersonalAnswers::new();
    answers.insert(1, AnswerValue::Bool(true));

    assert_eq!(derived_selection(&answers, &q), vec!["101"]);
}

#[test]
fn write_back_clears_deselected_schedules() {
    let q = grouped_question(&[(101, 1), (102, 2), (103, 3)]);
    let mut answers = PersonalAnswers::new();
    answers.insert(1, AnswerValue::Bool(true));
    answers.insert(3, AnswerValue::Bool(true));

    let next = write_selection(&answers, &q, &["101".to_string()]);

    assert_eq!(next.get(&1), Some(&AnswerValue::Bool(true)));
    // Deselection writes an explicit false, never removes the entry.
    assert_eq!(next.get(&3), Some(&AnswerValue::Bool(false)));
    // Untouched schedules are rewritten too.
    assert_eq!(next.get(&2), Some(&AnswerValue::Bool(false)));
    // The input map is untouched.
    assert_eq!(answers.get(&3), Some(&AnswerValue::Bool(true)));
    assert!(!answers.contains_key(&2));
}

#[test]
fn write_back_leaves_unrelated_answers_alone() {
    let q = grouped_question(&[(101, 1)]);
    let mut answers = PersonalAnswers::new();
    answers.insert(77, AnswerValue::Text("keep me".to_string()));

    let next = write_selection(&answers, &q, &[]);
    assert_eq!(next.get(&77), Some(&AnswerValue::Text("keep me".to_string())));
    assert_eq!(next.get(&1), Some(&AnswerValue::Bool(false)));
}

#[test]
fn group_write_skips_missing_buckets() {
    let q = grouped_question(&[(101, 1)]);
    let mut answers = GroupAnswers::new();
    answers.insert("Alice".to_string(), PersonalAnswers::new());

    let next = write_group_selection(&answers, "Bob", &q, &["101".to_string()]);
    assert!(!next.contains_key("Bob"));

    let next = write_group_selection(&answers, "Alice", &q, &["101".to_string()]);
    assert_eq!(
        next["Alice"].get(&1),
        Some(&AnswerValue::Bool(true))
    );
    // Original tree untouched.
    assert!(answers["Alice"].is_empty());
}

#[test]
fn aggregate_group_derives_for_members_and_common() {
    let q = grouped_question(&[(101, 1), (102, 2)]);
    let mut answers = GroupAnswers::new();
    let mut alice = PersonalAnswers::new();
    alice.insert(1, AnswerValue::Bool(true));
    answers.insert("Alice".to_string(), alice);
    let mut common = PersonalAnswers::new();
    common.insert(2, AnswerValue::Bool(true));
    answers.insert(COMMON_MEMBER.to_string(), common);

    let members = vec!["Alice".to_string(), "Bob".to_string()];
    let derived = aggregate_group(&answers, &members, &q);

    assert_eq!(
        derived["Alice"].get(&50),
        Some(&AnswerValue::Selection(vec!["101".to_string()]))
    );
    assert_eq!(
        derived[COMMON_MEMBER].get(&50),
        Some(&AnswerValue::Selection(vec!["102".to_string()]))
    );
    // Bob has no bucket and none is invented.
    assert!(!derived.contains_key("Bob"));
}

#[test]
fn derived_group_selection_is_empty_for_missing_target() {
    let q = grouped_question(&[(101, 1)]);
    let answers = GroupAnswers::new();
    assert!(derived_group_selection(&answers, "Alice", &q).is_empty());
}
