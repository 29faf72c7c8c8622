//! End-to-end walks through grouped templates.

mod common;

use common::*;
use quill_core::answers::{derived_selection, write_selection};
use quill_core::grouping::group_template;
use quill_core::models::{AnswerValue, NextAction, PersonalAnswers};
use quill_core::navigation::{get_next_step, NavigationEngine, Progress};

#[test]
fn full_walk_with_branching_and_grouped_answers() {
    // Section 0: "Attending?" with Yes → continue, No → submit.
    // Section 1: a grouped pair of schedule questions.
    let attending = choice_question(
        10,
        0,
        vec![
            branching_option("Yes", NextAction::Continue, None),
            branching_option("No", NextAction::Submit, None),
        ],
    );
    let flat = template(vec![
        section(0, vec![attending]),
        section(1, vec![schedule_question(20, 0, 301), schedule_question(21, 1, 302)]),
    ]);
    let grouped = group_template(&flat);

    // The schedule pair collapsed into one multi-select.
    assert_eq!(grouped.sections[1].questions.len(), 1);
    let multi = &grouped.sections[1].questions[0];

    let mut engine = NavigationEngine::new();
    let mut answers = PersonalAnswers::new();

    // Unanswered: the control reads "Next".
    assert_eq!(
        get_next_step(&grouped, 0, &answers).action,
        NextAction::Continue
    );

    // Answer "No": the control flips to "Submit" while still on section 0.
    answers.insert(10, AnswerValue::Text("No".to_string()));
    assert_eq!(
        get_next_step(&grouped, 0, &answers).action,
        NextAction::Submit
    );
    assert_eq!(engine.advance(&grouped, &answers), Progress::Submitted);
    assert_eq!(engine.current_section_index(), 0);

    // Answer "Yes" instead and move on.
    answers.insert(10, AnswerValue::Text("Yes".to_string()));
    assert_eq!(engine.advance(&grouped, &answers), Progress::Moved(1));
    assert_eq!(engine.history(), &[0]);

    // Select one of the two schedules and verify the write-back.
    let answers = write_selection(&answers, multi, &["301".to_string()]);
    assert_eq!(answers.get(&20), Some(&AnswerValue::Bool(true)));
    assert_eq!(answers.get(&21), Some(&AnswerValue::Bool(false)));
    assert_eq!(derived_selection(&answers, multi), vec!["301"]);

    // Last section, no default: submit.
    assert_eq!(engine.advance(&grouped, &answers), Progress::Submitted);

    // And back.
    assert!(engine.retreat());
    assert_eq!(engine.current_section_index(), 0);
}

#[test]
fn branch_jump_and_exact_reversal() {
    let jumper = choice_question(
        10,
        0,
        vec![branching_option("Skip ahead", NextAction::GoToSection, Some(2))],
    );
    let t = template(vec![
        section(0, vec![jumper]),
        section(1, vec![]),
        section(2, vec![]),
        section(3, vec![]),
    ]);

    let mut answers = PersonalAnswers::new();
    answers.insert(10, AnswerValue::Text("Skip ahead".to_string()));

    let mut engine = NavigationEngine::new();
    assert_eq!(engine.advance(&t, &answers), Progress::Moved(2));
    assert_eq!(engine.advance(&t, &PersonalAnswers::new()), Progress::Moved(3));
    assert_eq!(engine.history(), &[0, 2]);

    assert!(engine.retreat());
    assert_eq!(engine.current_section_index(), 2);
    assert!(engine.retreat());
    // The jump reverses to 0, not 1.
    assert_eq!(engine.current_section_index(), 0);
}

#[test]
fn misconfigured_template_degrades_to_document_order() {
    // A broken jump target and a broken section default.
    let broken = choice_question(
        10,
        0,
        vec![branching_option("Go", NextAction::GoToSection, Some(42))],
    );
    let mut s0 = section(0, vec![broken]);
    s0.default_next_action = Some(NextAction::GoToSection);
    s0.default_target_section_index = Some(-3);
    let t = template(vec![s0, section(1, vec![])]);

    let mut answers = PersonalAnswers::new();
    answers.insert(10, AnswerValue::Text("Go".to_string()));

    let mut engine = NavigationEngine::new();
    // The broken branch is not followed and does not panic.
    assert_eq!(engine.advance(&t, &answers), Progress::Stayed);
    // Without the poisoned answer the broken default is equally inert.
    assert_eq!(engine.advance(&t, &PersonalAnswers::new()), Progress::Stayed);
    assert_eq!(engine.current_section_index(), 0);
}
