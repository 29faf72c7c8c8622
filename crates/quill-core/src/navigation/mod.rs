//! Section navigation state machine.
//!
//! States are section indices `0..N-1` plus a virtual terminal "submitted"
//! state. [`get_next_step`] is the pure decision function, evaluated on
//! every render so the advance control can read "Next" or "Submit";
//! [`NavigationEngine`] holds the mutable position and back-navigation
//! history.
//!
//! Decision priority, highest first:
//!
//! 1. Question-level branching: the first answered choice question (in
//!    stored order; common questions only on group templates) whose
//!    matching option defines a navigation override.
//! 2. The section's configured default, with one normalization: a
//!    `Continue` default on the last section with no explicit target
//!    resolves to `Submit` rather than a step past the end.
//! 3. Structural default: `Submit` on the last section, `Continue`
//!    otherwise.
//!
//! Malformed navigation data never throws. A target outside `[0, N)` is
//! simply not followed, and an answer referencing a deleted question
//! produces no branching signal; the respondent always keeps moving in
//! document order.

use crate::models::{
    AnswerValue, ChoiceOption, NextAction, PersonalAnswers, Question, Template,
};


/// The resolved decision for the current section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextStep {
    /// What the advance control will do
    pub action: NextAction,

    /// Explicit jump target, when one is configured and non-negative
    pub target_index: Option<usize>,
}

impl NextStep {
    fn submit() -> Self {
        Self {
            action: NextAction::Submit,
            target_index: None,
        }
    }
}

/// Outcome of an [`NavigationEngine::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The questionnaire is complete; the caller should submit. The
    /// engine's position is unchanged.
    Submitted,

    /// Moved to the contained section index.
    Moved(usize),

    /// No valid transition existed; position unchanged.
    Stayed,
}

/// Computes the next step for `current_index`, given the current answers.
///
/// Pure: no state is read or written besides the arguments. For group
/// templates, `answers` should be the COMMON bucket; member-specific
/// questions never drive branching there.
pub fn get_next_step(
    template: &Template,
    current_index: usize,
    answers: &PersonalAnswers,
) -> NextStep {
    let count = template.sections.len();
    let Some(section) = template.sections.get(current_index) else {
        // No sections, or an index beyond the template: submitting is the
        // only possible action.
        return NextStep::submit();
    };
    let last = current_index + 1 >= count;

    // Question-level branching wins over everything else.
    if let Some(step) = branching_step(&section.questions, answers, template.is_group()) {
        return step;
    }

    // Section default, normalizing "continue past the end" to Submit.
    if let Some(action) = section.default_next_action {
        let target = to_index(section.default_target_section_index);
        if action == NextAction::Continue && last && target.is_none() {
            return NextStep::submit();
        }
        return NextStep {
            action,
            target_index: target,
        };
    }

    // Structural default.
    if last {
        NextStep::submit()
    } else {
        NextStep {
            action: NextAction::Continue,
            target_index: None,
        }
    }
}

/// The override from the first answered choice question, if any.
///
/// Questions are scanned in stored order. On group templates only common
/// (non-member-specific) questions participate. The first one with a
/// non-empty answer owns the decision: if its matching option defines a
/// `next_action` that override is returned, otherwise scanning stops and
/// the section default applies.
fn branching_step(
    questions: &[Question],
    answers: &PersonalAnswers,
    is_group: bool,
) -> Option<NextStep> {
    for q in questions {
        if !q.input_type.is_choice() || (is_group && q.member_specific) {
            continue;
        }
        let Some(answer) = answers.get(&q.id).filter(|a| !a.is_empty()) else {
            continue;
        };
        let option = matching_option(&q.options, answer)?;
        let action = option.next_action?;
        return Some(NextStep {
            action,
            target_index: to_index(option.target_section_index),
        });
    }
    None
}

/// Finds the option addressed by an answer value.
///
/// Scalar answers match by exact label equality. Multi-select answers
/// match the first option, in stored option order, whose label is among
/// the selected values and which carries a navigation override.
fn matching_option<'a>(
    options: &'a [ChoiceOption],
    answer: &AnswerValue,
) -> Option<&'a ChoiceOption> {
    match answer {
        AnswerValue::Text(label) => options.iter().find(|o| o.label == *label),
        AnswerValue::Selection(labels) => options
            .iter()
            .find(|o| o.next_action.is_some() && labels.contains(&o.label)),
        _ => None,
    }
}

fn to_index(raw: Option<i64>) -> Option<usize> {
    raw.and_then(|i| usize::try_from(i).ok())
}

/// Mutable navigation state: the current section plus the jump history
/// needed to reverse non-adjacent transitions.
#[derive(Debug, Clone, Default)]
pub struct NavigationEngine {
    current_section_index: usize,
    history: Vec<usize>,
}

impl NavigationEngine {
    /// Starts at section 0 with empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes at a saved section index with no history, e.g. when a
    /// respondent reloads a partially answered questionnaire. Retreating
    /// from here falls back to plain decrements.
    pub fn resume_at(index: usize) -> Self {
        Self {
            current_section_index: index,
            history: Vec::new(),
        }
    }

    /// The section the respondent is currently on.
    pub fn current_section_index(&self) -> usize {
        self.current_section_index
    }

    /// Previously visited section indices, oldest first.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Executes the "Next/Submit" control.
    ///
    /// Computes [`get_next_step`]; a `Submit` decision performs no state
    /// change. Otherwise a concrete next index is resolved (`GoToSection`
    /// requires an in-range target; `Continue` takes its target when given,
    /// else the following section) and the current index is pushed onto
    /// the history. When no valid next index exists, being on the last
    /// section is an implicit submit so a misconfigured template cannot
    /// strand the respondent; anywhere else it is a no-op.
    pub fn advance(&mut self, template: &Template, answers: &PersonalAnswers) -> Progress {
        let step = get_next_step(template, self.current_section_index, answers);
        let count = template.sections.len();
        let next = match step.action {
            NextAction::Submit => return Progress::Submitted,
            NextAction::GoToSection => step.target_index.filter(|i| *i < count),
            NextAction::Continue => match step.target_index {
                Some(i) if i < count => Some(i),
                Some(_) => None,
                None => {
                    let following = self.current_section_index + 1;
                    (following < count).then_some(following)
                }
            },
        };

        match next {
            Some(index) => {
                self.history.push(self.current_section_index);
                self.current_section_index = index;
                Progress::Moved(index)
            }
            None if self.current_section_index + 1 >= count => Progress::Submitted,
            None => Progress::Stayed,
        }
    }

    /// Executes the "Previous" control.
    ///
    /// Pops the history when possible, exactly reversing whatever jump was
    /// taken (including non-adjacent ones); falls back to a plain
    /// decrement, and is a no-op on the first section. Returns whether the
    /// position changed.
    pub fn retreat(&mut self) -> bool {
        if let Some(previous) = self.history.pop() {
            self.current_section_index = previous;
            true
        } else if self.current_section_index > 0 {
            self.current_section_index -= 1;
            true
        } else {
            false
        }
    }

    /// Returns to section 0 and clears the history.
    pub fn reset(&mut self) {
        self.current_section_index = 0;
        self.history.clear();
    }
}
