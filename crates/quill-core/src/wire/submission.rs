//! Answer submission payload.
//!
//! Answers are keyed by flat question id, optionally scoped to a group
//! member. Boolean-valued questions are always present with a literal
//! `"true"`/`"false"` value so that deselection stays visible, while
//! empty free-text answers are omitted entirely.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{
    AnswerValue, GroupAnswers, PersonalAnswers, Question, Template, COMMON_MEMBER,
};

/// One answered question in a submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionAnswer {
    pub question_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_member_id: Option<String>,
    pub value: String,
}

/// A complete answer submission for a template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub template_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<i64>,
    pub answers: Vec<SubmissionAnswer>,
}

impl Submission {
    /// Builds a submission from a personal answer map.
    ///
    /// The template must be in the flat shape; answers for questions no
    /// longer present in the template are dropped.
    pub fn from_personal(template: &Template, answers: &PersonalAnswers) -> Submission {
        Submission {
            template_id: template.id,
            date: None,
            cell_id: None,
            answers: collect_answers(template, answers, None),
        }
    }

    /// Builds a submission from a group answer tree. Member buckets carry
    /// their member name as `target_member_id`; the COMMON bucket omits it.
    pub fn from_group(template: &Template, answers: &GroupAnswers) -> Submission {
        let mut collected = Vec::new();
        for (member, bucket) in answers {
            let target = if member == COMMON_MEMBER {
                None
            } else {
                Some(member.clone())
            };
            collected.extend(collect_answers(template, bucket, target));
        }
        Submission {
            template_id: template.id,
            date: None,
            cell_id: None,
            answers: collected,
        }
    }

    /// Sets the submission date.
    pub fn on_date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    /// Scopes the submission to a cell.
    pub fn for_cell(mut self, cell_id: i64) -> Self {
        self.cell_id = Some(cell_id);
        self
    }
}

fn collect_answers(
    template: &Template,
    answers: &PersonalAnswers,
    target_member_id: Option<String>,
) -> Vec<SubmissionAnswer> {
    let mut out = Vec::new();
    for section in &template.sections {
        for question in &section.questions {
            if let Some(value) = encoded_value(question, answers.get(&question.id)) {
                out.push(SubmissionAnswer {
                    question_id: question.id,
                    target_member_id: target_member_id.clone(),
                    value,
                });
            }
        }
    }
    out
}

/// The wire value for one question, or `None` when the answer is omitted.
fn encoded_value(question: &Question, answer: Option<&AnswerValue>) -> Option<String> {
    if question.input_type.is_boolean_valued() {
        // Always present: an unanswered or deselected boolean is an
        // explicit "false".
        let selected = answer.and_then(AnswerValue::as_bool).unwrap_or(false);
        return Some(selected.to_string());
    }
    let answer = answer?;
    if answer.is_empty() {
        return None;
    }
    Some(answer.to_wire_string())
}
