//! Answer containers and the answer value union.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::QuestionId;

/// Reserved member key for group-level (non-member-specific) answers.
pub const COMMON_MEMBER: &str = "COMMON";

/// The value of a single answer.
///
/// The question's [`crate::models::InputType`] is the discriminant:
/// free-text kinds carry [`Text`](AnswerValue::Text), numeric kinds
/// [`Number`](AnswerValue::Number), boolean-valued kinds
/// [`Bool`](AnswerValue::Bool), and grouped schedule questions expose
/// [`Selection`](AnswerValue::Selection) of selected schedule ids even
/// though storage is one boolean per underlying flat question. Absence of
/// an answer is absence from the map, not a variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Boolean answer (toggles and attendance checks)
    Bool(bool),

    /// Numeric answer
    Number(f64),

    /// Multi-select answer: chosen ids or labels, in display order
    Selection(Vec<String>),

    /// Free-text or single-choice answer
    Text(String),
}

impl AnswerValue {
    /// Borrow the text content, if this is a text answer.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean content, if this is a boolean answer.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnswerValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the selection content, if this is a multi-select answer.
    pub fn as_selection(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Selection(items) => Some(items),
            _ => None,
        }
    }

    /// True for answers that carry no information (empty text or empty
    /// selection). Empty answers never produce a branching signal.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(s) => s.is_empty(),
            AnswerValue::Selection(items) => items.is_empty(),
            AnswerValue::Bool(_) | AnswerValue::Number(_) => false,
        }
    }

    /// Submission-payload encoding of this value.
    ///
    /// Booleans become literal `"true"`/`"false"`; numbers their decimal
    /// form; selections their JSON array encoding; text passes through.
    pub fn to_wire_string(&self) -> String {
        match self {
            AnswerValue::Bool(b) => b.to_string(),
            AnswerValue::Number(n) => n.to_string(),
            AnswerValue::Selection(items) => {
                serde_json::to_string(items).unwrap_or_default()
            }
            AnswerValue::Text(s) => s.clone(),
        }
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Bool(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(value: Vec<String>) -> Self {
        AnswerValue::Selection(value)
    }
}

/// Answers of a single respondent: `question id → value`.
pub type PersonalAnswers = BTreeMap<QuestionId, AnswerValue>;

/// Answers of a group: `member name → question id → value`, with the
/// reserved [`COMMON_MEMBER`] bucket for group-level answers.
pub type GroupAnswers = BTreeMap<String, PersonalAnswers>;
