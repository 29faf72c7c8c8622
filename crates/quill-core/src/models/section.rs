//! Section model, navigation actions, and choice options.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Question, SectionId};

/// What happens after a section is answered (or when a branching option
/// fires).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NextAction {
    /// Move to the following section (or an explicit target)
    Continue,

    /// Jump to a specific section index
    GoToSection,

    /// Finish the questionnaire
    Submit,
}

impl FromStr for NextAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CONTINUE" => Ok(NextAction::Continue),
            "GO_TO_SECTION" | "GOTOSECTION" => Ok(NextAction::GoToSection),
            "SUBMIT" => Ok(NextAction::Submit),
            _ => Err(format!("Invalid next action: {s}")),
        }
    }
}

impl NextAction {
    /// Wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            NextAction::Continue => "CONTINUE",
            NextAction::GoToSection => "GO_TO_SECTION",
            NextAction::Submit => "SUBMIT",
        }
    }
}

/// A selectable option on a choice question.
///
/// An option without a `next_action` defers navigation to the section
/// default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    /// Display label; also the stored answer value when selected
    pub label: String,

    /// Navigation override fired when this option is the answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action: Option<NextAction>,

    /// Jump target for `GO_TO_SECTION` (raw; range-checked at use)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_section_index: Option<i64>,
}

impl ChoiceOption {
    /// Plain option with no navigation override.
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            next_action: None,
            target_section_index: None,
        }
    }
}

/// Represents one page of the questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Unique identifier for the section
    pub id: SectionId,

    /// Title of the section
    pub title: String,

    /// Detailed description shown at the top of the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Position of the section within the template (0-indexed)
    pub order_index: u32,

    /// Fallback navigation when no question-level branching rule fires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_next_action: Option<NextAction>,

    /// Jump target for a `GO_TO_SECTION` default (raw; range-checked at use)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_target_section_index: Option<i64>,

    /// Questions on this page, sorted by `order_index`
    #[serde(default)]
    pub questions: Vec<Question>,
}
