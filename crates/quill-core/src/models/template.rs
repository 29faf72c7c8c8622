//! Template model definition and related functionality.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Section, TemplateId};

/// Whether a template is answered once per respondent or once per group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateKind {
    /// One respondent, one answer set
    #[default]
    Personal,

    /// A group of members plus a COMMON bucket for group-level answers
    Group,
}

impl FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PERSONAL" => Ok(TemplateKind::Personal),
            "GROUP" => Ok(TemplateKind::Group),
            _ => Err(format!("Invalid template kind: {s}")),
        }
    }
}

impl TemplateKind {
    /// Wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Personal => "PERSONAL",
            TemplateKind::Group => "GROUP",
        }
    }
}

/// Represents a complete questionnaire template with its sections.
///
/// A template is always constructed from the persisted flat shape (see
/// [`crate::wire`]), grouped for editing with
/// [`crate::grouping::group_template`], and flattened again at every
/// persistence boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Unique identifier for the template
    pub id: TemplateId,

    /// Title of the template
    pub title: String,

    /// Detailed description shown to respondents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Personal or group answering model
    pub kind: TemplateKind,

    /// Whether the template currently accepts submissions
    pub is_active: bool,

    /// Ordered sections (sorted by `order_index` on load)
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Template {
    /// True for group templates, where member-specific questions are
    /// answered once per member and branching only considers common ones.
    pub fn is_group(&self) -> bool {
        self.kind == TemplateKind::Group
    }

    /// Returns a copy with sections (and their questions) sorted by
    /// `order_index`, ties broken by array position.
    pub fn sorted(&self) -> Template {
        let mut sections = self.sections.clone();
        sections.sort_by_key(|s| s.order_index);
        let sections = sections
            .into_iter()
            .map(|s| {
                let mut questions = s.questions;
                questions.sort_by_key(|q| q.order_index);
                Section { questions, ..s }
            })
            .collect();
        Template {
            sections,
            ..self.clone()
        }
    }
}
