//! Persisted flat template codec.
//!
//! The persisted shape stores choice options as a string-encoded JSON
//! array in `optionsJson`. Two encodings exist in the wild: the current
//! array of option objects, and a legacy array of bare strings where the
//! string is the label. Both are accepted; anything unparsable is logged
//! and treated as empty, never fatal.
//!
//! For schedule questions `optionsJson` is overloaded as the title
//! side-channel instead; loading stashes it verbatim into the model's
//! `meta_json` for the grouping transformer to decode.

use jiff::civil::{Date, DateTime};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::grouping::flatten_template;
use crate::models::{
    ChoiceOption, InputType, Question, Section, Template, TemplateKind,
};

/// A template as the persistence collaborator stores it: flat, with
/// string-encoded options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTemplate {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: TemplateKind,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    #[serde(default)]
    pub sections: Vec<PersistedSection>,
}

/// A persisted section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSection {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub order_index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_next_action: Option<crate::models::NextAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_target_section_index: Option<i64>,
    #[serde(default)]
    pub questions: Vec<PersistedQuestion>,
}

/// A persisted flat question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedQuestion {
    pub id: i64,
    pub label: String,
    pub input_type: InputType,
    pub required: bool,
    pub order_index: u32,
    #[serde(default)]
    pub member_specific: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_json: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_worship_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_schedule_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_schedule_date: Option<DateTime>,
}

impl PersistedTemplate {
    /// Decodes the persisted shape into the domain model, sorted and with
    /// options normalized. Malformed option encodings degrade to empty
    /// option lists; this never fails.
    pub fn into_template(self) -> Template {
        let sections = self
            .sections
            .into_iter()
            .map(PersistedSection::into_section)
            .collect();
        Template {
            id: self.id,
            title: self.title,
            description: self.description,
            kind: self.kind,
            is_active: self.is_active,
            sections,
        }
        .sorted()
    }
}

impl PersistedSection {
    fn into_section(self) -> Section {
        let questions = self
            .questions
            .into_iter()
            .map(PersistedQuestion::into_question)
            .collect();
        Section {
            id: self.id,
            title: self.title,
            description: self.description,
            order_index: self.order_index,
            default_next_action: self.default_next_action,
            default_target_section_index: self.default_target_section_index,
            questions,
        }
    }
}

impl PersistedQuestion {
    fn into_question(self) -> Question {
        let (options, meta_json) = if self.input_type.is_choice() {
            let options = self
                .options_json
                .as_deref()
                .map(|raw| parse_options(self.id, raw))
                .unwrap_or_default();
            (options, None)
        } else {
            // Non-choice questions keep the raw field as the side-channel.
            (Vec::new(), self.options_json)
        };
        Question {
            id: self.id,
            label: self.label,
            input_type: self.input_type,
            required: self.required,
            order_index: self.order_index,
            member_specific: self.member_specific,
            options,
            linked_schedules: Vec::new(),
            linked_schedule_id: self.linked_schedule_id,
            linked_schedule_date: self.linked_schedule_date,
            meta_json,
        }
    }
}

/// Encodes a template for the persistence collaborator.
///
/// The model may be in either shape; grouped questions are split back to
/// flat form here, so a grouped snapshot can never leak across the
/// persistence boundary.
pub fn to_persisted(template: &Template) -> PersistedTemplate {
    let flat = flatten_template(template);
    PersistedTemplate {
        id: flat.id,
        title: flat.title,
        description: flat.description,
        category: None,
        kind: flat.kind,
        is_active: flat.is_active,
        start_date: None,
        end_date: None,
        sections: flat.sections.into_iter().map(persist_section).collect(),
    }
}

fn persist_section(section: Section) -> PersistedSection {
    PersistedSection {
        id: section.id,
        title: section.title,
        description: section.description,
        order_index: section.order_index,
        default_next_action: section.default_next_action,
        default_target_section_index: section.default_target_section_index,
        questions: section.questions.into_iter().map(persist_question).collect(),
    }
}

fn persist_question(q: Question) -> PersistedQuestion {
    let options_json = if q.input_type.is_choice() {
        encode_options(&q.options)
    } else {
        q.meta_json
    };
    PersistedQuestion {
        id: q.id,
        label: q.label,
        input_type: q.input_type,
        required: q.required,
        order_index: q.order_index,
        member_specific: q.member_specific,
        options_json,
        sync_type: None,
        linked_worship_category: None,
        linked_schedule_id: q.linked_schedule_id,
        linked_schedule_date: q.linked_schedule_date,
    }
}

/// One entry of an `optionsJson` array: a full option object, or the
/// legacy bare label string.
#[derive(Deserialize)]
#[serde(untagged)]
enum EncodedOption {
    Rich(ChoiceOption),
    Legacy(String),
}

fn parse_options(question_id: i64, raw: &str) -> Vec<ChoiceOption> {
    match serde_json::from_str::<Vec<EncodedOption>>(raw) {
        Ok(entries) => entries
            .into_iter()
            .map(|entry| match entry {
                EncodedOption::Rich(option) => option,
                EncodedOption::Legacy(label) => ChoiceOption::plain(label),
            })
            .collect(),
        Err(e) => {
            warn!("question {question_id}: unparsable optionsJson ({e}), treating as empty");
            Vec::new()
        }
    }
}

fn encode_options(options: &[ChoiceOption]) -> Option<String> {
    if options.is_empty() {
        return None;
    }
    serde_json::to_string(options).ok()
}
