//! Question model, input types, and linked schedule entries.

use std::str::FromStr;

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use super::{ChoiceOption, QuestionId, ScheduleId};

/// Type-safe enumeration of question input types.
///
/// The input type doubles as the discriminant for
/// [`crate::models::AnswerValue`]: callers pattern-match on the input type
/// rather than on the runtime shape of the value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputType {
    /// Single-line free text
    ShortText,

    /// Multi-line free text
    LongText,

    /// Numeric entry
    Number,

    /// Yes/no toggle
    Boolean,

    /// Pick exactly one option
    SingleChoice,

    /// Pick any number of options
    MultipleChoice,

    /// Worship service attendance check (boolean-valued)
    WorshipAttendance,

    /// Attendance check for a linked schedule (boolean-valued per schedule)
    ScheduleAttendance,

    /// Survey tied to a linked schedule (boolean-valued per schedule)
    ScheduleSurvey,
}

impl FromStr for InputType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SHORT_TEXT" => Ok(InputType::ShortText),
            "LONG_TEXT" => Ok(InputType::LongText),
            "NUMBER" => Ok(InputType::Number),
            "BOOLEAN" => Ok(InputType::Boolean),
            "SINGLE_CHOICE" => Ok(InputType::SingleChoice),
            "MULTIPLE_CHOICE" => Ok(InputType::MultipleChoice),
            "WORSHIP_ATTENDANCE" => Ok(InputType::WorshipAttendance),
            "SCHEDULE_ATTENDANCE" => Ok(InputType::ScheduleAttendance),
            "SCHEDULE_SURVEY" => Ok(InputType::ScheduleSurvey),
            _ => Err(format!("Invalid input type: {s}")),
        }
    }
}

impl InputType {
    /// Wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::ShortText => "SHORT_TEXT",
            InputType::LongText => "LONG_TEXT",
            InputType::Number => "NUMBER",
            InputType::Boolean => "BOOLEAN",
            InputType::SingleChoice => "SINGLE_CHOICE",
            InputType::MultipleChoice => "MULTIPLE_CHOICE",
            InputType::WorshipAttendance => "WORSHIP_ATTENDANCE",
            InputType::ScheduleAttendance => "SCHEDULE_ATTENDANCE",
            InputType::ScheduleSurvey => "SCHEDULE_SURVEY",
        }
    }

    /// True for the two option-carrying kinds.
    pub fn is_choice(&self) -> bool {
        matches!(self, InputType::SingleChoice | InputType::MultipleChoice)
    }

    /// True for the two schedule-linked kinds that participate in grouping.
    pub fn is_schedule(&self) -> bool {
        matches!(
            self,
            InputType::ScheduleAttendance | InputType::ScheduleSurvey
        )
    }

    /// True for kinds stored as booleans, which submissions always carry as
    /// literal `"true"`/`"false"` (never omitted).
    pub fn is_boolean_valued(&self) -> bool {
        matches!(
            self,
            InputType::Boolean
                | InputType::WorshipAttendance
                | InputType::ScheduleAttendance
                | InputType::ScheduleSurvey
        )
    }
}

/// One schedule entry bundled into a grouped schedule question.
///
/// `question_id` is the identity of the single underlying flat question
/// this entry represents; `None` means the entry has not been split and
/// persisted yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkedSchedule {
    /// Identifier of the schedule itself
    pub id: ScheduleId,

    /// Display title of the schedule
    pub title: String,

    /// When the schedule takes place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime>,

    /// Identity of the underlying flat question, once persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<QuestionId>,
}

/// Represents a single question, in either the flat or the grouped shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique identifier (negative when process-local temporary)
    pub id: QuestionId,

    /// Prompt shown to the respondent
    pub label: String,

    /// Input control kind; discriminates the answer value shape
    pub input_type: InputType,

    /// Whether an answer is mandatory
    pub required: bool,

    /// Position within the section (0-indexed)
    pub order_index: u32,

    /// Answered once per group member instead of once per group
    #[serde(default)]
    pub member_specific: bool,

    /// Options for the two choice kinds
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,

    /// Bundled schedule entries (grouped shape only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked_schedules: Vec<LinkedSchedule>,

    /// Schedule linked by this flat question (flat shape only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_schedule_id: Option<ScheduleId>,

    /// Date of the linked schedule (flat shape only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_schedule_date: Option<DateTime>,

    /// Legacy serialized side-channel carrying the schedule title (and,
    /// in some historical templates, other metadata). Best-effort decoded
    /// by the grouping transformer; never trusted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_json: Option<String>,
}

impl Question {
    /// True when this question is the grouped shape of one or more
    /// schedule-linked flat questions.
    pub fn is_grouped(&self) -> bool {
        self.input_type.is_schedule() && !self.linked_schedules.is_empty()
    }
}
