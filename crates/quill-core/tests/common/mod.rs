use quill_core::models::{
    ChoiceOption, InputType, NextAction, Question, Section, Template, TemplateKind,
};

/// Builds a personal template from already ordered sections.
pub fn template(sections: Vec<Section>) -> Template {
    Template {
        id: 1,
        title: "Test Template".to_string(),
        description: None,
        kind: TemplateKind::Personal,
        is_active: true,
        sections,
    }
}

/// Builds a section with no configured default.
pub fn section(order: u32, questions: Vec<Question>) -> Section {
    Section {
        id: 100 + order as i64,
        title: format!("Section {order}"),
        description: None,
        order_index: order,
        default_next_action: None,
        default_target_section_index: None,
        questions,
    }
}

/// Builds a single-choice question with the given options.
pub fn choice_question(id: i64, order: u32, options: Vec<ChoiceOption>) -> Question {
    Question {
        id,
        label: format!("Question {id}"),
        input_type: InputType::SingleChoice,
        required: false,
        order_index: order,
        member_specific: false,
        options,
        linked_schedules: vec![],
        linked_schedule_id: None,
        linked_schedule_date: None,
        meta_json: None,
    }
}

/// Builds a flat schedule-attendance question.
pub fn schedule_question(id: i64, order: u32, schedule_id: i64) -> Question {
    Question {
        id,
        label: "Which services will you attend?".to_string(),
        input_type: InputType::ScheduleAttendance,
        required: false,
        order_index: order,
        member_specific: false,
        options: vec![],
        linked_schedules: vec![],
        linked_schedule_id: Some(schedule_id),
        linked_schedule_date: None,
        meta_json: Some(format!(r#"{{"title":"Service {schedule_id}"}}"#)),
    }
}

/// An option that fires a navigation override when selected.
pub fn branching_option(label: &str, action: NextAction, target: Option<i64>) -> ChoiceOption {
    ChoiceOption {
        label: label.to_string(),
        next_action: Some(action),
        target_section_index: target,
    }
}
