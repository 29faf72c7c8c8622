//! Display implementations for domain models.

use std::fmt;

use crate::models::{
    InputType, NextAction, Question, Section, Template, TemplateKind,
};

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for NextAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Kind: {}", self.kind)?;
        writeln!(
            f,
            "- Active: {}",
            if self.is_active { "yes" } else { "no" }
        )?;
        writeln!(f, "- Sections: {}", self.sections.len())?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        for section in &self.sections {
            writeln!(f)?;
            write!(f, "{section}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}. {}", self.order_index, self.title)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        match self.default_next_action {
            Some(NextAction::GoToSection) => {
                let target = self
                    .default_target_section_index
                    .map(|i| i.to_string())
                    .unwrap_or_else(|| "?".to_string());
                writeln!(f, "- Default: GO_TO_SECTION {target}")?;
            }
            Some(action) => writeln!(f, "- Default: {action}")?,
            None => {}
        }

        if self.questions.is_empty() {
            writeln!(f, "\nNo questions in this section.")?;
        } else {
            for question in &self.questions {
                write!(f, "{question}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let required = if self.required { " *" } else { "" };
        let scope = if self.member_specific { " [per member]" } else { "" };
        writeln!(
            f,
            "- **{}**{required} ({}){scope}",
            self.label, self.input_type
        )?;

        for option in &self.options {
            match option.next_action {
                Some(NextAction::GoToSection) => {
                    let target = option
                        .target_section_index
                        .map(|i| i.to_string())
                        .unwrap_or_else(|| "?".to_string());
                    writeln!(f, "  - {} → section {target}", option.label)?;
                }
                Some(action) => writeln!(f, "  - {} → {action}", option.label)?,
                None => writeln!(f, "  - {}", option.label)?,
            }
        }

        for schedule in &self.linked_schedules {
            match schedule.start_date {
                Some(date) => writeln!(f, "  - {} ({date})", schedule.title)?,
                None => writeln!(f, "  - {}", schedule.title)?,
            }
        }

        Ok(())
    }
}
