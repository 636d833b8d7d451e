//! Field error and notice formatting

use crate::validation::FieldErrors;
use crate::wizard::{Notice, NoticeKind, RegistrationWizard, Step, StepStatus};

/// One error per line, sorted by field path
pub fn format_field_errors(errors: &FieldErrors) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut output = format!("Please fix {} field(s):\n", errors.len());
    for (path, message) in errors.iter() {
        output.push_str(&format!("  {}: {}\n", path, message));
    }
    output
}

pub fn format_notice(notice: &Notice) -> String {
    match notice.kind {
        NoticeKind::Success => format!("✓ {}", notice.message),
        NoticeKind::Error => format!("✗ {}", notice.message),
    }
}

/// Progress header, e.g. `Step 2 of 5: Contact info (40%)` plus a step strip
pub fn format_step_header(wizard: &RegistrationWizard) -> String {
    let step = wizard.current_step();
    let strip: Vec<String> = Step::ALL
        .iter()
        .map(|s| {
            let mark = match wizard.step_status(*s) {
                StepStatus::Completed => "✓",
                StepStatus::Current => "●",
                StepStatus::Upcoming => "○",
            };
            format!("{} {}", mark, s.label())
        })
        .collect();

    format!(
        "Step {} of {}: {} ({}%)\n{}\n{}\n",
        step.number(),
        Step::COUNT,
        step.label(),
        wizard.progress_percent(),
        step.description(),
        strip.join("  ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_errors() {
        let errors: FieldErrors = [
            ("sex", "Sex is required"),
            ("firstName", "First name is required"),
        ]
        .into_iter()
        .collect();
        let text = format_field_errors(&errors);
        assert_eq!(
            text,
            "Please fix 2 field(s):\n  firstName: First name is required\n  sex: Sex is required\n"
        );
        assert_eq!(format_field_errors(&FieldErrors::new()), "");
    }

    #[test]
    fn test_step_header() {
        let wizard = RegistrationWizard::new(5);
        let header = format_step_header(&wizard);
        assert!(header.starts_with("Step 1 of 5: Personal info (20%)"));
        assert!(header.contains("Basic information"));
        assert!(header.contains("● Personal info"));
        assert!(header.contains("○ Employment history"));
    }
}
