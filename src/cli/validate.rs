//! `enroll validate`: check a section draft stored in a file

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::display::format_field_errors;
use crate::error::{RegistrationError, RegistrationResult};
use crate::models::{
    draft_from_value, AcademicInfoDraft, ContactInfoDraft, EmploymentDraft, FormDraft,
    ParentDraft, PastSchoolDraft, PersonalInfoDraft, StudentTempId, TranscriptDraft,
};
use crate::validation::{
    validate_academic, validate_contact, validate_employment, validate_family,
    validate_personal, FieldErrors, ValidationContext,
};
use crate::wizard::Step;

/// Read a JSON or YAML file (by extension) into a generic value
pub fn load_document(path: &Path) -> RegistrationResult<Value> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        RegistrationError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    if is_yaml {
        Ok(serde_yaml::from_str(&contents)?)
    } else {
        Ok(serde_json::from_str(&contents)?)
    }
}

fn drafts_from_value<D: FormDraft>(value: &Value) -> RegistrationResult<Vec<D>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.iter().map(draft_from_value::<D>).collect(),
        _ => Err(RegistrationError::Validation("Expected a list of entries".into())),
    }
}

fn academic_from_value(value: &Value) -> RegistrationResult<AcademicInfoDraft> {
    let transcript = match value.get("transcript") {
        Some(t) => draft_from_value::<TranscriptDraft>(t)?,
        None => TranscriptDraft::default(),
    };
    let past_schools = match value.get("pastSchools") {
        Some(list) => drafts_from_value::<PastSchoolDraft>(list)?,
        None => Vec::new(),
    };
    Ok(AcademicInfoDraft {
        transcript,
        past_schools,
    })
}

fn render<T: Serialize>(result: Result<T, FieldErrors>) -> RegistrationResult<(bool, String)> {
    match result {
        Ok(record) => Ok((true, serde_json::to_string_pretty(&record)?)),
        Err(errors) => Ok((false, format_field_errors(&errors))),
    }
}

/// Validate one section document.
///
/// Returns whether it passed, and the text to show: the normalized record
/// as JSON, or the field errors.
pub fn validate_document(
    section: Step,
    document: &Value,
    year_horizon: u16,
) -> RegistrationResult<(bool, String)> {
    let ctx = ValidationContext::new(StudentTempId::new(), year_horizon);
    match section {
        Step::Personal => {
            let draft: PersonalInfoDraft = draft_from_value(document)?;
            render(validate_personal(&draft, &ctx))
        }
        Step::Contact => {
            let draft: ContactInfoDraft = draft_from_value(document)?;
            render(validate_contact(&draft, &ctx))
        }
        Step::Academic => render(validate_academic(&academic_from_value(document)?, &ctx)),
        Step::Family => {
            let drafts: Vec<ParentDraft> = drafts_from_value(document)?;
            render(validate_family(&drafts, &ctx))
        }
        Step::Employment => {
            let drafts: Vec<EmploymentDraft> = drafts_from_value(document)?;
            render(validate_employment(&drafts, &ctx))
        }
    }
}

/// Handle `enroll validate`; returns whether the file passed
pub fn handle_validate_command(
    section: &str,
    file: &Path,
    year_horizon: u16,
) -> RegistrationResult<bool> {
    let step = Step::parse(section).ok_or_else(|| {
        RegistrationError::Validation(format!(
            "Unknown section '{}'. Use personal, contact, academic, family or employment.",
            section
        ))
    })?;

    let document = load_document(file)?;
    let (valid, output) = validate_document(step, &document, year_horizon)?;
    if valid {
        println!("{} is valid:", step.label());
    }
    println!("{}", output.trim_end());
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_scalars_become_text() {
        let draft: TranscriptDraft =
            draft_from_value(&json!({ "english_grade": 78, "transcript_id": null })).unwrap();
        assert_eq!(draft.english_grade.as_deref(), Some("78"));
        assert_eq!(draft.transcript_id, None);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = draft_from_value::<ContactInfoDraft>(&json!({ "nickname": "Ali" })).unwrap_err();
        assert!(matches!(err, RegistrationError::UnknownField { .. }));
    }

    #[test]
    fn test_validate_academic_document() {
        let doc = json!({
            "transcript": {
                "grade_9_file_path": "g9.pdf",
                "grade_10_file_path": "g10.pdf",
                "grade_11_file_path": "g11.pdf",
                "grade_12_file_path": "g12.pdf",
                "exam_file_path": "exam.pdf",
                "english_grade": 101,
                "maths_grade": "85"
            },
            "pastSchools": [{ "file_paths": "diploma.pdf" }]
        });
        let (valid, output) = validate_document(Step::Academic, &doc, 5).unwrap();
        assert!(!valid);
        assert!(output.contains("transcript.english_grade: English grade must be between 0 and 100"));
    }

    #[test]
    fn test_validate_family_document() {
        let doc = json!([{ "parent_type": "guardian", "full_name": "Hawi Gudina", "phone": "0911" }]);
        let (valid, output) = validate_document(Step::Family, &doc, 5).unwrap();
        assert!(valid);
        assert!(output.contains("\"GUARDIAN\""));
    }

    #[test]
    fn test_load_yaml_by_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contact.yaml");
        std::fs::write(&path, "full_name: Almaz Bekele\nphone_mobile: \"0922334455\"\n").unwrap();

        let doc = load_document(&path).unwrap();
        let (valid, output) = validate_document(Step::Contact, &doc, 5).unwrap();
        assert!(valid, "{}", output);
        assert!(output.contains("Almaz Bekele"));
    }
}
