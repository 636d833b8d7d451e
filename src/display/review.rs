//! Review table shown before submission

use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::RegistrationPayload;

#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ReviewRow {
    #[tabled(rename = "Section")]
    pub section: String,
    #[tabled(rename = "Field")]
    pub field: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

/// Flatten the payload into one row per leaf value, in wire order
pub fn review_rows(payload: &RegistrationPayload) -> Vec<ReviewRow> {
    let json = match serde_json::to_value(payload) {
        Ok(json) => json,
        Err(_) => return Vec::new(),
    };

    let mut rows = Vec::new();
    for section in RegistrationPayload::KEYS {
        if let Some(value) = json.get(section) {
            flatten(section, "", value, &mut rows);
        }
    }
    rows
}

fn flatten(section: &str, path: &str, value: &Value, rows: &mut Vec<ReviewRow>) {
    let join = |key: &str| {
        if path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", path, key)
        }
    };
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten(section, &join(key), child, rows);
            }
        }
        Value::Array(items) if items.is_empty() => rows.push(ReviewRow {
            section: section.to_string(),
            field: if path.is_empty() { "-".into() } else { path.to_string() },
            value: "(none)".into(),
        }),
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                flatten(section, &join(&(i + 1).to_string()), child, rows);
            }
        }
        Value::String(s) => rows.push(ReviewRow {
            section: section.to_string(),
            field: path.to_string(),
            value: s.clone(),
        }),
        other => rows.push(ReviewRow {
            section: section.to_string(),
            field: path.to_string(),
            value: other.to_string(),
        }),
    }
}

/// Render the review table
pub fn format_review(payload: &RegistrationPayload) -> String {
    let mut table = Table::new(review_rows(payload));
    table.with(Style::sharp());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudentTempId;
    use crate::validation::fixtures::{
        minimal_academic, minimal_contact, minimal_employment, minimal_personal,
    };
    use crate::validation::{
        validate_academic, validate_contact, validate_employment, validate_personal,
        ValidationContext,
    };

    fn payload() -> RegistrationPayload {
        let ctx = ValidationContext::new(StudentTempId::new(), 5);
        RegistrationPayload {
            personal: validate_personal(&minimal_personal(), &ctx).unwrap(),
            contact: validate_contact(&minimal_contact(), &ctx).unwrap(),
            academic: validate_academic(&minimal_academic(), &ctx).unwrap(),
            family: Vec::new(),
            employment: validate_employment(&[minimal_employment()], &ctx).unwrap(),
        }
    }

    #[test]
    fn test_rows_cover_every_section() {
        let rows = review_rows(&payload());
        for section in RegistrationPayload::KEYS {
            assert!(rows.iter().any(|r| r.section == section), "missing {}", section);
        }

        let first_name = rows.iter().find(|r| r.field == "firstName").unwrap();
        assert_eq!(first_name.section, "personal");
        assert_eq!(first_name.value, "Abebe");

        assert!(rows
            .iter()
            .any(|r| r.field == "transcript.english_grade" && r.value == "78"));
        assert!(rows
            .iter()
            .any(|r| r.section == "family" && r.value == "(none)"));
        assert!(rows
            .iter()
            .any(|r| r.field == "1.employer" && r.value == "Adama Dairy Cooperative"));
    }

    #[test]
    fn test_format_review() {
        let table = format_review(&payload());
        assert!(table.contains("Section"));
        assert!(table.contains("Almaz Bekele"));
    }
}
