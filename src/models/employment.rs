//! Employment history (step 5)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::draft::define_draft;

define_draft! {
    /// Raw employment-history entry
    pub struct EmploymentDraft as "employment history" {
        employment_id => "employment_id", "Employment ID", false;
        student_id => "student_id", "Student ID", false;
        is_current => "is_current", "Current job", true;
        type_of_job => "type_of_job", "Type of job", false;
        employer => "employer", "Employer", false;
        mailing_address => "mailing_address", "Mailing address", false;
        telephone => "telephone", "Telephone", false;
        service_years_from => "service_years_from", "Service start year", false;
        service_years_to => "service_years_to", "Service end year", false;
    }
}

/// Whether the job is the student's current one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IsCurrent {
    Yes,
    No,
}

impl IsCurrent {
    pub const ALLOWED: &'static [&'static str] = &["Yes", "No"];

    /// Parse from a literal, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }
}

impl fmt::Display for IsCurrent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}

/// Validated employment-history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_id: Option<u32>,
    pub student_id: String,
    pub is_current: IsCurrent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_of_job: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_years_from: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_years_to: Option<i32>,
    pub created_at: DateTime<Utc>,
}
