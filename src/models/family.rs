//! Family information (step 4)

use serde::{Deserialize, Serialize};
use std::fmt;

use super::draft::define_draft;

define_draft! {
    /// Raw parent or guardian input
    pub struct ParentDraft as "parent info" {
        id => "id", "Parent ID", false;
        student_id => "student_id", "Student ID", false;
        parent_type => "parent_type", "Parent type", true;
        full_name => "full_name", "Full name", true;
        occupation => "occupation", "Occupation", false;
        education_level => "education_level", "Education level", false;
        address_house_no => "address_house_no", "House number", false;
        address_kebele => "address_kebele", "Kebele", false;
        address_woreda => "address_woreda", "Woreda", false;
        address_zone => "address_zone", "Zone", false;
        address_region => "address_region", "Region", false;
        phone => "phone", "Phone number", true;
        po_box => "po_box", "P.O. box", false;
    }
}

/// Relationship of a parent or guardian to the student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParentType {
    Father,
    Mother,
    Guardian,
}

impl ParentType {
    pub const ALLOWED: &'static [&'static str] = &["FATHER", "MOTHER", "GUARDIAN"];

    /// Parse from a literal, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "FATHER" => Some(Self::Father),
            "MOTHER" => Some(Self::Mother),
            "GUARDIAN" => Some(Self::Guardian),
            _ => None,
        }
    }
}

impl fmt::Display for ParentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Father => write!(f, "FATHER"),
            Self::Mother => write!(f, "MOTHER"),
            Self::Guardian => write!(f, "GUARDIAN"),
        }
    }
}

/// Validated parent or guardian
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentInfo {
    pub id: String,
    pub student_id: String,
    pub parent_type: ParentType,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_house_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_kebele: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_woreda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_box: Option<String>,
}
