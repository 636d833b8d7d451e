//! Personal information (step 1)
//!
//! Identity, birth place, address, phone numbers and the enrollment
//! placement of the student.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::draft::define_draft;

define_draft! {
    /// Raw personal-information input
    pub struct PersonalInfoDraft as "personal info" {
        student_id => "student_id", "Student ID", true;
        student_temp_id => "student_temp_id", "Temporary student ID", false;
        first_name => "firstName", "First name", true;
        father_name => "fatherName", "Father's name", true;
        grandfather_name => "grandFather_Name", "Grandfather's name", true;
        sex => "sex", "Sex", true;
        nationality => "nationality", "Nationality", true;
        phone_number => "phone_Number", "Phone number", false;
        email => "email", "Email", false;
        place_of_birth_town => "place_of_birth_town", "Place of birth (town)", false;
        place_of_birth_zone => "place_of_birth_zone", "Place of birth (zone)", false;
        place_of_birth_region => "place_of_birth_region", "Place of birth (region)", false;
        date_of_birth => "date_of_birth", "Date of birth", true;
        address_kebele => "address_kebele", "Kebele", false;
        address_woreda => "address_woreda", "Woreda", false;
        address_zone => "address_zone", "Zone", false;
        address_region => "address_region", "Region", false;
        address_town => "address_town", "Town", false;
        current_year => "currentYear", "Current year", true;
        current_semester => "currentSemester", "Current semester", true;
        current_level => "currentLevel", "Current academic year", true;
        phone_home => "phone_home", "Home phone", false;
        phone_mobile => "phone_mobile", "Mobile phone", true;
        phone_office => "phone_office", "Office phone", false;
        department_id => "department_id", "Department", true;
        program_id => "program_id", "Program ID", true;
        admission_type_id => "admission_type_id", "Admission type", true;
        registration_date => "registration_date", "Registration date", true;
        marital_status => "MaritalStatus", "Marital status", true;
    }
}

/// Sex as recorded by the registrar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    M,
    F,
}

impl Sex {
    pub const ALLOWED: &'static [&'static str] = &["M", "F"];

    /// Parse from a literal, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "M" => Some(Self::M),
            "F" => Some(Self::F),
            _ => None,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::M => write!(f, "M"),
            Self::F => write!(f, "F"),
        }
    }
}

/// Marital status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    pub const ALLOWED: &'static [&'static str] = &["SINGLE", "MARRIED", "DIVORCED", "WIDOWED"];

    /// Parse from a literal, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "SINGLE" => Some(Self::Single),
            "MARRIED" => Some(Self::Married),
            "DIVORCED" => Some(Self::Divorced),
            "WIDOWED" => Some(Self::Widowed),
            _ => None,
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "SINGLE"),
            Self::Married => write!(f, "MARRIED"),
            Self::Divorced => write!(f, "DIVORCED"),
            Self::Widowed => write!(f, "WIDOWED"),
        }
    }
}

/// Validated personal information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub student_id: String,
    pub student_temp_id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "fatherName")]
    pub father_name: String,
    #[serde(rename = "grandFather_Name")]
    pub grandfather_name: String,
    pub sex: Sex,
    pub nationality: String,
    #[serde(rename = "phone_Number", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_birth_town: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_birth_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_birth_region: Option<String>,
    pub date_of_birth: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_kebele: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_woreda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_town: Option<String>,
    #[serde(rename = "currentYear")]
    pub current_year: i32,
    #[serde(rename = "currentSemester")]
    pub current_semester: String,
    #[serde(rename = "currentLevel")]
    pub current_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_home: Option<String>,
    pub phone_mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_office: Option<String>,
    pub department_id: String,
    pub program_id: String,
    pub admission_type_id: String,
    pub registration_date: NaiveDate,
    #[serde(rename = "MaritalStatus")]
    pub marital_status: MaritalStatus,
}
