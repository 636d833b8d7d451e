//! Aggregated registration payload
//!
//! The single record posted to the registrar once every step has been
//! validated. It carries exactly five keys on the wire.

use serde::{Deserialize, Serialize};

use super::academic::AcademicInfo;
use super::contact::ContactInfo;
use super::employment::EmploymentRecord;
use super::family::ParentInfo;
use super::personal::PersonalInfo;

/// The aggregate submitted at the final step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub personal: PersonalInfo,
    pub contact: ContactInfo,
    pub academic: AcademicInfo,
    pub family: Vec<ParentInfo>,
    pub employment: Vec<EmploymentRecord>,
}

/// Sizes of the list-valued parts of a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCounts {
    pub past_schools: usize,
    pub family: usize,
    pub employment: usize,
}

impl RegistrationPayload {
    /// Wire keys, in submission order
    pub const KEYS: [&'static str; 5] = ["personal", "contact", "academic", "family", "employment"];

    pub fn counts(&self) -> SectionCounts {
        SectionCounts {
            past_schools: self.academic.past_schools.len(),
            family: self.family.len(),
            employment: self.employment.len(),
        }
    }
}
