//! Emergency contact (step 2)

use serde::{Deserialize, Serialize};

use super::draft::define_draft;

define_draft! {
    /// Raw emergency-contact input
    pub struct ContactInfoDraft as "contact info" {
        id => "id", "Contact ID", false;
        student_id => "student_id", "Student ID", false;
        full_name => "full_name", "Full name", true;
        phone_home => "phone_home", "Home phone", false;
        phone_mobile => "phone_mobile", "Mobile phone", true;
        phone_office => "phone_office", "Office phone", false;
        address_kebele => "address_kebele", "Kebele", false;
        address_woreda => "address_woreda", "Woreda", false;
        address_zone => "address_zone", "Zone", false;
        address_region => "address_region", "Region", false;
        address_town => "address_town", "Town", false;
    }
}

/// Validated emergency contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub id: String,
    pub student_id: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_home: Option<String>,
    pub phone_mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_office: Option<String>,
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
}
