//! Core data models
//!
//! Each registration section has a draft (string-typed form input, keyed by
//! wire field name) and a validated record (trimmed, typed, enum-checked).
//! The records of all five sections aggregate into a [`RegistrationPayload`].

pub mod academic;
pub mod contact;
pub mod draft;
pub mod employment;
pub mod family;
pub mod ids;
pub mod payload;
pub mod personal;

pub use academic::{AcademicInfo, AcademicInfoDraft, PastSchool, PastSchoolDraft, Transcript, TranscriptDraft};
pub use contact::{ContactInfo, ContactInfoDraft};
pub use draft::{draft_from_value, known_fields_from_value, FieldSpec, FormDraft};
pub use employment::{EmploymentDraft, EmploymentRecord, IsCurrent};
pub use family::{ParentDraft, ParentInfo, ParentType};
pub use ids::{AuditEntryId, StudentTempId};
pub use payload::{RegistrationPayload, SectionCounts};
pub use personal::{MaritalStatus, PersonalInfo, PersonalInfoDraft, Sex};
