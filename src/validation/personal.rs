//! Personal information validator

use super::check::{finish, Checker};
use super::context::{ValidationContext, YEAR_MIN};
use super::errors::FieldErrors;
use crate::models::{MaritalStatus, PersonalInfo, PersonalInfoDraft, Sex};

pub fn validate_personal(
    draft: &PersonalInfoDraft,
    ctx: &ValidationContext,
) -> Result<PersonalInfo, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut check = Checker::new(&mut errors, PersonalInfoDraft::FIELDS);

    let student_id = check.required("student_id", draft.student_id.as_deref());
    let student_temp_id = check.or_default(draft.student_temp_id.as_deref(), ctx.temp_key());
    let first_name = check.required("firstName", draft.first_name.as_deref());
    let father_name = check.required("fatherName", draft.father_name.as_deref());
    let grandfather_name = check.required("grandFather_Name", draft.grandfather_name.as_deref());
    let sex = check.choice("sex", draft.sex.as_deref(), Sex::ALLOWED, Sex::parse);
    let nationality = check.required("nationality", draft.nationality.as_deref());
    let email = check.email("email", draft.email.as_deref());

    let date_of_birth = check.date("date_of_birth", draft.date_of_birth.as_deref());
    if date_of_birth.is_some_and(|dob| dob > ctx.today()) {
        check.fail("date_of_birth", "Date of birth cannot be in the future");
    }

    let current_year = check.required_number(
        "currentYear",
        draft.current_year.as_deref(),
        i64::from(YEAR_MIN)..=i64::from(ctx.max_year()),
    );
    let current_semester = check.required("currentSemester", draft.current_semester.as_deref());
    let current_level = check.required("currentLevel", draft.current_level.as_deref());
    let phone_mobile = check.required("phone_mobile", draft.phone_mobile.as_deref());
    let department_id = check.required("department_id", draft.department_id.as_deref());
    let program_id = check.required("program_id", draft.program_id.as_deref());
    let admission_type_id = check.required("admission_type_id", draft.admission_type_id.as_deref());
    let registration_date = check.date("registration_date", draft.registration_date.as_deref());
    let marital_status = check.choice(
        "MaritalStatus",
        draft.marital_status.as_deref(),
        MaritalStatus::ALLOWED,
        MaritalStatus::parse,
    );

    let assemble = || {
        Some(PersonalInfo {
            student_id: student_id?,
            student_temp_id,
            first_name: first_name?,
            father_name: father_name?,
            grandfather_name: grandfather_name?,
            sex: sex?,
            nationality: nationality?,
            phone_number: check.optional(draft.phone_number.as_deref()),
            email,
            place_of_birth_town: check.optional(draft.place_of_birth_town.as_deref()),
            place_of_birth_zone: check.optional(draft.place_of_birth_zone.as_deref()),
            place_of_birth_region: check.optional(draft.place_of_birth_region.as_deref()),
            date_of_birth: date_of_birth?,
            address_kebele: check.optional(draft.address_kebele.as_deref()),
            address_woreda: check.optional(draft.address_woreda.as_deref()),
            address_zone: check.optional(draft.address_zone.as_deref()),
            address_region: check.optional(draft.address_region.as_deref()),
            address_town: check.optional(draft.address_town.as_deref()),
            current_year: i32::try_from(current_year?).ok()?,
            current_semester: current_semester?,
            current_level: current_level?,
            phone_home: check.optional(draft.phone_home.as_deref()),
            phone_mobile: phone_mobile?,
            phone_office: check.optional(draft.phone_office.as_deref()),
            department_id: department_id?,
            program_id: program_id?,
            admission_type_id: admission_type_id?,
            registration_date: registration_date?,
            marital_status: marital_status?,
        })
    };
    let record = assemble();
    finish(errors, record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudentTempId;
    use crate::validation::fixtures::minimal_personal as minimal_draft;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn ctx() -> ValidationContext {
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 8, 0, 0).unwrap();
        ValidationContext::at(StudentTempId::new(), 5, now)
    }

    #[test]
    fn test_minimal_draft_passes() {
        let ctx = ctx();
        let info = validate_personal(&minimal_draft(), &ctx).unwrap();
        assert_eq!(info.first_name, "Abebe");
        assert_eq!(info.sex, Sex::M);
        assert_eq!(info.marital_status, MaritalStatus::Single);
        assert_eq!(info.current_year, 2026);
        assert_eq!(info.date_of_birth, NaiveDate::from_ymd_opt(2004, 5, 17).unwrap());
        assert_eq!(info.student_temp_id, ctx.temp_key());
        assert_eq!(info.email, None);
    }

    #[test]
    fn test_empty_first_name() {
        let mut draft = minimal_draft();
        draft.first_name = Some(String::new());
        let errors = validate_personal(&draft, &ctx()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("firstName"), Some("First name is required"));
    }

    #[test]
    fn test_empty_draft_reports_every_required_field() {
        let errors = validate_personal(&PersonalInfoDraft::default(), &ctx()).unwrap_err();
        let required = PersonalInfoDraft::FIELDS.iter().filter(|f| f.required).count();
        assert_eq!(errors.len(), required);
        assert_eq!(errors.get("grandFather_Name"), Some("Grandfather's name is required"));
        assert_eq!(errors.get("currentLevel"), Some("Current academic year is required"));
    }

    #[test]
    fn test_enums_are_checked() {
        let mut draft = minimal_draft();
        draft.sex = Some("X".into());
        draft.marital_status = Some("engaged".into());
        let errors = validate_personal(&draft, &ctx()).unwrap_err();
        assert_eq!(errors.get("sex"), Some("Sex must be one of: M, F"));
        assert_eq!(
            errors.get("MaritalStatus"),
            Some("Marital status must be one of: SINGLE, MARRIED, DIVORCED, WIDOWED")
        );
    }

    #[test]
    fn test_enums_normalize_case() {
        let mut draft = minimal_draft();
        draft.sex = Some("f".into());
        draft.marital_status = Some("married".into());
        let info = validate_personal(&draft, &ctx()).unwrap();
        assert_eq!(info.sex, Sex::F);
        assert_eq!(info.marital_status, MaritalStatus::Married);
    }

    #[test]
    fn test_current_year_range() {
        let mut draft = minimal_draft();
        draft.current_year = Some("2032".into());
        let errors = validate_personal(&draft, &ctx()).unwrap_err();
        assert_eq!(
            errors.get("currentYear"),
            Some("Current year must be between 1900 and 2031")
        );

        draft.current_year = Some("2031".into());
        assert!(validate_personal(&draft, &ctx()).is_ok());
    }

    #[test]
    fn test_dates() {
        let mut draft = minimal_draft();
        draft.date_of_birth = Some("17/05/2004".into());
        draft.registration_date = Some("2026-13-01".into());
        let errors = validate_personal(&draft, &ctx()).unwrap_err();
        assert!(errors.contains("date_of_birth"));
        assert!(errors.contains("registration_date"));

        let mut draft = minimal_draft();
        draft.date_of_birth = Some("2030-01-01".into());
        let errors = validate_personal(&draft, &ctx()).unwrap_err();
        assert_eq!(
            errors.get("date_of_birth"),
            Some("Date of birth cannot be in the future")
        );
    }

    #[test]
    fn test_optional_fields_are_trimmed() {
        let mut draft = minimal_draft();
        draft.email = Some("  abebe@example.edu ".into());
        draft.address_town = Some("   ".into());
        draft.place_of_birth_region = Some(" Oromia ".into());
        let info = validate_personal(&draft, &ctx()).unwrap();
        assert_eq!(info.email.as_deref(), Some("abebe@example.edu"));
        assert_eq!(info.address_town, None);
        assert_eq!(info.place_of_birth_region.as_deref(), Some("Oromia"));
    }

    #[test]
    fn test_serializes_with_wire_keys() {
        let info = validate_personal(&minimal_draft(), &ctx()).unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["firstName"], "Abebe");
        assert_eq!(json["grandFather_Name"], "Tesfaye");
        assert_eq!(json["MaritalStatus"], "SINGLE");
        assert_eq!(json["date_of_birth"], "2004-05-17");
        assert!(json.get("email").is_none());
    }
}
