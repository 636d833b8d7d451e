//! Employment history validator
//!
//! Each entry is checked on its own; errors are reported as `<i>.<key>`.
//! An empty history is valid.

use super::check::{finish, Checker};
use super::context::{ValidationContext, YEAR_MIN};
use super::errors::FieldErrors;
use crate::models::{EmploymentDraft, EmploymentRecord, IsCurrent};

const MAX_TYPE_OF_JOB: usize = 50;
const MAX_EMPLOYER: usize = 100;
const MAX_MAILING_ADDRESS: usize = 255;
const MAX_TELEPHONE: usize = 20;

pub fn validate_employment(
    drafts: &[EmploymentDraft],
    ctx: &ValidationContext,
) -> Result<Vec<EmploymentRecord>, FieldErrors> {
    let mut errors = FieldErrors::new();
    let records: Vec<Option<EmploymentRecord>> = drafts
        .iter()
        .enumerate()
        .map(|(index, draft)| check_entry(index, draft, ctx, &mut errors))
        .collect();

    finish(errors, records.into_iter().collect())
}

fn check_entry(
    index: usize,
    draft: &EmploymentDraft,
    ctx: &ValidationContext,
    errors: &mut FieldErrors,
) -> Option<EmploymentRecord> {
    let mut check = Checker::scoped(errors, EmploymentDraft::FIELDS, format!("{}.", index));
    let years = i64::from(YEAR_MIN)..=i64::from(ctx.max_year());

    let employment_id = check.optional_id("employment_id", draft.employment_id.as_deref());
    let is_current = check.choice(
        "is_current",
        draft.is_current.as_deref(),
        IsCurrent::ALLOWED,
        IsCurrent::parse,
    );
    let type_of_job = check.bounded("type_of_job", draft.type_of_job.as_deref(), MAX_TYPE_OF_JOB);
    let employer = check.bounded("employer", draft.employer.as_deref(), MAX_EMPLOYER);
    let mailing_address = check.bounded(
        "mailing_address",
        draft.mailing_address.as_deref(),
        MAX_MAILING_ADDRESS,
    );
    let telephone = check.bounded("telephone", draft.telephone.as_deref(), MAX_TELEPHONE);
    let from = check.optional_number("service_years_from", draft.service_years_from.as_deref(), years.clone());
    let to = check.optional_number("service_years_to", draft.service_years_to.as_deref(), years);

    if let (Some(from), Some(to)) = (from, to) {
        if to < from {
            check.fail("service_years_to", "Service end year cannot be before the start year");
        }
    }

    Some(EmploymentRecord {
        employment_id,
        student_id: check.or_default(draft.student_id.as_deref(), ctx.temp_key()),
        is_current: is_current?,
        type_of_job,
        employer,
        mailing_address,
        telephone,
        service_years_from: from.and_then(|y| i32::try_from(y).ok()),
        service_years_to: to.and_then(|y| i32::try_from(y).ok()),
        created_at: ctx.now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudentTempId;
    use crate::validation::fixtures::minimal_employment;
    use chrono::{TimeZone, Utc};

    fn ctx() -> ValidationContext {
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 8, 0, 0).unwrap();
        ValidationContext::at(StudentTempId::new(), 5, now)
    }

    #[test]
    fn test_empty_history_is_valid() {
        assert!(validate_employment(&[], &ctx()).unwrap().is_empty());
    }

    #[test]
    fn test_minimal_entry() {
        let ctx = ctx();
        let records = validate_employment(&[minimal_employment()], &ctx).unwrap();
        assert_eq!(records[0].is_current, IsCurrent::No);
        assert_eq!(records[0].student_id, ctx.temp_key());
        assert_eq!(records[0].created_at, ctx.now);
        assert_eq!(records[0].service_years_from, Some(2020));
        assert_eq!(records[0].service_years_to, Some(2023));
    }

    #[test]
    fn test_year_range() {
        let mut draft = minimal_employment();
        draft.service_years_from = Some("1899".into());
        draft.service_years_to = Some("2032".into());
        let errors = validate_employment(&[draft], &ctx()).unwrap_err();
        assert_eq!(
            errors.get("0.service_years_from"),
            Some("Service start year must be between 1900 and 2031")
        );
        assert_eq!(
            errors.get("0.service_years_to"),
            Some("Service end year must be between 1900 and 2031")
        );
    }

    #[test]
    fn test_end_before_start() {
        let mut draft = minimal_employment();
        draft.service_years_from = Some("2022".into());
        draft.service_years_to = Some("2019".into());
        let errors = validate_employment(&[draft], &ctx()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("0.service_years_to"));
    }

    #[test]
    fn test_length_limits() {
        let mut draft = minimal_employment();
        draft.telephone = Some("0".repeat(21));
        draft.type_of_job = Some("x".repeat(50));
        let errors = validate_employment(&[draft], &ctx()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("0.telephone"),
            Some("Telephone must be at most 20 characters")
        );
    }

    #[test]
    fn test_is_current_required() {
        let mut draft = minimal_employment();
        draft.is_current = None;
        let errors = validate_employment(&[minimal_employment(), draft], &ctx()).unwrap_err();
        assert_eq!(errors.get("1.is_current"), Some("Current job is required"));
    }
}
