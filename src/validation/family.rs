//! Family information validator
//!
//! Each entry is checked on its own; errors are reported as `<i>.<key>`.
//! An empty list is valid.

use super::check::{finish, Checker};
use super::context::ValidationContext;
use super::errors::FieldErrors;
use crate::models::{ParentDraft, ParentInfo, ParentType};

pub fn validate_family(
    drafts: &[ParentDraft],
    ctx: &ValidationContext,
) -> Result<Vec<ParentInfo>, FieldErrors> {
    let mut errors = FieldErrors::new();
    let parents: Vec<Option<ParentInfo>> = drafts
        .iter()
        .enumerate()
        .map(|(index, draft)| check_parent(index, draft, ctx, &mut errors))
        .collect();

    finish(errors, parents.into_iter().collect())
}

fn check_parent(
    index: usize,
    draft: &ParentDraft,
    ctx: &ValidationContext,
    errors: &mut FieldErrors,
) -> Option<ParentInfo> {
    let mut check = Checker::scoped(errors, ParentDraft::FIELDS, format!("{}.", index));

    let parent_type = check.choice(
        "parent_type",
        draft.parent_type.as_deref(),
        ParentType::ALLOWED,
        ParentType::parse,
    );
    let full_name = check.required("full_name", draft.full_name.as_deref());
    let phone = check.required("phone", draft.phone.as_deref());

    Some(ParentInfo {
        id: check.optional(draft.id.as_deref()).unwrap_or_default(),
        student_id: check.or_default(draft.student_id.as_deref(), ctx.temp_key()),
        parent_type: parent_type?,
        full_name: full_name?,
        occupation: check.optional(draft.occupation.as_deref()),
        education_level: check.optional(draft.education_level.as_deref()),
        address_house_no: check.optional(draft.address_house_no.as_deref()),
        address_kebele: check.optional(draft.address_kebele.as_deref()),
        address_woreda: check.optional(draft.address_woreda.as_deref()),
        address_zone: check.optional(draft.address_zone.as_deref()),
        address_region: check.optional(draft.address_region.as_deref()),
        phone: phone?,
        po_box: check.optional(draft.po_box.as_deref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudentTempId;
    use crate::validation::fixtures::minimal_parent;

    fn ctx() -> ValidationContext {
        ValidationContext::new(StudentTempId::new(), 5)
    }

    #[test]
    fn test_empty_family_is_valid() {
        assert_eq!(validate_family(&[], &ctx()).unwrap(), Vec::new());
    }

    #[test]
    fn test_parents_get_student_id() {
        let ctx = ctx();
        let parents = validate_family(&[minimal_parent()], &ctx).unwrap();
        assert_eq!(parents.len(), 1);
        assert_eq!(parents[0].parent_type, ParentType::Father);
        assert_eq!(parents[0].student_id, ctx.temp_key());
        assert_eq!(parents[0].id, "");
    }

    #[test]
    fn test_errors_are_indexed() {
        let mut second = minimal_parent();
        second.phone = None;
        second.parent_type = Some("UNCLE".into());

        let errors = validate_family(&[minimal_parent(), second], &ctx()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("1.phone"), Some("Phone number is required"));
        assert_eq!(
            errors.get("1.parent_type"),
            Some("Parent type must be one of: FATHER, MOTHER, GUARDIAN")
        );
        assert!(errors.scoped("0.").is_empty());
    }
}
