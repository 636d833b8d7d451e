//! Emergency contact validator

use super::check::{finish, Checker};
use super::context::ValidationContext;
use super::errors::FieldErrors;
use crate::models::{ContactInfo, ContactInfoDraft};

/// Validate the emergency contact.
///
/// A missing `id` becomes `EC-` plus the short form of the temp id, a missing
/// `student_id` becomes the temp id.
pub fn validate_contact(
    draft: &ContactInfoDraft,
    ctx: &ValidationContext,
) -> Result<ContactInfo, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut check = Checker::new(&mut errors, ContactInfoDraft::FIELDS);

    let id = check.or_default(
        draft.id.as_deref(),
        format!("EC-{}", ctx.student_temp_id.short()),
    );
    let student_id = check.or_default(draft.student_id.as_deref(), ctx.temp_key());
    let full_name = check.required("full_name", draft.full_name.as_deref());
    let phone_mobile = check.required("phone_mobile", draft.phone_mobile.as_deref());

    let assemble = || {
        Some(ContactInfo {
            id,
            student_id,
            full_name: full_name?,
            phone_home: check.optional(draft.phone_home.as_deref()),
            phone_mobile: phone_mobile?,
            phone_office: check.optional(draft.phone_office.as_deref()),
            address_kebele: check.optional(draft.address_kebele.as_deref()),
            address_woreda: check.optional(draft.address_woreda.as_deref()),
            address_zone: check.optional(draft.address_zone.as_deref()),
            address_region: check.optional(draft.address_region.as_deref()),
            address_town: check.optional(draft.address_town.as_deref()),
        })
    };
    let record = assemble();
    finish(errors, record)
}
