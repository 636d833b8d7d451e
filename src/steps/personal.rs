//! Step 1: personal info

use std::io::{BufRead, Write};

use super::form::edit_draft;
use super::prompt::Prompter;
use crate::error::RegistrationResult;
use crate::models::{MaritalStatus, Sex};
use crate::store::FormStore;
use crate::validation::FieldErrors;

pub fn fill_personal<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    store: &mut FormStore,
    errors: &FieldErrors,
) -> RegistrationResult<()> {
    p.say(format!(
        "Sex: {}. Marital status: {}. Dates as YYYY-MM-DD.",
        Sex::ALLOWED.join("/"),
        MaritalStatus::ALLOWED.join("/")
    ))?;
    let patch = edit_draft(p, store.personal_info(), errors)?;
    store.set_personal_info(patch);
    Ok(())
}
