//! Step 2: emergency contact

use std::io::{BufRead, Write};

use super::form::edit_draft;
use super::prompt::Prompter;
use crate::error::RegistrationResult;
use crate::store::FormStore;
use crate::validation::FieldErrors;

pub fn fill_contact<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    store: &mut FormStore,
    errors: &FieldErrors,
) -> RegistrationResult<()> {
    p.say("Who should we contact in an emergency?")?;
    let patch = edit_draft(p, store.contact_info(), errors)?;
    store.set_contact_info(patch);
    Ok(())
}
