//! Step 4: parents and guardians

use std::io::{BufRead, Write};

use super::form::{edit_draft, list_action, show_entries, ListAction};
use super::prompt::Prompter;
use crate::error::RegistrationResult;
use crate::models::{ParentDraft, ParentType};
use crate::store::FormStore;
use crate::validation::FieldErrors;

pub fn fill_family<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    store: &mut FormStore,
    errors: &FieldErrors,
) -> RegistrationResult<()> {
    p.say(format!("Parent type: {}", ParentType::ALLOWED.join("/")))?;
    let mut errors = errors.clone();
    loop {
        show_entries(p, "Family members", store.family_info(), &errors, summary)?;
        match list_action(p, store.family_info().len())? {
            ListAction::Add => {
                let parent = edit_draft(p, &ParentDraft::default(), &FieldErrors::new())?;
                store.add_parent(parent);
            }
            ListAction::Edit(i) => {
                let scoped = errors.scoped(&format!("{}.", i));
                let patch = edit_draft(p, &store.family_info()[i], &scoped)?;
                store.update_parent(i, patch)?;
            }
            ListAction::Remove(i) => {
                store.remove_parent(i)?;
                errors = FieldErrors::new();
            }
            ListAction::Done => return Ok(()),
        }
    }
}

fn summary(parent: &ParentDraft) -> String {
    format!(
        "{} ({})",
        parent.full_name.as_deref().unwrap_or("unnamed"),
        parent.parent_type.as_deref().unwrap_or("?")
    )
}
