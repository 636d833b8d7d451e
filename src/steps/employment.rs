//! Step 5: employment history

use std::io::{BufRead, Write};

use super::form::{edit_draft, list_action, show_entries, ListAction};
use super::prompt::Prompter;
use crate::error::RegistrationResult;
use crate::models::EmploymentDraft;
use crate::store::FormStore;
use crate::validation::FieldErrors;

pub fn fill_employment<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    store: &mut FormStore,
    errors: &FieldErrors,
) -> RegistrationResult<()> {
    p.say("Leave the list empty if you have no work experience.")?;
    let mut errors = errors.clone();
    loop {
        show_entries(p, "Jobs", store.employment_history(), &errors, summary)?;
        match list_action(p, store.employment_history().len())? {
            ListAction::Add => {
                let entry = edit_draft(p, &EmploymentDraft::default(), &FieldErrors::new())?;
                store.add_employment(entry);
            }
            ListAction::Edit(i) => {
                let scoped = errors.scoped(&format!("{}.", i));
                let patch = edit_draft(p, &store.employment_history()[i], &scoped)?;
                store.update_employment(i, patch)?;
            }
            ListAction::Remove(i) => {
                store.remove_employment(i)?;
                errors = FieldErrors::new();
            }
            ListAction::Done => return Ok(()),
        }
    }
}

fn summary(entry: &EmploymentDraft) -> String {
    let years = match (&entry.service_years_from, &entry.service_years_to) {
        (Some(from), Some(to)) => format!(", {}-{}", from, to),
        (Some(from), None) => format!(", since {}", from),
        _ => String::new(),
    };
    format!(
        "{} at {}{}",
        entry.type_of_job.as_deref().unwrap_or("job"),
        entry.employer.as_deref().unwrap_or("unknown employer"),
        years
    )
}
