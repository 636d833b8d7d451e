//! Step 3: transcript and past schools

use std::io::{BufRead, Write};

use super::form::{edit_draft, list_action, show_entries, ListAction};
use super::prompt::Prompter;
use crate::error::RegistrationResult;
use crate::models::{AcademicInfoDraft, PastSchoolDraft};
use crate::store::FormStore;
use crate::validation::FieldErrors;

pub fn fill_academic<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    store: &mut FormStore,
    errors: &FieldErrors,
) -> RegistrationResult<()> {
    p.say("Transcript (grades 0-100)")?;
    let mut academic = store.academic_info().clone();
    let patch = edit_draft(p, &academic.transcript, &errors.scoped("transcript."))?;
    academic.transcript.merge(patch);

    let mut school_errors = errors.scoped("pastSchools.");
    loop {
        show_entries(
            p,
            "Past schools",
            &academic.past_schools,
            &school_errors,
            |school: &PastSchoolDraft| {
                school
                    .file_paths
                    .clone()
                    .unwrap_or_else(|| "(no documents)".into())
            },
        )?;
        match list_action(p, academic.past_schools.len())? {
            ListAction::Add => {
                let school = edit_draft(p, &PastSchoolDraft::default(), &FieldErrors::new())?;
                academic.past_schools.push(school);
            }
            ListAction::Edit(i) => {
                let scoped = school_errors.scoped(&format!("{}.", i));
                let patch = edit_draft(p, &academic.past_schools[i], &scoped)?;
                academic.past_schools[i].merge(patch);
            }
            ListAction::Remove(i) => {
                academic.past_schools.remove(i);
                school_errors = FieldErrors::new();
            }
            ListAction::Done => break,
        }
    }

    // Replace so that removing every school sticks
    store.replace_academic_info(AcademicInfoDraft {
        transcript: academic.transcript,
        past_schools: academic.past_schools,
    });
    Ok(())
}
