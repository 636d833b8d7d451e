//! Shared form helpers for the step components

use std::io::{BufRead, Write};

use super::prompt::Prompter;
use crate::error::RegistrationResult;
use crate::models::FormDraft;
use crate::validation::FieldErrors;

/// Prompt every field of a draft.
///
/// Errors from the last validation are shown above the field they belong
/// to. Returns a patch holding only the fields the user changed.
pub fn edit_draft<D, R, W>(
    p: &mut Prompter<R, W>,
    current: &D,
    errors: &FieldErrors,
) -> RegistrationResult<D>
where
    D: FormDraft,
    R: BufRead,
    W: Write,
{
    let mut patch = D::default();
    for spec in D::fields() {
        if let Some(message) = errors.get(spec.key) {
            p.say(format!("  ! {}", message))?;
        }
        let label = if spec.required {
            format!("{} *", spec.label)
        } else {
            spec.label.to_string()
        };
        if let Some(value) = p.ask(&label, current.field(spec.key))? {
            patch.set_field(spec.key, value)?;
        }
    }
    Ok(patch)
}

/// What to do next with a list section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Add,
    Edit(usize),
    Remove(usize),
    Done,
}

/// Read a list action; positions are shown and typed 1-based
pub fn list_action<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    len: usize,
) -> RegistrationResult<ListAction> {
    loop {
        let answer = p.line("[a]dd, [e]dit N, [r]emove N, [d]one: ")?;
        let mut parts = answer.split_whitespace();
        let command = parts.next().unwrap_or("").to_lowercase();
        let position = parts
            .next()
            .and_then(|n| n.parse::<usize>().ok())
            .filter(|n| (1..=len).contains(n))
            .map(|n| n - 1);

        match (command.as_str(), position) {
            ("a" | "add", _) => return Ok(ListAction::Add),
            ("d" | "done" | "", _) => return Ok(ListAction::Done),
            ("e" | "edit", Some(i)) => return Ok(ListAction::Edit(i)),
            ("r" | "remove", Some(i)) => return Ok(ListAction::Remove(i)),
            ("e" | "edit" | "r" | "remove", None) => {
                p.say(format!("Enter a position between 1 and {}.", len))?
            }
            _ => p.say("Unknown choice.")?,
        }
    }
}

/// Print one line per entry, flagging entries that failed validation
pub fn show_entries<D, R, W>(
    p: &mut Prompter<R, W>,
    title: &str,
    entries: &[D],
    errors: &FieldErrors,
    summary: impl Fn(&D) -> String,
) -> RegistrationResult<()>
where
    R: BufRead,
    W: Write,
{
    p.say(format!("{} ({})", title, entries.len()))?;
    for (i, entry) in entries.iter().enumerate() {
        let flag = if errors.scoped(&format!("{}.", i)).is_empty() {
            ""
        } else {
            "  [needs attention]"
        };
        p.say(format!("  {}. {}{}", i + 1, summary(entry), flag))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactInfoDraft;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_edit_draft_returns_only_changes() {
        let current = ContactInfoDraft {
            full_name: Some("Almaz Bekele".into()),
            ..Default::default()
        };
        // id, student_id, full_name, phone_home, phone_mobile, then Enter for the rest
        let input = "\n\n\n\n0922334455\n\n\n\n\n\n\n";
        let errors: FieldErrors = [("phone_mobile", "Mobile phone is required")]
            .into_iter()
            .collect();

        let mut p = prompter(input);
        let patch = edit_draft(&mut p, &current, &errors).unwrap();
        assert_eq!(patch.full_name, None);
        assert_eq!(patch.phone_mobile.as_deref(), Some("0922334455"));

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("  ! Mobile phone is required"));
        assert!(out.contains("Full name * [Almaz Bekele]: "));
    }

    #[test]
    fn test_list_action() {
        let mut p = prompter("e 5\nx\nr 2\na\n\n");
        assert_eq!(list_action(&mut p, 2).unwrap(), ListAction::Remove(1));
        assert_eq!(list_action(&mut p, 2).unwrap(), ListAction::Add);
        assert_eq!(list_action(&mut p, 2).unwrap(), ListAction::Done);
    }
}
