//! Interactive step components
//!
//! One form per wizard step. Each prompts the fields of its section, shows
//! the errors from the last validation next to the fields they concern, and
//! writes the answers back through the store setters.

pub mod academic;
pub mod contact;
pub mod employment;
pub mod family;
pub mod form;
pub mod personal;
pub mod prompt;

pub use prompt::Prompter;

use std::io::{BufRead, Write};

use crate::error::RegistrationResult;
use crate::store::FormStore;
use crate::validation::FieldErrors;
use crate::wizard::Step;

/// Run the form for `step`
pub fn fill_step<R: BufRead, W: Write>(
    step: Step,
    p: &mut Prompter<R, W>,
    store: &mut FormStore,
    errors: &FieldErrors,
) -> RegistrationResult<()> {
    match step {
        Step::Personal => personal::fill_personal(p, store, errors),
        Step::Contact => contact::fill_contact(p, store, errors),
        Step::Academic => academic::fill_academic(p, store, errors),
        Step::Family => family::fill_family(p, store, errors),
        Step::Employment => employment::fill_employment(p, store, errors),
    }
}
