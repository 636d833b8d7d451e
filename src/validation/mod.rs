//! Per-step validation
//!
//! Each validator is a pure function from a draft (plus a
//! [`ValidationContext`] carrying the temp id and the clock) to either the
//! typed record or a [`FieldErrors`] map keyed by field path.

pub(crate) mod check;
pub mod context;
pub mod errors;

mod academic;
mod contact;
mod employment;
mod family;
mod personal;

#[cfg(test)]
pub(crate) mod fixtures;

pub use academic::validate_academic;
pub use contact::validate_contact;
pub use context::{ValidationContext, YEAR_MIN};
pub use employment::validate_employment;
pub use errors::FieldErrors;
pub use family::validate_family;
pub use personal::validate_personal;
