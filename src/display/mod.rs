//! Display formatting for terminal output
//!
//! Progress headers, field errors, notices and the pre-submission review
//! table.

pub mod errors;
pub mod review;

pub use errors::{format_field_errors, format_notice, format_step_header};
pub use review::{format_review, review_rows, ReviewRow};
