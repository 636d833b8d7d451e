//! Submission audit log
//!
//! Every submission attempt and its outcome is appended to a line-delimited
//! JSON file (JSONL). Entries hold the session's temp id, section counts and
//! the registrar's answer, never personal field values.
//!
//! - `AuditEntry`: one event with timestamp and outcome
//! - `AuditLogger`: append and read the JSONL file
//! - `AuditedSink`: wraps a submit sink and logs around each call

mod entry;
mod logger;
mod sink;

pub use entry::{AuditEntry, SubmissionEvent};
pub use logger::AuditLogger;
pub use sink::AuditedSink;
