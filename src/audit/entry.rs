//! Audit entry data structures
//!
//! One entry per submission event. Entries carry counts and identifiers
//! only, never the values a student typed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AuditEntryId, SectionCounts, StudentTempId};

/// Submission lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionEvent {
    /// The payload was handed to the sink
    Attempted,
    /// The sink accepted it
    Succeeded,
    /// The sink reported an error
    Failed,
}

impl std::fmt::Display for SubmissionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionEvent::Attempted => write!(f, "ATTEMPTED"),
            SubmissionEvent::Succeeded => write!(f, "SUCCEEDED"),
            SubmissionEvent::Failed => write!(f, "FAILED"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: AuditEntryId,

    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub event: SubmissionEvent,

    /// Session the submission belongs to
    pub student_temp_id: StudentTempId,

    /// Sizes of the list sections in the payload
    pub counts: SectionCounts,

    /// Permanent id handed back by the registrar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuditEntry {
    fn new(event: SubmissionEvent, temp_id: StudentTempId, counts: SectionCounts) -> Self {
        Self {
            id: AuditEntryId::new(),
            timestamp: Utc::now(),
            event,
            student_temp_id: temp_id,
            counts,
            student_id: None,
            error: None,
        }
    }

    pub fn attempted(temp_id: StudentTempId, counts: SectionCounts) -> Self {
        Self::new(SubmissionEvent::Attempted, temp_id, counts)
    }

    pub fn succeeded(
        temp_id: StudentTempId,
        counts: SectionCounts,
        student_id: Option<String>,
    ) -> Self {
        Self {
            student_id,
            ..Self::new(SubmissionEvent::Succeeded, temp_id, counts)
        }
    }

    pub fn failed(temp_id: StudentTempId, counts: SectionCounts, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::new(SubmissionEvent::Failed, temp_id, counts)
        }
    }

    /// One-line summary for terminal output
    pub fn format_human_readable(&self) -> String {
        let mut line = format!(
            "{} {} {} (schools: {}, family: {}, employment: {})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.event,
            self.student_temp_id,
            self.counts.past_schools,
            self.counts.family,
            self.counts.employment,
        );
        if let Some(id) = &self.student_id {
            line.push_str(&format!(" -> {}", id));
        }
        if let Some(error) = &self.error {
            line.push_str(&format!(": {}", error));
        }
        line
    }
}
