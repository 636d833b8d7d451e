//! Registrar backend access
//!
//! The wizard talks to the outside world through two seams: a
//! [`SubmitSink`] that receives the aggregated payload, and a
//! [`PrefillSource`] that may know part of a student's personal info ahead of
//! time. [`HttpRegistrarClient`] implements both over HTTP; [`DryRunSink`]
//! prints the payload instead of sending it.

pub mod dry_run;
pub mod http;

pub use dry_run::DryRunSink;
pub use http::HttpRegistrarClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{PersonalInfoDraft, RegistrationPayload, StudentTempId};

/// Errors from the registrar client layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Cannot reach the registrar
    #[error("Cannot connect to registrar: {0}")]
    Connection(String),

    /// No response within the configured timeout
    #[error("Registrar did not respond in time")]
    Timeout,

    /// The registrar answered with a non-success status
    #[error("Registrar rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The response body could not be understood
    #[error("Unexpected response from registrar: {0}")]
    Decode(String),

    /// Local output failed (dry runs)
    #[error("Failed to write submission: {0}")]
    Output(String),
}

/// What the registrar hands back for an accepted registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    /// Permanent student id, when the backend assigns one
    #[serde(default, alias = "studentId")]
    pub student_id: Option<String>,
}

/// Destination for a completed registration
#[async_trait]
pub trait SubmitSink: Send + Sync {
    async fn submit(&self, payload: &RegistrationPayload) -> Result<SubmitReceipt, ClientError>;
}

#[async_trait]
impl<T: SubmitSink + ?Sized> SubmitSink for Box<T> {
    async fn submit(&self, payload: &RegistrationPayload) -> Result<SubmitReceipt, ClientError> {
        (**self).submit(payload).await
    }
}

/// Lookup of personal info already known for a temp id
#[async_trait]
pub trait PrefillSource: Send + Sync {
    /// `Ok(None)` when there is nothing to prefill
    async fn fetch_personal(
        &self,
        temp_id: &StudentTempId,
    ) -> Result<Option<PersonalInfoDraft>, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_accepts_either_key() {
        let receipt: SubmitReceipt = serde_json::from_str(r#"{"student_id": "STD-1"}"#).unwrap();
        assert_eq!(receipt.student_id.as_deref(), Some("STD-1"));

        let receipt: SubmitReceipt = serde_json::from_str(r#"{"studentId": "STD-2"}"#).unwrap();
        assert_eq!(receipt.student_id.as_deref(), Some("STD-2"));

        let receipt: SubmitReceipt = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        assert_eq!(receipt.student_id, None);
    }

    #[test]
    fn test_error_display() {
        let err = ClientError::Rejected {
            status: 422,
            body: "bad sex".into(),
        };
        assert_eq!(err.to_string(), "Registrar rejected the request (422): bad sex");
    }
}
