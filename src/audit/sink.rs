//! Submit sink decorator that records every attempt

use async_trait::async_trait;

use super::entry::AuditEntry;
use super::logger::AuditLogger;
use crate::client::{ClientError, SubmitReceipt, SubmitSink};
use crate::models::{RegistrationPayload, StudentTempId};

/// Wraps another sink and appends attempted/succeeded/failed entries.
///
/// Audit write failures are logged and otherwise ignored; they never change
/// the outcome of the submission.
pub struct AuditedSink<S> {
    inner: S,
    logger: AuditLogger,
}

impl<S: SubmitSink> AuditedSink<S> {
    pub fn new(inner: S, logger: AuditLogger) -> Self {
        Self { inner, logger }
    }

    fn record(&self, entry: AuditEntry) {
        if let Err(e) = self.logger.log(&entry) {
            tracing::warn!(error = %e, "could not write audit entry");
        }
    }
}

fn temp_id_of(payload: &RegistrationPayload) -> StudentTempId {
    payload
        .personal
        .student_temp_id
        .parse()
        .unwrap_or_else(|_| StudentTempId::from(uuid::Uuid::nil()))
}

#[async_trait]
impl<S: SubmitSink> SubmitSink for AuditedSink<S> {
    async fn submit(&self, payload: &RegistrationPayload) -> Result<SubmitReceipt, ClientError> {
        let temp_id = temp_id_of(payload);
        let counts = payload.counts();
        self.record(AuditEntry::attempted(temp_id, counts));

        let result = self.inner.submit(payload).await;
        match &result {
            Ok(receipt) => {
                self.record(AuditEntry::succeeded(
                    temp_id,
                    counts,
                    receipt.student_id.clone(),
                ));
            }
            Err(err) => self.record(AuditEntry::failed(temp_id, counts, err.to_string())),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::SubmissionEvent;
    use crate::validation::fixtures::{
        minimal_academic, minimal_contact, minimal_parent, minimal_personal,
    };
    use crate::validation::{
        validate_academic, validate_contact, validate_family, validate_personal,
        ValidationContext,
    };
    use tempfile::TempDir;

    struct Failing;

    #[async_trait]
    impl SubmitSink for Failing {
        async fn submit(&self, _: &RegistrationPayload) -> Result<SubmitReceipt, ClientError> {
            Err(ClientError::Timeout)
        }
    }

    struct Accepting;

    #[async_trait]
    impl SubmitSink for Accepting {
        async fn submit(&self, _: &RegistrationPayload) -> Result<SubmitReceipt, ClientError> {
            Ok(SubmitReceipt {
                student_id: Some("STD-9001".into()),
            })
        }
    }

    fn payload(ctx: &ValidationContext) -> RegistrationPayload {
        RegistrationPayload {
            personal: validate_personal(&minimal_personal(), ctx).unwrap(),
            contact: validate_contact(&minimal_contact(), ctx).unwrap(),
            academic: validate_academic(&minimal_academic(), ctx).unwrap(),
            family: validate_family(&[minimal_parent()], ctx).unwrap(),
            employment: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_records_attempt_and_outcome() {
        let temp = TempDir::new().unwrap();
        let log_path = temp.path().join("audit.log");
        let ctx = ValidationContext::new(StudentTempId::new(), 5);
        let payload = payload(&ctx);

        let sink = AuditedSink::new(Failing, AuditLogger::new(log_path.clone()));
        assert_eq!(sink.submit(&payload).await, Err(ClientError::Timeout));

        let sink = AuditedSink::new(Accepting, AuditLogger::new(log_path.clone()));
        let receipt = sink.submit(&payload).await.unwrap();
        assert_eq!(receipt.student_id.as_deref(), Some("STD-9001"));

        let entries = AuditLogger::new(log_path).read_all().unwrap();
        let events: Vec<SubmissionEvent> = entries.iter().map(|e| e.event).collect();
        assert_eq!(
            events,
            vec![
                SubmissionEvent::Attempted,
                SubmissionEvent::Failed,
                SubmissionEvent::Attempted,
                SubmissionEvent::Succeeded,
            ]
        );
        assert!(entries.iter().all(|e| e.student_temp_id == ctx.student_temp_id));
        assert_eq!(entries[3].counts.family, 1);
        assert_eq!(entries[3].student_id.as_deref(), Some("STD-9001"));
    }

    #[tokio::test]
    async fn test_log_contains_no_personal_values() {
        let temp = TempDir::new().unwrap();
        let log_path = temp.path().join("audit.log");
        let ctx = ValidationContext::new(StudentTempId::new(), 5);

        let sink = AuditedSink::new(Accepting, AuditLogger::new(log_path.clone()));
        sink.submit(&payload(&ctx)).await.unwrap();

        let raw = std::fs::read_to_string(log_path).unwrap();
        assert!(!raw.contains("Abebe"));
        assert!(!raw.contains("0911223344"));
    }

    #[tokio::test]
    async fn test_unwritable_log_does_not_fail_submission() {
        let temp = TempDir::new().unwrap();
        let log_path = temp.path().join("missing-dir").join("audit.log");
        let ctx = ValidationContext::new(StudentTempId::new(), 5);

        let sink = AuditedSink::new(Accepting, AuditLogger::new(log_path));
        assert!(sink.submit(&payload(&ctx)).await.is_ok());
    }
}
