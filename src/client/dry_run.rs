//! Submission sink that prints instead of posting

use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ClientError, SubmitReceipt, SubmitSink};
use crate::models::RegistrationPayload;

/// Writes each payload as pretty JSON to `out`
pub struct DryRunSink<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> DryRunSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> Result<W, ClientError> {
        self.out
            .into_inner()
            .map_err(|e| ClientError::Output(e.to_string()))
    }
}

impl DryRunSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

#[async_trait]
impl<W: Write + Send> SubmitSink for DryRunSink<W> {
    async fn submit(&self, payload: &RegistrationPayload) -> Result<SubmitReceipt, ClientError> {
        let json = serde_json::to_string_pretty(payload)
            .map_err(|e| ClientError::Output(e.to_string()))?;

        let mut out = self
            .out
            .lock()
            .map_err(|e| ClientError::Output(e.to_string()))?;
        writeln!(out, "{}", json).map_err(|e| ClientError::Output(e.to_string()))?;
        out.flush().map_err(|e| ClientError::Output(e.to_string()))?;

        Ok(SubmitReceipt::default())
    }
}
