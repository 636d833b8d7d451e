//! HTTP registrar client

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use super::{ClientError, PrefillSource, SubmitReceipt, SubmitSink};
use crate::config::Settings;
use crate::models::{
    known_fields_from_value, PersonalInfoDraft, RegistrationPayload, StudentTempId,
};

/// Talks to the registrar REST API
#[derive(Clone)]
pub struct HttpRegistrarClient {
    http: reqwest::Client,
    settings: Settings,
}

impl HttpRegistrarClient {
    /// Build a client using the URLs and timeout from `settings`
    pub fn new(settings: Settings) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .map_err(|e| ClientError::Connection(e.to_string()))?;
        Ok(Self { http, settings })
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        req.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout
            } else {
                ClientError::Connection(format!("{}: {e}", self.settings.api_base_url))
            }
        })
    }

    async fn reject(resp: reqwest::Response) -> ClientError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        ClientError::Rejected { status, body }
    }
}

#[async_trait]
impl SubmitSink for HttpRegistrarClient {
    async fn submit(&self, payload: &RegistrationPayload) -> Result<SubmitReceipt, ClientError> {
        let url = self.settings.submit_url();
        tracing::debug!(%url, "posting registration");

        let resp = self.send(self.http.post(&url).json(payload)).await?;
        if !resp.status().is_success() {
            return Err(Self::reject(resp).await);
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        if body.trim().is_empty() {
            return Ok(SubmitReceipt::default());
        }
        // A non-JSON success body still counts as accepted
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}

#[async_trait]
impl PrefillSource for HttpRegistrarClient {
    async fn fetch_personal(
        &self,
        temp_id: &StudentTempId,
    ) -> Result<Option<PersonalInfoDraft>, ClientError> {
        let url = self.settings.prefill_url(&temp_id.as_key());
        tracing::debug!(%url, "looking up prefill");

        let resp = self.send(self.http.get(&url)).await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(Self::reject(resp).await);
        }

        let record: Value = resp
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        // Registrar records carry other columns; numbers are taken as text
        known_fields_from_value::<PersonalInfoDraft>(&record)
            .map(Some)
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
