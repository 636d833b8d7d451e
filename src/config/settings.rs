//! User settings for the registration client
//!
//! Where the registrar backend lives, how long to wait for it, and a few
//! validation and audit preferences.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::RegistrationPaths;
use crate::error::RegistrationError;

/// Environment variable that overrides `api_base_url`
pub const API_URL_ENV: &str = "STUDENT_REG_API_URL";

/// Largest accepted `year_horizon`
pub const MAX_YEAR_HORIZON: u16 = 100;

/// Settings for the registration client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the registrar backend
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Path the aggregated registration is posted to
    #[serde(default = "default_submit_path")]
    pub submit_path: String,

    /// Path prefix for prefill lookups by temp id
    #[serde(default = "default_prefill_path")]
    pub prefill_path: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How many years past the current one a year field may name
    #[serde(default = "default_year_horizon")]
    pub year_horizon: u16,

    /// Whether submission attempts are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_submit_path() -> String {
    "/submitForm".to_string()
}

fn default_prefill_path() -> String {
    "/tempStudents".to_string()
}

fn default_request_timeout_secs() -> u64 {
    25
}

fn default_year_horizon() -> u16 {
    5
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            submit_path: default_submit_path(),
            prefill_path: default_prefill_path(),
            request_timeout_secs: default_request_timeout_secs(),
            year_horizon: default_year_horizon(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    ///
    /// `STUDENT_REG_API_URL` is applied on top of whatever was loaded.
    pub fn load_or_create(paths: &RegistrationPaths) -> Result<Self, RegistrationError> {
        let settings_path = paths.settings_file();

        let mut settings = if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                RegistrationError::Io(format!("Failed to read settings file: {}", e))
            })?;

            serde_json::from_str::<Settings>(&contents).map_err(|e| {
                RegistrationError::Config(format!("Failed to parse settings file: {}", e))
            })?
        } else {
            Settings::default()
        };

        if settings.year_horizon > MAX_YEAR_HORIZON {
            return Err(RegistrationError::Config(format!(
                "year_horizon must be at most {}, got {}",
                MAX_YEAR_HORIZON, settings.year_horizon
            )));
        }

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                settings.api_base_url = url;
            }
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RegistrationPaths) -> Result<(), RegistrationError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            RegistrationError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            RegistrationError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Full URL the registration is posted to
    pub fn submit_url(&self) -> String {
        join_url(&self.api_base_url, &self.submit_path)
    }

    /// Full URL of the prefill lookup for one temp id
    pub fn prefill_url(&self, temp_id: &str) -> String {
        format!("{}/{}", join_url(&self.api_base_url, &self.prefill_path), temp_id)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
