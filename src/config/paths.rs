//! Path management for student registration
//!
//! ## Path Resolution Order
//!
//! 1. `STUDENT_REG_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/student-registration` or `~/.config/student-registration`
//! 3. Windows: `%APPDATA%\student-registration`

use std::path::PathBuf;

use crate::error::RegistrationError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "STUDENT_REG_DATA_DIR";

const APP_DIR_NAME: &str = "student-registration";

/// Manages all paths used by the registration client
#[derive(Debug, Clone)]
pub struct RegistrationPaths {
    base_dir: PathBuf,
}

impl RegistrationPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home/config directory
    /// can be determined.
    pub fn new() -> Result<Self, RegistrationError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the submission audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), RegistrationError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            RegistrationError::Io(format!("Failed to create data directory: {}", e))
        })
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, RegistrationError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                RegistrationError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join(APP_DIR_NAME))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, RegistrationError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| RegistrationError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}
