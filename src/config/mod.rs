//! Configuration module
//!
//! - Path resolution for the settings file and audit log
//! - Settings persistence (backend location, timeouts, validation horizon)

pub mod paths;
pub mod settings;

pub use paths::RegistrationPaths;
pub use settings::Settings;
