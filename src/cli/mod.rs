//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the registration wizard.

pub mod history;
pub mod register;
pub mod validate;

pub use history::handle_history_command;
pub use register::{handle_register_command, run_session, RegisterArgs, SessionSummary};
pub use validate::{handle_validate_command, validate_document};
