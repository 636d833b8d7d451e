//! Student registration - multi-step form orchestration
//!
//! This library collects a student's registration through five dependent
//! steps (personal, contact, academic, family, employment), validates each
//! step before allowing the user to move on, and submits the aggregated
//! record to a registrar backend in one call.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Section drafts, validated records and the payload
//! - `validation`: Pure per-step validators
//! - `store`: Shared form state for one session
//! - `wizard`: Step orchestrator (navigation, gating, submission)
//! - `client`: Registrar HTTP client, dry-run sink and the sink seams
//! - `audit`: Submission audit log
//! - `steps`: Interactive terminal forms, one per step
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use registration::wizard::{RegistrationWizard, StepOutcome};
//!
//! let mut wizard = RegistrationWizard::new(settings.year_horizon);
//! wizard.store_mut().set_personal_info(draft);
//! match wizard.advance(&sink).await? {
//!     StepOutcome::Invalid(errors) => println!("{}", errors),
//!     outcome => println!("{:?}", outcome),
//! }
//! ```

pub mod audit;
pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod steps;
pub mod store;
pub mod validation;
pub mod wizard;

pub use error::{RegistrationError, RegistrationResult};
pub use store::FormStore;
pub use wizard::{RegistrationWizard, Step, StepOutcome};
