//! Multi-step registration flow
//!
//! - [`Step`]: the five form pages and their order
//! - [`RegistrationWizard`]: navigation, validation gating and submission

pub mod orchestrator;
pub mod step;

pub use orchestrator::{Notice, NoticeKind, RegistrationWizard, StepOutcome};
pub use step::{Step, StepStatus};
