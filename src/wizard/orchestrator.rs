//! Step orchestrator
//!
//! [`RegistrationWizard`] owns the form store and the current step. Moving
//! forward runs the current step's validator; moving back never does. At
//! the last step a successful validation aggregates every section into a
//! [`RegistrationPayload`] and marks a submission in flight until its result
//! is reported back.

use tracing::{debug, info, warn};

use super::step::{Step, StepStatus};
use crate::client::{ClientError, PrefillSource, SubmitReceipt, SubmitSink};
use crate::error::{RegistrationError, RegistrationResult};
use crate::models::{
    AcademicInfo, ContactInfo, EmploymentRecord, ParentInfo, PersonalInfo, RegistrationPayload,
    StudentTempId,
};
use crate::store::FormStore;
use crate::validation::{
    validate_academic, validate_contact, validate_employment, validate_family,
    validate_personal, FieldErrors, ValidationContext,
};

const SUBMIT_FAILED: &str = "An error occurred while submitting the form. Please try again.";

/// Result of trying to move forward
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// The current step validated and the wizard moved to this step
    Advanced(Step),
    /// The current step did not validate; the wizard stayed put
    Invalid(FieldErrors),
    /// Every step validated; the payload must now be submitted
    ReadyToSubmit(Box<RegistrationPayload>),
    /// A submission is already in flight
    Busy,
    /// The registrar accepted the payload and the wizard was reset
    Submitted(SubmitReceipt),
    /// The registrar call failed; data is kept for a retry
    SubmitFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A dismissible banner message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Submission {
    Idle,
    InFlight,
}

/// Records from the last successful validation of each step
#[derive(Debug, Default)]
struct Validated {
    personal: Option<PersonalInfo>,
    contact: Option<ContactInfo>,
    academic: Option<AcademicInfo>,
    family: Option<Vec<ParentInfo>>,
    employment: Option<Vec<EmploymentRecord>>,
}

/// Multi-step registration state machine
#[derive(Debug)]
pub struct RegistrationWizard {
    store: FormStore,
    current: Step,
    temp_id: StudentTempId,
    year_horizon: u16,
    validated: Validated,
    submission: Submission,
    errors: FieldErrors,
    notice: Option<Notice>,
}

impl RegistrationWizard {
    /// Start a fresh session at step 1 with an empty store
    pub fn new(year_horizon: u16) -> Self {
        Self::with_temp_id(year_horizon, StudentTempId::new())
    }

    /// Start a session for a temp id the registrar already issued, so
    /// [`prefill`](Self::prefill) can find it
    pub fn with_temp_id(year_horizon: u16, temp_id: StudentTempId) -> Self {
        info!(temp_id = %temp_id, "registration session started");
        Self {
            store: FormStore::new(),
            current: Step::first(),
            temp_id,
            year_horizon,
            validated: Validated::default(),
            submission: Submission::Idle,
            errors: FieldErrors::new(),
            notice: None,
        }
    }

    pub fn current_step(&self) -> Step {
        self.current
    }

    pub fn temp_id(&self) -> StudentTempId {
        self.temp_id
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut FormStore {
        &mut self.store
    }

    /// Field errors from the last failed `next`
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == Submission::InFlight
    }

    pub fn step_status(&self, step: Step) -> StepStatus {
        match step.cmp(&self.current) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }

    /// Share of steps reached, 20 at step 1 and 100 at step 5
    pub fn progress_percent(&self) -> u8 {
        let percent = self.current.number() as f64 / Step::COUNT as f64 * 100.0;
        percent.round() as u8
    }

    fn context(&self) -> ValidationContext {
        ValidationContext::new(self.temp_id, self.year_horizon)
    }

    /// Validate the current step and keep its record on success
    fn validate_current(&mut self) -> Result<(), FieldErrors> {
        let ctx = self.context();
        match self.current {
            Step::Personal => {
                self.validated.personal = Some(validate_personal(self.store.personal_info(), &ctx)?)
            }
            Step::Contact => {
                self.validated.contact = Some(validate_contact(self.store.contact_info(), &ctx)?)
            }
            Step::Academic => {
                self.validated.academic = Some(validate_academic(self.store.academic_info(), &ctx)?)
            }
            Step::Family => {
                self.validated.family = Some(validate_family(self.store.family_info(), &ctx)?)
            }
            Step::Employment => {
                self.validated.employment =
                    Some(validate_employment(self.store.employment_history(), &ctx)?)
            }
        }
        Ok(())
    }

    fn aggregate(&self) -> RegistrationResult<RegistrationPayload> {
        let v = &self.validated;
        Ok(RegistrationPayload {
            personal: v
                .personal
                .clone()
                .ok_or(RegistrationError::IncompleteSection("personal"))?,
            contact: v
                .contact
                .clone()
                .ok_or(RegistrationError::IncompleteSection("contact"))?,
            academic: v
                .academic
                .clone()
                .ok_or(RegistrationError::IncompleteSection("academic"))?,
            family: v
                .family
                .clone()
                .ok_or(RegistrationError::IncompleteSection("family"))?,
            employment: v
                .employment
                .clone()
                .ok_or(RegistrationError::IncompleteSection("employment"))?,
        })
    }

    /// Validate the current step and move forward.
    ///
    /// At the last step this returns the aggregated payload and marks a
    /// submission in flight; report its result with
    /// [`complete_submission`](Self::complete_submission).
    pub fn next(&mut self) -> RegistrationResult<StepOutcome> {
        if self.is_submitting() {
            debug!("next ignored, submission in flight");
            return Ok(StepOutcome::Busy);
        }

        if let Err(errors) = self.validate_current() {
            warn!(step = %self.current, count = errors.len(), "step failed validation");
            self.errors = errors.clone();
            return Ok(StepOutcome::Invalid(errors));
        }
        self.errors = FieldErrors::new();

        match self.current.next() {
            Some(step) => {
                debug!(from = %self.current, to = %step, "advancing");
                self.current = step;
                Ok(StepOutcome::Advanced(step))
            }
            None => {
                let payload = self.aggregate()?;
                self.submission = Submission::InFlight;
                self.notice = None;
                info!(temp_id = %self.temp_id, "submission started");
                Ok(StepOutcome::ReadyToSubmit(Box::new(payload)))
            }
        }
    }

    /// Report the outcome of the submission started by `next`
    pub fn complete_submission(
        &mut self,
        result: Result<SubmitReceipt, ClientError>,
    ) -> RegistrationResult<StepOutcome> {
        if !self.is_submitting() {
            return Err(RegistrationError::NoSubmissionInFlight);
        }
        self.submission = Submission::Idle;

        match result {
            Ok(receipt) => {
                info!(
                    temp_id = %self.temp_id,
                    student_id = receipt.student_id.as_deref().unwrap_or("-"),
                    "submission accepted"
                );
                self.reset();
                let message = match &receipt.student_id {
                    Some(id) => format!("Registration submitted. Student ID: {}", id),
                    None => "Registration submitted.".to_string(),
                };
                self.notice = Some(Notice::success(message));
                Ok(StepOutcome::Submitted(receipt))
            }
            Err(err) => {
                warn!(temp_id = %self.temp_id, error = %err, "submission failed");
                let message = format!("{} ({})", SUBMIT_FAILED, err);
                self.notice = Some(Notice::error(message.clone()));
                Ok(StepOutcome::SubmitFailed(message))
            }
        }
    }

    /// Abandon the submission started by `next` without calling the sink.
    /// Data and step are kept.
    pub fn cancel_submission(&mut self) -> RegistrationResult<()> {
        if !self.is_submitting() {
            return Err(RegistrationError::NoSubmissionInFlight);
        }
        debug!("submission cancelled before sending");
        self.submission = Submission::Idle;
        Ok(())
    }

    /// `next`, plus the submission call when the last step validates
    pub async fn advance(&mut self, sink: &dyn SubmitSink) -> RegistrationResult<StepOutcome> {
        match self.next()? {
            StepOutcome::ReadyToSubmit(payload) => {
                let result = sink.submit(&payload).await;
                self.complete_submission(result)
            }
            other => Ok(other),
        }
    }

    /// Move back one step; a no-op at step 1
    pub fn prev(&mut self) -> Step {
        if let Some(step) = self.current.prev() {
            debug!(from = %self.current, to = %step, "going back");
            self.current = step;
        }
        self.errors = FieldErrors::new();
        self.current
    }

    /// Merge whatever the registrar already knows about this session's
    /// personal info into the store. Returns whether anything was merged.
    pub async fn prefill(&mut self, source: &dyn PrefillSource) -> RegistrationResult<bool> {
        match source.fetch_personal(&self.temp_id).await? {
            Some(draft) if !draft.is_empty() => {
                debug!(temp_id = %self.temp_id, "prefilling personal info");
                self.store.set_personal_info(draft);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn reset(&mut self) {
        self.store.clear();
        self.validated = Validated::default();
        self.errors = FieldErrors::new();
        self.current = Step::first();
        self.temp_id = StudentTempId::new();
        info!(temp_id = %self.temp_id, "wizard reset");
    }
}
