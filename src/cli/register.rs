//! `enroll register`: the interactive five-step form

use std::io::{BufRead, Write};

use clap::Args;
use tracing::warn;

use crate::audit::{AuditLogger, AuditedSink};
use crate::client::{DryRunSink, HttpRegistrarClient, PrefillSource, SubmitSink};
use crate::config::{RegistrationPaths, Settings};
use crate::display::{format_field_errors, format_notice, format_review, format_step_header};
use crate::error::RegistrationResult;
use crate::models::StudentTempId;
use crate::steps::{fill_step, Prompter};
use crate::wizard::{RegistrationWizard, Step, StepOutcome};

#[derive(Args, Debug, Clone, Default)]
pub struct RegisterArgs {
    /// Print the payload instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Registrar base URL (overrides settings and STUDENT_REG_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Temp id the registrar issued for this student (tmp-<uuid>);
    /// personal info saved under it is loaded before step 1
    #[arg(long, value_name = "ID")]
    pub temp_id: Option<StudentTempId>,

    /// Skip looking up already-known personal info
    #[arg(long)]
    pub no_prefill: bool,
}

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub submitted: usize,
    pub failed_attempts: usize,
}

enum Navigation {
    Next,
    Back,
    Again,
    Quit,
}

fn navigation<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    step: Step,
) -> RegistrationResult<Navigation> {
    let prompt = if step.is_last() {
        "[s]ubmit, [b]ack, [e]dit again, [q]uit [s]: "
    } else {
        "[n]ext, [b]ack, [e]dit again, [q]uit [n]: "
    };
    loop {
        let answer = p.line(prompt)?;
        match answer.to_lowercase().as_str() {
            "" | "n" | "next" | "s" | "submit" => return Ok(Navigation::Next),
            "b" | "back" => return Ok(Navigation::Back),
            "e" | "edit" => return Ok(Navigation::Again),
            "q" | "quit" => return Ok(Navigation::Quit),
            _ => p.say("Unknown choice.")?,
        }
    }
}

/// Drive the wizard from a prompter until the user quits
pub async fn run_session<R: BufRead, W: Write>(
    wizard: &mut RegistrationWizard,
    p: &mut Prompter<R, W>,
    sink: &dyn SubmitSink,
) -> RegistrationResult<SessionSummary> {
    let mut summary = SessionSummary::default();
    let mut refill = true;

    loop {
        if let Some(notice) = wizard.notice() {
            p.say(format_notice(notice))?;
            wizard.dismiss_notice();
        }

        let step = wizard.current_step();
        if refill {
            p.say(format_step_header(wizard))?;
            let errors = wizard.errors().clone();
            if !errors.is_empty() {
                p.say(format_field_errors(&errors))?;
            }
            fill_step(step, p, wizard.store_mut(), &errors)?;
        }
        refill = true;

        match navigation(p, step)? {
            Navigation::Next => {}
            Navigation::Again => continue,
            Navigation::Back => {
                wizard.prev();
                continue;
            }
            Navigation::Quit => {
                if wizard.store().is_empty()
                    || p.confirm("Discard the entered data and quit?", false)?
                {
                    return Ok(summary);
                }
                refill = false;
                continue;
            }
        }

        match wizard.next()? {
            StepOutcome::ReadyToSubmit(payload) => {
                p.say(format_review(&payload))?;
                if !p.confirm("Submit this registration?", true)? {
                    wizard.cancel_submission()?;
                    continue;
                }
                let result = sink.submit(&payload).await;
                match wizard.complete_submission(result)? {
                    StepOutcome::Submitted(_) => {
                        summary.submitted += 1;
                        if let Some(notice) = wizard.notice() {
                            p.say(format_notice(notice))?;
                        }
                        wizard.dismiss_notice();
                        if !p.confirm("Register another student?", false)? {
                            return Ok(summary);
                        }
                    }
                    _ => {
                        summary.failed_attempts += 1;
                        refill = false;
                    }
                }
            }
            // Invalid steps are shown again with their errors
            _ => {}
        }
    }
}

/// Handle `enroll register`
pub async fn handle_register_command(
    paths: &RegistrationPaths,
    mut settings: Settings,
    args: RegisterArgs,
) -> RegistrationResult<SessionSummary> {
    if let Some(url) = args.api_url {
        settings.api_base_url = url;
    }

    let mut wizard = match args.temp_id {
        Some(temp_id) => RegistrationWizard::with_temp_id(settings.year_horizon, temp_id),
        None => RegistrationWizard::new(settings.year_horizon),
    };
    let client = HttpRegistrarClient::new(settings.clone())?;

    // A fresh temp id is unknown to the registrar, so only a supplied one is looked up
    if args.temp_id.is_some() && !args.dry_run && !args.no_prefill {
        let source: &dyn PrefillSource = &client;
        match wizard.prefill(source).await {
            Ok(true) => println!("Found saved personal info for this session."),
            Ok(false) => {}
            Err(e) => warn!(error = %e, "prefill unavailable"),
        }
    }

    let sink: Box<dyn SubmitSink> = if args.dry_run {
        Box::new(DryRunSink::stdout())
    } else {
        Box::new(client)
    };
    let sink: Box<dyn SubmitSink> = if settings.audit_enabled {
        paths.ensure_directories()?;
        Box::new(AuditedSink::new(sink, AuditLogger::new(paths.audit_log())))
    } else {
        sink
    };

    println!("Student registration");
    println!("Press Enter to keep a value, '-' to clear it. Fields marked * are required.");
    println!();

    // Prompts block this runtime thread; the session is the only task on it
    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
    run_session(&mut wizard, &mut prompter, sink.as_ref()).await
}
