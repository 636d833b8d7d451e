use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use registration::cli::{
    handle_history_command, handle_register_command, handle_validate_command, RegisterArgs,
};
use registration::config::{RegistrationPaths, Settings};

#[derive(Parser)]
#[command(
    name = "enroll",
    version,
    about = "Terminal-based multi-step student registration",
    long_about = "Collects personal, contact, academic, family and employment details \
                  one step at a time, validates each step before moving on, and submits \
                  the whole registration to the registrar in a single request."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in and submit a registration interactively
    Register(RegisterArgs),

    /// Validate one section stored in a JSON or YAML file
    Validate {
        /// Section: personal, contact, academic, family or employment
        section: String,
        /// Path to the draft file
        file: PathBuf,
    },

    /// Show recent submission attempts from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout is for prompts
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let paths = RegistrationPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Register(args)) => {
            let summary = handle_register_command(&paths, settings, args).await?;
            println!(
                "Submitted {} registration(s), {} failed attempt(s).",
                summary.submitted, summary.failed_attempts
            );
        }
        Some(Commands::Validate { section, file }) => {
            if !handle_validate_command(&section, &file, settings.year_horizon)? {
                std::process::exit(1);
            }
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&paths, limit)?;
        }
        Some(Commands::Config) => {
            println!("Student Registration Configuration");
            println!("==================================");
            println!("Data directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  API base URL:    {}", settings.api_base_url);
            println!("  Submit URL:      {}", settings.submit_url());
            println!("  Prefill URL:     {}", settings.prefill_url("<temp-id>"));
            println!("  Request timeout: {}s", settings.request_timeout_secs);
            println!("  Year horizon:    {}", settings.year_horizon);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        None => {
            println!("enroll - Multi-step student registration");
            println!();
            println!("Run 'enroll --help' for usage information.");
            println!("Run 'enroll register' to start a registration.");
        }
    }

    Ok(())
}
