//! `enroll history`: recent submission attempts

use crate::audit::AuditLogger;
use crate::config::RegistrationPaths;
use crate::error::RegistrationResult;

/// Print the last `limit` audit entries, oldest first
pub fn handle_history_command(paths: &RegistrationPaths, limit: usize) -> RegistrationResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    if !logger.exists() {
        println!("No submissions recorded yet.");
        return Ok(());
    }

    let entries = logger.read_recent(limit)?;
    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    println!("\nShowing {} entr{}", entries.len(), if entries.len() == 1 { "y" } else { "ies" });
    Ok(())
}
