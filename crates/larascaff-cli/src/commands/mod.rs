//! Command handlers.
//!
//! Each module translates parsed CLI arguments into core service calls and
//! renders the results. No business logic lives here.

pub mod completions;
pub mod create;
pub mod publish;
pub mod publish_api_routes;

use larascaff_adapters::{StaticPrompter, StdinPrompter};
use larascaff_core::application::{PatchStatus, PublishReport, StepStatus, ports::Prompter};

use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

/// Overwrite-consent policy shared by the interactive commands.
///
/// `--yes` answers every overwrite question with yes. Quiet mode cannot read
/// an answer from the operator, so it declines; existing files are left
/// untouched. Everything else asks on stdin.
pub(crate) fn overwrite_prompter(yes: bool, quiet: bool) -> Box<dyn Prompter> {
    if yes {
        Box::new(StaticPrompter::always(true))
    } else if quiet {
        Box::new(StaticPrompter::always(false))
    } else {
        Box::new(StdinPrompter::new())
    }
}

/// Render per-step publish results and surface the first failure, if any.
///
/// Failed steps have already been logged by the service; here they become
/// visible error lines, and the command exits non-zero once the remaining
/// steps have run.
pub(crate) fn render_publish_report(
    report: &PublishReport,
    output: &OutputManager,
) -> CliResult<()> {
    let mut first_failure: Option<CliError> = None;

    for (name, status) in &report.steps {
        match status {
            StepStatus::Published => output.success(&format!("{name} published"))?,
            StepStatus::Skipped => output.print(&format!("  {name} skipped"))?,
            StepStatus::Failed(e) => {
                output.error(&format!("{name} failed: {e}"))?;
                if first_failure.is_none() {
                    first_failure = Some(CliError::Core(e.clone()));
                }
            }
        }
    }

    match first_failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Render the outcome of one host-file patch with advisory fallbacks.
pub(crate) fn render_patch_status(
    status: &PatchStatus,
    file: &str,
    patched_msg: &str,
    no_match_msg: &str,
    output: &OutputManager,
) -> CliResult<()> {
    match status {
        PatchStatus::Patched => output.success(patched_msg)?,
        PatchStatus::AlreadyPatched => output.print(&format!("  {file} already up to date"))?,
        PatchStatus::NoMatch => output.warning(no_match_msg)?,
        PatchStatus::MissingFile => {
            output.warning(&format!("{file} not found, skipping update"))?
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_grants_every_overwrite() {
        let prompter = overwrite_prompter(true, false);
        assert!(prompter.confirm("Overwrite?").unwrap());
    }

    #[test]
    fn quiet_declines_instead_of_consenting() {
        let prompter = overwrite_prompter(false, true);
        assert!(!prompter.confirm("Overwrite?").unwrap());
    }

    #[test]
    fn yes_wins_over_quiet() {
        let prompter = overwrite_prompter(true, true);
        assert!(prompter.confirm("Overwrite?").unwrap());
    }
}
