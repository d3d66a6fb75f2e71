//! Implementation of the `larascaff create` command.
//!
//! Responsibility: translate CLI arguments into validated entity names, call
//! the core generation service, and display results. No business logic lives
//! here.

use tracing::{debug, info, instrument};

use larascaff_adapters::LocalFilesystem;
use larascaff_core::{
    application::{GenerateService, PairOutcome, SetupState},
    domain::{DomainError, EntityName},
};

use crate::{
    cli::{CreateArgs, global::GlobalArgs},
    commands::overwrite_prompter,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `larascaff create` command.
///
/// Dispatch sequence:
/// 1. Validate the model name and the optional overrides
/// 2. Run the generation service against the application root
/// 3. Display what was created or skipped
/// 4. Record the one-time setup marker on the first successful run
#[instrument(skip_all, fields(model = %args.model))]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate names. Overrides fall back to the model name.
    let model = parse_entity_name(&args.model)?;
    let service = match &args.service {
        Some(raw) => parse_entity_name(raw)?,
        None => model.clone(),
    };
    let repository = match &args.repository {
        Some(raw) => parse_entity_name(raw)?,
        None => model.clone(),
    };

    let app_root = config.resolve_app_root(args.app_root.as_ref());

    debug!(
        service = %service,
        repository = %repository,
        app_root = %app_root.display(),
        "names resolved"
    );

    // 2. Generate. Only `--yes` grants overwrite consent; quiet mode
    // declines, so existing files survive a `-q` run.
    let prompter = overwrite_prompter(args.yes, global.quiet);
    let generator = GenerateService::new(Box::new(LocalFilesystem::new()), prompter);

    output.header(&format!("Creating classes for '{model}'..."))?;
    let report = generator.generate(&app_root, &service, &repository)?;
    info!(model = %model, "generation completed");

    // 3. Show results
    for dir in &report.created_dirs {
        output.print(&format!("  Created directory: {}", dir.display()))?;
    }
    render_pair(&report.service, "Service", &output)?;
    render_pair(&report.repository, "Repository", &output)?;

    // 4. One-time setup notice
    let fs = LocalFilesystem::new();
    let mut setup = SetupState::load(&fs, &app_root);
    if !setup.is_completed() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        match setup.mark_completed(&fs, &app_root, &timestamp) {
            Ok(()) => {
                output.print("")?;
                output.info("Larascaff base setup installed!")?;
                output.print("  Run 'larascaff publish' to install helpers and config")?;
                output.print("  Run 'larascaff publish-api-routes' to install the API layer")?;
            }
            // Advisory only; a read-only storage dir must not fail the command.
            Err(e) => debug!(error = %e, "could not record setup marker"),
        }
    }

    output.print("")?;
    output.success(&format!("Classes for '{model}' are ready!"))?;

    Ok(())
}

fn parse_entity_name(raw: &str) -> CliResult<EntityName> {
    EntityName::new(raw).map_err(|e| match e {
        DomainError::InvalidEntityName { name, reason } => {
            CliError::InvalidModelName { name, reason }
        }
    })
}

fn render_pair(outcome: &PairOutcome, label: &str, output: &OutputManager) -> CliResult<()> {
    match outcome {
        PairOutcome::Written { files } => {
            for file in files {
                output.success(&format!("{label} file created: {}", file.display()))?;
            }
        }
        PairOutcome::Skipped => {
            output.print(&format!("  {label} files skipped"))?;
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_model_is_capitalized() {
        let name = parse_entity_name("order").unwrap();
        assert_eq!(name.to_string(), "Order");
    }

    #[test]
    fn invalid_model_maps_to_cli_error() {
        let err = parse_entity_name("9lives").unwrap_err();
        assert!(matches!(err, CliError::InvalidModelName { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn empty_model_is_rejected() {
        assert!(parse_entity_name("").is_err());
    }
}
