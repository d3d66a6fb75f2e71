//! Implementation of the `larascaff publish-api-routes` command.
//!
//! Installs the standardized API layer: the routes file, the base API
//! controller, the response code constants and the exception handler, then
//! registers the routes file in `bootstrap/app.php`.

use tracing::instrument;

use larascaff_adapters::{LocalFilesystem, assets};
use larascaff_core::{
    application::{PublishService, StepStatus, services::publish_service::bootstrap_app_path},
    domain::patch::api_route_registration,
};

use crate::{
    cli::PublishArgs,
    commands::{overwrite_prompter, render_patch_status, render_publish_report},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `larascaff publish-api-routes` command.
#[instrument(skip_all, fields(force = args.force))]
pub fn execute(args: PublishArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let app_root = config.resolve_app_root(args.app_root.as_ref());

    let prompter = overwrite_prompter(args.yes, output.is_quiet());
    let service = PublishService::new(Box::new(LocalFilesystem::new()), prompter);

    output.header("Publishing API files...")?;

    let assets = assets::api_assets();
    let report = service.publish_all(&app_root, &assets, args.force);

    // Register the routes file only when it actually landed on disk.
    let routes_published = report
        .steps
        .iter()
        .any(|(name, status)| *name == "API routes file" && matches!(status, StepStatus::Published));
    if routes_published {
        let bootstrap = bootstrap_app_path(&app_root);
        let status = service.patch_file(&bootstrap, &api_route_registration())?;
        render_patch_status(
            &status,
            "bootstrap/app.php",
            "API routes registered in bootstrap/app.php",
            "Could not update bootstrap/app.php, please register routes/api.php manually",
            &output,
        )?;
    }

    render_publish_report(&report, &output)?;

    output.print("")?;
    if report.published_any() {
        output.success("API files published successfully!")?;
    } else {
        output.info("All files already exist. Use --force to overwrite.")?;
    }

    Ok(())
}
