//! Implementation of the `larascaff publish` command.
//!
//! Publishes the base setup files (helpers and package config) and wires the
//! binding registration into the host's `AppServiceProvider`.

use tracing::instrument;

use larascaff_adapters::{LocalFilesystem, assets};
use larascaff_core::{
    application::{PublishService, services::publish_service::app_service_provider_path},
    domain::patch::{binding_methods_block, register_bindings_call},
};

use crate::{
    cli::PublishArgs,
    commands::{overwrite_prompter, render_patch_status, render_publish_report},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `larascaff publish` command.
#[instrument(skip_all, fields(force = args.force))]
pub fn execute(args: PublishArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let app_root = config.resolve_app_root(args.app_root.as_ref());

    let prompter = overwrite_prompter(args.yes, output.is_quiet());
    let service = PublishService::new(Box::new(LocalFilesystem::new()), prompter);

    output.header("Publishing base setup files...")?;

    let report = service.publish_all(&app_root, &assets::base_assets(), args.force);

    // Wire the provider regardless of what was published; both patches are
    // individually idempotent.
    let provider = app_service_provider_path(&app_root);
    let provider_name = "app/Providers/AppServiceProvider.php";

    let call = service.patch_file(&provider, &register_bindings_call())?;
    render_patch_status(
        &call,
        provider_name,
        "AppServiceProvider updated with binding registration",
        "AppServiceProvider register() method not found, skipping update",
        &output,
    )?;

    let block = service.patch_file(&provider, &binding_methods_block())?;
    render_patch_status(
        &block,
        provider_name,
        "registerServiceAndRepositories() added to AppServiceProvider",
        "AppServiceProvider class body not found, skipping update",
        &output,
    )?;

    render_publish_report(&report, &output)?;

    output.print("")?;
    if report.published_any() {
        output.success("Base setup files published successfully!")?;
    } else {
        output.info("All files already exist. Use --force to overwrite.")?;
    }

    Ok(())
}
