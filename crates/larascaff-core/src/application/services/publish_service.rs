//! Publish Service - asset publishing and host-file patching.
//!
//! Drives the `publish` and `publish-api-routes` use cases:
//! - copy embedded asset files into the host application, prompting before
//!   overwrite unless `--force`
//! - apply marker-guarded patches to known host files
//!
//! Fault policy: an I/O failure aborts the step it occurred in; the batch
//! keeps going and the per-step outcome is reported back, so one unwritable
//! directory never cancels the other assets.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{Filesystem, Prompter},
    domain::{PatchOutcome, SourcePatch},
    error::{LarascaffError, LarascaffResult},
};

/// One publishable asset: embedded content plus its target inside the host
/// application. Assets ship inside the binary, so a missing source file is
/// impossible by construction.
#[derive(Debug, Clone)]
pub struct Asset {
    /// Display name ("API routes", "BaseApiController", ...).
    pub name: &'static str,
    /// Target path relative to the application root.
    pub target: &'static str,
    /// File content to write.
    pub content: &'static str,
    /// Optional single textual substitution applied before writing
    /// (package namespace -> application namespace).
    pub substitution: Option<(&'static str, &'static str)>,
}

impl Asset {
    /// The exact bytes this asset writes.
    pub fn rendered(&self) -> String {
        match self.substitution {
            Some((from, to)) => self.content.replace(from, to),
            None => self.content.to_string(),
        }
    }
}

/// Outcome of publishing a single asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Published,
    /// Target existed and the operator declined the overwrite.
    Skipped,
}

/// Outcome of one step in a publish batch.
#[derive(Debug, Clone)]
pub enum StepStatus {
    Published,
    Skipped,
    /// The step failed; the batch continued without it.
    Failed(LarascaffError),
}

/// Per-step results of a publish batch.
#[derive(Debug, Clone, Default)]
pub struct PublishReport {
    pub steps: Vec<(&'static str, StepStatus)>,
}

impl PublishReport {
    pub fn published_any(&self) -> bool {
        self.steps
            .iter()
            .any(|(_, status)| matches!(status, StepStatus::Published))
    }

    pub fn failed_any(&self) -> bool {
        self.steps
            .iter()
            .any(|(_, status)| matches!(status, StepStatus::Failed(_)))
    }
}

/// Result of patching a host file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchStatus {
    Patched,
    AlreadyPatched,
    /// Anchor not found; file left untouched.
    NoMatch,
    /// Host file does not exist; nothing to patch.
    MissingFile,
}

/// Main publishing service.
pub struct PublishService {
    filesystem: Box<dyn Filesystem>,
    prompter: Box<dyn Prompter>,
}

impl PublishService {
    pub fn new(filesystem: Box<dyn Filesystem>, prompter: Box<dyn Prompter>) -> Self {
        Self {
            filesystem,
            prompter,
        }
    }

    /// Publish a batch of assets, continuing past individual failures.
    #[instrument(skip_all, fields(assets = assets.len(), force))]
    pub fn publish_all(&self, app_root: &Path, assets: &[Asset], force: bool) -> PublishReport {
        let mut report = PublishReport::default();
        for asset in assets {
            let status = match self.publish_asset(app_root, asset, force) {
                Ok(PublishOutcome::Published) => StepStatus::Published,
                Ok(PublishOutcome::Skipped) => StepStatus::Skipped,
                Err(e) => {
                    warn!(asset = asset.name, error = %e, "publish step failed, continuing");
                    StepStatus::Failed(e)
                }
            };
            report.steps.push((asset.name, status));
        }
        report
    }

    /// Publish one asset.
    ///
    /// Existing target + no `force` -> ask the operator; declined ->
    /// `Skipped` without touching the file's bytes. Otherwise parent
    /// directories are created as needed and the content written, so reruns
    /// with `force` are byte-identical as long as the embedded asset is.
    pub fn publish_asset(
        &self,
        app_root: &Path,
        asset: &Asset,
        force: bool,
    ) -> LarascaffResult<PublishOutcome> {
        let target = app_root.join(asset.target);

        if self.filesystem.exists(&target) && !force {
            let question = format!("{} already exists. Do you want to overwrite it?", asset.name);
            if !self.prompter.confirm(&question)? {
                return Ok(PublishOutcome::Skipped);
            }
        }

        if let Some(parent) = target.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&target, &asset.rendered())?;
        info!(asset = asset.name, target = %target.display(), "asset published");
        Ok(PublishOutcome::Published)
    }

    /// Apply a source patch to a host file, writing back only on a match.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn patch_file(&self, path: &Path, patch: &SourcePatch) -> LarascaffResult<PatchStatus> {
        if !self.filesystem.exists(path) {
            return Ok(PatchStatus::MissingFile);
        }

        let content = self.filesystem.read_file(path)?;
        match patch.apply(&content) {
            PatchOutcome::Patched(updated) => {
                self.filesystem.write_file(path, &updated)?;
                info!("host file patched");
                Ok(PatchStatus::Patched)
            }
            PatchOutcome::AlreadyPatched => Ok(PatchStatus::AlreadyPatched),
            PatchOutcome::NoMatch => Ok(PatchStatus::NoMatch),
        }
    }
}

/// Standard host-file locations the patch commands operate on.
pub fn app_service_provider_path(app_root: &Path) -> PathBuf {
    app_root.join("app/Providers/AppServiceProvider.php")
}

pub fn bootstrap_app_path(app_root: &Path) -> PathBuf {
    app_root.join("bootstrap/app.php")
}
