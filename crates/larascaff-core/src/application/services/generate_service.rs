//! Generate Service - the `create` use case orchestrator.
//!
//! Coordinates the scaffolding of one Service pair and one Repository pair
//! into a host application:
//! 1. Ensure the four target directories exist
//! 2. Prompt before overwriting an existing pair (unless confirmed)
//! 3. Write the rendered contract + implementation files
//!
//! Rendering lives in `domain::templates`; this service only wires names to
//! paths and drives the ports.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::ports::{Filesystem, Prompter},
    domain::{EntityName, templates},
    error::LarascaffResult,
};

pub const SERVICES_DIR: &str = "app/Services";
pub const SERVICE_CONTRACTS_DIR: &str = "app/Services/Contracts";
pub const REPOSITORIES_DIR: &str = "app/Repositories";
pub const REPOSITORY_CONTRACTS_DIR: &str = "app/Repositories/Contracts";

/// Outcome of generating one contract/implementation pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairOutcome {
    /// Both files written; paths included for display.
    Written { files: Vec<PathBuf> },
    /// Target files existed and the operator declined the overwrite.
    Skipped,
}

/// What one `create` invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Directories that had to be created, in creation order.
    pub created_dirs: Vec<PathBuf>,
    pub service: PairOutcome,
    pub repository: PairOutcome,
}

/// Main generation service.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
    prompter: Box<dyn Prompter>,
}

impl GenerateService {
    pub fn new(filesystem: Box<dyn Filesystem>, prompter: Box<dyn Prompter>) -> Self {
        Self {
            filesystem,
            prompter,
        }
    }

    /// Generate the service and repository pairs for the given names.
    #[instrument(skip_all, fields(service = %service, repository = %repository))]
    pub fn generate(
        &self,
        app_root: &Path,
        service: &EntityName,
        repository: &EntityName,
    ) -> LarascaffResult<GenerateReport> {
        let created_dirs = self.ensure_directories(app_root)?;

        let service_pair = [
            (
                app_root
                    .join(SERVICE_CONTRACTS_DIR)
                    .join(service.service_contract_file()),
                templates::service_contract(service),
            ),
            (
                app_root.join(SERVICES_DIR).join(service.service_file()),
                templates::service(service),
            ),
        ];
        let service_outcome = self.write_pair(
            &service_pair,
            "Service files already exist. Do you want to overwrite them?",
        )?;
        if service_outcome != PairOutcome::Skipped {
            info!(name = %service, "service pair generated");
        }

        let repository_pair = [
            (
                app_root
                    .join(REPOSITORY_CONTRACTS_DIR)
                    .join(repository.repository_contract_file()),
                templates::repository_contract(repository),
            ),
            (
                app_root
                    .join(REPOSITORIES_DIR)
                    .join(repository.repository_file()),
                templates::repository(repository),
            ),
        ];
        let repository_outcome = self.write_pair(
            &repository_pair,
            "Repository files already exist. Do you want to overwrite them?",
        )?;
        if repository_outcome != PairOutcome::Skipped {
            info!(name = %repository, "repository pair generated");
        }

        Ok(GenerateReport {
            created_dirs,
            service: service_outcome,
            repository: repository_outcome,
        })
    }

    /// Create the four scaffold directories, returning the ones that were new.
    fn ensure_directories(&self, app_root: &Path) -> LarascaffResult<Vec<PathBuf>> {
        let mut created = Vec::new();
        for dir in [
            SERVICES_DIR,
            SERVICE_CONTRACTS_DIR,
            REPOSITORIES_DIR,
            REPOSITORY_CONTRACTS_DIR,
        ] {
            let path = app_root.join(dir);
            if !self.filesystem.exists(&path) {
                self.filesystem.create_dir_all(&path)?;
                created.push(path);
            }
        }
        Ok(created)
    }

    /// Write a contract/implementation pair, prompting if either file exists.
    fn write_pair(
        &self,
        files: &[(PathBuf, String); 2],
        question: &str,
    ) -> LarascaffResult<PairOutcome> {
        let any_exists = files.iter().any(|(path, _)| self.filesystem.exists(path));
        if any_exists && !self.prompter.confirm(question)? {
            return Ok(PairOutcome::Skipped);
        }

        let mut written = Vec::with_capacity(2);
        for (path, content) in files {
            self.filesystem.write_file(path, content)?;
            written.push(path.clone());
        }
        Ok(PairOutcome::Written { files: written })
    }
}
