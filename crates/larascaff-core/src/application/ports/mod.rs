//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `larascaff-adapters` crate provides implementations.

use std::path::Path;

use crate::error::LarascaffResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `larascaff_adapters::filesystem::LocalFilesystem` (production)
/// - `larascaff_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file's full content as text.
    fn read_file(&self, path: &Path) -> LarascaffResult<String>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> LarascaffResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> LarascaffResult<()>;
}

/// Port for operator confirmation prompts.
///
/// Implemented by:
/// - `larascaff_adapters::prompt::StdinPrompter` (production, blocking)
/// - `larascaff_adapters::prompt::ScriptedPrompter` (testing)
/// - `larascaff_adapters::prompt::StaticPrompter` (non-interactive runs)
pub trait Prompter: Send + Sync {
    /// Ask a yes/no question; `true` means proceed.
    fn confirm(&self, question: &str) -> LarascaffResult<bool>;
}
