//! One-time setup state.
//!
//! The first successful `create` run records a timestamped marker file under
//! the host app's storage directory so the install notice is printed exactly
//! once. The state is an explicit object checked and written by the
//! orchestrator, loaded through the [`Filesystem`] port, so the check is
//! testable without touching a real disk. Existence-only and purely
//! advisory: the marker's content is never read back for logic.

use std::path::{Path, PathBuf};

use crate::application::ports::Filesystem;
use crate::error::LarascaffResult;

/// Relative path of the marker file within the host application.
pub const MARKER_PATH: &str = "storage/app/larascaff-setup-completed.txt";

/// Whether the one-time setup notice has already been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupState {
    completed: bool,
}

impl SetupState {
    /// Load the state for `app_root` via an existence check on the marker.
    pub fn load(fs: &dyn Filesystem, app_root: &Path) -> Self {
        Self {
            completed: fs.exists(&marker_path(app_root)),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Persist the marker with a caller-supplied timestamp line.
    ///
    /// The timestamp comes from the caller so this stays deterministic under
    /// test; the content is informational only.
    pub fn mark_completed(
        &mut self,
        fs: &dyn Filesystem,
        app_root: &Path,
        timestamp: &str,
    ) -> LarascaffResult<()> {
        let path = marker_path(app_root);
        if let Some(parent) = path.parent() {
            fs.create_dir_all(parent)?;
        }
        fs.write_file(
            &path,
            &format!("{timestamp} - Larascaff base setup installed successfully\n"),
        )?;
        self.completed = true;
        Ok(())
    }
}

fn marker_path(app_root: &Path) -> PathBuf {
    app_root.join(MARKER_PATH)
}
