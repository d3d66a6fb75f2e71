//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `--config FILE` (must exist and parse)
//! 3. The default config file, if present
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default Laravel application root, used when `--app-root` is absent.
    pub app_root: Option<PathBuf>,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// A file passed via `--config` must exist and parse; the default
    /// location is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let default = Self::config_path();
                if default.exists() {
                    Self::from_file(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            message: format!("cannot read {}", path.display()),
            source: Some(Box::new(e)),
        })?;
        toml::from_str(&content).map_err(|e| CliError::ConfigError {
            message: format!("cannot parse {}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Resolve the application root: CLI flag, then config, then CWD.
    pub fn resolve_app_root(&self, flag: Option<&PathBuf>) -> PathBuf {
        flag.or(self.app_root.as_ref())
            .cloned()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.larascaff.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "larascaff", "larascaff")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".larascaff.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let cfg = AppConfig::default();
        assert!(cfg.app_root.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn parse_full_config() {
        let cfg: AppConfig = toml::from_str(
            r#"
            app_root = "/srv/my-app"

            [output]
            no_color = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.app_root.as_deref(), Some(Path::new("/srv/my-app")));
        assert!(cfg.output.no_color);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: AppConfig = toml::from_str("app_root = \"/srv/app\"").unwrap();
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn app_root_resolution_prefers_flag() {
        let cfg = AppConfig {
            app_root: Some(PathBuf::from("/from-config")),
            ..Default::default()
        };
        assert_eq!(
            cfg.resolve_app_root(Some(&PathBuf::from("/from-flag"))),
            PathBuf::from("/from-flag")
        );
        assert_eq!(cfg.resolve_app_root(None), PathBuf::from("/from-config"));
        assert_eq!(
            AppConfig::default().resolve_app_root(None),
            PathBuf::from(".")
        );
    }

    #[test]
    fn missing_explicit_file_is_config_error() {
        let err = AppConfig::load(Some(&PathBuf::from("/nonexistent/larascaff.toml"))).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
