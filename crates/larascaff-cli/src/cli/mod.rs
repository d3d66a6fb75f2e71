//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "larascaff",
    bin_name = "larascaff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Laravel service/repository scaffolding",
    long_about = "Larascaff scaffolds Service/Repository class pairs into a \
                  Laravel application and publishes a standardized API layer \
                  (routes, base controller, response codes, exception handler).",
    after_help = "EXAMPLES:\n\
        \x20 larascaff create Order\n\
        \x20 larascaff create order --service OrderService --repository OrderRepo\n\
        \x20 larascaff publish --force\n\
        \x20 larascaff publish-api-routes --app-root /srv/my-app\n\
        \x20 larascaff completions bash > /usr/share/bash-completion/completions/larascaff",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a service and repository pair for a model.
    #[command(
        visible_alias = "c",
        about = "Create service and repository classes",
        after_help = "EXAMPLES:\n\
            \x20 larascaff create Order\n\
            \x20 larascaff create order                      # same: name is capitalized\n\
            \x20 larascaff create Order --service Billing    # override the service name\n\
            \x20 larascaff create Order --yes                # overwrite without asking"
    )]
    Create(CreateArgs),

    /// Publish the base setup files and wire up the service provider.
    #[command(
        about = "Publish base setup files (helpers and config)",
        after_help = "EXAMPLES:\n\
            \x20 larascaff publish\n\
            \x20 larascaff publish --force"
    )]
    Publish(PublishArgs),

    /// Publish the standardized API layer (routes, controller, codes, handler).
    #[command(
        about = "Publish API routes, base controller, codes and exception handler",
        after_help = "EXAMPLES:\n\
            \x20 larascaff publish-api-routes\n\
            \x20 larascaff publish-api-routes --force --app-root /srv/my-app"
    )]
    PublishApiRoutes(PublishArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 larascaff completions bash > ~/.local/share/bash-completion/completions/larascaff\n\
            \x20 larascaff completions zsh  > ~/.zfunc/_larascaff\n\
            \x20 larascaff completions fish > ~/.config/fish/completions/larascaff.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `larascaff create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Model name the generated classes are derived from.
    #[arg(value_name = "MODEL", help = "Model name (e.g. Order)")]
    pub model: String,

    /// Override the service name.
    #[arg(
        short = 's',
        long = "service",
        value_name = "NAME",
        help = "Service name (default: model name)"
    )]
    pub service: Option<String>,

    /// Override the repository name.
    #[arg(
        short = 'r',
        long = "repository",
        value_name = "NAME",
        help = "Repository name (default: model name)"
    )]
    pub repository: Option<String>,

    /// Laravel application root.
    #[arg(
        long = "app-root",
        value_name = "DIR",
        help = "Laravel application root (default: current directory)"
    )]
    pub app_root: Option<PathBuf>,

    /// Overwrite existing files without asking.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Answer yes to all overwrite prompts"
    )]
    pub yes: bool,
}

// ── publish / publish-api-routes ──────────────────────────────────────────────

/// Arguments shared by both publish commands.
#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Overwrite existing files without prompting.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Laravel application root.
    #[arg(
        long = "app-root",
        value_name = "DIR",
        help = "Laravel application root (default: current directory)"
    )]
    pub app_root: Option<PathBuf>,

    /// Answer yes to all overwrite prompts.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Answer yes to all overwrite prompts"
    )]
    pub yes: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `larascaff completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_create_command() {
        let cli = Cli::parse_from(["larascaff", "create", "Order"]);
        if let Commands::Create(args) = cli.command {
            assert_eq!(args.model, "Order");
            assert!(args.service.is_none());
            assert!(!args.yes);
        } else {
            panic!("expected Create command");
        }
    }

    #[test]
    fn create_alias() {
        let cli = Cli::parse_from(["larascaff", "c", "Order"]);
        assert!(matches!(cli.command, Commands::Create(_)));
    }

    #[test]
    fn create_overrides() {
        let cli = Cli::parse_from([
            "larascaff",
            "create",
            "order",
            "--service",
            "Billing",
            "-r",
            "Ledger",
        ]);
        if let Commands::Create(args) = cli.command {
            assert_eq!(args.service.as_deref(), Some("Billing"));
            assert_eq!(args.repository.as_deref(), Some("Ledger"));
        } else {
            panic!("expected Create command");
        }
    }

    #[test]
    fn parse_publish_api_routes() {
        let cli = Cli::parse_from(["larascaff", "publish-api-routes", "--force"]);
        if let Commands::PublishApiRoutes(args) = cli.command {
            assert!(args.force);
        } else {
            panic!("expected PublishApiRoutes command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["larascaff", "--quiet", "--verbose", "create", "X"]);
        assert!(result.is_err());
    }
}
