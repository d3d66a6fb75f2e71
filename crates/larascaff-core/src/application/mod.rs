//! Application layer for Larascaff.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, PublishService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Setup**: the explicit one-time setup state object
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;
pub mod setup;

// Re-export main services
pub use services::{
    Asset, GenerateReport, GenerateService, PairOutcome, PatchStatus, PublishOutcome,
    PublishReport, PublishService, StepStatus,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Prompter};

pub use error::ApplicationError;
pub use setup::SetupState;
