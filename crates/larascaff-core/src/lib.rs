//! Larascaff Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Larascaff
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          larascaff-cli (CLI)            │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (GenerateService, PublishService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Filesystem, Prompter)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    larascaff-adapters (Infrastructure)  │
//! │  (LocalFilesystem, StdinPrompter, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (EntityName, templates, SourcePatch,   │
//! │   Envelope, Fault classifier)           │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use larascaff_core::{
//!     application::GenerateService,
//!     domain::EntityName,
//! };
//!
//! // 1. Validate the model name (first letter uppercased)
//! let name = EntityName::new("order").unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = GenerateService::new(filesystem, prompter);
//! service.generate("/srv/app".as_ref(), &name, &name).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Asset, GenerateReport, GenerateService, PairOutcome, PatchStatus, PublishOutcome,
        PublishReport, PublishService, SetupState, StepStatus,
        ports::{Filesystem, Prompter},
    };
    pub use crate::domain::{
        EntityName, Envelope, Fault, PatchOutcome, Payload, ResponseParts, SourcePatch, classify,
    };
    pub use crate::error::{LarascaffError, LarascaffResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
