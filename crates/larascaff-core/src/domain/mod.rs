//! Core domain layer for Larascaff.
//!
//! Pure business logic with no I/O: code templates, source patches, the API
//! code table, the response envelope and the exception classifier. All
//! filesystem and prompt concerns are handled via ports (traits) defined in
//! the application layer.
//!
//! - **No async**: everything here is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable values**: domain objects are Clone + PartialEq

pub mod classifier;
pub mod codes;
pub mod envelope;
pub mod error;
pub mod name;
pub mod patch;
pub mod templates;

// Re-exports for convenience
pub use classifier::{Fault, classify};
pub use envelope::{Envelope, Payload, ResponseParts};
pub use error::{DomainError, ErrorCategory};
pub use name::EntityName;
pub use patch::{PatchOutcome, Placement, SourcePatch};
