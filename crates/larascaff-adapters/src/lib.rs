//! Infrastructure adapters for Larascaff.
//!
//! This crate implements the ports defined in `larascaff-core::application::ports`.
//! It contains all external dependencies and I/O operations, plus the PHP
//! asset files embedded into the binary.

pub mod assets;
pub mod filesystem;
pub mod prompt;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::{ScriptedPrompter, StaticPrompter, StdinPrompter};
