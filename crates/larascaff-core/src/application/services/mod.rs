//! Application services - use case orchestration.

pub mod generate_service;
pub mod publish_service;

pub use generate_service::{GenerateReport, GenerateService, PairOutcome};
pub use publish_service::{
    Asset, PatchStatus, PublishOutcome, PublishReport, PublishService, StepStatus,
};
