//! Application services: use-case orchestration over the domain layer.

pub mod validation_service;

pub use validation_service::{FieldFailure, ReportSummary, ValidationService};
