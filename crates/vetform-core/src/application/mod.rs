//! Application layer for Vetform.
//!
//! This layer contains:
//! - **Services**: use-case orchestration (`ValidationService`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    FieldFailure, // DTO for one failed field
    ReportSummary,
    ValidationService,
};

// Re-export port traits (for adapter implementation)
pub use ports::CountrySource;

pub use error::ApplicationError;
