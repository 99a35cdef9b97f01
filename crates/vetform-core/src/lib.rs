//! Vetform Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Vetform
//! registration-form validator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          vetform-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ValidationService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Driven: CountrySource)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    vetform-adapters (Infrastructure)    │
//! │     (BuiltinCatalog, FileCatalog)       │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (FormValidator, rules, policy, tables) │
//! │         No External Side Effects        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use vetform_core::domain::{FormInput, FormValidator, PolicyProfile};
//!
//! // 1. Build a validator (fails fast on misconfiguration)
//! let validator = FormValidator::builder()
//!     .countries(["Brasil", "Argentina"]).unwrap()
//!     .profile(PolicyProfile::Strict)
//!     .build()
//!     .unwrap();
//!
//! // 2. Judge form records; failures are data, not errors
//! let input = FormInput {
//!     full_name: "Maria José da Silva".into(),
//!     email: "maria.jose@example.com".into(),
//!     birth_date: "22/03/1985".into(),
//!     country: "Brasil".into(),
//!     comments: Default::default(),
//! };
//! let report = validator.validate(&input);
//! assert!(report.is_valid());
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
        CountrySource, FieldFailure, ReportSummary, ValidationService,
    };
    pub use crate::domain::{
        CountryList, DateFormats, Field, FieldValue, FormInput, FormValidator,
        FormValidatorBuilder, PolicyProfile, ValidationReport, ValidatorPolicy, Violation,
        is_form_valid, normalize_full_name, validate_form,
    };
    pub use crate::error::{VetformError, VetformResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
