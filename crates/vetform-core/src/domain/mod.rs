// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Vetform.
//!
//! This module contains pure validation logic with ZERO side effects.
//! Loading whitelists, reading form files, and rendering reports are
//! handled via ports (traits) defined in the application layer.
//!
//! ## Purity rules
//!
//! - **No async**: every rule is a synchronous function
//! - **No I/O**: no filesystem, network, or clock access except the single
//!   `Local::now` read in `FormValidator::validate` (and even that has a
//!   pure `validate_at` twin)
//! - **No tracing**: the domain emits nothing; observability belongs to the
//!   application and CLI layers
//! - **Immutable entities**: validators are built once, then shared freely;
//!   reports are plain values

pub mod entities;
pub mod error;
pub mod policy;
pub mod tables;
pub mod value_objects;

// Private implementation details - rule functions are reachable only through
// the validator aggregate; normalization is the one exported utility.
mod rules;

// Re-exports for convenience
pub use entities::{
    CountryList, FieldValue, FormInput, FormValidator, FormValidatorBuilder, ValidationReport,
    Violation, is_form_valid, validate_form,
};

pub use error::{DomainError, ErrorCategory};

pub use policy::{DateFormats, ValidatorPolicy};

pub use rules::normalize_full_name;

pub use value_objects::{Field, PolicyProfile};
