//! Application layer errors.
//!
//! These errors represent failures in orchestration — wiring a whitelist
//! source to a validator, loading a form record — not business logic.
//! Business-logic misconfiguration is `DomainError` from `crate::domain`,
//! and bad form *input* is never an error at all (it is report data).

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A country source could not produce its entries.
    #[error("country source '{origin}' failed: {reason}")]
    CatalogUnavailable { origin: String, reason: String },

    /// A form record file could not be read or parsed.
    #[error("form file {path} is unusable: {reason}")]
    InvalidFormFile { path: PathBuf, reason: String },

    /// Port/Adapter not configured.
    #[error("required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CatalogUnavailable { origin, reason } => vec![
                format!("Could not load countries from {}: {}", origin, reason),
                "Check that the catalog name or file path is correct".into(),
                "Built-in catalogs: try 'global' or 'latam'".into(),
            ],
            Self::InvalidFormFile { path, .. } => vec![
                format!("Could not read a form record from {}", path.display()),
                "The file must be a JSON object with camelCase field names".into(),
                r#"Example: {"fullName": "Ana Lima", "email": "ana@gmail.com"}"#.into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "This is likely a configuration error".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CatalogUnavailable { .. } => ErrorCategory::NotFound,
            Self::InvalidFormFile { .. } => ErrorCategory::Validation,
            Self::AdapterNotConfigured { .. } => ErrorCategory::Configuration,
        }
    }
}
