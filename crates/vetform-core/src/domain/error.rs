// ============================================================================
// domain/error.rs - CONSTRUCTION-TIME ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every variant here is a *misconfiguration* detected while building a
/// validator, never a user-input failure. Bad form input is reported as data
/// (a [`Violation`](crate::domain::Violation) inside a report) and can never
/// produce a `DomainError`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Whitelist errors
    // ========================================================================
    #[error("country whitelist must contain at least one entry")]
    EmptyCountryList,

    #[error("country whitelist entry {index} is blank after trimming")]
    BlankCountry { index: usize },

    // ========================================================================
    // Policy errors
    // ========================================================================
    #[error("validator policy enables no birth-date format")]
    NoDateFormats,

    #[error("validator policy field '{field}' is invalid: {reason}")]
    InvalidPolicy {
        field: &'static str,
        reason: String,
    },

    // ========================================================================
    // Parse errors (string -> value object)
    // ========================================================================
    #[error("unknown policy profile: {0}")]
    UnknownProfile(String),

    #[error("unknown form field: {0}")]
    UnknownField(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyCountryList => vec![
                "Provide at least one accepted country name".into(),
                "Built-in catalogs are available in vetform-adapters".into(),
            ],
            Self::BlankCountry { index } => vec![
                format!("Entry {} of the whitelist is empty or whitespace", index),
                "Remove the blank entry or fill in a country name".into(),
            ],
            Self::NoDateFormats => vec![
                "Enable at least one of: iso, dmy_slash".into(),
                "ValidatorPolicy::strict() enables both formats".into(),
            ],
            Self::InvalidPolicy { field, reason } => vec![
                format!("Policy field '{}': {}", field, reason),
                "Start from ValidatorPolicy::strict() or ::relaxed() and adjust".into(),
            ],
            Self::UnknownProfile(name) => vec![
                format!("'{}' is not a policy profile", name),
                "Known profiles: strict, relaxed".into(),
            ],
            Self::UnknownField(name) => vec![
                format!("'{}' is not a form field", name),
                "Known fields: fullName, email, birthDate, country, comments".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyCountryList | Self::BlankCountry { .. } => ErrorCategory::Configuration,
            Self::NoDateFormats | Self::InvalidPolicy { .. } => ErrorCategory::Configuration,
            Self::UnknownProfile(_) | Self::UnknownField(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}
