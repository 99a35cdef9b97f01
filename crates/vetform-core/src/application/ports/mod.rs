//! Application ports (traits) for external dependencies.
//!
//! The country whitelist is external configuration data: it may ship with
//! the binary, live in a file next to it, or come from anywhere else an
//! adapter can reach. The application layer only knows this trait; concrete
//! sources live in `vetform-adapters`.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application, implemented by
//!   infrastructure — [`CountrySource`]
//! - **Driving (Input) Ports**: the CLI (or any other front end) drives the
//!   [`ValidationService`](crate::application::ValidationService) directly

use crate::application::error::ApplicationError;

/// Supplier of the accepted-country whitelist.
///
/// Implementations return the raw entries; emptiness and blank entries are
/// judged by [`CountryList`](crate::domain::CountryList) at construction
/// time so every source is held to the same standard.
#[cfg_attr(test, mockall::automock)]
pub trait CountrySource {
    /// Produce the whitelist entries, in presentation order.
    fn load(&self) -> Result<Vec<String>, ApplicationError>;

    /// Human-readable description of where the entries come from,
    /// e.g. `builtin:global` or a file path. Used in logs and errors.
    fn origin(&self) -> String;
}
