//! Validation Service - main application orchestrator.
//!
//! This service coordinates the whole validation workflow:
//! 1. Load the country whitelist from the injected source
//! 2. Build the `FormValidator` (misconfiguration aborts here, at setup)
//! 3. Judge form records on demand, emitting tracing events
//!
//! It is the driving-port implementation the CLI talks to, and it uses the
//! driven [`CountrySource`] port for external configuration.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::CountrySource,
    domain::{CountryList, FormInput, FormValidator, ValidationReport, ValidatorPolicy},
    error::{VetformError, VetformResult},
};

/// One failed field, flattened for display or machine output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// A whole report, flattened for display or machine output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub is_valid: bool,
    pub failures: Vec<FieldFailure>,
}

impl ReportSummary {
    /// Flatten a domain report into wire-ready rows.
    pub fn from_report(report: &ValidationReport) -> Self {
        Self {
            is_valid: report.is_valid(),
            failures: report
                .iter()
                .map(|(field, violation)| FieldFailure {
                    field: field.as_str().to_string(),
                    code: violation.code().to_string(),
                    message: violation.to_string(),
                })
                .collect(),
        }
    }
}

/// Main validation service.
///
/// Built once from a whitelist source and a policy; thereafter every call
/// is read-only, so the service can be shared across threads freely.
pub struct ValidationService {
    validator: FormValidator,
}

impl ValidationService {
    /// Wrap an already-built validator.
    pub fn new(validator: FormValidator) -> Self {
        Self { validator }
    }

    /// Build the service from a whitelist source and a policy.
    ///
    /// This is the setup boundary: a source that fails to load, an empty
    /// whitelist, or an inconsistent policy aborts construction with a
    /// configuration error. Per-record validation can no longer fail after
    /// this point.
    #[instrument(skip_all, fields(origin = %source.origin()))]
    pub fn from_source(
        source: &dyn CountrySource,
        policy: ValidatorPolicy,
    ) -> VetformResult<Self> {
        let entries = source.load().map_err(VetformError::Application)?;
        debug!(entries = entries.len(), "Country source loaded");

        let countries = CountryList::new(entries).map_err(VetformError::Domain)?;
        let validator = FormValidator::new(countries, policy).map_err(VetformError::Domain)?;

        info!(
            countries = validator.countries().len(),
            "Validation service ready"
        );
        Ok(Self { validator })
    }

    /// The whitelist the service judges against.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.validator.countries().iter()
    }

    /// Judge one form record as of the current local date.
    #[instrument(skip_all)]
    pub fn validate(&self, input: &FormInput) -> ValidationReport {
        let report = self.validator.validate(input);
        self.log_outcome(&report);
        report
    }

    /// Judge one form record as of an explicit date (deterministic).
    #[instrument(skip_all, fields(today = %today))]
    pub fn validate_at(&self, input: &FormInput, today: NaiveDate) -> ValidationReport {
        let report = self.validator.validate_at(input, today);
        self.log_outcome(&report);
        report
    }

    /// Flattened summary of a report, for rendering or serialization.
    pub fn summarize(&self, report: &ValidationReport) -> ReportSummary {
        ReportSummary::from_report(report)
    }

    fn log_outcome(&self, report: &ValidationReport) {
        if report.is_valid() {
            info!("Form accepted");
        } else {
            info!(failures = report.failure_count(), "Form rejected");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
