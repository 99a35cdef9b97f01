//! The `FormValidator` aggregate root and its typestate builder.
//!
//! A `FormValidator` is the fully-configured, validated description of how a
//! registration form is judged: a non-empty country whitelist plus a
//! consistent policy record. Once one exists it is guaranteed usable; every
//! `validate` call is pure and `&self`, so a single validator can serve any
//! number of threads without coordination.
//!
//! # Typestate builder
//!
//! The builder uses two phantom marker types (`NoCountries` / `HasCountries`)
//! to enforce at *compile time* that a whitelist is supplied before the
//! validator can be built. Runtime validation still rejects an empty list
//! (immediately, in `countries()`) and an inconsistent policy (at
//! `build()`) — misconfiguration aborts setup rather than surfacing later as
//! a per-call error.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the
//! responsibility of the application and CLI layers, not the domain.

use std::marker::PhantomData;
use std::sync::LazyLock;

use chrono::{Local, NaiveDate};

use crate::domain::{
    entities::countries::CountryList,
    entities::form::FormInput,
    entities::report::ValidationReport,
    error::DomainError,
    policy::ValidatorPolicy,
    rules,
    tables,
    value_objects::{Field, PolicyProfile},
};

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A fully-configured registration-form validator.
///
/// Guaranteed consistent on construction:
/// - the country whitelist is non-empty
/// - the policy enables at least one date format and sane bounds
#[derive(Debug, Clone, PartialEq)]
pub struct FormValidator {
    countries: CountryList,
    policy: ValidatorPolicy,
}

impl FormValidator {
    /// Start building a new `FormValidator`.
    pub fn builder() -> FormValidatorBuilder<NoCountries> {
        FormValidatorBuilder::new()
    }

    /// Construct directly from already-validated parts.
    pub fn new(countries: CountryList, policy: ValidatorPolicy) -> Result<Self, DomainError> {
        policy.validate()?;
        Ok(Self { countries, policy })
    }

    pub fn countries(&self) -> &CountryList {
        &self.countries
    }

    pub fn policy(&self) -> &ValidatorPolicy {
        &self.policy
    }

    /// Validate one form record as of the current local date.
    ///
    /// All five fields are always evaluated — one field's outcome never
    /// affects another's. Each field short-circuits internally after its
    /// first failing rule.
    pub fn validate(&self, input: &FormInput) -> ValidationReport {
        self.validate_at(input, Local::now().date_naive())
    }

    /// Validate one form record as of an explicit date.
    ///
    /// The age rule depends on "now"; pinning `today` makes the whole
    /// validation a pure function of its arguments.
    pub fn validate_at(&self, input: &FormInput, today: NaiveDate) -> ValidationReport {
        let mut report = ValidationReport::new();
        report.record(
            Field::FullName,
            rules::check_full_name(&input.full_name, &self.policy),
        );
        report.record(Field::Email, rules::check_email(&input.email, &self.policy));
        report.record(
            Field::BirthDate,
            rules::check_birth_date(&input.birth_date, today, &self.policy),
        );
        report.record(
            Field::Country,
            rules::check_country(&input.country, &self.countries),
        );
        report.record(
            Field::Comments,
            rules::check_comments(&input.comments, &self.policy),
        );
        report
    }
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: no country whitelist has been supplied yet.
pub struct NoCountries;
/// Marker: a whitelist is present; the validator may now be built.
pub struct HasCountries;

// ── Builder ───────────────────────────────────────────────────────────────────

/// Typestate builder for [`FormValidator`].
///
/// Compile-time guarantee: `build()` is only reachable after `countries()`
/// has accepted a non-empty whitelist.
pub struct FormValidatorBuilder<S> {
    countries: Option<CountryList>,
    policy: Option<ValidatorPolicy>,
    _marker: PhantomData<S>,
}

impl FormValidatorBuilder<NoCountries> {
    pub fn new() -> Self {
        Self {
            countries: None,
            policy: None,
            _marker: PhantomData,
        }
    }

    /// Supply the accepted-country whitelist.
    ///
    /// Rejects immediately if the list is empty or contains a blank entry.
    pub fn countries<I, S2>(
        self,
        countries: I,
    ) -> Result<FormValidatorBuilder<HasCountries>, DomainError>
    where
        I: IntoIterator<Item = S2>,
        S2: Into<String>,
    {
        let list = CountryList::new(countries)?;
        Ok(FormValidatorBuilder {
            countries: Some(list),
            policy: self.policy,
            _marker: PhantomData,
        })
    }
}

impl Default for FormValidatorBuilder<NoCountries> {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValidatorBuilder<HasCountries> {
    /// Set an explicit policy record. Validated at `build()`.
    pub fn policy(mut self, policy: ValidatorPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Set the policy from a named profile.
    pub fn profile(mut self, profile: PolicyProfile) -> Self {
        self.policy = Some(ValidatorPolicy::for_profile(profile));
        self
    }

    /// Build and validate the `FormValidator`.
    ///
    /// The policy defaults to [`ValidatorPolicy::strict`] when unset.
    pub fn build(self) -> Result<FormValidator, DomainError> {
        let countries = self
            .countries
            .expect("typestate guarantees countries are set");
        let policy = self.policy.unwrap_or_default();
        FormValidator::new(countries, policy)
    }
}

// ── Construction-free API ─────────────────────────────────────────────────────

/// Process-wide validator used by the construction-free functions:
/// the built-in country list with the relaxed policy, matching the
/// free-function dialect this crate consolidates.
static DEFAULT_VALIDATOR: LazyLock<FormValidator> = LazyLock::new(|| {
    FormValidator::new(
        CountryList::new(tables::DEFAULT_COUNTRIES.iter().copied())
            .expect("built-in country table is non-empty"),
        ValidatorPolicy::relaxed(),
    )
    .expect("built-in policy preset is valid")
});

/// Validate a form against the built-in country list and relaxed policy.
pub fn validate_form(input: &FormInput) -> ValidationReport {
    DEFAULT_VALIDATOR.validate(input)
}

/// Convenience wrapper: `true` iff [`validate_form`] reports no violations.
pub fn is_form_valid(input: &FormInput) -> bool {
    validate_form(input).is_valid()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
