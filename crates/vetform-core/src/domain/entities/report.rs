//! Rule violations and the per-form validation report.

use std::collections::BTreeMap;
use std::collections::btree_map;

use thiserror::Error;

use crate::domain::value_objects::Field;

// ── Violation ─────────────────────────────────────────────────────────────────

/// A single failed field rule.
///
/// The `Display` strings are the human-readable error messages of the
/// result mapping, so they are part of the crate's contract: tests assert on
/// their content. [`code`](Self::code) provides a stable machine-readable
/// identifier for each rule.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Violation {
    // ── Cross-field ──────────────────────────────────────────────────────────
    #[error("must be text")]
    NotText,

    // ── Full name ────────────────────────────────────────────────────────────
    #[error("must have at least {min} characters after normalization")]
    NameTooShort { min: usize },

    #[error("must include both a first and a last name")]
    NameMissingSurname,

    #[error("may only contain letters, accents, hyphens, apostrophes, and spaces")]
    NameForbiddenChars,

    #[error("must contain at least one letter")]
    NameNoLetters,

    // ── Email ────────────────────────────────────────────────────────────────
    #[error("is required")]
    EmailRequired,

    #[error("is not a valid email address")]
    EmailMalformed,

    #[error("domain \"{domain}\" looks misspelled; did you mean {suggestion}?")]
    EmailTypoDomain { domain: String, suggestion: String },

    #[error("has an unrecognized top-level domain \"{tld}\"")]
    EmailUnknownTld { tld: String },

    #[error("uses an unrecognized email provider")]
    EmailImplausibleDomain,

    // ── Birth date ───────────────────────────────────────────────────────────
    #[error("is not a valid date in a supported format")]
    DateUnparseable,

    #[error("must be a date in the past")]
    DateNotInPast,

    #[error("indicates an age below the minimum of {min_years} years")]
    Underage { min_years: u32 },

    #[error("is implausibly old (before {min_year})")]
    BirthYearTooEarly { min_year: i32 },

    // ── Country ──────────────────────────────────────────────────────────────
    #[error("is required")]
    CountryRequired,

    #[error("is not in the list of accepted countries")]
    CountryNotAllowed,

    // ── Comments ─────────────────────────────────────────────────────────────
    #[error("may not exceed {max} characters")]
    CommentsTooLong { max: usize },
}

impl Violation {
    /// Stable kebab-case identifier for machine-readable output.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotText => "not-text",
            Self::NameTooShort { .. } => "name-too-short",
            Self::NameMissingSurname => "name-missing-surname",
            Self::NameForbiddenChars => "name-forbidden-chars",
            Self::NameNoLetters => "name-no-letters",
            Self::EmailRequired => "email-required",
            Self::EmailMalformed => "email-malformed",
            Self::EmailTypoDomain { .. } => "email-typo-domain",
            Self::EmailUnknownTld { .. } => "email-unknown-tld",
            Self::EmailImplausibleDomain => "email-implausible-domain",
            Self::DateUnparseable => "date-unparseable",
            Self::DateNotInPast => "date-not-in-past",
            Self::Underage { .. } => "underage",
            Self::BirthYearTooEarly { .. } => "birth-year-too-early",
            Self::CountryRequired => "country-required",
            Self::CountryNotAllowed => "country-not-allowed",
            Self::CommentsTooLong { .. } => "comments-too-long",
        }
    }
}

// ── ValidationReport ──────────────────────────────────────────────────────────

/// Outcome of validating one [`FormInput`](crate::domain::FormInput).
///
/// Holds at most one violation per field (rules short-circuit inside a
/// field; the first failing rule wins). The report is valid iff the mapping
/// is empty — there is no separate flag to drift out of sync.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every field passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields that failed.
    pub fn failure_count(&self) -> usize {
        self.errors.len()
    }

    /// The violation recorded for `field`, if any.
    pub fn violation(&self, field: Field) -> Option<&Violation> {
        self.errors.get(&field)
    }

    /// The rendered error message for `field`, if any.
    pub fn message(&self, field: Field) -> Option<String> {
        self.errors.get(&field).map(Violation::to_string)
    }

    /// Iterate failures in stable field order.
    pub fn iter(&self) -> btree_map::Iter<'_, Field, Violation> {
        self.errors.iter()
    }

    /// Record a rule outcome for `field`. `Ok` outcomes leave no trace.
    ///
    /// A second violation for the same field would indicate a validator bug
    /// (each field is checked exactly once); the first entry wins, matching
    /// the first-failing-rule contract.
    pub(crate) fn record(&mut self, field: Field, outcome: Result<(), Violation>) {
        if let Err(violation) = outcome {
            self.errors.entry(field).or_insert(violation);
        }
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = (&'a Field, &'a Violation);
    type IntoIter = btree_map::Iter<'a, Field, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_valid() {
        let report = ValidationReport::new();
        assert!(report.is_valid());
        assert_eq!(report.failure_count(), 0);
    }

    #[test]
    fn recording_ok_leaves_report_valid() {
        let mut report = ValidationReport::new();
        report.record(Field::Email, Ok(()));
        assert!(report.is_valid());
    }

    #[test]
    fn recording_a_violation_invalidates_the_report() {
        let mut report = ValidationReport::new();
        report.record(Field::Email, Err(Violation::EmailRequired));
        assert!(!report.is_valid());
        assert_eq!(report.violation(Field::Email), Some(&Violation::EmailRequired));
        assert_eq!(report.violation(Field::Country), None);
    }

    #[test]
    fn first_violation_per_field_wins() {
        let mut report = ValidationReport::new();
        report.record(Field::Email, Err(Violation::EmailRequired));
        report.record(Field::Email, Err(Violation::EmailMalformed));
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.violation(Field::Email), Some(&Violation::EmailRequired));
    }

    #[test]
    fn iteration_is_in_field_order() {
        let mut report = ValidationReport::new();
        report.record(Field::Comments, Err(Violation::CommentsTooLong { max: 300 }));
        report.record(Field::FullName, Err(Violation::NameMissingSurname));
        let fields: Vec<Field> = report.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec![Field::FullName, Field::Comments]);
    }

    #[test]
    fn typo_message_names_the_suggestion() {
        let violation = Violation::EmailTypoDomain {
            domain: "gmail.con".into(),
            suggestion: "gmail.com".into(),
        };
        let message = violation.to_string();
        assert!(message.contains("gmail.con"));
        assert!(message.contains("gmail.com"));
    }

    #[test]
    fn codes_are_kebab_case_and_distinct() {
        let codes = [
            Violation::NotText.code(),
            Violation::NameTooShort { min: 3 }.code(),
            Violation::EmailRequired.code(),
            Violation::DateNotInPast.code(),
            Violation::CountryNotAllowed.code(),
            Violation::CommentsTooLong { max: 300 }.code(),
        ];
        for code in codes {
            assert!(!code.contains(' '));
            assert_eq!(code, code.to_lowercase());
        }
        let mut unique = codes.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), codes.len());
    }
}
