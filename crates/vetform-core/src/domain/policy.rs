//! The validator policy record.
//!
//! The source material for this crate contained two near-duplicate
//! validators whose rules drifted apart (different date-format support,
//! different email heuristics). [`ValidatorPolicy`] makes that divergence an
//! explicit, testable configuration record instead of hidden drift: both
//! dialects survive as the [`strict`](ValidatorPolicy::strict) and
//! [`relaxed`](ValidatorPolicy::relaxed) presets, and callers may tune any
//! knob in between.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::value_objects::PolicyProfile;

// ── Date formats ──────────────────────────────────────────────────────────────

/// Which textual birth-date formats the parser accepts.
///
/// `Date`-typed inputs bypass parsing entirely and are unaffected by these
/// flags. At least one flag must be enabled; [`ValidatorPolicy::validate`]
/// rejects an all-false record at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormats {
    /// ISO `YYYY-MM-DD`.
    pub iso: bool,
    /// Day-first `DD/MM/YYYY`.
    pub dmy_slash: bool,
}

impl DateFormats {
    pub const fn both() -> Self {
        Self {
            iso: true,
            dmy_slash: true,
        }
    }

    pub const fn iso_only() -> Self {
        Self {
            iso: true,
            dmy_slash: false,
        }
    }

    pub const fn any_enabled(&self) -> bool {
        self.iso || self.dmy_slash
    }
}

impl Default for DateFormats {
    fn default() -> Self {
        Self::both()
    }
}

// ── Policy record ─────────────────────────────────────────────────────────────

/// Every divergent rule knob, in one place.
///
/// A policy is plain data: constructing one cannot fail, but an inconsistent
/// record is rejected by [`validate`](Self::validate) when a
/// [`FormValidator`](crate::domain::FormValidator) is built around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorPolicy {
    /// Minimum full-name length, in characters, after whitespace
    /// normalization.
    pub min_full_name_chars: usize,
    /// Maximum comments length, in characters. Comments are never trimmed.
    pub max_comments_chars: usize,
    /// Minimum age, in whole years, on the day of validation.
    pub min_age_years: u32,
    /// Earliest plausible birth year.
    pub min_birth_year: i32,
    /// Accepted textual birth-date formats.
    pub date_formats: DateFormats,
    /// Whether the email domain must be a known provider or match the strict
    /// single-label domain shape.
    pub check_provider_plausibility: bool,
}

impl ValidatorPolicy {
    /// The class-dialect preset: both date formats, provider plausibility on.
    pub fn strict() -> Self {
        Self {
            min_full_name_chars: 3,
            max_comments_chars: 300,
            min_age_years: 18,
            min_birth_year: 1900,
            date_formats: DateFormats::both(),
            check_provider_plausibility: true,
        }
    }

    /// The free-function-dialect preset: ISO dates only, plausibility off.
    pub fn relaxed() -> Self {
        Self {
            date_formats: DateFormats::iso_only(),
            check_provider_plausibility: false,
            ..Self::strict()
        }
    }

    /// Resolve a named profile to its preset.
    pub fn for_profile(profile: PolicyProfile) -> Self {
        match profile {
            PolicyProfile::Strict => Self::strict(),
            PolicyProfile::Relaxed => Self::relaxed(),
        }
    }

    /// Validate this policy's internal consistency.
    ///
    /// Called automatically when a validator is built. Available for
    /// re-validation after deserialization from a config file.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.date_formats.any_enabled() {
            return Err(DomainError::NoDateFormats);
        }
        if self.min_full_name_chars == 0 {
            return Err(DomainError::InvalidPolicy {
                field: "min_full_name_chars",
                reason: "must be at least 1".into(),
            });
        }
        if self.max_comments_chars == 0 {
            return Err(DomainError::InvalidPolicy {
                field: "max_comments_chars",
                reason: "must be at least 1".into(),
            });
        }
        if self.min_age_years > 130 {
            return Err(DomainError::InvalidPolicy {
                field: "min_age_years",
                reason: format!("{} exceeds a human lifespan", self.min_age_years),
            });
        }
        Ok(())
    }
}

impl Default for ValidatorPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_enables_both_formats_and_plausibility() {
        let policy = ValidatorPolicy::strict();
        assert!(policy.date_formats.iso);
        assert!(policy.date_formats.dmy_slash);
        assert!(policy.check_provider_plausibility);
    }

    #[test]
    fn relaxed_differs_only_in_the_two_documented_knobs() {
        let strict = ValidatorPolicy::strict();
        let relaxed = ValidatorPolicy::relaxed();
        assert_eq!(relaxed.date_formats, DateFormats::iso_only());
        assert!(!relaxed.check_provider_plausibility);
        assert_eq!(relaxed.min_full_name_chars, strict.min_full_name_chars);
        assert_eq!(relaxed.max_comments_chars, strict.max_comments_chars);
        assert_eq!(relaxed.min_age_years, strict.min_age_years);
        assert_eq!(relaxed.min_birth_year, strict.min_birth_year);
    }

    #[test]
    fn profile_resolution_matches_presets() {
        assert_eq!(
            ValidatorPolicy::for_profile(PolicyProfile::Strict),
            ValidatorPolicy::strict()
        );
        assert_eq!(
            ValidatorPolicy::for_profile(PolicyProfile::Relaxed),
            ValidatorPolicy::relaxed()
        );
    }

    #[test]
    fn presets_are_valid() {
        assert!(ValidatorPolicy::strict().validate().is_ok());
        assert!(ValidatorPolicy::relaxed().validate().is_ok());
    }

    #[test]
    fn all_date_formats_disabled_is_rejected() {
        let policy = ValidatorPolicy {
            date_formats: DateFormats {
                iso: false,
                dmy_slash: false,
            },
            ..ValidatorPolicy::strict()
        };
        assert_eq!(policy.validate(), Err(DomainError::NoDateFormats));
    }

    #[test]
    fn zero_name_length_is_rejected() {
        let policy = ValidatorPolicy {
            min_full_name_chars: 0,
            ..ValidatorPolicy::strict()
        };
        assert!(matches!(
            policy.validate(),
            Err(DomainError::InvalidPolicy {
                field: "min_full_name_chars",
                ..
            })
        ));
    }

    #[test]
    fn implausible_min_age_is_rejected() {
        let policy = ValidatorPolicy {
            min_age_years: 200,
            ..ValidatorPolicy::strict()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn policy_roundtrips_through_serde() {
        let policy = ValidatorPolicy::relaxed();
        let json = serde_json::to_string(&policy).unwrap();
        let back: ValidatorPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, policy);
    }

    #[test]
    fn partial_policy_deserialization_fills_defaults() {
        let policy: ValidatorPolicy = serde_json::from_str(r#"{"min_age_years": 21}"#).unwrap();
        assert_eq!(policy.min_age_years, 21);
        assert_eq!(policy.max_comments_chars, 300);
        assert!(policy.date_formats.iso);
    }
}
