//! Domain value objects: Field, PolicyProfile.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! They hold NO rule logic. All per-field rules live in `rules.rs` and all
//! static lookup data in `tables.rs`. This file's only job is to define the
//! types, their string representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Field ─────────────────────────────────────────────────────────────────────

/// One of the five registration-form fields.
///
/// The `as_str` names are the wire names used as keys of the error mapping,
/// so a report serialises with the same keys the form submits.
/// `Ord` is derived so reports iterate in a stable field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    BirthDate,
    Country,
    Comments,
}

impl Field {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::BirthDate => "birthDate",
            Self::Country => "country",
            Self::Comments => "comments",
        }
    }

    /// All fields, in report order.
    pub const fn all() -> [Field; 5] {
        [
            Self::FullName,
            Self::Email,
            Self::BirthDate,
            Self::Country,
            Self::Comments,
        ]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fullname" | "full-name" | "full_name" | "name" => Ok(Self::FullName),
            "email" | "e-mail" => Ok(Self::Email),
            "birthdate" | "birth-date" | "birth_date" => Ok(Self::BirthDate),
            "country" => Ok(Self::Country),
            "comments" | "comment" => Ok(Self::Comments),
            other => Err(DomainError::UnknownField(other.to_string())),
        }
    }
}

// ── PolicyProfile ─────────────────────────────────────────────────────────────

/// Named preset of [`ValidatorPolicy`](crate::domain::ValidatorPolicy) knobs.
///
/// The two profiles preserve the two validator dialects this crate
/// consolidates: `Strict` accepts both date formats and vets email providers
/// for plausibility; `Relaxed` accepts ISO dates only and skips the
/// plausibility heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyProfile {
    #[default]
    Strict,
    Relaxed,
}

impl PolicyProfile {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Relaxed => "relaxed",
        }
    }
}

impl fmt::Display for PolicyProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyProfile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" | "full" => Ok(Self::Strict),
            "relaxed" | "basic" | "lenient" => Ok(Self::Relaxed),
            other => Err(DomainError::UnknownProfile(other.to_string())),
        }
    }
}
