//! The raw form-input record and its loosely-typed field values.
//!
//! # Design
//!
//! Callers of a registration form are untyped: a field may arrive as text,
//! a number, a boolean, a native date value, or not at all. Instead of
//! trusting the caller, [`FieldValue`] models that boundary as a tagged
//! union, so every rule performs its type check by matching a variant and a
//! wrong-typed field becomes a reported violation — never a panic and never
//! a deserialization failure.
//!
//! # Deserialization shape
//!
//! `FieldValue` is serde-untagged with `Text` declared first, so JSON
//! strings always decode as `Text` — including date-shaped strings, which
//! the birth-date rule parses itself. `Date` values enter only through the
//! Rust API, mirroring the source system where native date objects arrive
//! programmatically rather than over the wire. JSON `null` and absent
//! fields both decode as `Missing`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── FieldValue ────────────────────────────────────────────────────────────────

/// One loosely-typed form field as submitted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text input. The usual case for every field.
    Text(String),
    /// A number where text was expected (type confusion at the caller).
    Number(f64),
    /// A boolean where text was expected.
    Flag(bool),
    /// A native date value, accepted first-class by the birth-date rule.
    Date(NaiveDate),
    /// Field absent or `null`.
    #[default]
    Missing,
}

impl FieldValue {
    /// Borrow the text content, if this value is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

// ── FormInput ─────────────────────────────────────────────────────────────────

/// The raw registration-form record, exactly as submitted.
///
/// Deliberately *not* validated on construction: this is the untrusted input
/// a [`FormValidator`](crate::domain::FormValidator) consumes. Field names
/// serialize with the camelCase wire names the form submits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormInput {
    pub full_name: FieldValue,
    pub email: FieldValue,
    pub birth_date: FieldValue,
    pub country: FieldValue,
    pub comments: FieldValue,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
