//! The accepted-country whitelist.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Non-empty, order-preserving list of accepted country names.
///
/// Membership is exact and case-sensitive: the form offers these names in a
/// dropdown, so anything else is a caller bug, not a spelling to forgive.
/// Entries are trimmed and de-duplicated on construction (first occurrence
/// wins); a list that ends up empty — or contains a blank entry — is a
/// configuration error and fails construction, never a later validate call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CountryList {
    entries: Vec<String>,
}

impl CountryList {
    /// Build a whitelist from any string iterator.
    pub fn new<I, S>(countries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<String> = Vec::new();
        for (index, raw) in countries.into_iter().enumerate() {
            let raw: String = raw.into();
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(DomainError::BlankCountry { index });
            }
            if !entries.iter().any(|e| e == trimmed) {
                entries.push(trimmed.to_string());
            }
        }
        if entries.is_empty() {
            return Err(DomainError::EmptyCountryList);
        }
        Ok(Self { entries })
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, country: &str) -> bool {
        self.entries.iter().any(|e| e == country)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        // Construction guarantees non-emptiness; kept for API symmetry.
        self.entries.is_empty()
    }

    /// Iterate entries in their configured order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl fmt::Display for CountryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.join(", "))
    }
}

impl TryFrom<Vec<String>> for CountryList {
    type Error = DomainError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryList> for Vec<String> {
    fn from(list: CountryList) -> Self {
        list.entries
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
