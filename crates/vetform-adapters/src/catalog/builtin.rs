//! Built-in country catalogs.
//!
//! Two catalogs ship with the binary:
//!
//! - **`global`** — the core crate's default whitelist: the countries the
//!   original registration form offered in its dropdown.
//! - **`latam`** — Latin America, for deployments that only serve the
//!   region.
//!
//! Catalogs are addressed by name so a config file or CLI flag can select
//! one without touching code. Unknown names are a lookup miss here and
//! become a not-found error at the application boundary.

use tracing::debug;

use vetform_core::application::{ApplicationError, CountrySource};
use vetform_core::domain::tables::DEFAULT_COUNTRIES;

/// Latin American countries, in dropdown order.
static LATAM_COUNTRIES: &[&str] = &[
    "México",
    "Guatemala",
    "Honduras",
    "El Salvador",
    "Nicaragua",
    "Costa Rica",
    "Panamá",
    "Colombia",
    "Venezuela",
    "Ecuador",
    "Perú",
    "Bolivia",
    "Chile",
    "Argentina",
    "Uruguay",
    "Paraguay",
    "Brasil",
];

/// A named, compiled-in country catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinCatalog {
    name: &'static str,
    entries: &'static [&'static str],
}

impl BuiltinCatalog {
    /// Names accepted by [`named`](Self::named), for help text and error
    /// suggestions.
    pub const NAMES: &'static [&'static str] = &["global", "latam"];

    /// The default worldwide catalog.
    pub fn global() -> Self {
        Self {
            name: "global",
            entries: DEFAULT_COUNTRIES,
        }
    }

    /// Latin America only.
    pub fn latam() -> Self {
        Self {
            name: "latam",
            entries: LATAM_COUNTRIES,
        }
    }

    /// Look up a catalog by name.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "global" => Some(Self::global()),
            "latam" => Some(Self::latam()),
            _ => None,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::global()
    }
}

impl CountrySource for BuiltinCatalog {
    fn load(&self) -> Result<Vec<String>, ApplicationError> {
        debug!(catalog = self.name, entries = self.entries.len(), "Loading builtin catalog");
        Ok(self.entries.iter().map(|s| s.to_string()).collect())
    }

    fn origin(&self) -> String {
        format!("builtin:{}", self.name)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
