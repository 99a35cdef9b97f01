//! Static lookup tables for the email and country rules.
//!
//! # Design Rationale
//!
//! The two validator dialects this crate consolidates each carried their own
//! TLD list, provider list, and typo map, inlined next to the rule code.
//! This module replaces that with a single set of static registries: each
//! table is defined exactly once, every rule consults it through the lookup
//! API below, and a single integrity check guards the data.
//!
//! # Extending a Table
//!
//! 1. Insert the entry at its sorted position (lookups are binary searches)
//! 2. Run the test suite — `assert_table_integrity` catches ordering
//!    mistakes, unknown TLDs in suggestions, and similar registration errors
//! 3. That's it — no rule code changes

// ── Top-level domains ─────────────────────────────────────────────────────────

/// TLDs the email rule accepts: generic ones plus country codes.
///
/// Sorted ASCII-ascending, all lowercase. This is the union of both source
/// dialects' lists; a pragmatic allow-list, not the IANA registry.
pub static VALID_TLDS: &[&str] = &[
    "ae", "aero", "ai", "app", "ar", "asia", "at", "au", "bd", "be", "bg", "biz", "bo", "br",
    "by", "ca", "cat", "ch", "cl", "cloud", "cn", "co", "com", "coop", "cr", "cu", "cz", "de",
    "dev", "dk", "do", "ec", "edu", "es", "fi", "fr", "gov", "gr", "gt", "hn", "hr", "hu", "id",
    "ie", "in", "info", "int", "io", "it", "jm", "jobs", "jp", "kr", "kz", "lk", "mil", "mobi",
    "museum", "mx", "my", "name", "net", "ni", "nl", "no", "np", "nz", "online", "org", "pa",
    "pe", "ph", "pk", "pl", "post", "pro", "pt", "py", "ro", "rs", "ru", "sa", "se", "sg", "si",
    "site", "sk", "store", "sv", "tech", "tel", "th", "tr", "travel", "ua", "uk", "us", "uy",
    "uz", "ve", "vn", "xxx", "xyz", "za",
];

// ── Well-known providers ──────────────────────────────────────────────────────

/// Consumer email domains considered plausible without further shape checks.
///
/// Sorted ASCII-ascending, all lowercase.
pub static COMMON_PROVIDERS: &[&str] = &[
    "aol.com",
    "bol.com.br",
    "gmail.com",
    "gmx.com",
    "hotmail.com",
    "icloud.com",
    "ig.com.br",
    "live.com",
    "mail.com",
    "outlook.com",
    "protonmail.com",
    "terra.com",
    "terra.com.br",
    "uol.com.br",
    "yahoo.com",
    "yahoo.com.br",
    "yandex.com",
    "zoho.com",
];

// ── Typo corrections ──────────────────────────────────────────────────────────

/// Frequently misspelled provider domains and their intended spelling.
///
/// Sorted ASCII-ascending by key. Every suggestion must itself be a member
/// of [`COMMON_PROVIDERS`] — the integrity check enforces this.
pub static TYPO_DOMAINS: &[(&str, &str)] = &[
    ("gamil.com", "gmail.com"),
    ("gmail.cmo", "gmail.com"),
    ("gmail.co", "gmail.com"),
    ("gmail.con", "gmail.com"),
    ("gmial.com", "gmail.com"),
    ("hotmail.con", "hotmail.com"),
    ("hotmal.com", "hotmail.com"),
    ("hotnail.com", "hotmail.com"),
    ("hotnail.con", "hotmail.com"),
    ("ig.com", "ig.com.br"),
    ("outlook.con", "outlook.com"),
    ("outloook.com", "outlook.com"),
    ("uol.com", "uol.com.br"),
    ("yaho.com", "yahoo.com"),
    ("yaho.com.br", "yahoo.com.br"),
    ("yahoo.con", "yahoo.com"),
];

// ── Default country whitelist ─────────────────────────────────────────────────

/// Country list used by the construction-free [`validate_form`] API.
///
/// Order is presentation order (the order a form dropdown shows), not sorted.
///
/// [`validate_form`]: crate::domain::validate_form
pub static DEFAULT_COUNTRIES: &[&str] = &[
    "México",
    "España",
    "Colombia",
    "Argentina",
    "Chile",
    "Perú",
    "Brasil",
    "Estados Unidos",
    "Canadá",
    "Alemania",
    "Francia",
    "Italia",
    "Reino Unido",
    "Japón",
    "Corea del Sur",
    "Australia",
];

// ── Table lookup API ──────────────────────────────────────────────────────────
//
// These functions are the ONLY entry points for table queries.
// Rule code must not index the tables directly.

/// Whether `tld` (lowercase) is an accepted top-level domain.
pub fn is_known_tld(tld: &str) -> bool {
    VALID_TLDS.binary_search(&tld).is_ok()
}

/// Whether `domain` (lowercase) is a well-known consumer provider.
pub fn is_common_provider(domain: &str) -> bool {
    COMMON_PROVIDERS.binary_search(&domain).is_ok()
}

/// Look up the suggested correction for a misspelled domain (lowercase).
///
/// Returns `None` when the domain is not a registered misspelling.
pub fn typo_correction(domain: &str) -> Option<&'static str> {
    TYPO_DOMAINS
        .binary_search_by(|(key, _)| key.cmp(&domain))
        .ok()
        .map(|idx| TYPO_DOMAINS[idx].1)
}

// ── Table integrity (checked in tests) ────────────────────────────────────────

/// Assert that the tables are internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
/// Catches registration errors at development time, not at user runtime.
#[doc(hidden)]
pub fn assert_table_integrity() {
    fn assert_sorted_unique(name: &str, entries: &[&str]) {
        for pair in entries.windows(2) {
            assert!(
                pair[0] < pair[1],
                "{name}: '{}' and '{}' are out of order or duplicated",
                pair[0],
                pair[1]
            );
        }
    }

    assert_sorted_unique("VALID_TLDS", VALID_TLDS);
    assert_sorted_unique("COMMON_PROVIDERS", COMMON_PROVIDERS);

    for tld in VALID_TLDS {
        assert!(
            tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_lowercase()),
            "VALID_TLDS: '{tld}' must be lowercase ASCII with at least 2 chars"
        );
    }

    for domain in COMMON_PROVIDERS {
        let tld = domain.rsplit('.').next().unwrap_or_default();
        assert!(
            is_known_tld(tld),
            "COMMON_PROVIDERS: '{domain}' has unregistered TLD '{tld}'"
        );
    }

    for pair in TYPO_DOMAINS.windows(2) {
        assert!(
            pair[0].0 < pair[1].0,
            "TYPO_DOMAINS: '{}' and '{}' are out of order or duplicated",
            pair[0].0,
            pair[1].0
        );
    }

    for (key, suggestion) in TYPO_DOMAINS {
        assert_ne!(key, suggestion, "TYPO_DOMAINS: '{key}' maps to itself");
        assert!(
            is_common_provider(suggestion),
            "TYPO_DOMAINS: suggestion '{suggestion}' is not a known provider"
        );
        assert!(
            typo_correction(suggestion).is_none(),
            "TYPO_DOMAINS: suggestion '{suggestion}' is itself a registered typo"
        );
    }

    assert!(
        !DEFAULT_COUNTRIES.is_empty(),
        "DEFAULT_COUNTRIES must not be empty"
    );
    for (idx, country) in DEFAULT_COUNTRIES.iter().enumerate() {
        assert_eq!(
            country.trim(),
            *country,
            "DEFAULT_COUNTRIES: entry {idx} has surrounding whitespace"
        );
        assert!(
            !country.is_empty(),
            "DEFAULT_COUNTRIES: entry {idx} is empty"
        );
        assert!(
            !DEFAULT_COUNTRIES[..idx].contains(country),
            "DEFAULT_COUNTRIES: '{country}' appears twice"
        );
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
