//! Per-field validation rules.
//!
//! Each `check_*` function evaluates one field's rules in a fixed order and
//! returns the first failure. The functions are pure: outcome depends only
//! on the input value, the policy, and (for birth dates) the explicit
//! `today` argument — never on ambient state, so every rule is exactly
//! testable.
//!
//! Only [`normalize_full_name`] is exported: callers store the normalized
//! name, so the normalization must be available independently of validation.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::domain::entities::countries::CountryList;
use crate::domain::entities::form::FieldValue;
use crate::domain::entities::report::Violation;
use crate::domain::policy::{DateFormats, ValidatorPolicy};
use crate::domain::tables;

// ── Patterns ──────────────────────────────────────────────────────────────────
//
// \u{00C0}-\u{017F} covers the Latin-1 Supplement and Latin Extended-A
// accents (À…ÿ, Ā…ſ) that Spanish and Portuguese names use.

static NAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z\u{00C0}-\u{017F} '\-]+$").expect("invalid full-name charset pattern")
});

static NAME_LETTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z\u{00C0}-\u{017F}]").expect("invalid full-name letter pattern")
});

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email shape pattern")
});

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("invalid ISO date pattern"));

static PLAUSIBLE_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9\-]{1,61}[a-zA-Z0-9]\.[a-zA-Z]{2,}$")
        .expect("invalid domain shape pattern")
});

// ── Full name ─────────────────────────────────────────────────────────────────

/// Trim and collapse interior whitespace runs to single spaces.
///
/// This is the canonical form of a full name: every name rule evaluates it,
/// and it is the value a caller should persist or display.
pub fn normalize_full_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Rule order: text → normalize → min length → surname → charset → letter.
pub(crate) fn check_full_name(
    value: &FieldValue,
    policy: &ValidatorPolicy,
) -> Result<(), Violation> {
    let Some(text) = value.as_text() else {
        return Err(Violation::NotText);
    };
    let normalized = normalize_full_name(text);
    if normalized.chars().count() < policy.min_full_name_chars {
        return Err(Violation::NameTooShort {
            min: policy.min_full_name_chars,
        });
    }
    if !normalized.contains(' ') {
        return Err(Violation::NameMissingSurname);
    }
    if !NAME_CHARS.is_match(&normalized) {
        return Err(Violation::NameForbiddenChars);
    }
    // Rejects degenerate names made only of hyphens, apostrophes, and spaces.
    if !NAME_LETTER.is_match(&normalized) {
        return Err(Violation::NameNoLetters);
    }
    Ok(())
}

// ── Email ─────────────────────────────────────────────────────────────────────

/// Rule order: text → required → shape → typo map → TLD → plausibility.
///
/// The typo, TLD, and plausibility steps are heuristics against real-world
/// data entry (`gmail.con`, `example.c0m`), not RFC validation: they
/// deliberately reject some syntactically valid addresses as a business
/// rule.
pub(crate) fn check_email(value: &FieldValue, policy: &ValidatorPolicy) -> Result<(), Violation> {
    let Some(text) = value.as_text() else {
        return Err(Violation::NotText);
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Violation::EmailRequired);
    }
    if !EMAIL_SHAPE.is_match(trimmed) {
        return Err(Violation::EmailMalformed);
    }
    let Some((_, domain)) = trimmed.rsplit_once('@') else {
        return Err(Violation::EmailMalformed);
    };
    let lower = domain.to_lowercase();

    if let Some(suggestion) = tables::typo_correction(&lower) {
        return Err(Violation::EmailTypoDomain {
            domain: domain.to_string(),
            suggestion: suggestion.to_string(),
        });
    }

    let Some((_, tld)) = lower.rsplit_once('.') else {
        return Err(Violation::EmailMalformed);
    };
    if tld.len() < 2 || !tables::is_known_tld(tld) {
        return Err(Violation::EmailUnknownTld {
            tld: tld.to_string(),
        });
    }

    if policy.check_provider_plausibility
        && !tables::is_common_provider(&lower)
        && !PLAUSIBLE_DOMAIN.is_match(domain)
    {
        return Err(Violation::EmailImplausibleDomain);
    }
    Ok(())
}

// ── Birth date ────────────────────────────────────────────────────────────────

/// Rule order: parse → in the past → minimum age → minimum year.
///
/// `today` is threaded in by the caller so the rule stays a pure function;
/// [`FormValidator::validate`](crate::domain::FormValidator::validate)
/// supplies the current date.
pub(crate) fn check_birth_date(
    value: &FieldValue,
    today: NaiveDate,
    policy: &ValidatorPolicy,
) -> Result<(), Violation> {
    let birth = match value {
        FieldValue::Date(date) => *date,
        FieldValue::Text(text) => parse_birth_date(text.trim(), policy.date_formats)
            .ok_or(Violation::DateUnparseable)?,
        _ => return Err(Violation::DateUnparseable),
    };
    if birth >= today {
        return Err(Violation::DateNotInPast);
    }
    if age_on(today, birth) < policy.min_age_years as i32 {
        return Err(Violation::Underage {
            min_years: policy.min_age_years,
        });
    }
    if birth.year() < policy.min_birth_year {
        return Err(Violation::BirthYearTooEarly {
            min_year: policy.min_birth_year,
        });
    }
    Ok(())
}

/// Parse a textual birth date against the enabled formats.
fn parse_birth_date(text: &str, formats: DateFormats) -> Option<NaiveDate> {
    if formats.iso && ISO_DATE.is_match(text) {
        // chrono rejects impossible calendar dates (2023-02-30) here, which
        // is the round-trip guarantee the shape regex alone cannot give.
        return NaiveDate::parse_from_str(text, "%Y-%m-%d").ok();
    }
    if formats.dmy_slash {
        let parts: Vec<&str> = text.split('/').collect();
        if parts.len() == 3
            && parts
                .iter()
                .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
        {
            let day: u32 = parts[0].parse().ok()?;
            let month: u32 = parts[1].parse().ok()?;
            let year: i32 = parts[2].parse().ok()?;
            // from_ymd_opt rejects calendar overflow (31/04/…) that naive
            // date reconstruction would silently roll into the next month.
            return NaiveDate::from_ymd_opt(year, month, day);
        }
    }
    None
}

/// Whole years completed between `birth` and `today`, day-precise.
fn age_on(today: NaiveDate, birth: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

// ── Country ───────────────────────────────────────────────────────────────────

/// Rule order: text → required → exact membership. No case folding.
pub(crate) fn check_country(value: &FieldValue, countries: &CountryList) -> Result<(), Violation> {
    let Some(text) = value.as_text() else {
        return Err(Violation::NotText);
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Violation::CountryRequired);
    }
    if !countries.contains(trimmed) {
        return Err(Violation::CountryNotAllowed);
    }
    Ok(())
}

// ── Comments ──────────────────────────────────────────────────────────────────

/// Optional field: absent is valid; present must be text within the length
/// cap. Comments are never trimmed or normalized.
pub(crate) fn check_comments(value: &FieldValue, policy: &ValidatorPolicy) -> Result<(), Violation> {
    let text = match value {
        FieldValue::Missing => return Ok(()),
        FieldValue::Text(text) => text,
        _ => return Err(Violation::NotText),
    };
    if text.chars().count() > policy.max_comments_chars {
        return Err(Violation::CommentsTooLong {
            max: policy.max_comments_chars,
        });
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
