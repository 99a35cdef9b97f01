//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No validation logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use vetform_core::domain::PolicyProfile;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "vetform",
    bin_name = "vetform",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2713} Registration-form validation at the command line",
    long_about = "Vetform judges registration-form records (name, email, \
                  birth date, country, comments) against an explicit policy \
                  and a configurable country whitelist.",
    after_help = "EXAMPLES:\n\
        \x20 vetform check form.json\n\
        \x20 vetform check --full-name 'Ana Lima' --email ana@gmail.com \\\n\
        \x20              --birth-date 1990-05-15 --country Brasil\n\
        \x20 vetform countries --catalog latam\n\
        \x20 vetform normalize '  Ana    Maria  Lima '\n\
        \x20 vetform completions bash > /usr/share/bash-completion/completions/vetform",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a form record.
    #[command(
        visible_alias = "c",
        about = "Validate a form record",
        after_help = "EXAMPLES:\n\
            \x20 vetform check form.json\n\
            \x20 vetform check - < form.json\n\
            \x20 vetform check form.json --profile relaxed --catalog latam\n\
            \x20 vetform check --email ana@gmail.con --full-name 'Ana Lima' \\\n\
            \x20              --birth-date 15/05/1990 --country Brasil\n\n\
            Exit code 0 means the form is valid; 2 means it was rejected."
    )]
    Check(CheckArgs),

    /// Print the active country whitelist.
    #[command(
        visible_alias = "ls",
        about = "List accepted countries",
        after_help = "EXAMPLES:\n\
            \x20 vetform countries\n\
            \x20 vetform countries --catalog latam\n\
            \x20 vetform countries --countries-file ./allowed.txt"
    )]
    Countries(CountriesArgs),

    /// Normalize a full name (trim + collapse interior whitespace).
    #[command(
        about = "Normalize a full name",
        after_help = "EXAMPLES:\n\
            \x20 vetform normalize '  Maria   José  da Silva '"
    )]
    Normalize(NormalizeArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 vetform completions bash > ~/.local/share/bash-completion/completions/vetform\n\
            \x20 vetform completions zsh  > ~/.zfunc/_vetform\n\
            \x20 vetform completions fish > ~/.config/fish/completions/vetform.fish"
    )]
    Completions(CompletionsArgs),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `vetform check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// JSON form file to validate; `-` reads stdin.  Omit it to build the
    /// record from the field flags below instead.
    #[arg(value_name = "FORM", help = "Form file (JSON), or '-' for stdin")]
    pub form: Option<PathBuf>,

    /// Full name field (overrides the file's value).
    #[arg(long = "full-name", value_name = "NAME", help = "fullName field")]
    pub full_name: Option<String>,

    /// Email field.
    #[arg(long = "email", value_name = "EMAIL", help = "email field")]
    pub email: Option<String>,

    /// Birth date field (ISO or DD/MM/YYYY, per the active profile).
    #[arg(long = "birth-date", value_name = "DATE", help = "birthDate field")]
    pub birth_date: Option<String>,

    /// Country field.
    #[arg(long = "country", value_name = "COUNTRY", help = "country field")]
    pub country: Option<String>,

    /// Comments field.
    #[arg(long = "comments", value_name = "TEXT", help = "comments field")]
    pub comments: Option<String>,

    /// Policy profile to judge against.
    #[arg(
        short = 'p',
        long = "profile",
        value_enum,
        value_name = "PROFILE",
        help = "Policy profile (strict or relaxed)"
    )]
    pub profile: Option<Profile>,

    /// Built-in country catalog to use.
    #[arg(
        long = "catalog",
        value_name = "NAME",
        conflicts_with = "countries_file",
        help = "Built-in country catalog (global, latam)"
    )]
    pub catalog: Option<String>,

    /// Country whitelist file (JSON array or one name per line).
    #[arg(
        long = "countries-file",
        value_name = "FILE",
        help = "Country whitelist file"
    )]
    pub countries_file: Option<PathBuf>,

    /// Validate as of this date instead of today (ISO `YYYY-MM-DD`).
    ///
    /// The age rule depends on "now"; pinning it makes runs reproducible.
    #[arg(long = "as-of", value_name = "DATE", help = "Validate as of DATE")]
    pub as_of: Option<String>,
}

// ── countries ─────────────────────────────────────────────────────────────────

/// Arguments for `vetform countries`.
#[derive(Debug, Args)]
pub struct CountriesArgs {
    /// Built-in country catalog to list.
    #[arg(
        long = "catalog",
        value_name = "NAME",
        conflicts_with = "countries_file",
        help = "Built-in country catalog (global, latam)"
    )]
    pub catalog: Option<String>,

    /// Country whitelist file to list.
    #[arg(
        long = "countries-file",
        value_name = "FILE",
        help = "Country whitelist file"
    )]
    pub countries_file: Option<PathBuf>,
}

// ── normalize ─────────────────────────────────────────────────────────────────

/// Arguments for `vetform normalize`.
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// The raw full name.
    #[arg(value_name = "NAME", help = "Raw full name to normalize")]
    pub name: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `vetform completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, value_name = "SHELL", help = "Shell to generate for")]
    pub shell: Shell,
}

// ── Value enums ───────────────────────────────────────────────────────────────

/// CLI-side policy profile names, mapped to the core enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    Strict,
    Relaxed,
}

impl From<Profile> for PolicyProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Strict => PolicyProfile::Strict,
            Profile::Relaxed => PolicyProfile::Relaxed,
        }
    }
}
