//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (TOML; `--config` or the default location)
//! 3. Built-in defaults (always present)
//!
//! # File format
//!
//! ```toml
//! [defaults]
//! profile = "strict"       # strict | relaxed
//! catalog = "global"       # global | latam
//!
//! [output]
//! no_color = false
//! format = "human"
//!
//! # Optional: override individual policy knobs.
//! [policy]
//! min_age_years = 21
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use vetform_core::domain::ValidatorPolicy;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for validation runs.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Full policy override.  When present it beats `defaults.profile`;
    /// omitted knobs fall back to the strict preset.
    pub policy: Option<ValidatorPolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub profile: Option<String>,
    pub catalog: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            profile: None,
            catalog: Some("global".into()),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// With an explicit `--config` path the file must exist and parse.
    /// Without one, a missing file at the default location is not an error —
    /// the built-in defaults apply.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if required {
                anyhow::bail!("config file not found: {}", path.display());
            }
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.vetform.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "vetform", "vetform")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".vetform.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_catalog_is_global() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.catalog.as_deref(), Some("global"));
        assert_eq!(cfg.defaults.profile, None);
    }

    #[test]
    fn default_output_is_human_with_color() {
        let cfg = AppConfig::default();
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn load_without_file_returns_defaults() {
        // The default location almost certainly does not exist in CI.
        let cfg = AppConfig::load(None).unwrap();
        assert!(cfg.policy.is_none());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/no/such/vetform-config.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"[defaults]\nprofile = \"relaxed\"\n")
            .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.profile.as_deref(), Some("relaxed"));
        assert_eq!(cfg.defaults.catalog.as_deref(), Some("global"));
    }

    #[test]
    fn policy_table_overrides_individual_knobs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"[policy]\nmin_age_years = 21\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        let policy = cfg.policy.unwrap();
        assert_eq!(policy.min_age_years, 21);
        // Unspecified knobs keep the strict-preset defaults.
        assert_eq!(policy.max_comments_chars, 300);
    }

    #[test]
    fn config_path_is_nonempty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
