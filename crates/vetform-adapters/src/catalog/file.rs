//! File-based country catalog.
//!
//! Two on-disk formats are supported, chosen by file extension:
//!
//! - **`.json`** — a JSON array of strings:
//!   ```json
//!   ["Brasil", "Argentina", "Chile"]
//!   ```
//! - **anything else** — one country per line; blank lines and lines
//!   starting with `#` are skipped:
//!   ```text
//!   # accepted countries
//!   Brasil
//!   Argentina
//!   ```
//!
//! The adapter only reads and parses. Trimming, de-duplication, and the
//! non-empty rule are applied by `CountryList` at construction, so file
//! catalogs are held to exactly the same standard as built-in ones.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use vetform_core::application::{ApplicationError, CountrySource};

/// Country whitelist read from a file at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, reason: impl Into<String>) -> ApplicationError {
        ApplicationError::CatalogUnavailable {
            origin: self.origin(),
            reason: reason.into(),
        }
    }
}

impl CountrySource for FileCatalog {
    fn load(&self) -> Result<Vec<String>, ApplicationError> {
        let text = fs::read_to_string(&self.path)
            .map_err(|e| self.unavailable(e.to_string()))?;

        let entries = if self.path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str::<Vec<String>>(&text)
                .map_err(|e| self.unavailable(format!("not a JSON string array: {e}")))?
        } else {
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string)
                .collect()
        };

        debug!(path = %self.path.display(), entries = entries.len(), "Loaded file catalog");
        Ok(entries)
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn json_array_loads() {
        let (_dir, path) = write_temp("countries.json", r#"["Brasil", "Chile"]"#);
        let entries = FileCatalog::new(&path).load().unwrap();
        assert_eq!(entries, vec!["Brasil", "Chile"]);
    }

    #[test]
    fn line_format_skips_blanks_and_comments() {
        let (_dir, path) = write_temp(
            "countries.txt",
            "# accepted countries\nBrasil\n\n  Argentina  \n# not this one\n",
        );
        let entries = FileCatalog::new(&path).load().unwrap();
        assert_eq!(entries, vec!["Brasil", "Argentina"]);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = FileCatalog::new("/no/such/file.txt").load().unwrap_err();
        assert!(matches!(err, ApplicationError::CatalogUnavailable { .. }));
    }

    #[test]
    fn malformed_json_is_unavailable_with_a_reason() {
        let (_dir, path) = write_temp("countries.json", r#"{"not": "an array"}"#);
        let err = FileCatalog::new(&path).load().unwrap_err();
        match err {
            ApplicationError::CatalogUnavailable { reason, .. } => {
                assert!(reason.contains("JSON"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_line_file_yields_no_entries() {
        // Emptiness is judged later by CountryList; the adapter just reports
        // what the file said.
        let (_dir, path) = write_temp("countries.txt", "\n\n# nothing here\n");
        let entries = FileCatalog::new(&path).load().unwrap();
        assert!(entries.is_empty());
        assert!(vetform_core::domain::CountryList::new(entries).is_err());
    }

    #[test]
    fn origin_is_the_path() {
        let catalog = FileCatalog::new("/tmp/countries.txt");
        assert_eq!(catalog.origin(), "/tmp/countries.txt");
    }
}
