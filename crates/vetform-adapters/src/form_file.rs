//! Form-record loading.
//!
//! Reads a [`FormInput`] from a JSON object with the camelCase wire names:
//!
//! ```json
//! {
//!   "fullName": "Maria José da Silva",
//!   "email": "maria.jose@example.com",
//!   "birthDate": "1985-03-22",
//!   "country": "Brasil",
//!   "comments": "ola"
//! }
//! ```
//!
//! Unknown field *types* are not rejected here: a number where text belongs
//! decodes into the input record and is reported by the validator as a
//! field-level violation. Only structurally unusable files (unreadable,
//! not a JSON object) fail, as application errors.

use std::fs;
use std::path::Path;

use tracing::debug;

use vetform_core::domain::FormInput;
use vetform_core::error::{VetformError, VetformResult};
use vetform_core::application::ApplicationError;

/// Read a form record from a JSON file.
pub fn load(path: &Path) -> VetformResult<FormInput> {
    let text = fs::read_to_string(path).map_err(|e| {
        VetformError::Application(ApplicationError::InvalidFormFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    })?;
    parse(&text, path)
}

/// Parse a form record from JSON text. `origin` labels errors (use
/// `Path::new("<stdin>")` for piped input).
pub fn parse(text: &str, origin: &Path) -> VetformResult<FormInput> {
    let input: FormInput = serde_json::from_str(text).map_err(|e| {
        VetformError::Application(ApplicationError::InvalidFormFile {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })
    })?;
    debug!(origin = %origin.display(), "Parsed form record");
    Ok(input)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use vetform_core::domain::FieldValue;

    #[test]
    fn parse_reads_wire_names() {
        let input = parse(
            r#"{"fullName": "Ana Lima", "birthDate": "15/05/1990"}"#,
            Path::new("<test>"),
        )
        .unwrap();
        assert_eq!(input.full_name, FieldValue::Text("Ana Lima".into()));
        assert_eq!(input.birth_date, FieldValue::Text("15/05/1990".into()));
        assert!(input.email.is_missing());
    }

    #[test]
    fn parse_keeps_type_confusion_for_the_validator() {
        let input = parse(r#"{"fullName": 7}"#, Path::new("<test>")).unwrap();
        assert_eq!(input.full_name, FieldValue::Number(7.0));
    }

    #[test]
    fn parse_rejects_non_object_json() {
        let err = parse("[1, 2, 3]", Path::new("<test>")).unwrap_err();
        assert!(matches!(
            err,
            VetformError::Application(ApplicationError::InvalidFormFile { .. })
        ));
    }

    #[test]
    fn load_reads_a_file_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(br#"{"country": "Brasil"}"#).unwrap();

        let input = load(&path).unwrap();
        assert_eq!(input.country, FieldValue::Text("Brasil".into()));
    }

    #[test]
    fn load_reports_missing_files_with_their_path() {
        let err = load(Path::new("/no/such/form.json")).unwrap_err();
        match err {
            VetformError::Application(ApplicationError::InvalidFormFile { path, .. }) => {
                assert_eq!(path, Path::new("/no/such/form.json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
