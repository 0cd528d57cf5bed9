//! Flag updates for a single appsettings document.
//!
//! The patch logic is a pure function over the document text
//! ([`set_flag_in_document`]) with a thin I/O wrapper ([`update_flag`]) that
//! reads, patches, and rewrites the file in place. The wrapper never fails
//! the run: every file maps to exactly one [`UpdateOutcome`], which renders
//! to one human-readable status line via `Display`.
//!
//! The `"Actions"` section is rewritten with its keys in ascending
//! lexicographic order so repeated runs produce deterministic, diff-friendly
//! output regardless of prior key order. Everything else in the document
//! keeps its on-disk key order.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::DocumentError;

/// Top-level key holding the flag section.
pub const ACTIONS_KEY: &str = "Actions";

/// Status of a single file update.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// Flag written and file rewritten in place.
    Updated {
        path: PathBuf,
        flag: String,
        value: bool,
    },
    /// No file at the resolved path. Files are never created.
    NotFound { path: PathBuf },
    /// File content is not parseable JSON; left unmodified.
    InvalidJson { path: PathBuf },
    /// Any other read, write, or structure failure.
    Failed { path: PathBuf, reason: String },
}

impl fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateOutcome::Updated { path, flag, value } => {
                write!(f, "✓ set '{flag}' to {value} in {}", path.display())
            }
            UpdateOutcome::NotFound { path } => {
                write!(f, "⚠ file not found: {}", path.display())
            }
            UpdateOutcome::InvalidJson { path } => {
                write!(f, "⚠ invalid JSON in {}", path.display())
            }
            UpdateOutcome::Failed { path, reason } => {
                write!(f, "⚠ error processing {}: {reason}", path.display())
            }
        }
    }
}

/// Pure function: patch a JSON document string, setting `flag_name` to
/// `value` inside the `"Actions"` section.
///
/// The section is created (appended at the end of the document) when absent
/// and keeps its position when present; its keys are re-sorted ascending
/// either way. The root must be an object and `"Actions"`, if present, must
/// be an object too; nothing deeper is validated.
///
/// Returns the serialized document: 2-space indentation, non-ASCII characters
/// kept literal, exactly one trailing newline.
pub fn set_flag_in_document(
    content: &str,
    flag_name: &str,
    value: bool,
) -> Result<String, DocumentError> {
    let mut doc: Value = serde_json::from_str(content)?;
    let root = doc.as_object_mut().ok_or(DocumentError::RootNotObject)?;

    let section = root
        .entry(ACTIONS_KEY)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or(DocumentError::SectionNotObject)?;
    section.insert(flag_name.to_string(), Value::Bool(value));

    let mut flags: Vec<(String, Value)> = std::mem::take(section).into_iter().collect();
    flags.sort_by(|(a, _), (b, _)| a.cmp(b));
    section.extend(flags);

    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}

/// I/O wrapper: read the file at `path`, patch it, write it back in place.
///
/// Classification of failures, all non-fatal:
/// - missing file → [`UpdateOutcome::NotFound`] (no file is created),
/// - unparseable content → [`UpdateOutcome::InvalidJson`] (file untouched),
/// - non-object root or section, or any other I/O failure →
///   [`UpdateOutcome::Failed`] carrying the underlying message.
pub fn update_flag(path: &Path, flag_name: &str, value: bool) -> UpdateOutcome {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return UpdateOutcome::NotFound {
                path: path.to_path_buf(),
            };
        }
        Err(e) => {
            return UpdateOutcome::Failed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            };
        }
    };

    let patched = match set_flag_in_document(&content, flag_name, value) {
        Ok(patched) => patched,
        Err(DocumentError::Json(_)) => {
            return UpdateOutcome::InvalidJson {
                path: path.to_path_buf(),
            };
        }
        Err(e) => {
            return UpdateOutcome::Failed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            };
        }
    };

    match std::fs::write(path, &patched) {
        Ok(()) => UpdateOutcome::Updated {
            path: path.to_path_buf(),
            flag: flag_name.to_string(),
            value,
        },
        Err(e) => UpdateOutcome::Failed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Keys of the `"Actions"` section in stored order.
    fn section_keys(doc: &str) -> Vec<String> {
        let parsed: Value = serde_json::from_str(doc).unwrap();
        parsed[ACTIONS_KEY]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn inserted_flag_lands_in_sorted_position() {
        let content = r#"{"Actions": {"b": true, "a": false}}"#;
        let out = set_flag_in_document(content, "c", true).unwrap();
        assert_eq!(section_keys(&out), vec!["a", "b", "c"]);
    }

    #[test]
    fn existing_keys_are_resorted() {
        let content = r#"{"Actions": {"z": true, "m": false, "a": true}}"#;
        let out = set_flag_in_document(content, "k", false).unwrap();
        assert_eq!(section_keys(&out), vec!["a", "k", "m", "z"]);
    }

    #[test]
    fn overwrites_existing_flag() {
        let content = r#"{"Actions": {"newCheckout": false}}"#;
        let out = set_flag_in_document(content, "newCheckout", true).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[ACTIONS_KEY]["newCheckout"], Value::Bool(true));
        assert_eq!(section_keys(&out).len(), 1);
    }

    #[test]
    fn creates_section_when_absent() {
        let out = set_flag_in_document(r#"{"Logging": {}}"#, "newCheckout", true).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[ACTIONS_KEY]["newCheckout"], Value::Bool(true));
        // Appended after the existing content.
        let keys: Vec<&String> = parsed.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["Logging", ACTIONS_KEY]);
    }

    #[test]
    fn other_top_level_keys_keep_their_order() {
        let content = r#"{"Zeta": 1, "Alpha": 2, "Actions": {}, "Middle": 3}"#;
        let out = set_flag_in_document(content, "x", true).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        let keys: Vec<&String> = parsed.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["Zeta", "Alpha", ACTIONS_KEY, "Middle"]);
        assert_eq!(parsed["Zeta"], Value::from(1));
        assert_eq!(parsed["Middle"], Value::from(3));
    }

    #[test]
    fn output_shape_is_two_space_indented_with_trailing_newline() {
        let content = r#"{"Logging": {"Level": "Warning"}, "Actions": {"b": true, "a": false}}"#;
        let out = set_flag_in_document(content, "c", true).unwrap();
        assert_eq!(
            out,
            "{\n  \"Logging\": {\n    \"Level\": \"Warning\"\n  },\n  \"Actions\": {\n    \"a\": false,\n    \"b\": true,\n    \"c\": true\n  }\n}\n"
        );
    }

    #[test]
    fn non_ascii_stays_literal() {
        let content = r#"{"Greeting": "Šaljemo pošiljku", "Actions": {}}"#;
        let out = set_flag_in_document(content, "x", false).unwrap();
        assert!(out.contains("Šaljemo pošiljku"));
        assert!(!out.contains("\\u"));
    }

    #[test]
    fn patch_is_idempotent() {
        let content = r#"{"Actions": {"b": true}}"#;
        let once = set_flag_in_document(content, "a", true).unwrap();
        let twice = set_flag_in_document(&once, "a", true).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn root_array_is_rejected() {
        let result = set_flag_in_document("[1, 2]", "x", true);
        assert!(matches!(result, Err(DocumentError::RootNotObject)));
    }

    #[test]
    fn non_object_section_is_rejected() {
        let result = set_flag_in_document(r#"{"Actions": "oops"}"#, "x", true);
        assert!(matches!(result, Err(DocumentError::SectionNotObject)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = set_flag_in_document("{not json", "x", true);
        assert!(matches!(result, Err(DocumentError::Json(_))));
    }

    // --- update_flag (I/O wrapper) ---

    #[test]
    fn missing_file_is_not_found_and_not_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("appsettings.json");

        let outcome = update_flag(&path, "x", true);
        assert_eq!(outcome, UpdateOutcome::NotFound { path: path.clone() });
        assert!(!path.exists());
    }

    #[test]
    fn malformed_file_is_reported_and_left_unmodified() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("appsettings.json");
        fs::write(&path, "{broken").unwrap();

        let outcome = update_flag(&path, "x", true);
        assert_eq!(outcome, UpdateOutcome::InvalidJson { path: path.clone() });
        assert_eq!(fs::read_to_string(&path).unwrap(), "{broken");
    }

    #[test]
    fn non_object_root_is_a_generic_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("appsettings.json");
        fs::write(&path, "[1, 2]").unwrap();

        let outcome = update_flag(&path, "x", true);
        assert!(matches!(outcome, UpdateOutcome::Failed { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[1, 2]");
    }

    #[test]
    fn successful_update_rewrites_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("appsettings.json");
        fs::write(&path, r#"{"Actions": {}}"#).unwrap();

        let outcome = update_flag(&path, "newCheckout", true);
        assert_eq!(
            outcome,
            UpdateOutcome::Updated {
                path: path.clone(),
                flag: "newCheckout".into(),
                value: true,
            }
        );
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("}\n"));
        assert_eq!(section_keys(&content), vec!["newCheckout"]);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_file_is_a_generic_failure() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("appsettings.json");
        fs::write(&path, r#"{"Actions": {}}"#).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

        let outcome = update_flag(&path, "x", true);
        assert!(matches!(outcome, UpdateOutcome::Failed { .. }));

        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[test]
    fn outcome_display_is_one_line_each() {
        let outcomes = [
            UpdateOutcome::Updated {
                path: "a.json".into(),
                flag: "x".into(),
                value: true,
            },
            UpdateOutcome::NotFound { path: "a.json".into() },
            UpdateOutcome::InvalidJson { path: "a.json".into() },
            UpdateOutcome::Failed {
                path: "a.json".into(),
                reason: "denied".into(),
            },
        ];
        for outcome in &outcomes {
            let line = outcome.to_string();
            assert!(!line.contains('\n'));
            assert!(line.contains("a.json"));
        }
    }
}
