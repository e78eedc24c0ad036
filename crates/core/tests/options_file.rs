use lintscope_api::Severity;
use lintscope_core::{AnalysisOptions, LintscopeError};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_options_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "rules": {{
                "LS0001": {{ "enabled": false }},
                "LS0002": {{ "severity": "error" }}
            }},
            "analyze_generated_code": true
        }}"#
    )
    .unwrap();

    let options = AnalysisOptions::from_json_file(file.path()).unwrap();
    assert!(options.analyze_generated_code);
    assert!(options.parallel);
    assert_eq!(options.rules["LS0001"].enabled, Some(false));
    assert_eq!(options.rules["LS0002"].severity, Some(Severity::Error));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AnalysisOptions::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LintscopeError::Io(_)));
}

#[test]
fn test_malformed_file_is_json_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ rules: ").unwrap();
    let err = AnalysisOptions::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, LintscopeError::Json(_)));
}
