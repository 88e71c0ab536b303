// tests/unit_config.rs
use std::fs;
use complaints_core::config::io::{load_local, parse_toml};
use complaints_core::config::{LineTerminator, ReportConfig, RoundingMode};
use complaints_core::ReportError;

#[test]
fn test_defaults() {
    let c = ReportConfig::default();
    assert_eq!(c.columns.year, 0);
    assert_eq!(c.columns.product, 1);
    assert_eq!(c.columns.company, 7);
    assert_eq!(c.columns.required_fields(), 8);
    assert_eq!(c.year_width, 4);
    assert!(c.skip_header);
    assert_eq!(c.delimiter, ',');
    assert_eq!(c.rounding, RoundingMode::HalfEven);
    assert_eq!(c.line_terminator, LineTerminator::Lf);
    assert!(c.validate().is_ok());
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(parse_toml("").unwrap(), ReportConfig::default());
}

#[test]
fn test_partial_toml() {
    let c = parse_toml("rounding = \"half_up\"\n[columns]\ncompany = 3").unwrap();
    assert_eq!(c.rounding, RoundingMode::HalfUp);
    assert_eq!(c.columns.company, 3);
    assert_eq!(c.columns.product, 1);
    assert_eq!(c.columns.required_fields(), 4);
}

#[test]
fn test_delimiter() {
    let c = parse_toml("delimiter = \";\"").unwrap();
    assert_eq!(c.delimiter_byte(), b';');
}

#[test]
fn test_unknown_rounding_rejected() {
    assert!(matches!(
        parse_toml("rounding = \"nearest\""),
        Err(ReportError::Config(_))
    ));
}

#[test]
fn test_validate_rejects_zero_width() {
    let c = parse_toml("year_width = 0").unwrap();
    assert!(matches!(c.validate(), Err(ReportError::Config(_))));
}

#[test]
fn test_validate_rejects_non_ascii_delimiter() {
    let c = parse_toml("delimiter = \"§\"").unwrap();
    assert!(c.validate().is_err());
}

#[test]
fn test_load_local() {
    let d = tempfile::tempdir().unwrap();
    assert_eq!(load_local(d.path()).unwrap(), ReportConfig::default());

    fs::write(d.path().join("complaints.toml"), "skip_header = false").unwrap();
    assert!(!load_local(d.path()).unwrap().skip_header);
}

#[test]
fn test_load_explicit_missing_file() {
    let d = tempfile::tempdir().unwrap();
    let err = ReportConfig::load(Some(d.path().join("absent.toml").as_path())).unwrap_err();
    match err {
        ReportError::Config(msg) => assert!(msg.contains("absent.toml"), "{msg}"),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_load_explicit_file() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("custom.toml");
    fs::write(&path, "year_width = 2\nline_terminator = \"crlf\"").unwrap();
    let c = ReportConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(c.year_width, 2);
    assert_eq!(c.line_terminator, LineTerminator::Crlf);
}
