// tests/cli_exit.rs - Exit code tests
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const HEADER: &str = "date,product,a,b,c,d,e,company\n";

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_complaints"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to execute complaints")
}

fn temp(content: &str) -> TempDir {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("in.csv"), content).unwrap();
    d
}

#[test]
fn test_exit_0_success() {
    let d = temp(&format!("{HEADER}2020-01-01,Credit card,,,,,,Bank A\n"));
    let out = run(d.path(), &["in.csv", "out.csv"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stderr.is_empty());
    assert_eq!(
        fs::read_to_string(d.path().join("out.csv")).unwrap(),
        "credit card,2020,1,1,100\n"
    );
}

#[test]
fn test_verbose_prints_summary() {
    let d = temp(&format!("{HEADER}2020-01-01,loan,,,,,,x\n"));
    let out = run(d.path(), &["in.csv", "out.csv", "--verbose"]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("1 records"), "{stderr}");
}

#[test]
fn test_exit_1_missing_input() {
    let d = tempfile::tempdir().unwrap();
    let out = run(d.path(), &["missing.csv", "out.csv"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("missing.csv"));
}

#[test]
fn test_exit_2_short_row() {
    let d = temp(&format!("{HEADER}2020-01-01,loan\n"));
    let out = run(d.path(), &["in.csv", "out.csv"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(!d.path().join("out.csv").exists());
}

#[test]
fn test_exit_2_bad_year() {
    let d = temp(&format!("{HEADER}unknown,loan,,,,,,x\n"));
    let out = run(d.path(), &["in.csv", "out.csv"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_local_config_is_picked_up() {
    let d = temp(&format!("{HEADER}2020-01-01,loan,,,,,,x\n"));
    fs::write(d.path().join("complaints.toml"), "line_terminator = \"crlf\"\n").unwrap();
    let out = run(d.path(), &["in.csv", "out.csv"]);
    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(d.path().join("out.csv")).unwrap(),
        "loan,2020,1,1,100\r\n"
    );
}

#[test]
fn test_exit_1_bad_config() {
    let d = temp(&format!("{HEADER}2020-01-01,loan,,,,,,x\n"));
    fs::write(d.path().join("settings.toml"), "rounding = \"sideways\"\n").unwrap();
    let out = run(d.path(), &["in.csv", "out.csv", "--config", "settings.toml"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_missing_arguments_rejected() {
    let d = tempfile::tempdir().unwrap();
    let out = run(d.path(), &["only-one.csv"]);
    assert!(!out.status.success());
}

#[test]
fn test_exit_2_invalid_utf8() {
    let d = tempfile::tempdir().unwrap();
    let mut bytes = HEADER.as_bytes().to_vec();
    bytes.extend_from_slice(b"2020-01-01,loan,,,,,,\xFF\xFE\n");
    fs::write(d.path().join("in.csv"), bytes).unwrap();
    let out = run(d.path(), &["in.csv", "out.csv"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(!d.path().join("out.csv").exists());
}

#[test]
fn test_exit_1_directory_input() {
    let d = tempfile::tempdir().unwrap();
    fs::create_dir(d.path().join("in.csv")).unwrap();
    let out = run(d.path(), &["in.csv", "out.csv"]);
    assert_eq!(out.status.code(), Some(1));
}
