#![cfg(unix)]

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run(cmd: &mut Command) -> (i32, String, String) {
    let out = cmd.output().expect("failed to run dropbox-finder");
    let code = out.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&out.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&out.stderr).into_owned();
    (code, stdout, stderr)
}

fn write_info(home: &Path, content: &str) {
    let dir = home.join(".dropbox");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("info.json"), content).unwrap();
}

fn finder(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dropbox-finder"));
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_personal_path() {
    let td = tempdir().unwrap();
    write_info(td.path(), r#"{"personal":{"path":"/Users/LB/Dropbox","host":1}}"#);
    let (code, out, err) = run(&mut finder(td.path()));
    assert_eq!(code, 0, "expected success: {err}");
    assert_eq!(out, "/Users/LB/Dropbox\n");
}

#[test]
fn escape_flag_escapes_business_path() {
    let td = tempdir().unwrap();
    write_info(
        td.path(),
        r#"{"business":{"path":"/Users/LB/Dropbox (Literacy Bridge)"}}"#,
    );
    let (code, out, _err) = run(finder(td.path()).arg("-e"));
    assert_eq!(code, 0);
    assert_eq!(out, "/Users/LB/Dropbox\\ \\(Literacy\\ Bridge\\)\n");
}

#[test]
fn malformed_info_prints_empty_line() {
    let td = tempdir().unwrap();
    write_info(td.path(), "This is not a JSON string");
    let (code, out, _err) = run(&mut finder(td.path()));
    assert_eq!(code, 0);
    assert_eq!(out, "\n");
}

#[test]
fn missing_info_prints_empty_line() {
    let td = tempdir().unwrap();
    let (code, out, _err) = run(finder(td.path()).arg("--escape"));
    assert_eq!(code, 0);
    assert_eq!(out, "\n");
}

#[test]
fn info_file_flag_reads_given_file() {
    let td = tempdir().unwrap();
    let p = td.path().join("elsewhere.json");
    fs::write(&p, r#"{"personal":{"path":"/x y"}}"#).unwrap();
    let (code, out, _err) = run(finder(td.path()).arg("-e").arg("-f").arg(&p));
    assert_eq!(code, 0);
    assert_eq!(out, "/x\\ y\n");
}

#[test]
fn question_mark_prints_help_without_lookup() {
    let td = tempdir().unwrap();
    write_info(td.path(), r#"{"personal":{"path":"/Users/LB/Dropbox"}}"#);
    let (code, out, _err) = run(finder(td.path()).arg("-?"));
    assert_eq!(code, 0);
    assert!(out.contains("Usage"), "help expected: {out}");
    assert!(out.contains("-e"));
    assert!(!out.contains("/Users/LB/Dropbox"));
}

#[test]
fn debug_logging_stays_off_stdout() {
    let td = tempdir().unwrap();
    let (code, out, err) = run(finder(td.path()).env("RUST_LOG", "debug"));
    assert_eq!(code, 0);
    assert_eq!(out, "\n");
    assert!(err.contains("info.json"), "debug log expected on stderr: {err}");
}

#[test]
fn unknown_flag_is_usage_error() {
    let td = tempdir().unwrap();
    let (code, out, _err) = run(finder(td.path()).arg("--bogus"));
    assert_eq!(code, 2);
    assert!(out.is_empty());
}
