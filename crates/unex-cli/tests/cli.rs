use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const ENTRIES: &str = r#"[
  {"id": "1", "title": "Passport", "metadata": {"category": "Legal", "expiry": "2030-01-01"}},
  {"id": "2", "title": "Bank Login", "metadata": {"username": "sam", "password": "abc123"}}
]"#;

fn unex() -> Command {
    let mut cmd = Command::cargo_bin("unex").unwrap();
    cmd.env_remove("UNEX_CONFIG").arg("--no-color");
    cmd
}

#[test]
fn test_formats_lists_all_tags() {
    unex()
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("excel"))
        .stdout(predicate::str::contains("xlsx"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_markdown_to_stdout() {
    unex()
        .args(["export", "--domain", "documents", "--format", "markdown"])
        .write_stdin(ENTRIES)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Documents Export"))
        .stdout(predicate::str::contains("## 1. Passport"))
        .stdout(predicate::str::contains("| category | Legal |"));
}

#[test]
fn test_sanitized_csv_to_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("entries.json");
    fs::write(&input, ENTRIES).unwrap();

    unex()
        .args(["export", "-d", "documents", "-f", "csv", "--sanitize", "--no-quote"])
        .arg("--input")
        .arg(&input)
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Exported"));

    let exported: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    assert_eq!(exported.len(), 1);

    let name = exported[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("Documents-"));

    let content = fs::read_to_string(&exported[0]).unwrap();
    assert!(content.starts_with(
        "id,title,metadata.category,metadata.expiry,metadata.username,metadata.password\n"
    ));
    assert!(content.contains("[REDACTED]"));
    assert!(!content.contains("abc123"));
}

#[test]
fn test_empty_csv_fails() {
    unex()
        .args(["export", "-d", "financial", "-f", "csv"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no entries"));
}

#[test]
fn test_invalid_input_fails() {
    unex()
        .args(["export", "-d", "financial", "-f", "json"])
        .write_stdin("{\"rows\": 1}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON array of entries"));
}

#[test]
fn test_explicit_config_labels_domain() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("unex.toml");
    fs::write(&config, "[domains]\ndocuments = \"Papers\"\n").unwrap();
    let output = dir.path().join("out.json");

    unex()
        .arg("--config")
        .arg(&config)
        .args(["export", "-d", "documents", "-f", "json", "--output"])
        .arg(&output)
        .write_stdin(ENTRIES)
        .assert()
        .success();

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(doc["domainName"], "Papers");
    assert_eq!(doc["entryCount"], 2);
}

#[test]
fn test_out_dir_stays_put_for_path_like_domain() {
    let root = tempfile::tempdir().unwrap();
    let out_dir = root.path().join("out");
    fs::create_dir(&out_dir).unwrap();

    unex()
        .args(["export", "-d", "../escaped", "-f", "json", "--out-dir"])
        .arg(&out_dir)
        .write_stdin(ENTRIES)
        .assert()
        .success();

    let written: Vec<_> = fs::read_dir(&out_dir).unwrap().map(|e| e.unwrap().path()).collect();
    assert_eq!(written.len(), 1);
    let name = written[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("..-escaped-"), "unexpected name {}", name);

    let strays: Vec<_> = fs::read_dir(root.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .filter(|n| n != "out")
        .collect();
    assert!(strays.is_empty(), "wrote outside out dir: {:?}", strays);
}

#[test]
fn test_numeric_ids_and_null_titles_export() {
    unex()
        .args(["export", "-d", "financial", "-f", "csv", "--no-quote"])
        .write_stdin(r#"[{"id": 7, "title": null, "metadata": {"amount": 12}}]"#)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id,title,metadata.amount\n7,,12\n"));
}
