//! Integration tests for the conversion command.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 45 45"><g><path d="M 22,10 C 19.5,10 17,12 17,14.5"/><circle cx="22" cy="9" r="2.5"/></g></svg>
"#;

const ALL_OUTPUTS: [&str; 12] = [
    "bP.svg", "wP.svg", "bN.svg", "wN.svg", "bB.svg", "wB.svg", "bR.svg", "wR.svg", "bQ.svg",
    "wQ.svg", "bK.svg", "wK.svg",
];

fn write_sources(dir: &Path, names: &[&str]) {
    std::fs::create_dir_all(dir).unwrap();
    for name in names {
        std::fs::write(dir.join(format!("{name}.svg")), ICON).unwrap();
    }
}

fn command(temp: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("svgpieces");
    cmd.current_dir(temp.path())
        .env_remove("RUST_LOG")
        .env_remove("SVGPIECES_SOURCE_DIR")
        .env_remove("SVGPIECES_TARGET_DIR")
        .env_remove("SVGPIECES_STRATEGY")
        .env("SVGPIECES_CONFIG", temp.path().join("no-config.toml"))
        .arg("--no-progress");
    cmd
}

#[test]
fn test_default_dirs_produce_twelve_files() {
    let temp = TempDir::new().unwrap();
    write_sources(
        &temp.path().join("raw_pieces"),
        &["pawn", "knight", "bishop", "rook", "queen", "king"],
    );

    command(&temp)
        .assert()
        .success()
        .stderr(predicate::str::contains("Created bP.svg"))
        .stderr(predicate::str::contains("Created wK.svg"));

    let target = temp.path().join("assets").join("pieces");
    for name in ALL_OUTPUTS {
        assert!(target.join(name).is_file(), "missing {name}");
    }
    assert_eq!(std::fs::read_dir(&target).unwrap().count(), 12);
}

#[test]
fn test_missing_sources_are_skipped() {
    let temp = TempDir::new().unwrap();
    write_sources(&temp.path().join("raw"), &["pawn", "queen"]);

    command(&temp)
        .args(["-s", "raw", "-t", "out"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping knight.svg"));

    let target = temp.path().join("out");
    let mut written: Vec<String> = std::fs::read_dir(&target)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(written, ["bP.svg", "bQ.svg", "wP.svg", "wQ.svg"]);
}

#[test]
fn test_malformed_source_skipped_others_converted() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("raw");
    write_sources(&source, &["pawn"]);
    std::fs::write(source.join("king.svg"), "<svg><path></svg>").unwrap();

    command(&temp)
        .args(["-s", "raw", "-t", "out", "--strategy", "xml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error parsing king.svg"));

    let target = temp.path().join("out");
    assert!(target.join("bP.svg").is_file());
    assert!(!target.join("bK.svg").exists());
    assert!(!target.join("wK.svg").exists());
}

#[test]
fn test_xml_variants_have_expected_colors() {
    let temp = TempDir::new().unwrap();
    write_sources(&temp.path().join("raw"), &["rook"]);

    command(&temp)
        .args(["-s", "raw", "-t", "out"])
        .assert()
        .success();

    let black = std::fs::read_to_string(temp.path().join("out/bR.svg")).unwrap();
    let white = std::fs::read_to_string(temp.path().join("out/wR.svg")).unwrap();

    assert_eq!(black.matches(r##"fill="#000000" stroke="#ffffff""##).count(), 2);
    assert_eq!(white.matches(r##"fill="#ffffff" stroke="#000000""##).count(), 2);
    assert!(black.contains("<g>"));
}

#[test]
fn test_text_strategy_white_outline() {
    let temp = TempDir::new().unwrap();
    write_sources(&temp.path().join("raw"), &["bishop"]);

    command(&temp)
        .args(["-s", "raw", "-t", "out", "--strategy", "text"])
        .assert()
        .success();

    let black = std::fs::read_to_string(temp.path().join("out/bB.svg")).unwrap();
    let white = std::fs::read_to_string(temp.path().join("out/wB.svg")).unwrap();

    assert_eq!(black, ICON);
    assert!(white.contains(r##"<path fill="#ffffff" stroke="#000000" stroke-width="10""##));
}

#[test]
fn test_rerun_is_idempotent() {
    let temp = TempDir::new().unwrap();
    write_sources(&temp.path().join("raw"), &["knight"]);

    command(&temp).args(["-s", "raw", "-t", "out"]).assert().success();
    let first = std::fs::read(temp.path().join("out/wN.svg")).unwrap();

    command(&temp).args(["-s", "raw", "-t", "out"]).assert().success();
    let second = std::fs::read(temp.path().join("out/wN.svg")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_json_summary_on_stdout() {
    let temp = TempDir::new().unwrap();
    write_sources(&temp.path().join("raw"), &["pawn"]);

    let output = command(&temp)
        .args(["-s", "raw", "-t", "out", "--json", "-q"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["converted"], 1);
    assert_eq!(json["skipped"], 5);
    assert_eq!(json["files_written"], 2);
    assert_eq!(json["pieces"][0]["status"], "converted");
}

#[test]
fn test_piece_filter() {
    let temp = TempDir::new().unwrap();
    write_sources(&temp.path().join("raw"), &["pawn", "knight"]);

    command(&temp)
        .args(["-s", "raw", "-t", "out", "--piece", "N"])
        .assert()
        .success();

    assert!(temp.path().join("out/wN.svg").is_file());
    assert!(!temp.path().join("out/wP.svg").exists());
}

#[test]
fn test_same_source_and_target_rejected() {
    let temp = TempDir::new().unwrap();
    write_sources(&temp.path().join("raw"), &["pawn"]);

    command(&temp)
        .args(["-s", "raw", "-t", "raw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must differ"));
}

#[test]
fn test_same_directory_spelled_differently_rejected() {
    let temp = TempDir::new().unwrap();
    write_sources(&temp.path().join("raw"), &["pawn"]);

    command(&temp)
        .args(["-s", "raw", "-t", "./raw/."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must differ"));

    assert!(!temp.path().join("raw/bP.svg").exists());
}

#[test]
fn test_uncreatable_target_is_fatal() {
    let temp = TempDir::new().unwrap();
    write_sources(&temp.path().join("raw"), &["pawn"]);
    std::fs::write(temp.path().join("blocker"), "").unwrap();

    command(&temp)
        .args(["-s", "raw", "-t", "blocker/out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to create output directory"));
}
