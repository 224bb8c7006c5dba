use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("tempdir"),
        }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }
}

fn checkdiff(args: &[&PathBuf], flags: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_checkdiff"))
        .args(args)
        .args(flags)
        .env_remove("CHECKDIFF_CONFIG")
        .output()
        .expect("run checkdiff")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn identical_documents_exit_zero() {
    let fixture = Fixture::new();
    let left = fixture.write("left.txt", "same\nlines\n");
    let right = fixture.write("right.txt", "same\r\nlines");

    let output = checkdiff(&[&left, &right], &[]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "1 1   same\n2 2   lines\n");
}

#[test]
fn differing_documents_exit_one_with_unified_output() {
    let fixture = Fixture::new();
    let left = fixture.write("left.txt", "same\nold\n");
    let right = fixture.write("right.txt", "same\nnew\n");

    let output = checkdiff(&[&left, &right], &[]);
    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "1 1   same\n2 2 ~ [-old-]{+new+}\n");
}

#[test]
fn collapse_flag_summarizes_unchanged_runs() {
    let fixture = Fixture::new();
    let left = fixture.write("left.txt", "a\nb\nc\nx\n");
    let right = fixture.write("right.txt", "a\nb\nc\ny\n");

    let output = checkdiff(&[&left, &right], &["--collapse-unchanged"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("3 unchanged lines"));
}

#[test]
fn unknown_format_exits_two() {
    let fixture = Fixture::new();
    let left = fixture.write("left.txt", "a\n");
    let right = fixture.write("right.txt", "b\n");

    let output = checkdiff(&[&left, &right], &["--format", "nope"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("renderer 'nope' is not registered"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn missing_document_exits_two() {
    let fixture = Fixture::new();
    let left = fixture.write("left.txt", "a\n");
    let right = fixture.dir.path().join("absent.txt");

    let output = checkdiff(&[&left, &right], &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("failed to read"));
}

#[test]
fn max_bytes_flag_rejects_large_documents() {
    let fixture = Fixture::new();
    let left = fixture.write("left.txt", "ab\n");
    let right = fixture.write("right.txt", "abcdef\n");

    let output = checkdiff(&[&left, &right], &["--max-bytes", "4"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("right document is 7 bytes, over the 4 byte limit"));
}

#[test]
fn width_flag_overrides_config_file() {
    let fixture = Fixture::new();
    let left = fixture.write("left.txt", "a\n");
    let right = fixture.write("right.txt", "b\n");
    let config = fixture.write("checkdiff.toml", "format = \"split\"\nwidth = 5\n");
    let config_arg = config.to_str().expect("utf-8 path");

    let narrow = checkdiff(&[&left, &right], &["--config", config_arg]);
    assert_eq!(narrow.status.code(), Some(2));
    assert!(stderr(&narrow).contains("output width 5 is too narrow"));

    let wide = checkdiff(&[&left, &right], &["--config", config_arg, "--width", "31"]);
    assert_eq!(wide.status.code(), Some(1), "stderr: {}", stderr(&wide));
    assert_eq!(
        stdout(&wide),
        format!("{:<14} | {}\n", "1 - a", "1 + b")
    );
}

#[test]
fn list_formats_needs_no_documents() {
    let output = checkdiff(&[], &["--list-formats"]);
    assert_eq!(output.status.code(), Some(0));

    let ids: Vec<String> = stdout(&output)
        .lines()
        .filter_map(|line| line.split_whitespace().next().map(str::to_owned))
        .collect();
    assert_eq!(ids, vec!["json", "split", "unified"]);
}

#[test]
fn config_path_is_read_from_environment() {
    let fixture = Fixture::new();
    let left = fixture.write("left.txt", "a\n");
    let right = fixture.write("right.txt", "a\n");
    let config = fixture.write("checkdiff.toml", "format = \"json\"\n");

    let output = Command::new(env!("CARGO_BIN_EXE_checkdiff"))
        .arg(&left)
        .arg(&right)
        .env("CHECKDIFF_CONFIG", &config)
        .output()
        .expect("run checkdiff");
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json output");
    assert_eq!(value["view"]["gutter"], serde_json::json!(["unchanged"]));
}
