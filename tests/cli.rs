use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

fn groups() -> Command {
    Command::new(env!("CARGO_BIN_EXE_groups"))
}

fn run_with_stdin(mut cmd: Command, input: &[u8]) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().unwrap()
}

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn groups_chicago_example() {
    let file = input_file("chicago\talice\nchicago\tbob\nevanston\tcarol\n");
    let output = groups().arg(file.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "chicago:\nalice\nbob\n\n");
}

#[test]
fn groups_empty_file() {
    let file = input_file("");
    let output = groups().arg(file.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn groups_without_argument_is_usage_error() {
    let output = groups().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).to_lowercase().contains("usage"));
}

#[test]
fn groups_with_two_arguments_is_usage_error() {
    let output = groups().args(["a.tsv", "b.tsv"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn groups_missing_file_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("missing.tsv");
    let output = groups().arg(&path).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("missing.tsv"));
}

#[test]
fn groups_malformed_line_aborts_without_output() {
    let file = input_file("a\t1\na\t2\nthree\tfields\there\n");
    let output = groups().arg(file.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let err = stderr(&output);
    assert!(err.contains("line 3"), "stderr: {}", err);
    assert!(err.contains("three\\tfields\\there"), "stderr: {}", err);
}

#[test]
fn groups_malformed_line_skipped_on_request() {
    let file = input_file("a\t1\nnot a record\na\t2\n");
    let output = groups()
        .args(["--on-malformed", "skip"])
        .arg(file.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "a:\n1\n2\n\n");
    let err = stderr(&output);
    assert!(err.contains("Skipping malformed record on line 2"), "stderr: {}", err);
    assert!(err.contains("Skipped 1 malformed line(s)"), "stderr: {}", err);
}

#[test]
fn groups_quiet_suppresses_skip_warning() {
    let file = input_file("a\t1\nnot a record\na\t2\n");
    let output = groups()
        .args(["--quiet", "--on-malformed", "skip"])
        .arg(file.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(!stderr(&output).contains("Skipped"));
}

#[test]
fn groups_invalid_utf8_fails_with_line_number() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"k\t1\nk\xff\t2\nk\t3\n").unwrap();
    file.flush().unwrap();
    let output = groups().arg(file.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("invalid UTF-8 on line 2"));
}

#[test]
fn groups_closed_stdout_exits_cleanly() {
    let mut contents = String::new();
    for i in 0..20_000 {
        contents.push_str(&format!("key{:05}\tfirst\nkey{:05}\tsecond\n", i, i));
    }
    let file = input_file(&contents);

    let mut child = groups()
        .arg(file.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    drop(child.stdout.take());

    let status = child.wait().unwrap();
    assert_eq!(status.code(), Some(0));
}

#[test]
fn groups_reads_stdin_dash() {
    let mut cmd = groups();
    cmd.arg("-");
    let output = run_with_stdin(cmd, b"x\t1\ny\t1\nx\t2\n");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "x:\n1\n2\n\n");
}

#[test]
fn groups_backends_match() {
    let file = input_file("b\t1\na\t1\nb\t2\nc\t1\na\t2\nb\t3\n");

    let hash = groups().args(["--index", "hash"]).arg(file.path()).output().unwrap();
    let ordered = groups().args(["--index", "ordered"]).arg(file.path()).output().unwrap();

    assert_eq!(stdout(&hash), "a:\n1\n2\n\nb:\n1\n2\n3\n\n");
    assert_eq!(hash.stdout, ordered.stdout);
}

#[test]
fn groups_stats_go_to_stderr() {
    let file = input_file("k\t1\nk\t2\n");
    let output = groups().arg("--stats").arg(file.path()).output().unwrap();

    assert_eq!(stdout(&output), "k:\n1\n2\n\n");
    assert!(stderr(&output).contains("Groups reported"));
}

#[test]
fn caesar_round_trip_through_pipes() {
    let encrypted = run_with_stdin(
        Command::new(env!("CARGO_BIN_EXE_caesar")),
        b"Attack at dawn\n",
    );
    assert_eq!(encrypted.status.code(), Some(0));
    assert_eq!(stdout(&encrypted), "Piiprz pi splc\n");

    let mut decrypt = Command::new(env!("CARGO_BIN_EXE_caesar"));
    decrypt.arg("--decrypt");
    let decrypted = run_with_stdin(decrypt, &encrypted.stdout);
    assert_eq!(stdout(&decrypted), "Attack at dawn\n");
}

#[test]
fn caesar_custom_shift() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_caesar"));
    cmd.args(["--shift", "-1"]);
    let output = run_with_stdin(cmd, b"Abc, xyz!");

    assert_eq!(stdout(&output), "Zab, wxy!");
}

#[test]
fn letterfreq_report() {
    let output = run_with_stdin(Command::new(env!("CARGO_BIN_EXE_letterfreq")), b"aAb!\n");
    let report = stdout(&output);
    let lines: Vec<_> = report.lines().collect();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(lines.len(), 26);
    assert_eq!(lines[0], "A  66.67");
    assert_eq!(lines[1], "B  33.33");
    assert_eq!(lines[2], "C   0.00");
}

#[test]
fn letterfreq_empty_input() {
    let output = run_with_stdin(Command::new(env!("CARGO_BIN_EXE_letterfreq")), b"");
    let report = stdout(&output);

    assert_eq!(report.lines().count(), 26);
    assert!(report.lines().all(|l| l.ends_with("  0.00")));
}
