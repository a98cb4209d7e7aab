use std::fs;

use clap::Parser;
use tempfile::tempdir;

use brex::BrexError;
use brex_cli::{
    Args,
    error_adapter::{ReportStyle, render_report},
};

/// Run the CLI over raw `input` bytes with the given flags.
fn run_cli_bytes(flags: &[&str], input: &[u8]) -> Result<String, BrexError> {
    let args = Args::try_parse_from(std::iter::once("brex").chain(flags.iter().copied()))
        .expect("Failed to parse arguments");

    let mut out = Vec::new();
    brex_cli::run(&args, input, &mut out)?;

    Ok(String::from_utf8(out).expect("Output should be UTF-8"))
}

/// Run the CLI over `input` with the given flags, returning stdout on success.
fn run_cli(flags: &[&str], input: &str) -> Result<String, BrexError> {
    run_cli_bytes(flags, input.as_bytes())
}

#[test]
fn e2e_smoke_test_valid_examples() {
    let examples = [
        ("{A,B,C}\n", "A B C\n"),
        ("{A,B}{C,D}\n", "AC AD BC BD\n"),
        ("{A,B{C,D}}\n", "A BC BD\n"),
        ("{ABC}\n", "ABC\n"),
        ("ABC\n", "ABC\n"),
        ("hello", "hello\n"),
        (
            "ha{x,foo{bar,baz{zy,z}}}{a,b}\n",
            "haxa haxb hafoobara hafoobarb hafoobazzya hafoobazzyb hafoobazza hafoobazzb\n",
        ),
    ];

    let mut failed_examples = Vec::new();

    for (input, expected) in examples {
        match run_cli(&[], input) {
            Ok(output) if output == expected => {}
            other => failed_examples.push((input, other)),
        }
    }

    if !failed_examples.is_empty() {
        eprintln!("\nValid examples that failed:");
        for (input, result) in &failed_examples {
            eprintln!("  - {input:?}: {result:?}");
        }
        panic!(
            "{} valid example(s) failed unexpectedly",
            failed_examples.len()
        );
    }
}

#[test]
fn e2e_smoke_test_error_examples() {
    let examples = [
        ("}ABC\n", 5),
        ("{ABC\n", 4),
        ("}{\n", 5),
        ("{}\n", 3),
        ("A,B,C\n", 5),
        ("{A{B,C}\n", 4),
        ("{A,}\n", 5),
        ("a#b\n", 1),
        ("\n", 8),
        ("", 8),
    ];

    for (input, status) in examples {
        match run_cli(&[], input) {
            Err(err) => assert_eq!(err.exit_code(), status, "status for {input:?}"),
            Ok(output) => panic!("{input:?} should fail, got {output:?}"),
        }
    }
}

#[test]
fn e2e_non_utf8_byte_is_invalid_character() {
    let err = run_cli_bytes(&[], b"a\xffb\n").unwrap_err();

    assert_eq!(err.exit_code(), 1);
    match &err {
        BrexError::Parse { err: diag, .. } => assert_eq!(diag.offset(), 1),
        other => panic!("expected a parse error, got {other:?}"),
    }

    let report = render_report(&err, ReportStyle::Plain);
    assert!(report.starts_with("error[E001]: "));
    assert!(report.contains(" --> byte offset 1\n"));
    assert!(report.contains("\n ^\n"));
}

#[test]
fn e2e_parse_flag_dumps_tree() {
    let output = run_cli(&["--parse"], "{a,b}\n").unwrap();

    assert_eq!(
        output,
        concat!(
            r#"{"type":"CHOICE","byteOffset":0,"source":"{a,b}","children":["#,
            r#"{"type":"LITERAL","byteOffset":1,"source":"a"},"#,
            r#"{"type":"LITERAL","byteOffset":3,"source":"b"}]}"#,
            "\n"
        )
    );
}

#[test]
fn e2e_pretty_parse_output() {
    let output = run_cli(&["--parse", "--pretty"], "abc\n").unwrap();

    assert!(output.lines().count() > 1);
    assert!(output.contains(r#""type": "LITERAL""#));
    assert!(output.ends_with("}\n"));
}

#[test]
fn e2e_lines_and_limit() {
    assert_eq!(
        run_cli(&["--lines"], "{a,b}{c,d}\n").unwrap(),
        "ac\nad\nbc\nbd\n"
    );
    assert_eq!(
        run_cli(&["--limit", "2"], "{a,b}{c,d}\n").unwrap(),
        "ac ad\n"
    );
    assert_eq!(run_cli(&["--limit", "0"], "{a,b}\n").unwrap(), "\n");
}

#[test]
fn e2e_trailing_input_is_driver_failure() {
    let err = run_cli(&[], "a\nb\n").unwrap_err();

    assert!(matches!(err, BrexError::TrailingInput { offset: 2 }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn e2e_error_report_rendering() {
    let err = run_cli(&[], "{a,b\n").unwrap_err();
    let report = render_report(&err, ReportStyle::Plain);

    assert!(report.starts_with("error[E004]: "));
    assert!(report.contains(" --> byte offset 4\n"));
    assert!(report.contains("{a,b\n    ^\n"));
}

#[test]
fn e2e_config_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[expansion]\nseparator = \",\"\nlimit = 3\n\n[tree]\npretty = false\n",
    )
    .expect("Failed to write config");
    let config_path = config_path.to_string_lossy().to_string();

    assert_eq!(
        run_cli(&["--config", &config_path], "{a,b}{c,d}\n").unwrap(),
        "ac,ad,bc\n"
    );
    assert_eq!(
        run_cli(&["--config", &config_path, "--lines", "--limit", "4"], "{a,b}{c,d}\n").unwrap(),
        "ac\nad\nbc\nbd\n"
    );
}

#[test]
fn e2e_invalid_config_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[expansion\n").expect("Failed to write config");
    let config_path = config_path.to_string_lossy().to_string();

    let err = run_cli(&["--config", &config_path], "a\n").unwrap_err();

    assert!(matches!(err, BrexError::Config(_)));
    assert_eq!(err.exit_code(), 2);
}
