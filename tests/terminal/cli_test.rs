//! Tests that run the folio binary.

use super::common::{run_folio, sample_config_file};

#[test]
fn test_exec_runs_inputs_in_order() {
    let config = sample_config_file();
    let path = config.path().to_str().unwrap();

    let (code, stdout, _) = run_folio(&["--config", path, "-e", "/skills go", "-e", "/about"]);

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "Languages: Go\nAda - Systems engineer\n\nBuilds compilers and terminals.\n"
    );
}

#[test]
fn test_exec_stops_at_exit() {
    let config = sample_config_file();
    let path = config.path().to_str().unwrap();

    let (code, stdout, _) = run_folio(&["--config", path, "-e", "/exit", "-e", "/about"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "");
}

#[test]
fn test_parse_only_prints_json() {
    let config = sample_config_file();
    let path = config.path().to_str().unwrap();

    let (code, stdout, _) = run_folio(&["--config", path, "--parse-only", "-e", "/Help  me"]);

    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({
            "type": "command",
            "command": "help",
            "args": ["me"],
            "raw": "/Help  me"
        })
    );
}

#[test]
fn test_script_file() {
    let config = sample_config_file();
    let mut script = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut script, b"/contact\n\nwhat projects?\n").unwrap();

    let (code, stdout, _) = run_folio(&[
        "--config",
        config.path().to_str().unwrap(),
        "--script",
        script.path().to_str().unwrap(),
    ]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "Email: ada@example.com\nType /projects to see them.\n");
}

#[test]
fn test_malformed_config_exits_with_error() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut config, b"[profile\n").unwrap();

    let (code, stdout, stderr) = run_folio(&[
        "--config",
        config.path().to_str().unwrap(),
        "-e",
        "/about",
    ]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Configuration Error"));
}

#[test]
fn test_invalid_output_format() {
    let (code, _, stderr) = run_folio(&["--output", "yaml", "-e", "/help"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid output format"));
}
