//! Common test utilities for terminal tests.

use std::io::Write;
use std::process::Command;
use std::sync::Arc;

use folio_terminal::app::{Session, SessionOptions};
use folio_terminal::config::Config;
use folio_terminal::responder::CannedResponder;
use folio_terminal::terminal::{register_builtin_commands, Dispatcher};
use tempfile::NamedTempFile;

/// Portfolio config used across tests.
pub const SAMPLE_CONFIG: &str = r#"
[profile]
name = "Ada"
tagline = "Systems engineer"
bio = "Builds compilers and terminals."

[[profile.skills]]
category = "Languages"
items = ["Rust", "TypeScript", "Go"]

[[profile.skills]]
category = "Frontend"
items = ["React", "Next.js"]

[[profile.projects]]
name = "Forwheel"
description = "Bike fitting app"
url = "https://forwheel.example"
tags = ["react", "mobile"]

[[profile.contacts]]
label = "Email"
value = "ada@example.com"

[terminal]
fallback_reply = "Try /help."

[[responses]]
pattern = "project"
reply = "Type /projects to see them."
"#;

/// Parses the sample config.
pub fn sample_config() -> Config {
    toml::from_str(SAMPLE_CONFIG).expect("sample config parses")
}

/// Builds a dispatcher with the built-in commands over the sample profile.
pub fn builtin_dispatcher() -> Dispatcher {
    let mut dispatcher = Dispatcher::new();
    register_builtin_commands(&mut dispatcher, Arc::new(sample_config().profile));
    dispatcher
}

/// Builds a session the way the binary does.
pub fn sample_session() -> Session {
    let config = sample_config();
    Session::new(
        Arc::new(builtin_dispatcher()),
        Arc::new(CannedResponder::from_config(&config)),
        SessionOptions::from_config(&config),
    )
}

/// Writes the sample config to a temp file.
pub fn sample_config_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(SAMPLE_CONFIG.as_bytes())
        .expect("write temp config");
    file
}

/// Runs the folio binary and returns (exit code, stdout, stderr).
pub fn run_folio(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute folio");

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}
