use anyhow::Result;
use std::ffi::OsStr;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::{Builder, NamedTempFile};

fn write_temp(suffix: &str, content: &str) -> Result<NamedTempFile> {
    let mut file = Builder::new().suffix(suffix).tempfile()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

fn run_cli(args: &[&OsStr]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_service-integrator"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()?)
}

/// The error report is the last line written to stderr.
fn stderr_report(output: &Output) -> Result<serde_json::Value> {
    let stderr = String::from_utf8(output.stderr.clone())?;
    let line = stderr.lines().last().unwrap_or_default();
    Ok(serde_json::from_str(line)?)
}

#[test]
fn test_validate_success() -> Result<()> {
    let file = write_temp(
        ".json",
        r#"{"services": [{"id": "svc1", "name": "A", "url": "http://a"}]}"#,
    )?;

    let output = run_cli(&[OsStr::new("validate"), file.path().as_os_str()])?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("✅"));
    assert!(stdout.contains("svc1"));
    Ok(())
}

#[test]
fn test_validate_failure_exits_one() -> Result<()> {
    let file = write_temp(
        ".json",
        r#"{"services": null, "config": {"base_url": "", "timeout": 0}}"#,
    )?;

    let output = run_cli(&[OsStr::new("validate"), file.path().as_os_str()])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr_report(&output)?,
        serde_json::json!({"message": "at least one service is required", "code": 400})
    );
    Ok(())
}

#[test]
fn test_unreadable_definition_exits_two() -> Result<()> {
    let file = write_temp(".json", "{not json")?;

    let output = run_cli(&[OsStr::new("validate"), file.path().as_os_str()])?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr_report(&output)?["code"], 400);
    Ok(())
}

#[test]
fn test_resolve_unknown_service_exits_one() -> Result<()> {
    let integrator = write_temp(
        ".toml",
        r#"
[[services]]
id = "users"
url = "https://users.example.com"
"#,
    )?;
    let integration = write_temp(".json", r#"{"service_id": "billing"}"#)?;

    let output = run_cli(&[
        OsStr::new("resolve"),
        integrator.path().as_os_str(),
        integration.path().as_os_str(),
    ])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr_report(&output)?,
        serde_json::json!({"message": "Unknown service: billing", "code": 404})
    );
    Ok(())
}

#[test]
fn test_resolve_prints_call_plan() -> Result<()> {
    let integrator = write_temp(
        ".json",
        r#"{"services": [{"id": "users", "url": "https://users.example.com"}],
            "config": {"base_url": "", "timeout": 5}}"#,
    )?;
    let integration = write_temp(
        ".json",
        r#"{"service_id": "users", "endpoint": "/me", "method": "get"}"#,
    )?;

    let output = run_cli(&[
        OsStr::new("resolve"),
        integrator.path().as_os_str(),
        integration.path().as_os_str(),
    ])?;

    assert_eq!(output.status.code(), Some(0));
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(plan["url"], "https://users.example.com/me");
    assert_eq!(plan["method"], "GET");
    assert_eq!(plan["timeout_seconds"], 5);
    Ok(())
}
