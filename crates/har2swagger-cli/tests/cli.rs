//! End-to-end tests for the har2swagger binary

// Internal imports (std, crate)
use std::path::PathBuf;
use std::process::Command;

// External imports (alphabetized)
use anyhow::{Context, Result};
use serde_json::Value as JsonValue;

/// Path to a HAR fixture shipped with the core crate
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../har2swagger-core/tests/fixtures/har")
        .join(name)
}

fn har2swagger() -> Command {
    Command::new(env!("CARGO_BIN_EXE_har2swagger"))
}

#[test]
fn test_convert_to_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("out/swagger.json");
    let config = dir.path().join("config.yaml");
    std::fs::write(
        &config,
        "info:\n  title: Items API\n  version: 0.9.0\noptions:\n  guessDataType: true\n",
    )?;

    let status = har2swagger()
        .arg("convert")
        .arg("--har")
        .arg(fixture("sample.har"))
        .arg("--config")
        .arg(&config)
        .arg("--api-version")
        .arg("1.0.0")
        .arg("--output")
        .arg(&output)
        .status()
        .context("Failed to run har2swagger")?;
    assert!(status.success());

    let doc: JsonValue = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert_eq!(doc["swagger"], "2.0");
    assert_eq!(doc["host"], "api.example.com");
    assert_eq!(doc["info"]["title"], "Items API");
    assert_eq!(doc["info"]["version"], "1.0.0");
    assert!(doc["definitions"]["Item"].is_object());
    Ok(())
}

#[test]
fn test_convert_to_stdout_without_guessing() -> Result<()> {
    let out = har2swagger()
        .args(["convert", "--no-guess-data-type", "--har"])
        .arg(fixture("sample.har"))
        .output()
        .context("Failed to run har2swagger")?;
    assert!(out.status.success());

    let doc: JsonValue = serde_json::from_slice(&out.stdout)?;
    let params = doc["paths"]["/api/items"]["get"]["parameters"]
        .as_array()
        .context("parameters missing")?;
    assert!(!params.is_empty());
    assert!(params.iter().all(|p| p["type"] == "string"));
    Ok(())
}

#[test]
fn test_convert_yaml() -> Result<()> {
    let out = har2swagger()
        .args(["convert", "--format", "yaml", "--har"])
        .arg(fixture("sample.har"))
        .output()
        .context("Failed to run har2swagger")?;
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout)?;
    assert!(text.contains("host: api.example.com"));
    Ok(())
}

#[test]
fn test_missing_host_fails() -> Result<()> {
    let out = har2swagger()
        .args(["convert", "--har"])
        .arg(fixture("no_host.har"))
        .output()
        .context("Failed to run har2swagger")?;
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Host"));
    Ok(())
}
