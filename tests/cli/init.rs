use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .transyncrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".transyncrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["storeRoot"], "./storage");
    assert_eq!(parsed["collectionDir"], "translations");
    assert_eq!(parsed["fallbackLocale"], "en");
    assert_eq!(parsed["langDir"], "./lang");
    assert!(parsed["vendorNamespaces"].as_array().is_some_and(Vec::is_empty));
    assert!(content.contains("  "), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transyncrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ .transyncrc.json already exists
    ");
    assert_eq!(test.read_file(".transyncrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transyncrc.json", r#"{ "fallbackLocale": "" }"#)?;

    assert_cmd_snapshot!(test.command().args(["locales", "list"]), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid locale in 'fallbackLocale': ""
    "#);

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: transync"));

    Ok(())
}
