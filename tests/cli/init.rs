use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["extensions"], serde_json::json!(["cpp", "h"]));
    assert_eq!(parsed["excludedDirs"], serde_json::json!(["thirdparty"]));
    assert_eq!(parsed["output"], "editor/translations/editor.pot");
    assert_eq!(parsed["wrapWidth"], 79);
    assert!(
        parsed.get("header").is_some(),
        "Config should have 'header' field"
    );

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .potgenrc.json

    ----- stderr -----
    ");
    assert!(test.root().join(".potgenrc.json").exists());

    let content = test.read_file(".potgenrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".potgenrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .potgenrc.json already exists
    ");
    assert_eq!(test.read_file(".potgenrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("main.cpp", r#"TTR("Hello");"#)?;

    let output = test.extract_command().output()?;
    assert!(
        output.status.success(),
        "Extract command should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}
