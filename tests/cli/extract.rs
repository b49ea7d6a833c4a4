use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, TEMPLATE_PATH, body, stderr, stdout};

#[test]
fn test_extract_writes_template() -> Result<()> {
    let test = CliTest::with_remap_source()?;
    test.write_file(
        "editor/node.cpp",
        r#"label->set_text(RTR("Hello World"));
button->set_text(TTR("Hello World"));
"#,
    )?;

    assert_cmd_snapshot!(test.extract_command().arg("--with-line-nb"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Updating editor/translations/editor.pot template...
    ✓ Extracted 1 message (2 references) from 2 source files
    Created editor/translations/editor.pot

    ----- stderr -----
    ");

    let template = test.read_template()?;
    assert!(template.starts_with("# LANGUAGE translation of the Godot Engine editor.\n"));
    assert!(template.contains("\"Project-Id-Version: Godot Engine editor\\n\"\n"));
    assert_eq!(
        body(&template),
        "#: editor/node.cpp:1 editor/node.cpp:2\nmsgid \"Hello World\"\nmsgstr \"\"\n\n"
    );

    Ok(())
}

#[test]
fn test_extract_group_prefix() -> Result<()> {
    let test = CliTest::with_file(
        "scene/node_2d.cpp",
        r#"
	ADD_GROUP("Transform", "transform_");
	ADD_PROPERTY(PropertyInfo(Variant::VECTOR2, "transform_position"), "set_position", "get_position");
"#,
    )?;

    let output = test.extract_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        body(&test.read_template()?),
        "#: scene/node_2d.cpp\nmsgid \"Transform\"\nmsgstr \"\"\n\n\
         #: scene/node_2d.cpp\nmsgid \"Position\"\nmsgstr \"\"\n\n"
    );

    Ok(())
}

#[test]
fn test_extract_translator_comment_and_context() -> Result<()> {
    let test = CliTest::with_file(
        "editor/run.cpp",
        r#"
	/* TRANSLATORS: Tooltip text */
	button->set_tooltip(TTR("Run"));
	menu->add_item(TTR("Open", "Verb"));
"#,
    )?;

    let output = test.extract_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        body(&test.read_template()?),
        "#. TRANSLATORS: Tooltip text\n#: editor/run.cpp\nmsgid \"Run\"\nmsgstr \"\"\n\n\
         #: editor/run.cpp\nmsgctxt \"Verb\"\nmsgid \"Open\"\nmsgstr \"\"\n\n"
    );

    Ok(())
}

#[test]
fn test_extract_uses_remap_table() -> Result<()> {
    let test = CliTest::with_file(
        "editor/editor_property_name_processor.cpp",
        "\tcapitalize_string_remaps[\"ssao\"] = \"SSAO\";\n",
    )?;
    test.write_file(
        "scene/env.cpp",
        r#"GLOBAL_DEF("rendering/ssao_quality", 1);"#,
    )?;

    let output = test.extract_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).is_empty());
    assert_eq!(
        body(&test.read_template()?),
        "#: scene/env.cpp\nmsgid \"Rendering\"\nmsgstr \"\"\n\n\
         #: scene/env.cpp\nmsgid \"SSAO Quality\"\nmsgstr \"\"\n\n"
    );

    Ok(())
}

#[test]
fn test_missing_remap_source_warns() -> Result<()> {
    let test = CliTest::with_file("main.cpp", r#"TTR("Hello");"#)?;

    let output = test.extract_command().output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: Remap table not loaded"));

    Ok(())
}

#[test]
fn test_extract_skips_excluded_and_ignored() -> Result<()> {
    let test = CliTest::with_file("main.cpp", r#"TTR("Kept");"#)?;
    test.write_file("thirdparty/lib.cpp", r#"TTR("Vendored");"#)?;
    test.write_file("tests/test_main.cpp", r#"TTR("Test only");"#)?;
    test.write_file("notes.txt", r#"TTR("Not source");"#)?;
    test.write_file(".potgenrc.json", r#"{ "ignores": ["tests/**"] }"#)?;

    let output = test.extract_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        body(&test.read_template()?),
        "#: main.cpp\nmsgid \"Kept\"\nmsgstr \"\"\n\n"
    );

    Ok(())
}

#[test]
fn test_extract_is_idempotent() -> Result<()> {
    let test = CliTest::with_remap_source()?;
    test.write_file("a.cpp", "TTR(\"One\");\nRTR(\"Two\");\n")?;
    test.write_file("b/c.h", "// TRANSLATORS: Shared.\nTTR(\"One\");\n")?;

    test.extract_command().output()?;
    let first = test.read_template()?;

    assert_cmd_snapshot!(test.extract_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Updating editor/translations/editor.pot template...
    ✓ Extracted 2 messages (3 references) from 3 source files
    editor/translations/editor.pot is already up to date

    ----- stderr -----
    ");

    assert_eq!(test.read_template()?, first);

    Ok(())
}

#[test]
fn test_extract_reports_changes() -> Result<()> {
    let test = CliTest::with_remap_source()?;
    test.write_file("a.cpp", "TTR(\"Kept\");\nTTR(\"Gone\");\n")?;
    test.extract_command().output()?;

    test.write_file("a.cpp", "TTR(\"Kept\");\nTTR(\"Fresh\");\n")?;

    assert_cmd_snapshot!(test.extract_command().arg("-v"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    Updating editor/translations/editor.pot template...
    ✓ Extracted 2 messages (2 references) from 2 source files
      2 occurrences, 1 remap loaded, 0 files ignored
    Updated editor/translations/editor.pot: 1 message added, 1 removed
      + "Fresh"
      - "Gone"

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_extract_custom_output_without_wrap() -> Result<()> {
    let long = "word ".repeat(30);
    let test = CliTest::with_file("a.cpp", &format!("TTR(\"{}end\");\n", long))?;

    let output = test
        .extract_command()
        .args(["--output", "out/custom.pot", "--no-wrap"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!test.root().join(TEMPLATE_PATH).exists());
    let template = test.read_file("out/custom.pot")?;
    assert!(template.contains(&format!("msgid \"{}end\"\n", long)));

    Ok(())
}

#[test]
fn test_extract_wraps_long_messages() -> Result<()> {
    let long = "word ".repeat(30);
    let test = CliTest::with_file("a.cpp", &format!("TTR(\"{}end\");\n", long))?;

    test.extract_command().output()?;

    let template = test.read_template()?;
    assert!(template.contains("msgid \"\"\n\"word word"));
    assert!(template.lines().all(|line| line.chars().count() <= 79));

    Ok(())
}

#[test]
fn test_missing_root_is_error() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.extract_command().args(["--root", "missing"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: Root directory does not exist or is not a directory: missing
    ");

    Ok(())
}

#[test]
fn test_unreadable_source_is_error() -> Result<()> {
    let test = CliTest::with_file("a.cpp", r#"TTR("Fine");"#)?;
    std::fs::write(test.root().join("b.cpp"), b"\xff\xfe")?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("error: Failed to read source file"));
    assert!(stderr(&output).contains("b.cpp"));
    assert!(!test.root().join(TEMPLATE_PATH).exists());

    Ok(())
}

#[test]
fn test_invalid_config_is_error() -> Result<()> {
    let test = CliTest::with_file(".potgenrc.json", r#"{ "extensions": [] }"#)?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("error:"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
