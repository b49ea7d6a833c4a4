use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, TEMPLATE_PATH, stdout};

#[test]
fn test_check_without_template_fails() -> Result<()> {
    let test = CliTest::with_remap_source()?;
    test.write_file("a.cpp", r#"TTR("Hello");"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✓ Extracted 1 message (1 reference) from 2 source files
    ✘ editor/translations/editor.pot does not exist
      = hint: run `potgen extract` to regenerate it

    ----- stderr -----
    ");
    assert!(!test.root().join(TEMPLATE_PATH).exists());

    Ok(())
}

#[test]
fn test_check_after_extract_passes() -> Result<()> {
    let test = CliTest::with_remap_source()?;
    test.write_file("a.cpp", r#"TTR("Hello");"#)?;
    test.extract_command().output()?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Extracted 1 message (1 reference) from 2 source files
    ✓ editor/translations/editor.pot is up to date

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_detects_stale_template() -> Result<()> {
    let test = CliTest::with_remap_source()?;
    test.write_file("a.cpp", r#"TTR("Hello");"#)?;
    test.extract_command().output()?;
    let before = test.read_template()?;

    test.write_file("a.cpp", "TTR(\"Hello\");\nTTR(\"New\");\n")?;

    assert_cmd_snapshot!(test.check_command().arg("--verbose"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    ✓ Extracted 2 messages (2 references) from 2 source files
      2 occurrences, 1 remap loaded, 0 files ignored
    ✘ editor/translations/editor.pot is out of date: 1 message added, 0 removed
      + "New"
      = hint: run `potgen extract` to regenerate it

    ----- stderr -----
    "#);
    assert_eq!(test.read_template()?, before);

    Ok(())
}

#[test]
fn test_check_detects_reference_changes() -> Result<()> {
    let test = CliTest::with_remap_source()?;
    test.write_file("a.cpp", r#"TTR("Hello");"#)?;
    test.extract_command().output()?;

    test.write_file("b.cpp", r#"TTR("Hello");"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✓ Extracted 1 message (2 references) from 3 source files
    ✘ editor/translations/editor.pot is out of date: references or comments changed
      = hint: run `potgen extract` to regenerate it

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_honors_line_numbers_flag() -> Result<()> {
    let test = CliTest::with_file("a.cpp", r#"TTR("Hello");"#)?;
    test.extract_command().arg("--with-line-nb").output()?;

    let same = test.check_command().arg("--line-numbers").output()?;
    assert!(same.status.success(), "stdout: {}", stdout(&same));

    let different = test.check_command().output()?;
    assert_eq!(different.status.code(), Some(1));

    Ok(())
}
