use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_sync_keeps_manual_values_and_adds_new_keys() -> Result<()> {
    let test = CliTest::with_project()?;
    test.transync(&["locales", "add", "it"])?;
    test.transync(&["translations", "update", "it", "messages.greet", "Salve"])?;
    test.transync(&["translations", "update", "it", "custom", "Mio"])?;

    assert_cmd_snapshot!(test.command().args(["sync", "it"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      + courier::mail.subject
      + courier::mail.footer.text
      + messages.farewell
      + Welcome
    ✓ Synced 'it': 4 added (2 -> 6 translations)

    ----- stderr -----
    ");

    assert_cmd_snapshot!(test.command().args(["translations", "list", "it"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    vendor courier::mail.subject     = "Oggetto"
    vendor courier::mail.footer.text = "Bye"
    app    messages.greet            = "Salve"
    app    messages.farewell         = "Goodbye"
    app    Welcome                   = "Benvenuto"
    app    custom                    = "Mio"

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_sync_is_idempotent() -> Result<()> {
    let test = CliTest::with_project()?;
    test.transync(&["locales", "add", "it", "--initialize"])?;
    let before = test.read_file("storage/translations/it.json")?;

    assert_cmd_snapshot!(test.command().args(["sync", "it"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Synced 'it': 0 added (5 -> 5 translations)

    ----- stderr -----
    ");
    assert_eq!(test.read_file("storage/translations/it.json")?, before);

    Ok(())
}

#[test]
fn test_vendor_override_from_lang_dir() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "lang/vendor/courier/it/mail.json",
        r#"{ "subject": "Oggetto personalizzato" }"#,
    )?;
    test.transync(&["locales", "add", "it", "--initialize"])?;

    assert_cmd_snapshot!(test.command().args(["translations", "get", "it", "courier::mail.subject"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Oggetto personalizzato

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_sync_missing_locale_fails() -> Result<()> {
    let test = CliTest::with_project()?;

    assert_cmd_snapshot!(test.command().args(["sync", "fr"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Locale 'fr' does not exist
    ");

    Ok(())
}

#[test]
fn test_verbose_logs_to_stderr() -> Result<()> {
    let test = CliTest::with_project()?;
    test.transync(&["locales", "add", "it"])?;

    // Log lines carry timestamps, so only their presence is checked.
    let output = test.command().args(["sync", "it", "--verbose"]).output()?;
    assert!(output.status.success());
    let logs = String::from_utf8_lossy(&output.stderr);
    assert!(logs.contains("Harvested default translations"));
    assert!(logs.contains("Synchronized locale"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Harvested"));

    Ok(())
}
