use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_update_get_remove() -> Result<()> {
    let test = CliTest::with_project()?;
    test.transync(&["locales", "add", "it"])?;

    assert_cmd_snapshot!(test.command().args(["translations", "update", "it", "greet", "Ciao"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Updated 'greet' in 'it'

    ----- stderr -----
    ");

    assert_cmd_snapshot!(test.command().args(["translations", "get", "it", "greet"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Ciao

    ----- stderr -----
    ");

    assert_cmd_snapshot!(test.command().args(["translations", "remove", "it", "greet"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Removed 'greet' from 'it'

    ----- stderr -----
    ");

    assert_cmd_snapshot!(test.command().args(["translations", "get", "it", "greet"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ No translation for 'greet' in 'it'
    ");

    Ok(())
}

#[test]
fn test_namespaced_keys_are_distinct() -> Result<()> {
    let test = CliTest::with_project()?;
    test.transync(&["locales", "add", "it"])?;
    test.transync(&["translations", "update", "it", "courier::k", "vendor value"])?;
    test.transync(&["translations", "update", "it", "k", "app value"])?;

    assert_cmd_snapshot!(test.command().args(["translations", "get", "it", "courier::k"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    vendor value

    ----- stderr -----
    ");
    assert_cmd_snapshot!(test.command().args(["translations", "get", "it", "k"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    app value

    ----- stderr -----
    ");

    assert_eq!(
        test.collection("it")?,
        serde_json::json!([
            { "source": "vendor", "namespace": "courier", "key": "k", "value": "vendor value" },
            { "source": "app", "namespace": null, "key": "k", "value": "app value" }
        ])
    );

    Ok(())
}

#[test]
fn test_empty_namespace_is_rejected() -> Result<()> {
    let test = CliTest::with_project()?;
    test.transync(&["locales", "add", "it"])?;
    test.transync(&["translations", "update", "it", "greet", "plain"])?;

    assert_cmd_snapshot!(test.command().args(["translations", "update", "it", "::greet", "empty"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid namespace ''
    ");
    assert_cmd_snapshot!(test.command().args(["translations", "get", "it", "::greet"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid namespace ''
    ");

    // The plain entry survives a CSV round trip untouched.
    test.transync(&["export", "it", "it.csv"])?;
    test.transync(&["import", "it", "it.csv"])?;
    assert_eq!(
        test.collection("it")?,
        serde_json::json!([
            { "source": "app", "namespace": null, "key": "greet", "value": "plain" }
        ])
    );

    Ok(())
}

#[test]
fn test_list_prints_entries() -> Result<()> {
    let test = CliTest::with_project()?;
    test.transync(&["locales", "add", "it", "--initialize"])?;

    assert_cmd_snapshot!(test.command().args(["translations", "list", "it"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    vendor courier::mail.subject     = "Oggetto"
    vendor courier::mail.footer.text = "Bye"
    app    messages.greet            = "Ciao"
    app    messages.farewell         = "Goodbye"
    app    Welcome                   = "Benvenuto"

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_remove_missing_key_is_a_failure() -> Result<()> {
    let test = CliTest::with_project()?;
    test.transync(&["locales", "add", "it"])?;

    assert_cmd_snapshot!(test.command().args(["translations", "remove", "it", "courier::nope"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ No translation for 'courier::nope' in 'it'
    ");

    Ok(())
}

#[test]
fn test_update_missing_locale_is_an_error() -> Result<()> {
    let test = CliTest::with_project()?;

    assert_cmd_snapshot!(test.command().args(["translations", "update", "de", "greet", "Hallo"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Locale 'de' does not exist
    ");
    assert!(!test.root().join("storage/translations/de.json").exists());

    Ok(())
}
