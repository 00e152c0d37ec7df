use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_export_writes_csv() -> Result<()> {
    let test = CliTest::with_project()?;
    test.transync(&["locales", "add", "it"])?;
    test.transync(&["translations", "update", "it", "courier::mail.subject", "Oggetto, \"nuovo\""])?;
    test.transync(&["translations", "update", "it", "greet", "Ciao"])?;

    assert_cmd_snapshot!(test.command().args(["export", "it", "it.csv"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Exported 2 translations from 'it' to it.csv

    ----- stderr -----
    ");
    insta::assert_snapshot!(test.read_file("it.csv")?, @r#"
    source,namespace,key,value
    vendor,courier,mail.subject,"Oggetto, ""nuovo"""
    app,,greet,Ciao
    "#);

    Ok(())
}

#[test]
fn test_import_creates_locale() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "de.csv",
        "source,namespace,key,value\nvendor,courier,mail.subject,Betreff\napp,,greet,Hallo\n",
    )?;

    assert_cmd_snapshot!(test.command().args(["import", "de", "de.csv"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Imported 2 translations into 'de' from de.csv

    ----- stderr -----
    ");

    assert_cmd_snapshot!(test.command().args(["translations", "list", "de"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    vendor courier::mail.subject = "Betreff"
    app    greet                 = "Hallo"

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_export_import_round_trip() -> Result<()> {
    let test = CliTest::with_project()?;
    test.transync(&["locales", "add", "it", "--initialize"])?;
    let original = test.collection("it")?;

    test.transync(&["export", "it", "it.csv"])?;
    test.transync(&["locales", "remove", "it", "--yes"])?;
    test.transync(&["import", "it", "it.csv"])?;

    assert_eq!(test.collection("it")?, original);

    Ok(())
}

#[test]
fn test_import_malformed_row_leaves_store_untouched() -> Result<()> {
    let test = CliTest::with_project()?;
    test.transync(&["locales", "add", "it"])?;
    test.transync(&["translations", "update", "it", "greet", "Ciao"])?;
    test.write_file("bad.csv", "source,namespace,key,value\napp,,greet\n")?;

    assert_cmd_snapshot!(test.command().args(["import", "it", "bad.csv"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Malformed CSV row at line 2: expected 4 columns, found 3
    ");

    assert_cmd_snapshot!(test.command().args(["translations", "get", "it", "greet"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Ciao

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_import_missing_file_fails() -> Result<()> {
    let test = CliTest::with_project()?;

    assert_cmd_snapshot!(test.command().args(["import", "it", "missing.csv"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: missing.csv is not readable: No such file or directory (os error 2)
    ");
    assert!(!test.root().join("storage/translations/it.json").exists());

    Ok(())
}

#[test]
fn test_export_missing_locale_fails() -> Result<()> {
    let test = CliTest::with_project()?;

    assert_cmd_snapshot!(test.command().args(["export", "it", "it.csv"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Locale 'it' does not exist
    ");
    assert!(!test.root().join("it.csv").exists());

    Ok(())
}
