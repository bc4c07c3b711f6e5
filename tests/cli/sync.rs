use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use langsync::dictionary::Dictionary;
use pretty_assertions::assert_eq;

use crate::{CliTest, DANISH};

#[test]
fn test_sync_dry_run_reports_annotations() -> Result<()> {
    let test = CliTest::with_languages()?;

    assert_cmd_snapshot!(test.langsync(&["sync", "da"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    buttons
      + save      TRANSLATE ME: 'Save'

    general
      + greet     TRANSLATE ME: 'Hello {0}'
      - obsolete  REMOVE ME: Gammel

    Would annotate 3 key(s) in 2 area(s) of 'da' against 'en': 2 to translate, 1 to remove.
    Run with --apply to write ./lang/da.xml.

    ----- stderr -----
    ");

    // Dry run leaves the file alone.
    assert_eq!(test.read_file("lang/da.xml")?, DANISH);

    Ok(())
}

#[test]
fn test_sync_apply_writes_destination() -> Result<()> {
    let test = CliTest::with_languages()?;

    let output = test.run(&["sync", "da", "--apply"])?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Annotated 3 key(s)"));
    assert!(output.stdout.contains("Wrote ./lang/da.xml"));

    let da = Dictionary::load(test.root().join("lang/da.xml"))?;
    assert_eq!(da.raw_phrase("general", "cancel"), "Annuller");
    assert_eq!(da.raw_phrase("general", "greet"), "TRANSLATE ME: 'Hello {0}'");
    assert_eq!(da.raw_phrase("general", "obsolete"), "REMOVE ME: Gammel");
    assert_eq!(da.raw_phrase("buttons", "save"), "TRANSLATE ME: 'Save'");
    assert_eq!(da.local_id, "6");
    assert_eq!(da.local_name, "dansk");

    let content = test.read_file("lang/da.xml")?;
    assert!(content.starts_with(r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>"#));
    assert!(content.contains(r#"    <key alias="obsolete">REMOVE ME: Gammel</key>"#));

    // The reference language is never written.
    assert_eq!(test.read_file("lang/en.xml")?, crate::ENGLISH);

    Ok(())
}

#[test]
fn test_sync_output_leaves_destination_untouched() -> Result<()> {
    let test = CliTest::with_languages()?;

    let output = test.run(&["sync", "da", "--apply", "--output", "out/da.xml"])?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Wrote out/da.xml"));

    assert_eq!(test.read_file("lang/da.xml")?, DANISH);
    let copy = Dictionary::load(test.root().join("out/da.xml"))?;
    assert_eq!(copy.raw_phrase("buttons", "save"), "TRANSLATE ME: 'Save'");

    Ok(())
}

// Running sync twice wraps obsolete phrases again. This is the established
// behaviour; --idempotent opts out of it.
#[test]
fn test_sync_rerun_accumulates_remove_prefix() -> Result<()> {
    let test = CliTest::with_languages()?;

    test.run(&["sync", "da", "--apply"])?;
    let output = test.run(&["sync", "da", "--apply"])?;
    assert!(output.stdout.contains("0 to translate, 1 to remove."));

    let da = Dictionary::load(test.root().join("lang/da.xml"))?;
    assert_eq!(
        da.raw_phrase("general", "obsolete"),
        "REMOVE ME: REMOVE ME: Gammel"
    );

    Ok(())
}

#[test]
fn test_sync_idempotent_rerun_is_a_no_op() -> Result<()> {
    let test = CliTest::with_languages()?;

    test.run(&["sync", "da", "--apply", "--idempotent"])?;
    let first = test.read_file("lang/da.xml")?;

    // Keys annotated by the first run are still listed for review.
    assert_cmd_snapshot!(test.langsync(&["sync", "da", "--apply", "--idempotent"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    buttons
      + save      TRANSLATE ME: 'Save'

    general
      + greet     TRANSLATE ME: 'Hello {0}'
      - obsolete  REMOVE ME: Gammel

    Nothing new to annotate in 'da' against 'en': 2 key(s) still to translate, 1 to remove.

    ----- stderr -----
    ");
    assert_eq!(test.read_file("lang/da.xml")?, first);

    Ok(())
}

#[test]
fn test_sync_lists_keys_annotated_earlier() -> Result<()> {
    let test = CliTest::with_languages()?;
    test.write_file(
        "lang/da.xml",
        r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>
<language alias="da" intName="Danish" localName="dansk" lcid="6" culture="da-DK">
  <area alias="buttons">
    <key alias="save">Gem</key>
  </area>
  <area alias="general">
    <key alias="cancel">Annuller</key>
    <key alias="greet">TRANSLATE ME: 'Hello {0}'</key>
  </area>
</language>"#,
    )?;

    assert_cmd_snapshot!(test.langsync(&["sync", "da"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    general
      + greet  TRANSLATE ME: 'Hello {0}'

    Nothing new to annotate in 'da' against 'en': 1 key(s) still to translate, 0 to remove.

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_sync_fully_translated_is_in_sync() -> Result<()> {
    let test = CliTest::with_languages()?;
    test.write_file(
        "lang/da.xml",
        r#"<language alias="da" intName="Danish" culture="da-DK">
  <area alias="buttons"><key alias="save">Gem</key></area>
  <area alias="general"><key alias="cancel">Annuller</key><key alias="greet">Hej {0}</key></area>
</language>"#,
    )?;

    let output = test.run(&["sync", "da", "--apply"])?;
    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\u{2713} 'da' already covers every key of 'en'\n"
    );

    Ok(())
}

#[test]
fn test_sync_idempotent_from_config() -> Result<()> {
    let test = CliTest::with_languages()?;
    test.write_file(
        ".langsyncrc.json",
        r#"{ "langRoot": "./lang", "idempotent": true }"#,
    )?;

    test.run(&["sync", "da", "--apply"])?;
    test.run(&["sync", "da", "--apply"])?;

    let da = Dictionary::load(test.root().join("lang/da.xml"))?;
    assert_eq!(da.raw_phrase("general", "obsolete"), "REMOVE ME: Gammel");

    Ok(())
}

#[test]
fn test_sync_with_explicit_source() -> Result<()> {
    let test = CliTest::with_languages()?;

    let output = test.run(&["sync", "en", "--source", "da", "--apply"])?;
    assert_eq!(output.code, Some(0));

    let en = Dictionary::load(test.root().join("lang/en.xml"))?;
    assert_eq!(en.raw_phrase("general", "obsolete"), "TRANSLATE ME: 'Gammel'");
    assert_eq!(en.raw_phrase("general", "greet"), "REMOVE ME: Hello {0}");
    // Areas the source does not have are left alone.
    assert_eq!(en.raw_phrase("buttons", "save"), "Save");

    Ok(())
}

#[test]
fn test_sync_source_from_config() -> Result<()> {
    let test = CliTest::with_languages()?;
    test.write_file(
        ".langsyncrc.json",
        r#"{ "langRoot": "./lang", "sourceCode": "da" }"#,
    )?;

    let output = test.run(&["sync", "en"])?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("of 'en' against 'da'"));

    Ok(())
}

#[test]
fn test_sync_same_language_fails() -> Result<()> {
    let test = CliTest::with_languages()?;

    assert_cmd_snapshot!(test.langsync(&["sync", "en"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: Source and destination are the same language ('en')

    ✘ 1 problem
    ");

    Ok(())
}

#[test]
fn test_sync_unknown_language_fails() -> Result<()> {
    let test = CliTest::with_languages()?;

    let output = test.run(&["sync", "zz"])?;
    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stderr
            .contains("error: Language 'zz' not found or unreadable")
    );

    let output = test.run(&["sync", "da", "--source", "zz"])?;
    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("Language 'zz' not found"));

    Ok(())
}

#[test]
fn test_sync_malformed_destination_fails() -> Result<()> {
    let test = CliTest::with_languages()?;
    test.write_file("lang/xx.xml", "<language>")?;

    let output = test.run(&["sync", "xx"])?;
    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("Language 'xx' not found or unreadable"));

    Ok(())
}
