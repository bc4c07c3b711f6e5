use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_list_shows_languages() -> Result<()> {
    let test = CliTest::with_languages()?;

    assert_cmd_snapshot!(test.langsync(&["list"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Languages in ./lang:
      da  Danish (dansk)  da-DK  1 area(s), 2 key(s)
      en  English (UK)    en-GB  2 area(s), 3 key(s)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_list_reports_unreadable_language() -> Result<()> {
    let test = CliTest::with_languages()?;
    test.write_file("lang/xx.xml", r#"<language alias="xx" intName="Broken">"#)?;

    let output = test.run(&["list"])?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("  xx  unreadable"));
    assert!(output.stdout.contains("  en  English (UK)"));
    assert!(output.stderr.contains("is not a valid language"));
    assert!(output.stderr.contains("1 problem"));

    Ok(())
}

#[test]
fn test_list_reports_truncated_language() -> Result<()> {
    let test = CliTest::with_languages()?;
    let cut = crate::DANISH.find("Gammel").unwrap_or(crate::DANISH.len());
    test.write_file("lang/da.xml", &crate::DANISH[..cut])?;

    let output = test.run(&["list"])?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("  da  unreadable"));
    assert!(output.stderr.contains("document ends inside <key>"));

    Ok(())
}

#[test]
fn test_list_ignores_other_files() -> Result<()> {
    let test = CliTest::with_languages()?;
    test.write_file("lang/readme.txt", "not a language")?;
    test.write_file("lang/nested/de.xml", crate::ENGLISH)?;

    let output = test.run(&["list"])?;
    assert_eq!(output.code, Some(0));
    assert!(!output.stdout.contains("readme"));
    assert!(!output.stdout.contains("  de "));

    Ok(())
}

#[test]
fn test_list_empty_folder() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lang/.keep", "")?;

    let output = test.run(&["list", "--lang-root", "lang"])?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("No language files found in lang"));

    Ok(())
}

#[test]
fn test_list_missing_folder_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["list", "--lang-root", "missing"])?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Language folder not found: missing"));

    Ok(())
}
