use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created .langsyncrc.json"));

    let content = test.read_file(".langsyncrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["langRoot"], "./umbraco/config/lang");
    assert_eq!(parsed["sourceCode"], "en");
    assert_eq!(parsed["idempotent"], false);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langsyncrc.json", "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("error: .langsyncrc.json already exists"));
    assert_eq!(test.read_file(".langsyncrc.json")?, "{}");

    Ok(())
}
