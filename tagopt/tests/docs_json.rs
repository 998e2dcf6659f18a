//! Tests for the JSON rendering of usage metadata.
#![cfg(feature = "serde_json")]

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use serde_json::{Value, json};
use tagopt::{Registry, USAGE_DOCS_VERSION};

#[rstest]
fn renders_every_option() -> Result<()> {
    let mut registry = Registry::new();
    let _conf = registry.string("c", "conf", "conf_file", "Config File", "conf.yaml");
    let _pid = registry.must_string("p", "", "pid_file", "Pid File");
    let _remains = registry.bare_array("remains", "Remaining Args");

    let parsed: Value = serde_json::from_str(&registry.docs().to_json()?)?;
    let expected = json!({
        "version": USAGE_DOCS_VERSION,
        "options": [
            {
                "short": "c",
                "long": "conf",
                "value_name": "conf_file",
                "kind": "string",
                "help": "Config File",
                "required": false,
                "default": "conf.yaml"
            },
            {
                "short": "p",
                "long": null,
                "value_name": "pid_file",
                "kind": "string",
                "help": "Pid File",
                "required": true,
                "default": null
            },
            {
                "short": null,
                "long": null,
                "value_name": "remains",
                "kind": "bare_array",
                "help": "Remaining Args",
                "required": false,
                "default": "[]"
            }
        ]
    });
    ensure!(parsed == expected, "got {parsed:#}");
    Ok(())
}

#[test]
fn empty_registry_has_no_options() -> Result<()> {
    let registry = Registry::new();
    let parsed: Value = serde_json::from_str(&registry.docs().to_json()?)?;
    let options = parsed
        .get("options")
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("options missing: {parsed}"))?;
    ensure!(options.is_empty());
    Ok(())
}
