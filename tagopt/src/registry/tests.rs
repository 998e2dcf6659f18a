//! Unit tests for registry bookkeeping.

use std::collections::BTreeMap;

use anyhow::{Result, anyhow, ensure};

use super::*;
use crate::descriptor::OptionKind;
use crate::error::ErrorKind;
use crate::value::Value;

#[test]
fn indexes_by_short_and_long() {
    let mut registry = Registry::new();
    let _conf = registry.string("c", "conf", "conf_file", "Config File", "conf.yml");
    let _pid = registry.must_string("p", "", "pid_file", "Pid File");

    assert!(registry.lookup_short("c").is_some());
    assert!(registry.lookup_long("conf").is_some());
    assert!(registry.lookup_short("p").is_some());
    assert!(registry.lookup_long("p").is_none());
    assert!(registry.lookup_short("x").is_none());
    assert_eq!(registry.len(), 2);
}

#[test]
fn later_registration_shadows_earlier() -> Result<()> {
    let mut registry = Registry::new();
    let first = registry.string("c", "conf", "", "", "first");
    let second = registry.string("c", "conf", "", "", "second");
    registry.parse(["-c", "x"])?;
    ensure!(first.get() == "first");
    ensure!(second.get() == "x");
    ensure!(registry.len() == 2, "shadowed option left the ordered list");
    Ok(())
}

#[test]
fn reset_clears_everything() {
    let mut registry = Registry::new();
    let _verbose = registry.bool("v", "verbose", "", "", false);
    let _files = registry.bare_array("files", "");
    registry.reset();
    assert!(registry.is_empty());
    assert!(registry.lookup_short("v").is_none());
    assert!(registry.lookup_long("verbose").is_none());
}

#[test]
fn typed_constructors_record_defaults() -> Result<()> {
    let mut registry = Registry::new();
    let _repeat = registry.int("r", "repeat", "repeat_times", "", 1024);
    let _times = registry.must_int("t", "times", "", "");
    let _ratio = registry.float("f", "ratio", "", "", 0.5);
    let _rest = registry.bare_array("rest", "");
    let defaults: Vec<_> = registry
        .options()
        .iter()
        .map(|d| (d.kind(), d.spec().required, d.spec().default.clone()))
        .collect();
    ensure!(
        defaults
            == [
                (OptionKind::Int, false, Some(Value::Int(1024))),
                (OptionKind::Int, true, None),
                (OptionKind::Float, false, Some(Value::Float(0.5))),
                (OptionKind::BareArray, false, Some(Value::List(Vec::new()))),
            ],
        "got {defaults:?}"
    );
    Ok(())
}

#[test]
fn tagged_default_is_written_to_the_field() -> Result<()> {
    let mut conf = String::new();
    {
        let mut registry = Registry::new();
        registry.register_tagged("conf", &mut conf, "short:'c';long:'conf';default:'x.yml'")?;
        let descriptor = registry
            .lookup_long("conf")
            .ok_or_else(|| anyhow!("conf not registered"))?;
        ensure!(!descriptor.is_set());
    }
    ensure!(conf == "x.yml", "got {conf}");
    Ok(())
}

#[test]
fn tagged_field_without_default_keeps_its_value() -> Result<()> {
    let mut workers = 4_i64;
    let mut registry = Registry::new();
    registry.register_tagged("workers", &mut workers, "long:workers")?;
    let default = registry
        .lookup_long("workers")
        .and_then(|d| d.spec().default.clone());
    ensure!(default == Some(Value::Int(4)), "got {default:?}");
    Ok(())
}

#[test]
fn tagged_list_default_gives_way_to_supplied_values() -> Result<()> {
    let mut vols: Vec<String> = Vec::new();
    {
        let mut registry = Registry::new();
        registry.register_tagged("vols", &mut vols, "s:v;l:volume;d:base")?;
        registry.parse(["-v", "a", "-v", "b"])?;
    }
    ensure!(vols == ["a", "b"], "got {vols:?}");
    Ok(())
}

#[test]
fn tagged_list_default_stays_without_occurrences() -> Result<()> {
    let mut vols: Vec<String> = Vec::new();
    {
        let mut registry = Registry::new();
        registry.register_tagged("vols", &mut vols, "s:v;l:volume;d:base")?;
        registry.parse(["-x"])?;
        ensure!(!registry.is_set("volume"));
    }
    ensure!(vols == ["base"], "got {vols:?}");
    Ok(())
}

#[test]
fn required_tag_ignores_its_default() -> Result<()> {
    let mut conf = "keep".to_owned();
    {
        let mut registry = Registry::new();
        registry.register_tagged("conf", &mut conf, "s:c;r;d:x")?;
        let descriptor = registry
            .lookup_short("c")
            .ok_or_else(|| anyhow!("conf not registered"))?;
        ensure!(descriptor.spec().required);
        ensure!(descriptor.spec().default.is_none());
        let usage = registry.usage("app");
        ensure!(usage.contains("  -c string           :  (required)"), "{usage}");
    }
    ensure!(conf == "keep", "got {conf}");
    Ok(())
}

#[test]
fn tagged_failures_name_the_field() -> Result<()> {
    let mut table: BTreeMap<String, String> = BTreeMap::new();
    let mut registry = Registry::new();
    let err = registry
        .register_tagged("Table", &mut table, "this is not checked")
        .err()
        .ok_or_else(|| anyhow!("expected unsupported field type"))?;
    ensure!(err.kind() == ErrorKind::UnsupportedDestinationType);
    ensure!(err.to_string().starts_with("parse tag of [Table] failed"), "{err}");
    ensure!(registry.is_empty());
    Ok(())
}

#[test]
fn is_set_checks_long_then_short() -> Result<()> {
    let mut registry = Registry::new();
    let _daemon = registry.bool("d", "daemon", "", "", false);
    let _quiet = registry.bool("q", "quiet", "", "", false);
    registry.parse(["-d"])?;
    ensure!(registry.is_set("daemon"));
    ensure!(registry.is_set("d"));
    ensure!(!registry.is_set("quiet"));
    ensure!(!registry.is_set("missing"));
    Ok(())
}
