//! Unit tests for usage rendering.

use anyhow::{Result, ensure};
use rstest::{fixture, rstest};

use crate::registry::Registry;

#[fixture]
fn daemon() -> Registry<'static> {
    let mut registry = Registry::new();
    let _conf = registry.string("c", "conf", "conf_file", "Config File", "conf.yaml");
    let _pid = registry.must_string("p", "", "pid_file", "Pid File");
    let _key = registry.must_string("", "key", "", "Key ID");
    let _token = registry.string("", "token", "", "Token String", "101010");
    let _command = registry.bare_string("command", "Command To Execute");
    let _repeats = registry.bare_string("repeats", "Command Repeat Times");
    let _remains = registry.bare_array("remains", "Remaining Args");
    registry
}

#[rstest]
fn renders_summary_and_arguments(daemon: Registry<'static>) -> Result<()> {
    let expected = "\
Usage:
  ./test_exec [-c/--conf conf_file] -p pid_file --key string [--token string] command repeats [remains]

Arguments:
  -c/--conf conf_file : Config File (default: \"conf.yaml\")
  -p pid_file         : Pid File (required)
  --key string        : Key ID (required)
  --token string      : Token String (default: \"101010\")
  command             : Command To Execute (required)
  repeats             : Command Repeat Times (required)
  remains             : Remaining Args (default: \"[]\")
";
    let rendered = daemon.usage("./test_exec");
    ensure!(rendered == expected, "got:\n{rendered}");
    Ok(())
}

#[rstest]
#[case::int(|r: &mut Registry<'static>| drop(r.int("n", "", "", "Count", 3)), "  -n int              : Count (default: \"3\")")]
#[case::bool(|r: &mut Registry<'static>| drop(r.bool("v", "", "", "Verbose", false)), "  -v true/false       : Verbose (default: \"false\")")]
#[case::float(|r: &mut Registry<'static>| drop(r.float("", "ratio", "", "Ratio", 0.5)), "  --ratio float       : Ratio (default: \"0.5\")")]
#[case::array(|r: &mut Registry<'static>| drop(r.array("v", "volume", "", "Volumes")), "  -v/--volume array   : Volumes (default: \"[]\")")]
fn placeholders_follow_the_kind(
    #[case] register: fn(&mut Registry<'static>),
    #[case] line: &str,
) -> Result<()> {
    let mut registry = Registry::new();
    register(&mut registry);
    let rendered = registry.usage("app");
    ensure!(rendered.lines().any(|l| l == line), "got:\n{rendered}");
    Ok(())
}

#[test]
fn long_arguments_push_the_separator() -> Result<()> {
    let mut registry = Registry::new();
    let _path = registry.string("", "configuration-path", "file", "Path", "");
    let rendered = registry.usage("app");
    ensure!(
        rendered.contains("  --configuration-path file: Path (default: \"\")"),
        "got:\n{rendered}"
    );
    Ok(())
}

#[test]
fn defaults_render_verbatim() -> Result<()> {
    let mut registry = Registry::new();
    let _sep = registry.string("s", "", "", "Separator", r#"a"b\c"#);
    let rendered = registry.usage("app");
    let line = r#"  -s string           : Separator (default: "a"b\c")"#;
    ensure!(rendered.lines().any(|l| l == line), "got:\n{rendered}");
    Ok(())
}

#[test]
fn empty_registry_renders_headers_only() -> Result<()> {
    let registry = Registry::new();
    ensure!(registry.usage("app") == "Usage:\n  app\n\nArguments:\n\n");
    Ok(())
}

#[test]
fn list_defaults_render_space_separated() -> Result<()> {
    let mut hosts: Vec<String> = Vec::new();
    let mut registry = Registry::new();
    registry.register_tagged("hosts", &mut hosts, "l:host;d:localhost")?;
    let rendered = registry.usage("app");
    ensure!(
        rendered.contains("--host array        :  (default: \"[localhost]\")"),
        "got:\n{rendered}"
    );
    Ok(())
}
