mod common;

use std::ffi::OsStr;

use common::{TestEnv, DEMO_LAYOUT, MINIMAL_LAYOUT};

#[test]
fn test_compile_writes_keymap_to_stdout() {
    let env = TestEnv::new();
    let layout = env.write("layout.yaml", MINIMAL_LAYOUT);

    let result = env.run_layout(&layout);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.starts_with("// Generated by xkbgen"));
    assert!(result.stdout.contains("replace key <AC01> {"));
    assert!(result.stdout.contains("type = \"TWO_LEVEL\""));
    assert!(result.stdout.contains("U0061, // LATIN SMALL LETTER A"));
    assert!(result.stdout.contains("U0041 // LATIN CAPITAL LETTER A"));
}

#[test]
fn test_missing_argument_prints_usage() {
    let env = TestEnv::new();

    let result = env.run(Vec::<&str>::new());

    assert!(!result.success);
    assert_eq!(result.exit_code, 2);
    assert!(result.stdout.is_empty());
    assert!(
        result.stderr.contains("Usage:"),
        "expected usage on stderr; got:\n{}",
        result.stderr
    );
}

#[test]
fn test_extra_argument_is_rejected() {
    let env = TestEnv::new();
    let layout = env.write("layout.yaml", MINIMAL_LAYOUT);

    let result = env.run([layout.as_os_str(), OsStr::new("extra")]);

    assert_eq!(result.exit_code, 2);
    assert!(result.stdout.is_empty());
}

#[test]
fn test_resolution_error_emits_nothing() {
    let env = TestEnv::new();
    let layout = env.write(
        "broken.yaml",
        &format!("{MINIMAL_LAYOUT}EXTRA:\n  hyper+<AC01>: x\n"),
    );

    let result = env.run_layout(&layout);

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.is_empty(), "stdout:\n{}", result.stdout);
    assert!(
        result.stderr.contains("no modifier named 'hyper'"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn test_missing_layout_file_fails() {
    let env = TestEnv::new();

    let result = env.run(["does-not-exist.yaml"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("does-not-exist.yaml"));
}

#[test]
fn test_conflicts_are_logged_as_warnings() {
    let env = TestEnv::new();
    let layout = env.write(
        "layout.yaml",
        &format!("{MINIMAL_LAYOUT}CAPS:\n  <AC01>: aB\n"),
    );

    let result = env.run_layout(&layout);

    assert!(result.success);
    assert!(result.stderr.contains("WARN"), "stderr:\n{}", result.stderr);
    assert!(result.stderr.contains("replacing symbol \"A\""));
    assert!(result.stdout.contains("U0042 // LATIN CAPITAL LETTER B"));
}

#[test]
fn test_quiet_suppresses_warnings() {
    let env = TestEnv::new();
    let layout = env.write(
        "layout.yaml",
        &format!("{MINIMAL_LAYOUT}CAPS:\n  <AC01>: aB\n"),
    );

    let result = env.run([OsStr::new("--quiet"), layout.as_os_str()]);

    assert!(result.success);
    assert!(result.stderr.is_empty(), "stderr:\n{}", result.stderr);
}

#[test]
fn test_output_flag_writes_file() {
    let env = TestEnv::new();
    let layout = env.write("layout.yaml", DEMO_LAYOUT);
    let output = env.path("demo.xkb");

    let result = env.run([
        layout.as_os_str(),
        OsStr::new("--output"),
        output.as_os_str(),
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.is_empty());
    let keymap = std::fs::read_to_string(&output).unwrap();
    assert!(keymap.contains("actions[Group1]"));
    assert!(keymap.contains("LatchGroup(group=2)"));
}

#[test]
fn test_config_file_and_flags_set_includes() {
    let env = TestEnv::new();
    let layout = env.write("layout.yaml", MINIMAL_LAYOUT);
    let config = env.write(
        "xkbgen.toml",
        "[template]\nkeycodes = \"evdev+aliases(qwerty)\"\ngeometry = \"pc(pc105)\"\n",
    );

    let result = env.run([
        OsStr::new("--config"),
        config.as_os_str(),
        OsStr::new("--types"),
        OsStr::new("complete+extra"),
        layout.as_os_str(),
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result
        .stdout
        .contains("xkb_keycodes  { include \"evdev+aliases(qwerty)\" };"));
    assert!(result
        .stdout
        .contains("xkb_types     { include \"complete+extra\" };"));
    assert!(result
        .stdout
        .contains("xkb_geometry  { include \"pc(pc105)\" };"));
}

#[test]
fn test_unknown_config_key_warns() {
    let env = TestEnv::new();
    let layout = env.write("layout.yaml", MINIMAL_LAYOUT);
    let config = env.write("xkbgen.toml", "[template]\nkeycode = \"evdev\"\n");

    let result = env.run([OsStr::new("-c"), config.as_os_str(), layout.as_os_str()]);

    assert!(result.success);
    assert!(
        result.stderr.contains("did you mean 'keycodes'?"),
        "stderr:\n{}",
        result.stderr
    );
}
