//! Common test utilities for xkbgen CLI and golden tests.
//!
//! - `TestEnv`: isolated temp directory plus a helper to run the binary
//! - Fixtures: layout documents shared between tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running the xkbgen binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated working directory for CLI runs.
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_xkbgen")),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Write `content` to `name` inside the environment and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Run xkbgen with `args`, `XKBGEN_*` variables cleared.
    pub fn run<I, S>(&self, args: I) -> TestResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let output = Command::new(&self.bin)
            .args(args)
            .current_dir(self.root.path())
            .env_remove("RUST_LOG")
            .env_remove("XKBGEN_KEYCODES")
            .env_remove("XKBGEN_TYPES")
            .env_remove("XKBGEN_COMPAT")
            .env_remove("XKBGEN_GEOMETRY")
            .output()
            .unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn run_layout(&self, layout: &Path) -> TestResult {
        self.run([layout])
    }
}

/// Small layout touching every section: literals, rows, two modifiers, a
/// latched group, BASE and two override sections.
pub const DEMO_LAYOUT: &str = "\
LITERALS:
  name: |
    name[Group1] = \"Demo\";
ROWS:
  - [<AE01>, <AE02>, <AE03>]
  - [<AD01>, <AD02>, <AD03>]
MODIFIERS:
  shift:
    mod: Shift
    keycodes: [<LFSH>, <RTSH>]
    keysyms: [Shift_L, Shift_R]
    x11: Shift
  altgr:
    mod: LevelThree
    keycodes: <RALT>
    keysyms: ISO_Level3_Shift
    x11: Mod5
GROUPS:
  greek: altgr+<AB05>
BASE:
  - ['1!', '2@', '3#']
  - [qQ, wW, eE]
ALTGR:
  altgr:
    q: ['@', \u{3A9}]
    e: euro sign
GREEK:
  group: greek
  q: ';:'
  w: \u{3C2}\u{3A3}
  e: \u{3B5}\u{395}
";

/// Shift plus one letter key.
pub const MINIMAL_LAYOUT: &str = "\
MODIFIERS:
  shift:
    mod: Shift
    keycodes: <LFSH>
    keysyms: Shift_L
BASE:
  <AC01>: aA
";
