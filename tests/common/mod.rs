//! Common test utilities
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use cb9_style::{FixedProbe, Styler};
use tempfile::TempDir;

/// Styler whose stdout looks redirected to a file
pub fn piped_styler() -> Styler {
    Styler::with_probe(FixedProbe::piped())
}

/// Styler attached to a terminal with the given width
pub fn tty_styler(columns: u16) -> Styler {
    Styler::with_probe(FixedProbe::new(true, Some(columns)))
}

/// Isolated working and config directories for running the binary
pub struct TestEnv {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().to_path_buf();
        Self { dir, path }
    }

    /// Write a local `.cb9/config.toml`
    pub fn write_config(&self, content: &str) {
        let config_dir = self.path.join(".cb9");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        fs::write(config_dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// `cb9` command running inside this environment
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("cb9").expect("binary should build");
        cmd.current_dir(&self.path)
            .env("HOME", &self.path)
            .env("XDG_CONFIG_HOME", self.path.join("xdg"))
            .env_remove("COLUMNS")
            .env_remove("CB9_LOG");
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
