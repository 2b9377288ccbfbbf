//! Test support utilities for auth integration tests.
//!
//! Each test gets an isolated database directory via `AUTH_DATABASE_DIR`,
//! so tests can run in parallel without touching the real store or each
//! other. `NO_COLOR` keeps output assertions free of ANSI escapes.

#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;

/// Test environment with an isolated database directory.
pub struct Test {
    pub dir: TempDir,
}

impl Test {
    /// Create a fresh, empty environment.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// A new `auth` command wired to this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("auth").unwrap();
        cmd.env("AUTH_DATABASE_DIR", self.dir.path());
        cmd.env("HOME", self.dir.path());
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// A command using the TOML file backend.
    pub fn cmd_toml(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--backend").arg("toml");
        cmd
    }

    /// Add an entry with default digits/period, asserting success.
    pub fn add(&self, name: &str, secret: &str) {
        self.cmd()
            .args(["add", name, secret])
            .assert()
            .success();
    }
}
