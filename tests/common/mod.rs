//! Shared testing utilities for gitsource-sync integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const GITHUB_TOKEN: &str = "gh-test-token";
pub const SECURE_TOKEN: &str = "secure-test-token";
pub const GIT_SOURCES_PATH: &str = "/api/cspm/v1/gitProvider/gitSources";

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Directory the binary runs in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write `config.yaml` into the work directory and return its path.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        self.write_file("config.yaml", contents)
    }

    /// Write an arbitrary file relative to the work directory.
    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("gitsource-sync").expect("Failed to locate gitsource-sync binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }
}

/// Render a complete config pointing both APIs at test servers.
#[allow(dead_code)]
pub fn config_yaml(
    github_api_url: &str,
    secure_url: &str,
    account_type: &str,
    account_name: &str,
) -> String {
    format!(
        r#"config:
  secure_url: "{secure_url}"
  secure_api_token: "{SECURE_TOKEN}"
  github_token: "{GITHUB_TOKEN}"
  accountType: "{account_type}"
  accountName: "{account_name}"
  integrationId: int-42
  prScanBranchPattern: main
  folders:
    - src
    - lib
  githubApiUrl: "{github_api_url}"
"#
    )
}
