use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Runs the `revscript` binary inside a throwaway project directory.
pub struct CliTestHelper {
    pub temp_dir: TempDir,
    pub project_root: PathBuf,
}

impl CliTestHelper {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let project_root = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            project_root,
        }
    }

    /// Write a file relative to the project root and return its full path.
    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.project_root.join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn read_file(&self, name: &str) -> Result<String> {
        Ok(fs::read_to_string(self.project_root.join(name))?)
    }

    /// A command for the binary with the project root as working directory,
    /// so the default `revscript.yaml` is looked up there.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("revscript").unwrap();
        cmd.current_dir(&self.project_root);
        cmd.env_remove("RUST_LOG");
        cmd
    }
}
