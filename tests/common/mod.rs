//! Common test utilities and fixtures for dfl-components integration tests

// Not every helper is used by every test module
#![allow(dead_code)]

use anyhow::{Context, Result};
use assert_cmd::Command;
use dfl_components_cli::registry::{CatalogEntry, CatalogIndex, ItemPayload};
use dfl_components_cli::test_utils::{entry, index, payload, write_local_registry};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A project directory and a local registry directory side by side.
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    project_dir: PathBuf,
    registry_dir: PathBuf,
}

impl TestProject {
    /// Create an empty project and an empty registry directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("project");
        let registry_dir = temp_dir.path().join("registry");

        fs::create_dir_all(&project_dir)?;
        fs::create_dir_all(&registry_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
            registry_dir,
        })
    }

    /// Create a project whose `dfl-components.json` points at the local registry
    pub fn initialized() -> Result<Self> {
        let project = Self::new()?;
        project.write_config(&project.registry_url())?;
        Ok(project)
    }

    pub fn project_path(&self) -> &Path {
        &self.project_dir
    }

    pub fn registry_path(&self) -> &Path {
        &self.registry_dir
    }

    /// `file://` URL of the local registry
    pub fn registry_url(&self) -> String {
        format!("file://{}", self.registry_dir.display().to_string().replace('\\', "/"))
    }

    /// Write a default configuration using `registry`
    pub fn write_config(&self, registry: &str) -> Result<()> {
        let config = serde_json::json!({
            "typescript": true,
            "aliases": {
                "components": "@/components/dfl",
                "hooks": "@/hooks",
                "providers": "@/providers",
                "pages": "@/pages"
            },
            "registry": registry
        });
        let path = self.project_dir.join("dfl-components.json");
        fs::write(&path, serde_json::to_string_pretty(&config)?)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Publish `registry` into the local registry directory
    pub fn publish(&self, registry: &TestRegistry) -> Result<()> {
        write_local_registry(&self.registry_dir, &registry.index(), &registry.payloads)
    }

    /// Create a file inside the project
    pub fn create_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content)?;
        Ok(())
    }

    /// A `dfl-components` command running in the project directory
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_dfl-components"));
        cmd.current_dir(&self.project_dir).env("NO_COLOR", "1").env("DFL_NO_PROGRESS", "1");
        cmd
    }

    /// Run `dfl-components` with `args` and capture its output
    pub fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = self.command().args(args).output().context("Failed to run dfl-components")?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

/// Builder for the contents of a local registry
#[derive(Default)]
pub struct TestRegistry {
    entries: Vec<CatalogEntry>,
    payloads: Vec<ItemPayload>,
}

impl TestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry with one file named after it
    pub fn item(mut self, name: &str, category: &str, deps: &[&str]) -> Self {
        let extension = if category == "Hooks" { "ts" } else { "tsx" };
        let file = format!("{name}.{extension}");
        let content = format!("// {name}\n");
        self.entries.push(entry(name, category, deps));
        self.payloads.push(payload(name, &[(file.as_str(), content.as_str())]));
        self
    }

    /// Add an entry to the index without publishing its payload
    pub fn unpublished(mut self, name: &str, category: &str) -> Self {
        self.entries.push(entry(name, category, &[]));
        self
    }

    /// Add an entry with a custom payload
    pub fn with_payload(mut self, catalog: CatalogEntry, item: ItemPayload) -> Self {
        self.entries.push(catalog);
        self.payloads.push(item);
        self
    }

    pub fn index(&self) -> CatalogIndex {
        index(self.entries.clone())
    }
}

/// Command output helper
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Assert the command succeeded
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success,
            "Command failed with code {:?}\nStdout: {}\nStderr: {}",
            self.code, self.stdout, self.stderr
        );
        self
    }

    /// Assert the command failed
    pub fn assert_failure(&self) -> &Self {
        assert!(!self.success, "Command unexpectedly succeeded\nStdout: {}", self.stdout);
        self
    }

    /// Assert stdout contains the given text
    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Expected stdout to contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }

    /// Assert stderr contains the given text
    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "Expected stderr to contain '{}'\nActual stderr: {}",
            text,
            self.stderr
        );
        self
    }
}

/// File assertion helpers
pub struct FileAssert;

impl FileAssert {
    /// Assert a file exists
    pub fn exists(path: impl AsRef<Path>) {
        let path = path.as_ref();
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// Assert a file does not exist
    pub fn not_exists(path: impl AsRef<Path>) {
        let path = path.as_ref();
        assert!(!path.exists(), "Expected file to not exist: {}", path.display());
    }

    /// Assert a file has exact content
    pub fn equals(path: impl AsRef<Path>, expected: &str) {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read file {}: {}", path.display(), e));
        assert_eq!(content, expected, "File {} content mismatch", path.display());
    }
}
