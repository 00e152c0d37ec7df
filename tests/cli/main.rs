use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod init;
mod sync;
mod transfer;
mod translations;

const BIN_NAME: &str = "transync";

/// A vendor package `courier` plus application groups and an application JSON catalog.
const PROJECT_FILES: &[(&str, &str)] = &[
    (
        ".transyncrc.json",
        r#"{
  "vendorNamespaces": [{ "name": "courier", "path": "vendor/courier/lang" }]
}"#,
    ),
    (
        "vendor/courier/lang/en/mail.json",
        r#"{ "subject": "Subject", "footer": { "text": "Bye" } }"#,
    ),
    ("vendor/courier/lang/it/mail.json", r#"{ "subject": "Oggetto" }"#),
    (
        "lang/en/messages.json",
        r#"{ "greet": "Hello", "farewell": "Goodbye" }"#,
    ),
    ("lang/it/messages.json", r#"{ "greet": "Ciao" }"#),
    ("lang/it.json", r#"{ "Welcome": "Benvenuto" }"#),
];

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Keep config discovery inside the temp dir.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_project() -> Result<Self> {
        let test = Self::new()?;
        for (path, content) in PROJECT_FILES {
            test.write_file(path, content)?;
        }
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    /// Run a setup step, failing the test if it does not succeed.
    pub fn transync(&self, args: &[&str]) -> Result<()> {
        let output = self
            .command()
            .args(args)
            .output()
            .with_context(|| format!("Failed to run {} {:?}", BIN_NAME, args))?;
        anyhow::ensure!(
            output.status.success(),
            "{} {:?} failed: {}",
            BIN_NAME,
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        Ok(())
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    /// Parsed collection of a locale in the default store location.
    pub fn collection(&self, locale: &str) -> Result<serde_json::Value> {
        let content = self.read_file(&format!("storage/translations/{}.json", locale))?;
        Ok(serde_json::from_str(&content)?)
    }
}
