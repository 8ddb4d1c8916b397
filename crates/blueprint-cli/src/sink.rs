use crate::prompt::confirm;

use anyhow::{Context, Result};
use blueprint::Artifacts;
use console::style;
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Writes converted artifacts below an output directory:
///
/// ```text
/// <root>/migrations/<table>.json
/// <root>/factory.json
/// <root>/models/<Model>.json
/// ```
///
/// Existing output is only replaced after confirmation. A declined
/// confirmation skips that artifact kind and leaves its files untouched.
#[derive(Debug, Clone)]
pub struct ArtifactSink {
    root: PathBuf,
    assume_yes: bool,
}

impl ArtifactSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            assume_yes: false,
        }
    }

    /// Answer every confirmation with yes
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes every artifact and returns the paths created, in write order.
    pub fn write(&self, artifacts: &Artifacts) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create {}", self.root.display()))?;

        let mut written = vec![];
        self.write_migrations(artifacts, &mut written)?;
        self.write_factories(artifacts, &mut written)?;
        self.write_models(artifacts, &mut written)?;
        Ok(written)
    }

    fn write_migrations(&self, artifacts: &Artifacts, written: &mut Vec<PathBuf>) -> Result<()> {
        let dir = self.root.join("migrations");

        if has_entries(&dir)? {
            if !confirm("Delete existing migrations?", self.assume_yes)? {
                skipped(&dir);
                return Ok(());
            }
            fs::remove_dir_all(&dir)
                .with_context(|| format!("failed to clear {}", dir.display()))?;
        }
        fs::create_dir_all(&dir)?;

        for migration in &artifacts.migrations {
            let path = dir.join(format!("{}.json", migration.name));
            write_json(&path, migration)?;
            written.push(path);
        }

        Ok(())
    }

    fn write_factories(&self, artifacts: &Artifacts, written: &mut Vec<PathBuf>) -> Result<()> {
        let path = self.root.join("factory.json");

        if path.exists() && !confirm("Overwrite existing factories?", self.assume_yes)? {
            skipped(&path);
            return Ok(());
        }

        write_json(&path, &artifacts.factories)?;
        written.push(path);
        Ok(())
    }

    fn write_models(&self, artifacts: &Artifacts, written: &mut Vec<PathBuf>) -> Result<()> {
        let dir = self.root.join("models");
        let paths: Vec<_> = artifacts
            .models
            .iter()
            .map(|model| dir.join(format!("{}.json", model.name)))
            .collect();

        if paths.iter().any(|path| path.exists())
            && !confirm("Overwrite existing models?", self.assume_yes)?
        {
            skipped(&dir);
            return Ok(());
        }
        fs::create_dir_all(&dir)?;

        for (model, path) in artifacts.models.iter().zip(paths) {
            write_json(&path, model)?;
            written.push(path);
        }

        Ok(())
    }
}

fn has_entries(dir: &Path) -> Result<bool> {
    if !dir.is_dir() {
        return Ok(false);
    }
    Ok(fs::read_dir(dir)?.next().is_some())
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let mut contents = serde_json::to_string_pretty(value)?;
    contents.push('\n');

    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;

    debug!(path = %path.display(), "wrote artifact");
    println!(
        "  {} {}",
        style("✔ create").green().bold(),
        style(path.display()).dim()
    );
    Ok(())
}

fn skipped(path: &Path) {
    println!(
        "  {} {}",
        style("- skip  ").yellow().bold(),
        style(path.display()).dim()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dir_has_no_entries() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!has_entries(dir.path()).unwrap());
        assert!(!has_entries(&dir.path().join("missing")).unwrap());

        fs::write(dir.path().join("users.json"), "{}").unwrap();
        assert!(has_entries(dir.path()).unwrap());
    }
}
