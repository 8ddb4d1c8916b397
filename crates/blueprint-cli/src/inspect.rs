use crate::{build::read_document, Config};

use anyhow::Result;
use blueprint::Compiler;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct InspectCommand {
    /// Schema document (defaults to the configured schema path)
    path: Option<PathBuf>,
}

impl InspectCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        let path = self
            .path
            .unwrap_or_else(|| PathBuf::from(&config.schema));

        println!("{}", resolve_to_json(&path, config)?);
        Ok(())
    }
}

/// Resolves the document at `path` and renders its table map as pretty JSON.
/// Collisions are always suffixed here; nothing is asked or written.
pub fn resolve_to_json(path: &std::path::Path, config: &Config) -> Result<String> {
    let doc = read_document(path)?;

    let mut compiler = Compiler::builder();
    compiler.link_separator(&config.link_separator);
    let schema = compiler.build().resolve(&doc)?;

    Ok(serde_json::to_string_pretty(&schema)?)
}
