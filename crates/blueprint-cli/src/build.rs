use crate::{prompt::Prompt, sink::ArtifactSink, CollisionPolicy, Config};

use anyhow::{Context, Result};
use blueprint::{Compiler, Document, Reject, Suffix};
use clap::Parser;
use console::style;
use std::{fs, path::PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
pub struct BuildCommand {
    /// Schema document (defaults to the configured schema path)
    path: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// What to do when a relationship name is already taken
    #[arg(long, value_enum)]
    on_collision: Option<CollisionPolicy>,

    /// Table names containing this separator are link tables
    #[arg(long)]
    link_separator: Option<String>,

    /// Replace existing output without asking
    #[arg(short, long)]
    yes: bool,
}

impl BuildCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        println!();
        println!("  {}", style("Build Schema").cyan().bold().underlined());
        println!();

        let mut compiler = self.compiler(config);

        let path = self
            .path
            .unwrap_or_else(|| PathBuf::from(&config.schema));
        let doc = read_document(&path)?;

        let artifacts = compiler
            .convert(&doc)
            .with_context(|| format!("failed to convert {}", path.display()))?;

        let out = self.out.unwrap_or_else(|| PathBuf::from(&config.output));
        let sink = ArtifactSink::new(&out).assume_yes(self.yes || config.assume_yes);
        let written = sink.write(&artifacts)?;

        info!(files = written.len(), out = %out.display(), "build finished");

        println!();
        println!(
            "  {} {} {}",
            style("✓").green().bold(),
            style(written.len()).bold(),
            style("files written").dim()
        );
        println!();

        Ok(())
    }

    fn compiler(&self, config: &Config) -> Compiler {
        let mut builder = Compiler::builder();

        builder.link_separator(
            self.link_separator
                .as_deref()
                .unwrap_or(&config.link_separator),
        );

        match self.on_collision.unwrap_or(config.on_collision) {
            CollisionPolicy::Suffix => builder.collisions(Suffix),
            CollisionPolicy::Reject => builder.collisions(Reject),
            CollisionPolicy::Prompt => builder.collisions(Prompt),
        };

        builder.build()
    }
}

pub(crate) fn read_document(path: &std::path::Path) -> Result<Document> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    contents
        .parse()
        .with_context(|| format!("failed to parse {}", path.display()))
}
