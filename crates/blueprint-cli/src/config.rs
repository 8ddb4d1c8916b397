use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::{path::Path, str::FromStr};

/// Configuration for the Blueprint CLI, read from `Blueprint.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Schema document read when `build` is given no path
    pub schema: String,

    /// Directory the artifacts are written under
    pub output: String,

    /// Table names containing this separator are link tables
    pub link_separator: String,

    /// What to do when a relationship name is already taken
    pub on_collision: CollisionPolicy,

    /// Answer every confirmation prompt with yes
    pub assume_yes: bool,
}

/// How a taken relationship name is replaced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Append the lowest free numeric suffix
    #[default]
    Suffix,

    /// Abort the build
    Reject,

    /// Ask for a replacement name
    Prompt,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the configuration from a TOML file. Missing keys keep their
    /// defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        contents
            .parse()
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Set the schema document path
    pub fn schema(mut self, path: impl Into<String>) -> Self {
        self.schema = path.into();
        self
    }

    /// Set the output directory
    pub fn output(mut self, dir: impl Into<String>) -> Self {
        self.output = dir.into();
        self
    }

    pub fn link_separator(mut self, separator: impl Into<String>) -> Self {
        self.link_separator = separator.into();
        self
    }

    pub fn on_collision(mut self, policy: CollisionPolicy) -> Self {
        self.on_collision = policy;
        self
    }

    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: "schema.json".to_string(),
            output: "database".to_string(),
            link_separator: "_".to_string(),
            on_collision: CollisionPolicy::Suffix,
            assume_yes: false,
        }
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
