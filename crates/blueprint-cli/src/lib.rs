mod build;
mod config;
mod inspect;
mod prompt;
mod sink;

pub use build::BuildCommand;
pub use config::{CollisionPolicy, Config};
pub use inspect::{resolve_to_json, InspectCommand};
pub use prompt::Prompt;
pub use sink::ArtifactSink;

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

/// Name of the configuration file picked up from the working directory.
pub const CONFIG_FILE: &str = "Blueprint.toml";

/// Blueprint CLI library for building custom command-line tools
pub struct BlueprintCli {
    config: Config,
}

impl BlueprintCli {
    /// Create a new BlueprintCli instance with the default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create a new BlueprintCli instance with a custom base configuration.
    /// A configuration file, when present, replaces it.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get a reference to the base configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and execute CLI commands from command-line arguments
    pub fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        self.run(cli)
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        self.run(cli)
    }

    fn run(&self, cli: Cli) -> Result<()> {
        setup_logging(&cli.verbosity, &cli.log_format);

        let config = self.load_config(cli.config.as_deref())?;

        match cli.command {
            Command::Build(cmd) => cmd.run(&config),
            Command::Inspect(cmd) => cmd.run(&config),
        }
    }

    fn load_config(&self, path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Config::load(path),
            None if Path::new(CONFIG_FILE).is_file() => Config::load(CONFIG_FILE),
            None => Ok(self.config.clone()),
        }
    }
}

impl Default for BlueprintCli {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Parser, Debug)]
#[command(name = "blueprint")]
#[command(about = "Blueprint CLI - Build migrations, factories and models from a schema diagram")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./Blueprint.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level: debug, info, warn or error
    #[arg(long, global = true, default_value = "warn")]
    verbosity: String,

    /// Log format: text or json
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Build migrations, factories and models from a schema document
    Build(BuildCommand),

    /// Print the resolved table map as JSON
    Inspect(InspectCommand),
}

/// Installs the global log subscriber. Repeated calls keep the first one.
fn setup_logging(verbosity: &str, format: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = if format == "json" {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };
}
