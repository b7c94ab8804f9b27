mod completions;
mod generate;
mod list;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use entitygen_model::{Config, Workspace};
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;
use miette::Diagnostic;

const DEFAULT_CONFIG: &str = "entitygen.toml";
const DEFAULT_MODEL: &str = "model.toml";

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "entitygen")]
#[command(version)]
#[command(about = "Generate TypeScript declarations from C# DTO classes")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        init_tracing(self.verbose);

        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript files for DTO classes and everything they reference
    Generate(GenerateCommand),

    /// List the source files that can be generated
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Configuration and code model location, shared by every command that
/// reads the model.
#[derive(Args)]
pub struct ProjectArgs {
    /// Path to entitygen.toml (defaults to ./entitygen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Code model snapshot (overrides [model] path)
    #[arg(short, long)]
    pub model: Option<PathBuf>,
}

impl ProjectArgs {
    /// Load the configuration. An explicit `--config` must exist; the
    /// default file is optional.
    pub fn config(&self) -> Config {
        match &self.config {
            Some(path) => Config::from_file(path).unwrap_or_exit(),
            None if Path::new(DEFAULT_CONFIG).exists() => {
                Config::from_file(DEFAULT_CONFIG).unwrap_or_exit()
            }
            None => Config::default(),
        }
    }

    /// Load the code model named by `--model`, the configuration, or
    /// `./model.toml`.
    pub fn workspace(&self, config: &Config) -> Workspace {
        let path = self
            .model
            .clone()
            .or_else(|| config.model.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL));
        tracing::debug!(path = %path.display(), "loading code model");
        Workspace::from_file(&path).unwrap_or_exit()
    }
}
