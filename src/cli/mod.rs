//! Command-line interface for footnotes-core
//!
//! Provides `settings`, `render`, `locate` and `completions` subcommands for
//! inspecting the engines outside of a host.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use footnotes_core::{load_config, EngineConfig};

mod render;
mod settings;
mod utils;

/// Inspect footnotes settings and render templates
#[derive(Parser)]
#[command(name = "footnotes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file (footnotes.toml or footnotes.yml)
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Read and modify stored settings
    #[command(subcommand)]
    Settings(settings::SettingsCommand),

    /// Render a template with placeholder values
    Render(render::RenderArgs),

    /// Print the path a template resolves to
    Locate(render::LocateArgs),

    /// Generate shell completion scripts
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Settings(command) => settings::run(command, &config(cli.config.as_deref())?),
        Commands::Render(args) => render::run_render(args, &config(cli.config.as_deref())?),
        Commands::Locate(args) => render::run_locate(args, &config(cli.config.as_deref())?),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "footnotes", &mut io::stdout());
            Ok(())
        }
    }
}

fn config(config_path: Option<&Path>) -> Result<EngineConfig> {
    let cwd = std::env::current_dir()?;
    load_config(&cwd, config_path)
}
