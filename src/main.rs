mod cli;
mod config;
mod descriptor;
mod logging;
mod showcase;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wfshow")]
#[command(about = "Inspect, summarize and export workflow descriptor files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Showcase directory (defaults to current)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Additional config file, applied last
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = cli::OutputMode::Console)]
    format: cli::OutputMode,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Suppress log output below errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Write logs to a timestamped file under the config directory
    #[arg(long, global = true, conflicts_with = "log_file")]
    log: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a workflow file
    Inspect {
        /// Path to the workflow JSON
        path: String,
    },

    /// Copy a workflow file for download
    Export {
        /// Path to the workflow JSON
        path: String,

        /// Destination directory
        #[arg(long, default_value = ".")]
        out: PathBuf,

        /// Overwrite an existing file at the destination
        #[arg(long)]
        force: bool,
    },

    /// Render all configured workflow cards
    Workflows,

    /// Check configured screenshots
    Screenshots,

    /// Print the effective configuration
    Config,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Inspect { .. } => "inspect",
            Commands::Export { .. } => "export",
            Commands::Workflows => "workflows",
            Commands::Screenshots => "screenshots",
            Commands::Config => "config",
        }
    }
}

/// Load the layered config, reporting failures as an exit code
fn load_config(cli: &Cli) -> std::result::Result<config::ShowcaseConfig, i32> {
    config::ShowcaseConfig::load(cli.dir.as_deref(), cli.config.as_deref()).map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        eprintln!("Error: {:#}", e);
        cli::commands::EXIT_FAILED
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = if cli.log {
        Some(logging::default_log_path(cli.command.name())?)
    } else {
        cli.log_file.clone()
    };
    logging::init_logging(cli.debug, cli.quiet, log_file)?;

    let base_dir = cli.dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let handler = cli::create_handler(cli.format, cli.debug);

    let exit_code = match &cli.command {
        Commands::Inspect { path } => cli::inspect(path, &base_dir, &*handler),

        Commands::Export { path, out, force } => {
            cli::export(path, &base_dir, out, *force, &*handler)
        }

        Commands::Workflows => match load_config(&cli) {
            Ok(config) => cli::show_workflows(&config, &base_dir, &*handler),
            Err(code) => code,
        },

        Commands::Screenshots => match load_config(&cli) {
            Ok(config) => cli::show_screenshots(&config, &base_dir, &*handler),
            Err(code) => code,
        },

        Commands::Config => match load_config(&cli) {
            Ok(config) => cli::show_config(&config, &*handler),
            Err(code) => code,
        },
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
