//! Shot Compare CLI
//!
//! Inspect comparison configs and artifact format resolution without
//! running a test suite.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::{Path, PathBuf};

use shot_compare::commands::{display_version, resolve_path, validate_config, ResolveArgs};

/// Shot Compare - visual regression baselines and diffs
#[derive(Parser, Debug)]
#[command(name = "shot-compare")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Load, normalize and summarize a comparison config
    Validate {
        /// Path to the TOML config
        #[arg(short, long)]
        config: PathBuf,

        /// Print the normalized config as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show where a capture path lands and how artifacts get encoded
    Resolve {
        /// Capture path (e.g. screens/home.jpg)
        #[arg(short, long)]
        path: PathBuf,

        /// Force an output format (png, jpg, jpeg, webp)
        #[arg(long, env = "SHOT_COMPARE_FORCE_EXT")]
        force_ext: Option<String>,

        /// Quality (jpeg/webp) or compression level (png)
        #[arg(long)]
        compression: Option<u32>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Validate { config, json } => {
            validate_config(&config, json)
                .with_context(|| format!("Invalid config: {}", config.display()))?;
        }

        Commands::Resolve {
            path,
            force_ext,
            compression,
        } => {
            let args = ResolveArgs {
                base_dir: current_dir(),
                path,
                force_ext,
                compression,
            };
            resolve_path(&args).context("Cannot resolve output format")?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf())
}
