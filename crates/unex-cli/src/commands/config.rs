//! Config command
//!
//! Locate, create and display the exporter configuration.

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::{Path, PathBuf};
use unex_core::ExporterConfig;

/// Project-local configuration path
const LOCAL_CONFIG: &str = ".unex/config.toml";

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print which configuration file is used
    Path,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, explicit: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(explicit, json),
        ConfigCommand::Init { force } => init_config(explicit, force),
        ConfigCommand::Path => show_path(explicit),
    }
}

/// Platform configuration path (~/.config/unex/config.toml on Linux)
fn user_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "unex", "unex")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".unex")
                .join("config.toml")
        })
}

/// Find the configuration file to use, if any
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    [PathBuf::from(LOCAL_CONFIG), user_config_path()]
        .into_iter()
        .find(|path| path.exists())
}

/// Load the effective configuration
pub fn load_config(explicit: Option<&Path>) -> Result<ExporterConfig> {
    match resolve_config_path(explicit) {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            ExporterConfig::load(&path)
                .with_context(|| format!("Invalid configuration: {}", path.display()))
        }
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(ExporterConfig::default())
        }
    }
}

fn show_config(explicit: Option<&Path>, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let config = load_config(explicit)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        let source = resolve_config_path(explicit)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in defaults)".to_string());
        println!("{}", "Configuration:".bold().underline());
        println!("{}", source.dimmed());
        println!();
        print!("{}", config.to_toml_string()?);
    }

    Ok(())
}

fn init_config(explicit: Option<&Path>, force: bool) -> Result<()> {
    use colored::Colorize;

    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG));

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let content = format!(
        "# unex configuration\n\n{}",
        ExporterConfig::default().to_toml_string()?
    );
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    eprintln!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}

fn show_path(explicit: Option<&Path>) -> Result<()> {
    match resolve_config_path(explicit) {
        Some(path) => println!("{}", path.display()),
        None => println!("(none; defaults in use, create {} to customize)", LOCAL_CONFIG),
    }
    Ok(())
}
