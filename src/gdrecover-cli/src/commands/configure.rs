//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting default paths.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `root` - Optional project root to set as default
/// * `staging` - Optional staging directory to set as default
/// * `output` - Optional collect destination to set as default
/// * `show` - If true, show current configuration
pub fn handle(
    root: Option<PathBuf>,
    staging: Option<PathBuf>,
    output: Option<PathBuf>,
    show: bool,
) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if !apply(&mut config, root, staging, output) {
        show_usage();
        return Ok(());
    }

    config.save()?;
    show_config(&config);
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Update the given fields, returning whether anything was set
fn apply(
    config: &mut Config,
    root: Option<PathBuf>,
    staging: Option<PathBuf>,
    output: Option<PathBuf>,
) -> bool {
    let changed = root.is_some() || staging.is_some() || output.is_some();

    if root.is_some() {
        config.root = root;
    }
    if staging.is_some() {
        config.staging = staging;
    }
    if output.is_some() {
        config.output = output;
    }

    changed
}

fn show_config(config: &Config) {
    let show = |label: &str, value: &Option<PathBuf>| match value {
        Some(path) => println!("{}: {}", label, path.display()),
        None => println!("{}: (not set)", label),
    };
    show("Root", &config.root);
    show("Staging", &config.staging);
    show("Output", &config.output);

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

fn show_usage() {
    println!("Usage: gdrecover configure --root DIR [--staging DIR] [--output DIR]");
    println!("   or: gdrecover configure --show");
}
