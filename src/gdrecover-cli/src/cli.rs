//! CLI argument definitions for gdrecover

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gdrecover")]
#[command(about = "Recover decompiled scripts and assets in an exported Godot project", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the run report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Copy every compiled script in a tree into one flat directory
    Collect {
        /// Exported project root (uses configured default if not provided)
        root: Option<PathBuf>,

        /// Existing directory to copy into (uses configured default if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Extension to collect, without the dot
        #[arg(short, long, default_value = "gdc")]
        extension: String,

        /// List matching files without copying
        #[arg(short, long)]
        list: bool,
    },

    /// Restore decompiled .gd sources and drop .gdc/.gd.remap files
    Restore {
        /// Exported project root (uses configured default if not provided)
        root: Option<PathBuf>,

        /// Directory holding decompiled .gd files (uses configured default if not provided)
        #[arg(short, long)]
        staging: Option<PathBuf>,

        /// List planned restorations without changing anything
        #[arg(short, long)]
        list: bool,
    },

    /// Copy assets from .import/ next to their .import metadata
    Relink {
        /// Exported project root (uses configured default if not provided)
        root: Option<PathBuf>,

        /// List planned copies without changing anything
        #[arg(short, long)]
        list: bool,
    },

    /// Run restore, then relink
    Reconcile {
        /// Exported project root (uses configured default if not provided)
        root: Option<PathBuf>,

        /// Directory holding decompiled .gd files (uses configured default if not provided)
        #[arg(short, long)]
        staging: Option<PathBuf>,

        /// Skip the restore pass
        #[arg(long)]
        skip_restore: bool,

        /// Skip the relink pass
        #[arg(long)]
        skip_relink: bool,

        /// List planned changes without applying them
        #[arg(short, long)]
        list: bool,
    },

    /// Configure default paths
    Configure {
        /// Set default project root
        #[arg(long)]
        root: Option<PathBuf>,

        /// Set default staging directory
        #[arg(long)]
        staging: Option<PathBuf>,

        /// Set default collect output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
