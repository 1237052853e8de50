mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use config::Config;
use gdrecover::ReconcileOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Configure {
            root,
            staging,
            output,
            show,
        } => {
            commands::configure::handle(root, staging, output, show)?;
        }

        Commands::Collect {
            root,
            output,
            extension,
            list,
        } => {
            let config = Config::load()?;
            let root = config.resolve_root(root)?;
            let output = config.resolve_output(output)?;
            commands::collect::handle(&root, &output, &extension, list, cli.json)?;
        }

        Commands::Restore {
            root,
            staging,
            list,
        } => {
            let config = Config::load()?;
            let root = config.resolve_root(root)?;
            let staging = config.resolve_staging(staging)?;
            commands::reconcile::restore(&root, &staging, list, cli.json)?;
        }

        Commands::Relink { root, list } => {
            let root = Config::load()?.resolve_root(root)?;
            commands::reconcile::relink(&root, list, cli.json)?;
        }

        Commands::Reconcile {
            root,
            staging,
            skip_restore,
            skip_relink,
            list,
        } => {
            let config = Config::load()?;
            let root = config.resolve_root(root)?;
            // Staging is only read by the restore pass
            let staging = if skip_restore {
                staging.or(config.staging.clone()).unwrap_or_default()
            } else {
                config.resolve_staging(staging)?
            };
            let options = ReconcileOptions {
                skip_restore,
                skip_relink,
                dry_run: list,
            };
            commands::reconcile::reconcile(&root, &staging, &options, cli.json)?;
        }
    }

    Ok(())
}

/// Progress goes to stderr so stdout stays clean for summaries and `--json`
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "gdrecover=debug"
    } else {
        "gdrecover=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}
