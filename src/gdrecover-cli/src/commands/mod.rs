//! Command handlers for gdrecover CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod collect;
pub mod configure;
pub mod reconcile;

use anyhow::{Context, Result};
use serde::Serialize;

/// Print `report` as pretty JSON when requested, otherwise run `summary`
pub(crate) fn emit<T, F>(json: bool, report: &T, summary: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&T),
{
    if json {
        let out = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        summary(report);
    }
    Ok(())
}
