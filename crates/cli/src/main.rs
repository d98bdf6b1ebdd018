// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ocs-migrate - upgrade charging data stores to the current schema versions

mod color;
mod commands;
mod config;
mod env;
mod logging;
mod output;
mod table;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{migrate, tags, versions};
use config::MigratorConfig;
use output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ocs-migrate",
    version,
    about = "Upgrade charging data stores to the current schema versions"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Config file (TOML); defaults to $OCS_MIGRATOR_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `ocs_migrator=trace`; defaults to $OCS_LOG or `info`
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Migrate records of the given tags into the output store
    Migrate(migrate::MigrateArgs),
    /// Show the version map stored in a data store
    Versions(versions::VersionsArgs),
    /// List the supported migration tags
    Tags,
}

fn main() {
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `#[error("... {0}")]` with `#[from]`).
/// Otherwise we render the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let _guard = logging::setup_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    match command {
        Commands::Migrate(args) => {
            let config = MigratorConfig::resolve(cli.config.as_deref())?;
            migrate::handle(args, config, format)
        }
        Commands::Versions(args) => {
            let config = MigratorConfig::resolve(cli.config.as_deref())?;
            versions::handle(args, config, format)
        }
        Commands::Tags => tags::handle(format),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
