// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ocs-migrate versions`: show the version map of a store.

use crate::config::{open_store, MigratorConfig, StoreOverrides};
use crate::output::{self, OutputFormat, VersionsReport};
use anyhow::{Context, Result};
use clap::Args;
use ocs_migrator::VersionRegistry;
use ocs_storage::{DbKind, Encoding};
use std::path::PathBuf;

/// Store to inspect; defaults to the config's `[in]` section.
#[derive(Args, Debug)]
pub struct VersionsArgs {
    /// Store backend: keyvalue, document or internal
    #[arg(long)]
    pub kind: Option<DbKind>,
    /// Snapshot file or document root
    #[arg(long)]
    pub path: Option<PathBuf>,
    /// Record encoding: json or binary
    #[arg(long)]
    pub encoding: Option<Encoding>,
}

impl VersionsArgs {
    pub fn overrides(&self) -> StoreOverrides {
        StoreOverrides {
            kind: self.kind,
            path: self.path.clone(),
            encoding: self.encoding,
        }
    }
}

pub fn handle(args: VersionsArgs, config: MigratorConfig, format: OutputFormat) -> Result<()> {
    let mut db = config.input;
    args.overrides().apply(&mut db);

    let dm = open_store("input", &db)?;
    let stored = dm.get_versions().context("failed to read versions")?;
    let registry = VersionRegistry::new();
    output::print_versions(
        &VersionsReport::new(stored.as_ref(), registry.current_versions()),
        format,
    )?;
    dm.close().context("failed to close store")?;
    Ok(())
}
