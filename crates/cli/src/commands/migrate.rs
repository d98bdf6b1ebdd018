// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ocs-migrate migrate`: run migration tasks between two stores.

use crate::config::{MigratorConfig, StoreOverrides};
use crate::output::{self, MigrationReport, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use ocs_migrator::Migrator;
use ocs_storage::{DbKind, Encoding};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Comma-separated migration tags, e.g. `*accounts,*filters`
    #[arg(long, value_delimiter = ',', required = true)]
    pub exec: Vec<String>,

    /// Convert without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Input store backend: keyvalue, document or internal
    #[arg(long)]
    pub in_kind: Option<DbKind>,
    /// Input snapshot file or document root
    #[arg(long)]
    pub in_path: Option<PathBuf>,
    /// Input record encoding: json or binary
    #[arg(long)]
    pub in_encoding: Option<Encoding>,

    /// Output store backend: keyvalue, document or internal
    #[arg(long)]
    pub out_kind: Option<DbKind>,
    /// Output snapshot file or document root
    #[arg(long)]
    pub out_path: Option<PathBuf>,
    /// Output record encoding: json or binary
    #[arg(long)]
    pub out_encoding: Option<Encoding>,

    /// Tenant for legacy records that had none
    #[arg(long)]
    pub default_tenant: Option<String>,

    /// Comma-separated user profile fields that select rather than set
    #[arg(long, value_delimiter = ',')]
    pub users_filters: Option<Vec<String>>,
}

impl MigrateArgs {
    /// Layer command-line values over the loaded config.
    pub fn apply(&self, config: &mut MigratorConfig) {
        StoreOverrides {
            kind: self.in_kind,
            path: self.in_path.clone(),
            encoding: self.in_encoding,
        }
        .apply(&mut config.input);
        StoreOverrides {
            kind: self.out_kind,
            path: self.out_path.clone(),
            encoding: self.out_encoding,
        }
        .apply(&mut config.output);
        config.migrator.dry_run |= self.dry_run;
        if let Some(tenant) = &self.default_tenant {
            config.migrator.default_tenant = tenant.clone();
        }
        if let Some(filters) = &self.users_filters {
            config.migrator.users_filters = filters.clone();
        }
    }
}

pub fn handle(args: MigrateArgs, mut config: MigratorConfig, format: OutputFormat) -> Result<()> {
    args.apply(&mut config);
    let options = config.options();
    let (dm_in, dm_out) = config.open_stores()?;

    let mut migrator = Migrator::new(dm_in, dm_out, options);
    let (result, stats) = migrator.migrate(args.exec.as_slice());
    let report = MigrationReport::new(
        &args.exec,
        migrator.options(),
        &stats,
        result.as_ref().err().map(ToString::to_string),
    );
    output::print_report(&report, format)?;
    info!(migrated = report.migrated, ok = result.is_ok(), "migration finished");

    migrator.close().context("failed to close stores")?;
    result?;
    Ok(())
}

#[cfg(test)]
#[path = "migrate_tests.rs"]
mod tests;
