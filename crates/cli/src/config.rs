// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Migrator configuration file.
//!
//! ```toml
//! [migrator]
//! dry_run = false
//! default_tenant = "cgrates.org"
//! users_filters = ["Account"]
//!
//! [in]
//! kind = "document"
//! path = "/var/lib/ocs/legacy"
//! encoding = "json"
//!
//! [out]
//! kind = "keyvalue"
//! path = "/var/lib/ocs/data.snap"
//! ```

use anyhow::{bail, Context, Result};
use ocs_migrator::{MigratorOptions, DEFAULT_TENANT};
use ocs_storage::{DataManager, DbConfig, DbKind, Encoding};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MigratorConfig {
    pub migrator: MigratorSection,
    #[serde(rename = "in")]
    pub input: DbConfig,
    #[serde(rename = "out")]
    pub output: DbConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MigratorSection {
    pub dry_run: bool,
    pub default_tenant: String,
    pub users_filters: Vec<String>,
}

impl Default for MigratorSection {
    fn default() -> Self {
        Self {
            dry_run: false,
            default_tenant: DEFAULT_TENANT.to_string(),
            users_filters: Vec::new(),
        }
    }
}

/// Command-line values that replace one store section field by field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoreOverrides {
    pub kind: Option<DbKind>,
    pub path: Option<PathBuf>,
    pub encoding: Option<Encoding>,
}

impl StoreOverrides {
    pub fn apply(&self, db: &mut DbConfig) {
        if let Some(kind) = self.kind {
            db.kind = kind;
        }
        if let Some(path) = &self.path {
            db.path = Some(path.clone());
        }
        if let Some(encoding) = self.encoding {
            db.encoding = encoding;
        }
    }
}

impl MigratorConfig {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Load `explicit`, else the file named by OCS_MIGRATOR_CONFIG, else
    /// defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit.map(Path::to_path_buf).or_else(crate::env::config_path) {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Input and output name the same store.
    pub fn same_data_db(&self) -> bool {
        self.input.same_location(&self.output)
    }

    pub fn options(&self) -> MigratorOptions {
        MigratorOptions {
            dry_run: self.migrator.dry_run,
            same_data_db: self.same_data_db(),
            default_tenant: self.migrator.default_tenant.clone(),
            users_filters: self.migrator.users_filters.clone(),
        }
    }

    /// Open input and output. A shared store is opened once and handed out
    /// twice.
    pub fn open_stores(&self) -> Result<(DataManager, DataManager)> {
        if self.same_data_db() && self.input.encoding != self.output.encoding {
            bail!(
                "input and output share one {} store but differ in encoding ({} vs {}); \
                 re-encoding in place is not supported",
                self.input.kind,
                self.input.encoding,
                self.output.encoding
            );
        }
        let dm_in = open_store("input", &self.input)?;
        if self.same_data_db() {
            return Ok((dm_in.clone(), dm_in));
        }
        let dm_out = open_store("output", &self.output)?;
        Ok((dm_in, dm_out))
    }
}

pub fn open_store(role: &str, db: &DbConfig) -> Result<DataManager> {
    let dm = db.open().with_context(|| match &db.path {
        Some(path) => format!("failed to open {role} {} store at {}", db.kind, path.display()),
        None => format!("failed to open {role} {} store", db.kind),
    })?;
    debug!(role, kind = %db.kind, encoding = %db.encoding, "opened store");
    Ok(dm)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
