// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The migration orchestrator.

use crate::store::{legacy_store, LegacyStore};
use crate::tasks;
use crate::versions::VersionRegistry;
use crate::MigratorError;
use ocs_storage::DataManager;
use std::collections::BTreeMap;
use tracing::{info, warn};

pub const DEFAULT_TENANT: &str = "cgrates.org";

/// Settings fixed for the lifetime of a [`Migrator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MigratorOptions {
    /// Read and convert without writing anything.
    pub dry_run: bool,
    /// Input and output are the same store.
    pub same_data_db: bool,
    /// Tenant for records whose legacy shape had none.
    pub default_tenant: String,
    /// User profile fields that select rather than set.
    pub users_filters: Vec<String>,
}

impl Default for MigratorOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            same_data_db: false,
            default_tenant: DEFAULT_TENANT.to_string(),
            users_filters: Vec::new(),
        }
    }
}

/// Migrates entity types from an input store into an output store.
///
/// Both stores are released by [`Migrator::close`] or when the migrator is
/// dropped.
pub struct Migrator {
    pub(crate) dm_in: Box<dyn LegacyStore>,
    pub(crate) dm_out: Box<dyn LegacyStore>,
    pub(crate) options: MigratorOptions,
    pub(crate) registry: VersionRegistry,
    stats: BTreeMap<String, i64>,
    shared_handle: bool,
    closed: bool,
}

impl Migrator {
    /// Passing the same handle twice implies `same_data_db`.
    pub fn new(dm_in: DataManager, dm_out: DataManager, mut options: MigratorOptions) -> Self {
        let shared_handle = dm_in.same_store(&dm_out);
        options.same_data_db |= shared_handle;
        let registry = VersionRegistry::new();
        let stats = registry
            .current_versions()
            .iter()
            .map(|(key, _)| (key.to_string(), 0))
            .collect();
        Self {
            dm_in: legacy_store(dm_in),
            dm_out: legacy_store(dm_out),
            options,
            registry,
            stats,
            shared_handle,
            closed: false,
        }
    }

    pub fn options(&self) -> &MigratorOptions {
        &self.options
    }

    /// Records written so far, per version key.
    pub fn stats(&self) -> &BTreeMap<String, i64> {
        &self.stats
    }

    pub fn input(&self) -> &DataManager {
        self.dm_in.data_manager()
    }

    pub fn output(&self) -> &DataManager {
        self.dm_out.data_manager()
    }

    /// Run the tasks for `tags` in order, stopping at the first failure.
    ///
    /// Stats are returned in both cases.
    pub fn migrate<S: AsRef<str>>(
        &mut self,
        tags: &[S],
    ) -> (Result<(), MigratorError>, BTreeMap<String, i64>) {
        let result = tags.iter().try_for_each(|tag| self.run_task(tag.as_ref()));
        (result, self.stats.clone())
    }

    fn run_task(&mut self, tag: &str) -> Result<(), MigratorError> {
        let task = tasks::lookup(tag).ok_or_else(|| MigratorError::UnsupportedTask(tag.to_string()))?;
        info!(tag, dry_run = self.options.dry_run, "migrating");
        // a task that failed earlier may have left its enumeration behind
        self.dm_in.reset_cursor();
        task(self).inspect_err(|e| warn!(tag, error = %e, "migration failed"))
    }

    pub(crate) fn bump(&mut self, key: &str) {
        *self.stats.entry(key.to_string()).or_insert(0) += 1;
    }

    /// Release both stores. A shared handle is closed once.
    pub fn close(mut self) -> Result<(), MigratorError> {
        self.close_stores()
    }

    fn close_stores(&mut self) -> Result<(), MigratorError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        let closed_in = self.dm_in.close();
        if !self.shared_handle {
            self.dm_out.close()?;
        }
        closed_in
    }
}

impl Drop for Migrator {
    fn drop(&mut self) {
        if let Err(e) = self.close_stores() {
            warn!(error = %e, "failed to close stores");
        }
    }
}

#[cfg(test)]
#[path = "migrator_tests.rs"]
mod tests;
