// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One task per entity tag, and the steps they share.
//!
//! Every task reads the stored version from the input store. A current
//! version moves records as they are (or does nothing when input and output
//! are the same store). An older version decodes each legacy record, walks
//! it up to the current shape and writes it to the output. A non-dry run
//! then records the current version in the output.

mod accounts;
mod actions;
mod attributes;
mod filters;
mod profiles;
mod stats;
mod tariffs;
mod thresholds;

use crate::versions::VersionCheck;
use crate::{Migrator, MigratorError};
use ocs_core::consts::tag;
use ocs_core::{Entity, FilteredProfile, Versions};
use tracing::{debug, info};

type Task = fn(&mut Migrator) -> Result<(), MigratorError>;

const TASKS: &[(&str, Task)] = &[
    (tag::ACCOUNTS, Migrator::migrate_accounts),
    (tag::ACTIONS, Migrator::migrate_actions),
    (tag::ACTION_TRIGGERS, Migrator::migrate_action_triggers),
    (tag::ACTION_PLANS, Migrator::migrate_action_plans),
    (tag::ACTION_PROFILES, Migrator::migrate_action_profiles),
    (tag::ALIASES, Migrator::migrate_aliases),
    (tag::ATTRIBUTES, Migrator::migrate_attributes),
    (tag::CDR_STATS, Migrator::migrate_cdr_stats),
    (tag::CHARGERS, Migrator::migrate_chargers),
    (tag::DESTINATIONS, Migrator::migrate_destinations),
    (tag::DISPATCHERS, Migrator::migrate_dispatchers),
    (tag::FILTERS, Migrator::migrate_filters),
    (tag::LOAD_IDS, Migrator::migrate_load_ids),
    (tag::RATE_PROFILES, Migrator::migrate_rate_profiles),
    (tag::RATING_PLANS, Migrator::migrate_rating_plans),
    (tag::RATING_PROFILES, Migrator::migrate_rating_profiles),
    (tag::RESOURCES, Migrator::migrate_resources),
    (tag::REVERSE_DESTINATIONS, Migrator::migrate_reverse_destinations),
    (tag::ROUTES, Migrator::migrate_routes),
    (tag::SUPPLIERS, Migrator::migrate_routes),
    (tag::SHARED_GROUPS, Migrator::migrate_shared_groups),
    (tag::STATS, Migrator::migrate_stats),
    (tag::THRESHOLDS, Migrator::migrate_thresholds),
    (tag::TIMINGS, Migrator::migrate_timings),
    (tag::USERS, Migrator::migrate_users),
    (tag::SET_VERSIONS, Migrator::set_current_versions),
];

pub(crate) fn lookup(tag: &str) -> Option<Task> {
    TASKS.iter().find(|(t, _)| *t == tag).map(|(_, task)| *task)
}

/// Every tag `Migrator::migrate` accepts.
pub fn supported_tags() -> impl Iterator<Item = &'static str> {
    TASKS.iter().map(|(t, _)| *t)
}

/// What a task has to do for the stored version.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Current version on a shared store.
    Skip,
    Move,
    Upgrade(i64),
}

pub(crate) fn unsupported(key: &str, version: i64) -> MigratorError {
    MigratorError::UnsupportedVersion {
        key: key.to_string(),
        version,
    }
}

impl Migrator {
    pub(crate) fn plan(&self, key: &str) -> Result<Step, MigratorError> {
        let stored = self.dm_in.data_manager().get_versions()?;
        let step = match self.registry.check(stored.as_ref(), key)? {
            VersionCheck::Current if self.options.same_data_db => Step::Skip,
            VersionCheck::Current => Step::Move,
            VersionCheck::Outdated(version) => Step::Upgrade(version),
        };
        debug!(key, ?step, "planned");
        Ok(step)
    }

    /// Record the current version of `key` in the output.
    pub(crate) fn finish(&self, key: &str) -> Result<(), MigratorError> {
        if self.options.dry_run {
            return Ok(());
        }
        let current = self.registry.current(key).ok_or_else(|| unsupported(key, 0))?;
        self.dm_out
            .data_manager()
            .set_versions(&Versions::from_iter([(key, current)]), false)?;
        info!(key, version = current, migrated = self.stats().get(key).copied().unwrap_or(0), "done");
        Ok(())
    }

    /// Copy every current-shape `T` to the output and remove it from the input.
    pub(crate) fn move_current<T: Entity>(&mut self, key: &str) -> Result<(), MigratorError> {
        let dm_in = self.dm_in.data_manager().clone();
        let dm_out = self.dm_out.data_manager().clone();
        for key_id in dm_in.key_ids::<T>()? {
            let Some(item) = dm_in.get::<T>(&key_id)? else {
                continue;
            };
            if self.options.dry_run {
                continue;
            }
            dm_out.set(&item)?;
            dm_in.remove::<T>(&key_id)?;
            self.bump(key);
        }
        Ok(())
    }

    /// Move records that ride along with a counted entity, uncounted.
    pub(crate) fn move_derived<T: Entity>(&self) -> Result<(), MigratorError> {
        if self.options.dry_run {
            return Ok(());
        }
        let dm_in = self.dm_in.data_manager();
        let dm_out = self.dm_out.data_manager();
        for key_id in dm_in.key_ids::<T>()? {
            if let Some(item) = dm_in.get::<T>(&key_id)? {
                dm_out.set(&item)?;
                dm_in.remove::<T>(&key_id)?;
            }
        }
        Ok(())
    }

    /// Write an upgraded record and drop the legacy one it came from.
    pub(crate) fn write_upgraded<T: Entity>(
        &mut self,
        key: &str,
        item: &T,
        legacy_key: &str,
    ) -> Result<(), MigratorError> {
        if self.options.dry_run {
            return Ok(());
        }
        self.store_derived(item)?;
        self.remove_legacy(legacy_key, &item.storage_key())?;
        self.bump(key);
        Ok(())
    }

    /// Write a record produced alongside an upgrade, uncounted.
    pub(crate) fn store_derived<T: Entity>(&self, item: &T) -> Result<(), MigratorError> {
        if self.options.dry_run {
            return Ok(());
        }
        Ok(self.dm_out.data_manager().set(item)?)
    }

    /// Remove a consumed legacy record unless the upgrade overwrote it in place.
    pub(crate) fn remove_legacy(&self, legacy_key: &str, written_key: &str) -> Result<(), MigratorError> {
        if self.options.dry_run || (self.options.same_data_db && legacy_key == written_key) {
            return Ok(());
        }
        self.dm_in.remove_record(legacy_key)
    }

    /// Rebuild the output's filter indexes for `T` after a real migration.
    pub(crate) fn reindex<T: FilteredProfile>(&self) -> Result<(), MigratorError> {
        if self.options.dry_run {
            return Ok(());
        }
        self.dm_out.data_manager().rebuild_filter_indexes::<T>()?;
        Ok(())
    }

    /// `*set_versions`: stamp the output with every current version.
    fn set_current_versions(&mut self) -> Result<(), MigratorError> {
        if self.options.dry_run {
            return Ok(());
        }
        self.dm_out
            .data_manager()
            .set_versions(self.registry.current_versions(), true)?;
        info!("wrote current versions");
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
