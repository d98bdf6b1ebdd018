// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filters, and the inline filter IDs profiles carry.
//!
//! Inline filter IDs follow the filter syntax, so after filters move to a
//! new version every profile in the output is rewritten to match and all
//! filter indexes are rebuilt.

use super::{unsupported, Step};
use crate::error::OrNoMoreData;
use crate::legacy::{
    migrate_inline_filter, migrate_inline_filter_v2, migrate_inline_filter_v4, LegacyRecord,
};
use crate::store::LegacyRecords;
use crate::{Migrator, MigratorError};
use ocs_core::consts::version_key as vk;
use ocs_core::{
    AttributeProfile, ChargerProfile, DispatcherProfile, Filter, FilteredProfile,
    ResourceProfile, RouteProfile, StatQueueProfile, ThresholdProfile,
};
use tracing::debug;

/// Every list of filter IDs a profile carries, nested ones included.
pub(crate) trait FilterIdLists: FilteredProfile {
    fn filter_id_lists(&mut self) -> Vec<&mut Vec<String>>;
}

macro_rules! flat_filter_ids {
    ($($ty:ty),*) => {
        $(
            impl FilterIdLists for $ty {
                fn filter_id_lists(&mut self) -> Vec<&mut Vec<String>> {
                    vec![&mut self.filter_ids]
                }
            }
        )*
    };
}

flat_filter_ids!(ChargerProfile, ResourceProfile, ThresholdProfile);

impl FilterIdLists for AttributeProfile {
    fn filter_id_lists(&mut self) -> Vec<&mut Vec<String>> {
        let mut lists = vec![&mut self.filter_ids];
        lists.extend(self.attributes.iter_mut().map(|a| &mut a.filter_ids));
        lists
    }
}

impl FilterIdLists for DispatcherProfile {
    fn filter_id_lists(&mut self) -> Vec<&mut Vec<String>> {
        let mut lists = vec![&mut self.filter_ids];
        lists.extend(self.hosts.iter_mut().map(|h| &mut h.filter_ids));
        lists
    }
}

impl FilterIdLists for RouteProfile {
    fn filter_id_lists(&mut self) -> Vec<&mut Vec<String>> {
        let mut lists = vec![&mut self.filter_ids];
        lists.extend(self.routes.iter_mut().map(|r| &mut r.filter_ids));
        lists
    }
}

impl FilterIdLists for StatQueueProfile {
    fn filter_id_lists(&mut self) -> Vec<&mut Vec<String>> {
        let mut lists = vec![&mut self.filter_ids];
        lists.extend(self.metrics.iter_mut().map(|m| &mut m.filter_ids));
        lists
    }
}

/// Bring inline filter IDs written for filters version `from` up to date.
pub(crate) fn rewrite_inline_filter_ids(
    filter_ids: &[String],
    from: i64,
) -> Result<Vec<String>, String> {
    let mut ids = filter_ids.to_vec();
    if from <= 1 {
        ids = ids.iter().map(|id| migrate_inline_filter(id)).collect();
    }
    if from <= 2 {
        ids = ids.iter().map(|id| migrate_inline_filter_v2(id)).collect();
    }
    migrate_inline_filter_v4(&ids)
}

impl Migrator {
    pub(crate) fn migrate_filters(&mut self) -> Result<(), MigratorError> {
        let key = vk::FILTERS;
        let from = match self.plan(key)? {
            Step::Skip => return Ok(()),
            Step::Move => {
                self.move_current::<Filter>(key)?;
                None
            }
            Step::Upgrade(v @ 1..=3) => {
                while let Some(legacy) = self.dm_in.get_v1_filter().or_no_more_data()? {
                    let v4 = match v {
                        1 => legacy.as_v4_from_v1(),
                        2 => legacy.as_v4_from_v2(),
                        _ => legacy.as_v4_from_v3(),
                    };
                    self.write_upgraded(key, &v4.as_filter()?, &legacy.storage_key())?;
                }
                Some(v)
            }
            Step::Upgrade(4) => {
                while let Some(v4) = self.dm_in.get_v4_filter().or_no_more_data()? {
                    self.write_upgraded(key, &v4.as_filter()?, &v4.storage_key())?;
                }
                Some(4)
            }
            Step::Upgrade(v) => return Err(unsupported(key, v)),
        };
        if !self.options.dry_run {
            if let Some(from) = from {
                self.rewrite_profiles::<AttributeProfile>(from)?;
                self.rewrite_profiles::<ChargerProfile>(from)?;
                self.rewrite_profiles::<DispatcherProfile>(from)?;
                self.rewrite_profiles::<ResourceProfile>(from)?;
                self.rewrite_profiles::<RouteProfile>(from)?;
                self.rewrite_profiles::<StatQueueProfile>(from)?;
                self.rewrite_profiles::<ThresholdProfile>(from)?;
            }
            self.dm_out.data_manager().rebuild_all_filter_indexes()?;
        }
        // the marker only moves once profiles and indexes agree with it
        self.finish(key)
    }

    /// Rewrite the inline filter IDs of every `T` in the output. Only
    /// profiles that change are written back.
    fn rewrite_profiles<T: FilterIdLists>(&self, from: i64) -> Result<(), MigratorError> {
        let dm = self.dm_out.data_manager();
        let mut rewritten = 0;
        for mut profile in dm.get_all::<T>()? {
            let key = profile.storage_key();
            let mut changed = false;
            for ids in profile.filter_id_lists() {
                let updated = rewrite_inline_filter_ids(ids, from).map_err(|reason| {
                    MigratorError::InvalidRecord {
                        key: key.clone(),
                        reason,
                    }
                })?;
                if updated != *ids {
                    *ids = updated;
                    changed = true;
                }
            }
            if changed {
                dm.set(&profile)?;
                rewritten += 1;
            }
        }
        debug!(kind = T::INDEX_KIND, rewritten, "rewrote inline filters");
        Ok(())
    }
}

#[cfg(test)]
#[path = "filters_tests.rs"]
mod tests;
