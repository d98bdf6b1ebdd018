// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stat queue profiles, and the CDR stats they replaced.

use super::{unsupported, Step};
use crate::error::OrNoMoreData;
use crate::legacy::LegacyRecord;
use crate::store::LegacyRecords;
use crate::{Migrator, MigratorError};
use ocs_core::consts::version_key as vk;
use ocs_core::{StatQueue, StatQueueProfile, ThresholdProfile};

impl Migrator {
    pub(crate) fn migrate_stats(&mut self) -> Result<(), MigratorError> {
        let key = vk::STATS;
        match self.plan(key)? {
            Step::Skip => return Ok(()),
            Step::Move => {
                self.move_current::<StatQueueProfile>(key)?;
                self.move_derived::<StatQueue>()?;
            }
            Step::Upgrade(1) => self.upgrade_cdr_stats(key)?,
            Step::Upgrade(2) => {
                while let Some(v2) = self.dm_in.get_v2_stats().or_no_more_data()? {
                    let profile = v2.as_v3().as_stat_queue_profile();
                    self.write_upgraded(key, &profile, &v2.storage_key())?;
                }
                self.move_queues_alongside()?;
            }
            Step::Upgrade(3) => {
                while let Some(v3) = self.dm_in.get_v3_stats().or_no_more_data()? {
                    let profile = v3.as_stat_queue_profile();
                    self.write_upgraded(key, &profile, &v3.storage_key())?;
                }
                self.move_queues_alongside()?;
            }
            Step::Upgrade(v) => return Err(unsupported(key, v)),
        }
        self.reindex::<StatQueueProfile>()?;
        self.finish(key)
    }

    /// Legacy CDR stats only exist in version 1. A current version leaves
    /// nothing to move.
    pub(crate) fn migrate_cdr_stats(&mut self) -> Result<(), MigratorError> {
        let key = vk::CDR_STATS;
        match self.plan(key)? {
            Step::Skip => return Ok(()),
            Step::Move => {}
            Step::Upgrade(1) => self.upgrade_cdr_stats(key)?,
            Step::Upgrade(v) => return Err(unsupported(key, v)),
        }
        self.reindex::<StatQueueProfile>()?;
        self.finish(key)
    }

    /// Split every `cst_` record into a filter, a stat queue profile, an
    /// empty queue and one threshold per trigger. Counted under `key`.
    fn upgrade_cdr_stats(&mut self, key: &str) -> Result<(), MigratorError> {
        let tenant = self.options.default_tenant.clone();
        while let Some(v1) = self.dm_in.get_v1_stats().or_no_more_data()? {
            let parts = v1.as_stats(&tenant)?;
            self.store_derived(&parts.filter)?;
            self.store_derived(&parts.queue)?;
            for threshold in &parts.thresholds {
                self.store_threshold_parts(threshold)?;
                self.store_derived(&threshold.profile)?;
            }
            self.write_upgraded(key, &parts.profile, &v1.storage_key())?;
        }
        self.reindex::<ThresholdProfile>()
    }

    fn move_queues_alongside(&self) -> Result<(), MigratorError> {
        if self.options.same_data_db {
            return Ok(());
        }
        self.move_derived::<StatQueue>()
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
