// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Threshold profiles and their runtime counters.

use super::{unsupported, Step};
use crate::error::OrNoMoreData;
use crate::legacy::{LegacyRecord, ThresholdDecomposition};
use crate::store::LegacyRecords;
use crate::{Migrator, MigratorError};
use ocs_core::consts::version_key as vk;
use ocs_core::{Threshold, ThresholdProfile};

impl Migrator {
    pub(crate) fn migrate_thresholds(&mut self) -> Result<(), MigratorError> {
        let key = vk::THRESHOLDS;
        match self.plan(key)? {
            Step::Skip => return Ok(()),
            Step::Move => {
                self.move_current::<ThresholdProfile>(key)?;
                self.move_derived::<Threshold>()?;
            }
            Step::Upgrade(1) => {
                let tenant = self.options.default_tenant.clone();
                while let Some(trigger) = self.dm_in.get_v2_action_trigger().or_no_more_data()? {
                    let parts = trigger.as_threshold(&tenant);
                    self.store_threshold_parts(&parts)?;
                    self.write_upgraded(key, &parts.profile, &trigger.storage_key())?;
                }
            }
            Step::Upgrade(2) => {
                while let Some(v2) = self.dm_in.get_v2_threshold_profile().or_no_more_data()? {
                    let profile = v2.as_v3().as_threshold_profile();
                    self.write_upgraded(key, &profile, &v2.storage_key())?;
                }
                self.move_thresholds_alongside()?;
            }
            Step::Upgrade(3) => {
                while let Some(v3) = self.dm_in.get_v3_threshold_profile().or_no_more_data()? {
                    let profile = v3.as_threshold_profile();
                    self.write_upgraded(key, &profile, &v3.storage_key())?;
                }
                self.move_thresholds_alongside()?;
            }
            Step::Upgrade(v) => return Err(unsupported(key, v)),
        }
        self.reindex::<ThresholdProfile>()?;
        self.finish(key)
    }

    /// Store the filter and counter built from a legacy trigger. The
    /// profile itself is written by the caller.
    pub(crate) fn store_threshold_parts(
        &self,
        parts: &ThresholdDecomposition,
    ) -> Result<(), MigratorError> {
        if let Some(filter) = &parts.filter {
            self.store_derived(filter)?;
        }
        self.store_derived(&parts.threshold)
    }

    /// Counters keep their shape across profile versions.
    fn move_thresholds_alongside(&self) -> Result<(), MigratorError> {
        if self.options.same_data_db {
            return Ok(());
        }
        self.move_derived::<Threshold>()
    }
}

#[cfg(test)]
#[path = "thresholds_tests.rs"]
mod tests;
