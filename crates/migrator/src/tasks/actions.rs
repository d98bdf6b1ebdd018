// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actions, action triggers, action plans and shared groups.

use super::{unsupported, Step};
use crate::error::OrNoMoreData;
use crate::legacy::LegacyRecord;
use crate::store::LegacyRecords;
use crate::{Migrator, MigratorError};
use ocs_core::consts::{prefix, version_key as vk};
use ocs_core::{AccountActionPlans, ActionPlan, ActionTriggers, Actions, SharedGroup};
use ocs_storage::{DataManager, StoreError};
use std::collections::BTreeMap;
use tracing::debug;

/// Replace the account → action plans index with one derived from `apl_`.
pub(crate) fn rebuild_account_action_plans(dm: &DataManager) -> Result<usize, StoreError> {
    for key in dm.db().keys_for_prefix(prefix::ACCOUNT_ACTION_PLANS)? {
        dm.remove_raw(&key)?;
    }
    let mut by_account: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for plan in dm.get_all::<ActionPlan>()? {
        for account in plan.account_ids.keys() {
            by_account
                .entry(account.to_string())
                .or_default()
                .push(plan.id.clone());
        }
    }
    for (account_id, plan_ids) in &by_account {
        dm.set(&AccountActionPlans {
            account_id: account_id.clone(),
            plan_ids: plan_ids.clone(),
        })?;
    }
    debug!(accounts = by_account.len(), "rebuilt account action plans");
    Ok(by_account.len())
}

impl Migrator {
    pub(crate) fn migrate_actions(&mut self) -> Result<(), MigratorError> {
        let key = vk::ACTIONS;
        match self.plan(key)? {
            Step::Skip => return Ok(()),
            Step::Move => self.move_current::<Actions>(key)?,
            Step::Upgrade(1) => {
                while let Some(v1) = self.dm_in.get_v1_actions().or_no_more_data()? {
                    self.write_upgraded(key, &v1.as_actions(), &v1.storage_key())?;
                }
            }
            Step::Upgrade(v) => return Err(unsupported(key, v)),
        }
        self.finish(key)
    }

    pub(crate) fn migrate_action_triggers(&mut self) -> Result<(), MigratorError> {
        let key = vk::ACTION_TRIGGERS;
        match self.plan(key)? {
            Step::Skip => return Ok(()),
            Step::Move => self.move_current::<ActionTriggers>(key)?,
            Step::Upgrade(1) => {
                while let Some(v1) = self.dm_in.get_v1_action_triggers().or_no_more_data()? {
                    self.write_upgraded(key, &v1.as_action_triggers(), &v1.storage_key())?;
                }
            }
            Step::Upgrade(v) => return Err(unsupported(key, v)),
        }
        self.finish(key)
    }

    pub(crate) fn migrate_shared_groups(&mut self) -> Result<(), MigratorError> {
        let key = vk::SHARED_GROUPS;
        match self.plan(key)? {
            Step::Skip => return Ok(()),
            Step::Move => self.move_current::<SharedGroup>(key)?,
            Step::Upgrade(1) => {
                while let Some(v1) = self.dm_in.get_v1_shared_group().or_no_more_data()? {
                    self.write_upgraded(key, &v1.as_shared_group(), &v1.storage_key())?;
                }
            }
            Step::Upgrade(v) => return Err(unsupported(key, v)),
        }
        self.finish(key)
    }

    pub(crate) fn migrate_action_plans(&mut self) -> Result<(), MigratorError> {
        let key = vk::ACTION_PLANS;
        match self.plan(key)? {
            Step::Skip => return Ok(()),
            Step::Move => {
                self.move_current::<ActionPlan>(key)?;
                self.move_current::<AccountActionPlans>(key)?;
            }
            Step::Upgrade(1) => {
                while let Some(v1) = self.dm_in.get_v1_action_plans().or_no_more_data()? {
                    match v1.as_action_plan()? {
                        Some(plan) => self.write_upgraded(key, &plan, &v1.storage_key())?,
                        // only one-shot timings, nothing left to schedule
                        None => self.remove_legacy(&v1.storage_key(), "")?,
                    }
                }
                self.rebuild_account_action_plans()?;
            }
            Step::Upgrade(2) => {
                while let Some(v2) = self.dm_in.get_v2_action_plan().or_no_more_data()? {
                    self.write_upgraded(key, &v2.as_action_plan()?, &v2.storage_key())?;
                }
                self.rebuild_account_action_plans()?;
            }
            Step::Upgrade(v) => return Err(unsupported(key, v)),
        }
        self.finish(key)
    }

    fn rebuild_account_action_plans(&self) -> Result<(), MigratorError> {
        if !self.options.dry_run {
            rebuild_account_action_plans(self.dm_out.data_manager())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod tests;
