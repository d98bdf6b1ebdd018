// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Attribute profiles, and the user and alias records folded into them.

use super::{unsupported, Step};
use crate::error::OrNoMoreData;
use crate::legacy::LegacyRecord;
use crate::store::LegacyRecords;
use crate::{Migrator, MigratorError};
use ocs_core::consts::{prefix, version_key as vk};
use ocs_core::AttributeProfile;
use tracing::debug;

impl Migrator {
    pub(crate) fn migrate_attributes(&mut self) -> Result<(), MigratorError> {
        let key = vk::ATTRIBUTES;
        match self.plan(key)? {
            Step::Skip => return Ok(()),
            Step::Move => self.move_current::<AttributeProfile>(key)?,
            Step::Upgrade(1) => {
                while let Some(v1) = self.dm_in.get_v1_attribute_profile().or_no_more_data()? {
                    let profile = v1.as_v2()?.as_v3().as_v4().as_attribute_profile()?;
                    self.write_upgraded(key, &profile, &v1.storage_key())?;
                }
            }
            Step::Upgrade(2) => {
                while let Some(v2) = self.dm_in.get_v2_attribute_profile().or_no_more_data()? {
                    let profile = v2.as_v3().as_v4().as_attribute_profile()?;
                    self.write_upgraded(key, &profile, &v2.storage_key())?;
                }
            }
            Step::Upgrade(3) => {
                while let Some(v3) = self.dm_in.get_v3_attribute_profile().or_no_more_data()? {
                    let profile = v3.as_v4().as_attribute_profile()?;
                    self.write_upgraded(key, &profile, &v3.storage_key())?;
                }
            }
            Step::Upgrade(4) => {
                while let Some(v4) = self.dm_in.get_v4_attribute_profile().or_no_more_data()? {
                    let profile = v4.as_attribute_profile()?;
                    self.write_upgraded(key, &profile, &v4.storage_key())?;
                }
            }
            Step::Upgrade(v) => return Err(unsupported(key, v)),
        }
        self.reindex::<AttributeProfile>()?;
        self.finish(key)
    }

    /// User profiles become attribute profiles. A current version has no
    /// records of its own to move.
    pub(crate) fn migrate_users(&mut self) -> Result<(), MigratorError> {
        let key = vk::USER;
        match self.plan(key)? {
            Step::Skip => return Ok(()),
            Step::Move => {}
            Step::Upgrade(1) => {
                let tenant = self.options.default_tenant.clone();
                let users_filters = self.options.users_filters.clone();
                while let Some(v1) = self.dm_in.get_v1_user().or_no_more_data()? {
                    let profile = v1.as_attribute_profile(&tenant, &users_filters)?;
                    self.write_upgraded(key, &profile, &v1.storage_key())?;
                }
            }
            Step::Upgrade(v) => return Err(unsupported(key, v)),
        }
        self.reindex::<AttributeProfile>()?;
        self.finish(key)
    }

    /// Aliases become attribute profiles. Their reverse index has no
    /// counterpart and is dropped from the input.
    pub(crate) fn migrate_aliases(&mut self) -> Result<(), MigratorError> {
        let key = vk::ALIAS;
        match self.plan(key)? {
            Step::Skip => return Ok(()),
            Step::Move => {}
            Step::Upgrade(1) => {
                let tenant = self.options.default_tenant.clone();
                while let Some(v1) = self.dm_in.get_v1_alias().or_no_more_data()? {
                    let profile = v1.as_attribute_profile(&tenant)?;
                    self.write_upgraded(key, &profile, &v1.storage_key())?;
                }
                self.remove_reverse_aliases()?;
            }
            Step::Upgrade(v) => return Err(unsupported(key, v)),
        }
        self.reindex::<AttributeProfile>()?;
        self.finish(key)
    }

    fn remove_reverse_aliases(&self) -> Result<(), MigratorError> {
        if self.options.dry_run {
            return Ok(());
        }
        let dm = self.dm_in.data_manager();
        let keys = dm.db().keys_for_prefix(prefix::REVERSE_ALIAS)?;
        for key in &keys {
            dm.remove_raw(key)?;
        }
        debug!(removed = keys.len(), "dropped reverse aliases");
        Ok(())
    }
}

#[cfg(test)]
#[path = "attributes_tests.rs"]
mod tests;
