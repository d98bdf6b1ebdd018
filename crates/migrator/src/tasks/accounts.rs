// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{unsupported, Step};
use crate::error::OrNoMoreData;
use crate::legacy::LegacyRecord;
use crate::store::LegacyRecords;
use crate::{Migrator, MigratorError};
use ocs_core::consts::version_key as vk;
use ocs_core::Account;

impl Migrator {
    pub(crate) fn migrate_accounts(&mut self) -> Result<(), MigratorError> {
        let key = vk::ACCOUNTS;
        match self.plan(key)? {
            Step::Skip => return Ok(()),
            Step::Move => self.move_current::<Account>(key)?,
            Step::Upgrade(1) => {
                while let Some(v1) = self.dm_in.get_v1_account().or_no_more_data()? {
                    let account = v1.as_v2()?.as_account();
                    self.write_upgraded(key, &account, &v1.storage_key())?;
                }
            }
            Step::Upgrade(2) => {
                while let Some(v2) = self.dm_in.get_v2_account().or_no_more_data()? {
                    self.write_upgraded(key, &v2.as_account(), &v2.storage_key())?;
                }
            }
            Step::Upgrade(v) => return Err(unsupported(key, v)),
        }
        self.finish(key)
    }
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
