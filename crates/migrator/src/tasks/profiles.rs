// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Charger, dispatcher, route and resource profiles.

use super::{unsupported, Step};
use crate::error::OrNoMoreData;
use crate::legacy::LegacyRecord;
use crate::store::LegacyRecords;
use crate::{Migrator, MigratorError};
use ocs_core::consts::version_key as vk;
use ocs_core::{
    ChargerProfile, DispatcherHost, DispatcherProfile, Resource, ResourceProfile, RouteProfile,
};

impl Migrator {
    pub(crate) fn migrate_chargers(&mut self) -> Result<(), MigratorError> {
        let key = vk::CHARGERS;
        match self.plan(key)? {
            Step::Skip => return Ok(()),
            Step::Move => self.move_current::<ChargerProfile>(key)?,
            Step::Upgrade(1) => {
                while let Some(v1) = self.dm_in.get_v1_charger_profile().or_no_more_data()? {
                    self.write_upgraded(key, &v1.as_charger_profile(), &v1.storage_key())?;
                }
            }
            Step::Upgrade(v) => return Err(unsupported(key, v)),
        }
        self.reindex::<ChargerProfile>()?;
        self.finish(key)
    }

    /// Hosts are unversioned and follow their profiles.
    pub(crate) fn migrate_dispatchers(&mut self) -> Result<(), MigratorError> {
        let key = vk::DISPATCHERS;
        match self.plan(key)? {
            Step::Skip => return Ok(()),
            Step::Move => self.move_current::<DispatcherProfile>(key)?,
            Step::Upgrade(1) => {
                while let Some(v1) = self.dm_in.get_v1_dispatcher_profile().or_no_more_data()? {
                    self.write_upgraded(key, &v1.as_dispatcher_profile(), &v1.storage_key())?;
                }
            }
            Step::Upgrade(v) => return Err(unsupported(key, v)),
        }
        if !self.options.same_data_db {
            self.move_derived::<DispatcherHost>()?;
        }
        self.reindex::<DispatcherProfile>()?;
        self.finish(key)
    }

    /// Routes were suppliers in version 1, so `*suppliers` lands here too.
    pub(crate) fn migrate_routes(&mut self) -> Result<(), MigratorError> {
        let key = vk::ROUTES;
        match self.plan(key)? {
            Step::Skip => return Ok(()),
            Step::Move => self.move_current::<RouteProfile>(key)?,
            Step::Upgrade(1) => {
                while let Some(v1) = self.dm_in.get_v1_supplier_profile().or_no_more_data()? {
                    self.write_upgraded(key, &v1.as_route_profile(), &v1.storage_key())?;
                }
            }
            Step::Upgrade(v) => return Err(unsupported(key, v)),
        }
        self.reindex::<RouteProfile>()?;
        self.finish(key)
    }

    pub(crate) fn migrate_resources(&mut self) -> Result<(), MigratorError> {
        let key = vk::RESOURCE;
        match self.plan(key)? {
            Step::Skip => return Ok(()),
            Step::Move => {
                self.move_current::<ResourceProfile>(key)?;
                self.move_derived::<Resource>()?;
            }
            Step::Upgrade(v) => return Err(unsupported(key, v)),
        }
        self.reindex::<ResourceProfile>()?;
        self.finish(key)
    }
}

#[cfg(test)]
#[path = "profiles_tests.rs"]
mod tests;
