// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entity types whose current version is their only one. Migrating them
//! moves records between stores.

use super::{unsupported, Step};
use crate::{Migrator, MigratorError};
use ocs_core::consts::version_key as vk;
use ocs_core::{
    ActionProfile, Destination, Entity, LoadIds, RateProfile, RatingPlan, RatingProfile,
    ReverseDestination, Timing,
};

impl Migrator {
    fn move_only<T: Entity>(&mut self, key: &str) -> Result<(), MigratorError> {
        match self.plan(key)? {
            Step::Skip => return Ok(()),
            Step::Move => self.move_current::<T>(key)?,
            Step::Upgrade(v) => return Err(unsupported(key, v)),
        }
        self.finish(key)
    }

    pub(crate) fn migrate_destinations(&mut self) -> Result<(), MigratorError> {
        self.move_only::<Destination>(vk::DESTINATIONS)
    }

    pub(crate) fn migrate_reverse_destinations(&mut self) -> Result<(), MigratorError> {
        self.move_only::<ReverseDestination>(vk::REVERSE_DESTINATIONS)
    }

    pub(crate) fn migrate_rating_plans(&mut self) -> Result<(), MigratorError> {
        self.move_only::<RatingPlan>(vk::RATING_PLAN)
    }

    pub(crate) fn migrate_rating_profiles(&mut self) -> Result<(), MigratorError> {
        self.move_only::<RatingProfile>(vk::RATING_PROFILE)
    }

    pub(crate) fn migrate_timings(&mut self) -> Result<(), MigratorError> {
        self.move_only::<Timing>(vk::TIMING)
    }

    pub(crate) fn migrate_load_ids(&mut self) -> Result<(), MigratorError> {
        self.move_only::<LoadIds>(vk::LOAD_IDS)
    }

    pub(crate) fn migrate_action_profiles(&mut self) -> Result<(), MigratorError> {
        self.move_only::<ActionProfile>(vk::ACTION_PROFILES)
    }

    pub(crate) fn migrate_rate_profiles(&mut self) -> Result<(), MigratorError> {
        self.move_only::<RateProfile>(vk::RATE_PROFILES)
    }
}

#[cfg(test)]
#[path = "tariffs_tests.rs"]
mod tests;
