// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Version registry: which schema versions each entity type can be read from.
//!
//! The stored version is compared against the compiled-in current version.
//! Older versions are only accepted when a decoder exists for them.

use crate::MigratorError;
use ocs_core::consts::{tag, version_key as vk};
use ocs_core::{current_data_db_versions, Versions};

/// Schema facts for one migration tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityVersion {
    pub tag: &'static str,
    pub key: &'static str,
    /// Stored versions with a legacy decoder.
    pub legacy: &'static [i64],
}

const ENTITIES: &[EntityVersion] = &[
    EntityVersion { tag: tag::ACCOUNTS, key: vk::ACCOUNTS, legacy: &[1, 2] },
    EntityVersion { tag: tag::ACTIONS, key: vk::ACTIONS, legacy: &[1] },
    EntityVersion { tag: tag::ACTION_TRIGGERS, key: vk::ACTION_TRIGGERS, legacy: &[1] },
    EntityVersion { tag: tag::ACTION_PLANS, key: vk::ACTION_PLANS, legacy: &[1, 2] },
    EntityVersion { tag: tag::ACTION_PROFILES, key: vk::ACTION_PROFILES, legacy: &[] },
    EntityVersion { tag: tag::ALIASES, key: vk::ALIAS, legacy: &[1] },
    EntityVersion { tag: tag::ATTRIBUTES, key: vk::ATTRIBUTES, legacy: &[1, 2, 3, 4] },
    EntityVersion { tag: tag::CDR_STATS, key: vk::CDR_STATS, legacy: &[1] },
    EntityVersion { tag: tag::CHARGERS, key: vk::CHARGERS, legacy: &[1] },
    EntityVersion { tag: tag::DESTINATIONS, key: vk::DESTINATIONS, legacy: &[] },
    EntityVersion { tag: tag::DISPATCHERS, key: vk::DISPATCHERS, legacy: &[1] },
    EntityVersion { tag: tag::FILTERS, key: vk::FILTERS, legacy: &[1, 2, 3, 4] },
    EntityVersion { tag: tag::LOAD_IDS, key: vk::LOAD_IDS, legacy: &[] },
    EntityVersion { tag: tag::RATE_PROFILES, key: vk::RATE_PROFILES, legacy: &[] },
    EntityVersion { tag: tag::RATING_PLANS, key: vk::RATING_PLAN, legacy: &[] },
    EntityVersion { tag: tag::RATING_PROFILES, key: vk::RATING_PROFILE, legacy: &[] },
    EntityVersion { tag: tag::RESOURCES, key: vk::RESOURCE, legacy: &[] },
    EntityVersion { tag: tag::REVERSE_DESTINATIONS, key: vk::REVERSE_DESTINATIONS, legacy: &[] },
    EntityVersion { tag: tag::ROUTES, key: vk::ROUTES, legacy: &[1] },
    EntityVersion { tag: tag::SUPPLIERS, key: vk::ROUTES, legacy: &[1] },
    EntityVersion { tag: tag::SHARED_GROUPS, key: vk::SHARED_GROUPS, legacy: &[1] },
    EntityVersion { tag: tag::STATS, key: vk::STATS, legacy: &[1, 2, 3] },
    EntityVersion { tag: tag::THRESHOLDS, key: vk::THRESHOLDS, legacy: &[1, 2, 3] },
    EntityVersion { tag: tag::TIMINGS, key: vk::TIMING, legacy: &[] },
    EntityVersion { tag: tag::USERS, key: vk::USER, legacy: &[1] },
];

/// Outcome of comparing a stored version against the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VersionCheck {
    Current,
    Outdated(i64),
}

/// Registry of entity versions for planning migrations.
#[derive(Clone, Debug)]
pub struct VersionRegistry {
    current: Versions,
}

impl VersionRegistry {
    /// Create a registry over the compiled-in current versions.
    pub fn new() -> Self {
        Self {
            current: current_data_db_versions(),
        }
    }

    pub fn current_versions(&self) -> &Versions {
        &self.current
    }

    pub fn current(&self, key: &str) -> Option<i64> {
        self.current.get(key)
    }

    pub fn entity(&self, tag: &str) -> Option<&'static EntityVersion> {
        ENTITIES.iter().find(|e| e.tag == tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> {
        ENTITIES.iter().map(|e| e.tag)
    }

    /// Classify the stored version of `key`.
    ///
    /// A store without a version map is `UndefinedVersion`. A missing key,
    /// a version newer than current or one without a decoder is
    /// `UnsupportedVersion`.
    pub fn check(
        &self,
        stored: Option<&Versions>,
        key: &str,
    ) -> Result<VersionCheck, MigratorError> {
        let stored = stored.ok_or(MigratorError::UndefinedVersion)?;
        let unsupported = |version| MigratorError::UnsupportedVersion {
            key: key.to_string(),
            version,
        };
        let version = stored.get(key).ok_or_else(|| unsupported(0))?;
        let current = self.current(key).ok_or_else(|| unsupported(version))?;
        if version == current {
            return Ok(VersionCheck::Current);
        }
        let known = ENTITIES
            .iter()
            .any(|e| e.key == key && e.legacy.contains(&version));
        if version > current || !known {
            return Err(unsupported(version));
        }
        Ok(VersionCheck::Outdated(version))
    }
}

impl Default for VersionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "versions_tests.rs"]
mod tests;
