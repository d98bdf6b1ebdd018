// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schema version map.

use crate::consts::version_key as vk;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version marker per entity type, keyed by the names in [`crate::consts::version_key`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Versions(BTreeMap<String, i64>);

impl Versions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.0.get(key).copied()
    }

    pub fn set(&mut self, key: impl Into<String>, version: i64) {
        self.0.insert(key.into(), version);
    }

    /// Overlay `other` onto `self`, keeping keys only present here.
    pub fn merge(&mut self, other: &Versions) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), *v);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Keys whose stored version differs from `current`.
    pub fn outdated(&self, current: &Versions) -> Vec<String> {
        current
            .0
            .iter()
            .filter(|(k, v)| self.0.get(*k) != Some(*v))
            .map(|(k, _)| k.clone())
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for Versions {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Versions written by this build of the data model.
pub fn current_data_db_versions() -> Versions {
    [
        (vk::ACCOUNTS, 3),
        (vk::ACTIONS, 2),
        (vk::ACTION_TRIGGERS, 2),
        (vk::ACTION_PLANS, 3),
        (vk::ACTION_PROFILES, 1),
        (vk::ALIAS, 2),
        (vk::ATTRIBUTES, 5),
        (vk::CDR_STATS, 2),
        (vk::CHARGERS, 2),
        (vk::DESTINATIONS, 1),
        (vk::DISPATCHERS, 2),
        (vk::FILTERS, 5),
        (vk::LOAD_IDS, 1),
        (vk::RATE_PROFILES, 1),
        (vk::RATING_PLAN, 1),
        (vk::RATING_PROFILE, 1),
        (vk::RESOURCE, 1),
        (vk::REVERSE_DESTINATIONS, 1),
        (vk::ROUTES, 2),
        (vk::SHARED_GROUPS, 2),
        (vk::STATS, 4),
        (vk::THRESHOLDS, 4),
        (vk::TIMING, 1),
        (vk::USER, 2),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
#[path = "versions_tests.rs"]
mod tests;
