// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filter indexes: `type:field:value` → profile IDs, per index kind and tenant.
//!
//! Indexes are derived data. After profiles or filters change shape they are
//! dropped and rebuilt from scratch.

use crate::{DataManager, StoreError};
use ocs_core::consts::{prefix, DYNAMIC_DATA_PREFIX};
use ocs_core::{
    is_indexable, AttributeProfile, ChargerProfile, DispatcherProfile, Entity, Filter,
    FilterRule, FilteredProfile, InlineFilter, ResourceProfile, RouteProfile, StatQueueProfile,
    ThresholdProfile,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Index key used for profiles without any indexable rule.
pub const UNINDEXED_KEY: &str = "*none:*any:*any";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterIndex {
    pub kind: String,
    pub tenant: String,
    pub entries: BTreeMap<String, BTreeSet<String>>,
}

impl Entity for FilterIndex {
    const PREFIX: &'static str = prefix::FILTER_INDEX;

    fn key_id(&self) -> String {
        format!("{}:{}", self.kind, self.tenant)
    }
}

fn rule_keys(rule: &FilterRule) -> Vec<String> {
    if !is_indexable(&rule.rule_type) {
        return Vec::new();
    }
    let Some(field) = rule.element.strip_prefix(DYNAMIC_DATA_PREFIX) else {
        return Vec::new();
    };
    rule.values
        .iter()
        .map(|v| format!("{}:{field}:{v}", rule.rule_type))
        .collect()
}

impl DataManager {
    /// Rules behind one filter ID: parsed inline, or loaded by reference.
    fn resolve_filter_rules(
        &self,
        tenant: &str,
        filter_id: &str,
        item: &str,
    ) -> Result<Vec<FilterRule>, StoreError> {
        if let Some(inline) = InlineFilter::parse(filter_id) {
            return Ok(vec![inline.into_rule()]);
        }
        let filter: Filter = self
            .get(&format!("{tenant}:{filter_id}"))?
            .ok_or_else(|| StoreError::BrokenReference {
                filter: format!("{tenant}:{filter_id}"),
                item: item.to_string(),
            })?;
        Ok(filter.rules)
    }

    /// Drop and rebuild the index of one profile kind. Returns the number of
    /// profiles indexed.
    pub fn rebuild_filter_indexes<T: FilteredProfile>(&self) -> Result<usize, StoreError> {
        let kind_prefix = format!("{}{}:", prefix::FILTER_INDEX, T::INDEX_KIND);
        for key in self.db().keys_for_prefix(&kind_prefix)? {
            self.remove_raw(&key)?;
        }

        let mut per_tenant: BTreeMap<String, FilterIndex> = BTreeMap::new();
        let profiles: Vec<T> = self.get_all()?;
        for profile in &profiles {
            let item = format!("{}:{}", profile.tenant(), profile.id());
            let mut keys = Vec::new();
            for filter_id in profile.filter_ids() {
                for rule in self.resolve_filter_rules(profile.tenant(), filter_id, &item)? {
                    keys.extend(rule_keys(&rule));
                }
            }
            if keys.is_empty() {
                keys.push(UNINDEXED_KEY.to_string());
            }
            let index = per_tenant
                .entry(profile.tenant().to_string())
                .or_insert_with(|| FilterIndex {
                    kind: T::INDEX_KIND.to_string(),
                    tenant: profile.tenant().to_string(),
                    entries: BTreeMap::new(),
                });
            for key in keys {
                index
                    .entries
                    .entry(key)
                    .or_default()
                    .insert(profile.id().to_string());
            }
        }

        for index in per_tenant.values() {
            self.set(index)?;
        }
        debug!(kind = T::INDEX_KIND, profiles = profiles.len(), "rebuilt filter indexes");
        Ok(profiles.len())
    }

    /// Rebuild every profile kind, used after filters themselves change.
    pub fn rebuild_all_filter_indexes(&self) -> Result<(), StoreError> {
        self.rebuild_filter_indexes::<AttributeProfile>()?;
        self.rebuild_filter_indexes::<ChargerProfile>()?;
        self.rebuild_filter_indexes::<DispatcherProfile>()?;
        self.rebuild_filter_indexes::<ResourceProfile>()?;
        self.rebuild_filter_indexes::<RouteProfile>()?;
        self.rebuild_filter_indexes::<StatQueueProfile>()?;
        self.rebuild_filter_indexes::<ThresholdProfile>()?;
        Ok(())
    }

    pub fn get_filter_index(
        &self,
        kind: &str,
        tenant: &str,
    ) -> Result<Option<FilterIndex>, StoreError> {
        self.get(&format!("{kind}:{tenant}"))
    }
}

#[cfg(test)]
#[path = "filter_index_tests.rs"]
mod tests;
