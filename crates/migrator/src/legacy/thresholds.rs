// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thresholds v1 (action triggers stored as thresholds), v2 (`recurrent`)
//! and v3 (old inline filter IDs).

use super::{legacy_record, migrate_inline_filter_v2};
use crate::sparse::non_zero_time;
use chrono::{DateTime, Utc};
use ocs_core::consts::{meta, prefix};
use ocs_core::{
    ActivationInterval, Filter, FilterRule, StringMap, Threshold, ThresholdProfile,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V2BalanceFilter {
    pub id: Option<String>,
    pub balance_type: Option<String>,
    pub directions: Option<StringMap>,
    pub destination_ids: Option<StringMap>,
    pub rating_subject: Option<String>,
    pub categories: Option<StringMap>,
    pub shared_groups: Option<StringMap>,
    pub timing_ids: Option<StringMap>,
    pub weight: Option<f64>,
}

/// Action trigger shape used as a threshold by version 1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V2ActionTrigger {
    pub id: String,
    pub threshold_type: String,
    pub threshold_value: f64,
    pub recurrent: bool,
    pub min_sleep: Duration,
    pub expiration_date: Option<DateTime<Utc>>,
    pub activation_date: Option<DateTime<Utc>>,
    pub balance: V2BalanceFilter,
    pub weight: f64,
    pub actions_id: String,
    pub min_queued_items: i64,
    pub executed: bool,
    pub last_execution_time: Option<DateTime<Utc>>,
}

legacy_record!(V2ActionTrigger, prefix::THRESHOLD, id);

/// Records produced from one legacy trigger.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdDecomposition {
    /// Present when the trigger selected a balance by ID.
    pub filter: Option<Filter>,
    pub profile: ThresholdProfile,
    pub threshold: Threshold,
}

fn string_rule(element: &str, values: &StringMap) -> FilterRule {
    FilterRule {
        rule_type: meta::STRING.to_string(),
        element: format!("~{}.{element}", meta::REQ),
        values: values.to_values(),
    }
}

fn max_hits(recurrent: bool) -> i64 {
    if recurrent {
        -1
    } else {
        1
    }
}

impl V2ActionTrigger {
    pub fn as_threshold(&self, default_tenant: &str) -> ThresholdDecomposition {
        let filter = self
            .balance
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| Filter {
                tenant: default_tenant.to_string(),
                id: id.to_string(),
                rules: self.balance_rules(),
                activation_interval: None,
            });
        let profile = ThresholdProfile {
            tenant: default_tenant.to_string(),
            id: self.id.clone(),
            filter_ids: filter.iter().map(|f| f.id.clone()).collect(),
            activation_interval: ActivationInterval::from_bounds(
                non_zero_time(self.activation_date),
                non_zero_time(self.expiration_date),
            ),
            max_hits: max_hits(self.recurrent),
            min_hits: 0,
            min_sleep: self.min_sleep,
            blocker: false,
            weight: self.weight,
            action_ids: vec![self.actions_id.clone()],
            async_exec: false,
        };
        let threshold = Threshold {
            tenant: default_tenant.to_string(),
            id: self.id.clone(),
            hits: 0,
            snooze: None,
        };
        ThresholdDecomposition {
            filter,
            profile,
            threshold,
        }
    }

    fn balance_rules(&self) -> Vec<FilterRule> {
        let b = &self.balance;
        let mut rules = Vec::new();
        if let Some(directions) = b.directions.as_ref().filter(|m| !m.is_empty()) {
            rules.push(string_rule("Direction", directions));
        }
        if let Some(destinations) = b.destination_ids.as_ref().filter(|m| !m.is_empty()) {
            rules.push(FilterRule {
                rule_type: meta::DESTINATIONS.to_string(),
                element: format!("~{}.Destination", meta::REQ),
                values: destinations.to_values(),
            });
        }
        if let Some(subject) = b.rating_subject.as_ref().filter(|s| !s.is_empty()) {
            rules.push(string_rule(
                "RatingSubject",
                &StringMap::from_iter([subject.as_str()]),
            ));
        }
        if let Some(categories) = b.categories.as_ref().filter(|m| !m.is_empty()) {
            rules.push(string_rule("Category", categories));
        }
        if let Some(groups) = b.shared_groups.as_ref().filter(|m| !m.is_empty()) {
            rules.push(string_rule("SharedGroup", groups));
        }
        if let Some(timings) = b.timing_ids.as_ref().filter(|m| !m.is_empty()) {
            rules.push(string_rule("TimingIDs", timings));
        }
        rules
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V2ThresholdProfile {
    pub tenant: String,
    pub id: String,
    pub filter_ids: Vec<String>,
    pub activation_interval: Option<ActivationInterval>,
    pub recurrent: bool,
    pub min_hits: i64,
    pub min_sleep: Duration,
    pub blocker: bool,
    pub weight: f64,
    pub action_ids: Vec<String>,
    pub async_exec: bool,
}

legacy_record!(V2ThresholdProfile, prefix::THRESHOLD_PROFILE);

impl V2ThresholdProfile {
    pub fn as_v3(&self) -> V3ThresholdProfile {
        V3ThresholdProfile {
            tenant: self.tenant.clone(),
            id: self.id.clone(),
            filter_ids: self.filter_ids.clone(),
            activation_interval: self.activation_interval.clone(),
            max_hits: max_hits(self.recurrent),
            min_hits: self.min_hits,
            min_sleep: self.min_sleep,
            blocker: self.blocker,
            weight: self.weight,
            action_ids: self.action_ids.clone(),
            async_exec: self.async_exec,
        }
    }
}

/// Current shape with inline filters not yet rooted under `~*req`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V3ThresholdProfile {
    pub tenant: String,
    pub id: String,
    pub filter_ids: Vec<String>,
    pub activation_interval: Option<ActivationInterval>,
    pub max_hits: i64,
    pub min_hits: i64,
    pub min_sleep: Duration,
    pub blocker: bool,
    pub weight: f64,
    pub action_ids: Vec<String>,
    pub async_exec: bool,
}

legacy_record!(V3ThresholdProfile, prefix::THRESHOLD_PROFILE);

impl V3ThresholdProfile {
    pub fn as_threshold_profile(&self) -> ThresholdProfile {
        ThresholdProfile {
            tenant: self.tenant.clone(),
            id: self.id.clone(),
            filter_ids: self
                .filter_ids
                .iter()
                .map(|f| migrate_inline_filter_v2(f))
                .collect(),
            activation_interval: self.activation_interval.clone(),
            max_hits: self.max_hits,
            min_hits: self.min_hits,
            min_sleep: self.min_sleep,
            blocker: self.blocker,
            weight: self.weight,
            action_ids: self.action_ids.clone(),
            async_exec: self.async_exec,
        }
    }
}

#[cfg(test)]
#[path = "thresholds_tests.rs"]
mod tests;
