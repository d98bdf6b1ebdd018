// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Accounts v1 (directional ids and balance keys) and v2 (balance directions).

use super::{legacy_record, strip_direction, V1ActionTrigger};
use crate::sparse::{non_zero_time, string_map, Sparse};
use crate::MigratorError;
use chrono::{DateTime, Utc};
use ocs_core::consts::{meta, prefix, META_PREFIX};
use ocs_core::{
    Account, ActionTrigger, Balance, BalanceFilter, CounterFilter, StringMap, Timing,
    UnitCounter, ValueFormula,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const EVENT_COUNTER: &str = "*event";

/// Balance with flat `;`-list selectors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1Balance {
    pub uuid: String,
    pub id: String,
    pub value: f64,
    pub expiration_date: Option<DateTime<Utc>>,
    pub weight: f64,
    pub destination_ids: String,
    pub rating_subject: String,
    pub category: String,
    pub shared_group: String,
    pub timings: Vec<Timing>,
    pub timing_ids: String,
    pub disabled: bool,
}

impl V1Balance {
    /// Selector with only the fields the legacy balance actually set.
    pub fn as_balance_filter(&self, balance_type: &str) -> BalanceFilter {
        BalanceFilter {
            uuid: self.uuid.clone().non_empty(),
            id: self.id.clone().non_empty(),
            balance_type: balance_type.to_string().non_empty(),
            directions: None,
            value: self.value.non_empty().map(ValueFormula::fixed),
            expiration_date: non_zero_time(self.expiration_date),
            weight: self.weight.non_empty(),
            destination_ids: string_map(&self.destination_ids),
            rating_subject: self.rating_subject.clone().non_empty(),
            categories: string_map(&self.category),
            shared_groups: string_map(&self.shared_group),
            timing_ids: string_map(&self.timing_ids),
            timings: self.timings.clone(),
            disabled: self.disabled.non_empty(),
            factor: None,
            blocker: None,
        }
    }

    fn as_v2(&self, direction: &str) -> V2Balance {
        V2Balance {
            uuid: self.uuid.clone(),
            id: self.id.clone(),
            value: self.value,
            expiration_date: non_zero_time(self.expiration_date),
            weight: self.weight,
            directions: StringMap::from_iter([direction]),
            destination_ids: StringMap::parse(&self.destination_ids),
            rating_subject: self.rating_subject.clone(),
            categories: StringMap::parse(&self.category),
            shared_groups: StringMap::parse(&self.shared_group),
            timings: self.timings.clone(),
            timing_ids: StringMap::parse(&self.timing_ids),
            disabled: self.disabled,
            factor: BTreeMap::new(),
            blocker: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1UnitsCounter {
    pub direction: String,
    pub balance_type: String,
    pub balances: Vec<V1Balance>,
}

/// Account keyed `*out:tenant:account`, balances keyed `*type*direction`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1Account {
    pub id: String,
    pub balance_map: BTreeMap<String, Vec<V1Balance>>,
    pub unit_counters: Vec<V1UnitsCounter>,
    pub action_triggers: Vec<V1ActionTrigger>,
    pub allow_negative: bool,
    pub disabled: bool,
}

legacy_record!(V1Account, prefix::ACCOUNT, id);

/// `*monetary*out` → (`*monetary`, `*out`).
fn split_balance_key(key: &str) -> (&str, &str) {
    match key.rfind(META_PREFIX) {
        Some(i) if i > 0 => (&key[..i], &key[i..]),
        _ => (key, meta::OUT),
    }
}

impl V1Account {
    pub fn as_v2(&self) -> Result<V2Account, MigratorError> {
        let id = strip_direction(&self.id)?;

        let mut balance_map: BTreeMap<String, Vec<V2Balance>> = BTreeMap::new();
        for (key, balances) in &self.balance_map {
            let (balance_type, direction) = split_balance_key(key);
            balance_map
                .entry(balance_type.to_string())
                .or_default()
                .extend(balances.iter().map(|b| b.as_v2(direction)));
        }

        let mut unit_counters: BTreeMap<String, Vec<UnitCounter>> = BTreeMap::new();
        for uc in &self.unit_counters {
            let counters = uc
                .balances
                .iter()
                .map(|b| CounterFilter {
                    value: b.value,
                    filter: b.as_balance_filter(&uc.balance_type),
                })
                .collect();
            unit_counters
                .entry(uc.balance_type.clone())
                .or_default()
                .push(UnitCounter {
                    counter_type: EVENT_COUNTER.to_string(),
                    counters,
                });
        }

        Ok(V2Account {
            id,
            balance_map,
            unit_counters,
            action_triggers: self
                .action_triggers
                .iter()
                .map(V1ActionTrigger::as_trigger)
                .collect(),
            allow_negative: self.allow_negative,
            disabled: self.disabled,
        })
    }
}

/// Balance carrying the direction set dropped in version 3.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V2Balance {
    pub uuid: String,
    pub id: String,
    pub value: f64,
    pub expiration_date: Option<DateTime<Utc>>,
    pub weight: f64,
    pub directions: StringMap,
    pub destination_ids: StringMap,
    pub rating_subject: String,
    pub categories: StringMap,
    pub shared_groups: StringMap,
    pub timings: Vec<Timing>,
    pub timing_ids: StringMap,
    pub disabled: bool,
    pub factor: BTreeMap<String, f64>,
    pub blocker: bool,
}

impl V2Balance {
    fn as_balance(&self) -> Balance {
        Balance {
            uuid: self.uuid.clone(),
            id: self.id.clone(),
            value: self.value,
            expiration_date: self.expiration_date,
            weight: self.weight,
            destination_ids: self.destination_ids.clone(),
            rating_subject: self.rating_subject.clone(),
            categories: self.categories.clone(),
            shared_groups: self.shared_groups.clone(),
            timings: self.timings.clone(),
            timing_ids: self.timing_ids.clone(),
            disabled: self.disabled,
            factor: self.factor.clone(),
            blocker: self.blocker,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V2Account {
    pub id: String,
    pub balance_map: BTreeMap<String, Vec<V2Balance>>,
    pub unit_counters: BTreeMap<String, Vec<UnitCounter>>,
    pub action_triggers: Vec<ActionTrigger>,
    pub allow_negative: bool,
    pub disabled: bool,
}

legacy_record!(V2Account, prefix::ACCOUNT, id);

impl V2Account {
    pub fn as_account(&self) -> Account {
        Account {
            id: self.id.clone(),
            balance_map: self
                .balance_map
                .iter()
                .map(|(k, bs)| (k.clone(), bs.iter().map(V2Balance::as_balance).collect()))
                .collect(),
            unit_counters: self.unit_counters.clone(),
            action_triggers: self.action_triggers.clone(),
            allow_negative: self.allow_negative,
            disabled: self.disabled,
        }
    }
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
