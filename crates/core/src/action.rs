// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actions, action plans, triggers, shared groups and action profiles.

use crate::balance::BalanceFilter;
use crate::consts::{meta, prefix};
use crate::entity::Entity;
use crate::string_map::StringMap;
use crate::timing::RateInterval;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    pub action_type: String,
    pub extra_parameters: String,
    pub filter: String,
    pub expiration_string: String,
    pub weight: f64,
    pub balance: BalanceFilter,
}

/// All actions sharing one ID, stored together.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Actions {
    pub id: String,
    pub actions: Vec<Action>,
}

impl Entity for Actions {
    const PREFIX: &'static str = prefix::ACTION;

    fn key_id(&self) -> String {
        self.id.clone()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionTiming {
    pub uuid: String,
    pub timing: RateInterval,
    pub actions_id: String,
    pub weight: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub id: String,
    pub account_ids: StringMap,
    pub action_timings: Vec<ActionTiming>,
}

impl Entity for ActionPlan {
    const PREFIX: &'static str = prefix::ACTION_PLAN;

    fn key_id(&self) -> String {
        self.id.clone()
    }
}

/// Reverse index: action plans an account belongs to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountActionPlans {
    pub account_id: String,
    pub plan_ids: Vec<String>,
}

impl Entity for AccountActionPlans {
    const PREFIX: &'static str = prefix::ACCOUNT_ACTION_PLANS;

    fn key_id(&self) -> String {
        self.account_id.clone()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionTrigger {
    pub id: String,
    pub unique_id: String,
    pub threshold_type: String,
    pub threshold_value: f64,
    pub recurrent: bool,
    pub min_sleep: Duration,
    pub expiration_date: Option<DateTime<Utc>>,
    pub activation_date: Option<DateTime<Utc>>,
    pub balance: BalanceFilter,
    pub weight: f64,
    pub actions_id: String,
    pub min_queued_items: i64,
    pub executed: bool,
    pub last_execution_time: Option<DateTime<Utc>>,
}

/// All triggers sharing one ID, stored together.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionTriggers {
    pub id: String,
    pub triggers: Vec<ActionTrigger>,
}

impl Entity for ActionTriggers {
    const PREFIX: &'static str = prefix::ACTION_TRIGGER;

    fn key_id(&self) -> String {
        self.id.clone()
    }
}

/// Rename counter-style threshold types to their event-counter names.
///
/// `*min_counter` becomes `*min_event_counter` and `*max_counter` becomes
/// `*max_event_counter`; every other type is returned unchanged.
pub fn event_counter_threshold_type(threshold_type: &str) -> String {
    match threshold_type {
        "*min_counter" | "*max_counter" => threshold_type.replacen('_', "_event_", 1),
        other => other.to_string(),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SharingParameters {
    pub strategy: String,
    pub rating_subject: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedGroup {
    pub id: String,
    pub account_parameters: BTreeMap<String, SharingParameters>,
    pub member_ids: StringMap,
}

impl Entity for SharedGroup {
    const PREFIX: &'static str = prefix::SHARED_GROUP;

    fn key_id(&self) -> String {
        self.id.clone()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApDiktat {
    pub path: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApAction {
    pub id: String,
    pub filter_ids: Vec<String>,
    pub ttl: Duration,
    pub action_type: String,
    pub diktats: Vec<ApDiktat>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionProfile {
    pub tenant: String,
    pub id: String,
    pub filter_ids: Vec<String>,
    pub weight: f64,
    pub schedule: String,
    pub targets: BTreeMap<String, StringMap>,
    pub actions: Vec<ApAction>,
}

crate::filtered_profile!(ActionProfile, prefix::ACTION_PROFILE, "*action_profiles");

impl ActionProfile {
    pub fn is_asap(&self) -> bool {
        self.schedule == meta::ASAP
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
