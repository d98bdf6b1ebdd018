// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action triggers v1: balance selectors stored as flat fields.

use super::{derived_uuid, legacy_record};
use crate::sparse::{non_zero_time, string_map, Sparse};
use chrono::{DateTime, Utc};
use ocs_core::consts::prefix;
use ocs_core::{event_counter_threshold_type, ActionTrigger, ActionTriggers, BalanceFilter};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1ActionTrigger {
    pub id: String,
    pub threshold_type: String,
    pub threshold_value: f64,
    pub recurrent: bool,
    pub min_sleep: Duration,
    pub balance_id: String,
    pub balance_type: String,
    pub balance_direction: String,
    pub balance_destination_ids: String,
    pub balance_weight: f64,
    pub balance_expiration_date: Option<DateTime<Utc>>,
    pub balance_timing_tags: String,
    pub balance_rating_subject: String,
    pub balance_category: String,
    pub balance_shared_group: String,
    pub balance_disabled: bool,
    pub weight: f64,
    pub actions_id: String,
    pub min_queued_items: i64,
    pub executed: bool,
}

impl V1ActionTrigger {
    pub fn as_trigger(&self) -> ActionTrigger {
        let threshold_value = self.threshold_value.to_string();
        let mut trigger = ActionTrigger {
            id: self.id.clone(),
            unique_id: derived_uuid(&[
                &self.id,
                &self.threshold_type,
                &threshold_value,
                &self.balance_id,
                &self.actions_id,
            ]),
            threshold_type: event_counter_threshold_type(&self.threshold_type),
            threshold_value: self.threshold_value,
            recurrent: self.recurrent,
            min_sleep: self.min_sleep,
            expiration_date: None,
            activation_date: None,
            balance: BalanceFilter {
                id: self.balance_id.clone().non_empty(),
                balance_type: self.balance_type.clone().non_empty(),
                directions: string_map(&self.balance_direction),
                destination_ids: string_map(&self.balance_destination_ids),
                weight: self.balance_weight.non_empty(),
                timing_ids: string_map(&self.balance_timing_tags),
                rating_subject: self.balance_rating_subject.clone().non_empty(),
                categories: string_map(&self.balance_category),
                shared_groups: string_map(&self.balance_shared_group),
                disabled: self.balance_disabled.non_empty(),
                ..BalanceFilter::default()
            },
            weight: self.weight,
            actions_id: self.actions_id.clone(),
            min_queued_items: self.min_queued_items,
            executed: self.executed,
            last_execution_time: None,
        };
        // the legacy expiration doubled as the trigger's own time window
        if let Some(expires) = non_zero_time(self.balance_expiration_date) {
            trigger.balance.expiration_date = Some(expires);
            trigger.expiration_date = Some(expires);
            trigger.activation_date = Some(expires);
            trigger.last_execution_time = Some(expires);
        }
        trigger
    }
}

/// Trigger list stored under its group ID.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1ActionTriggers {
    pub id: String,
    pub triggers: Vec<V1ActionTrigger>,
}

legacy_record!(V1ActionTriggers, prefix::ACTION_TRIGGER, id);

impl V1ActionTriggers {
    pub fn as_action_triggers(&self) -> ActionTriggers {
        ActionTriggers {
            id: self.id.clone(),
            triggers: self.triggers.iter().map(V1ActionTrigger::as_trigger).collect(),
        }
    }
}

#[cfg(test)]
#[path = "triggers_tests.rs"]
mod tests;
