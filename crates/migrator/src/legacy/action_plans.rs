// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action plans v1 (one entry per timing) and v2 (directional account ids).

use super::{derived_uuid, legacy_record, normalize_account_id};
use crate::MigratorError;
use ocs_core::consts::prefix;
use ocs_core::{ActionPlan, ActionTiming, RateInterval, StringMap};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1ActionPlan {
    pub uuid: String,
    pub id: String,
    pub actions_id: String,
    pub account_ids: Vec<String>,
    pub timing: RateInterval,
    pub weight: f64,
}

impl V1ActionPlan {
    /// One-shot plans already fired and are not carried over.
    pub fn is_asap(&self) -> bool {
        self.timing.timing.is_asap()
    }

    fn as_action_timing(&self) -> ActionTiming {
        let uuid = if self.uuid.is_empty() {
            derived_uuid(&[&self.id, &self.actions_id, &self.timing.timing.id])
        } else {
            self.uuid.clone()
        };
        ActionTiming {
            uuid,
            timing: self.timing.clone(),
            actions_id: self.actions_id.clone(),
            weight: self.weight,
        }
    }
}

/// All v1 entries sharing one plan ID.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1ActionPlans {
    pub id: String,
    pub plans: Vec<V1ActionPlan>,
}

legacy_record!(V1ActionPlans, prefix::ACTION_PLAN, id);

impl V1ActionPlans {
    /// Merge the entries into one plan. `None` when every entry was ASAP.
    pub fn as_action_plan(&self) -> Result<Option<ActionPlan>, MigratorError> {
        let mut plan = ActionPlan {
            id: self.id.clone(),
            ..ActionPlan::default()
        };
        for entry in self.plans.iter().filter(|p| !p.is_asap()) {
            for account in &entry.account_ids {
                plan.account_ids.insert(normalize_account_id(account)?, true);
            }
            plan.action_timings.push(entry.as_action_timing());
        }
        Ok((!plan.action_timings.is_empty()).then_some(plan))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V2ActionPlan {
    pub id: String,
    pub account_ids: StringMap,
    pub action_timings: Vec<ActionTiming>,
}

legacy_record!(V2ActionPlan, prefix::ACTION_PLAN, id);

impl V2ActionPlan {
    pub fn as_action_plan(&self) -> Result<ActionPlan, MigratorError> {
        let mut account_ids = StringMap::new();
        for account in self.account_ids.keys() {
            account_ids.insert(normalize_account_id(account)?, true);
        }
        Ok(ActionPlan {
            id: self.id.clone(),
            account_ids,
            action_timings: self.action_timings.clone(),
        })
    }
}

#[cfg(test)]
#[path = "action_plans_tests.rs"]
mod tests;
