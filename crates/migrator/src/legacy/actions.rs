// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actions v1: a flat balance per action instead of a selector.

use super::{legacy_record, V1Balance};
use ocs_core::consts::prefix;
use ocs_core::{Action, Actions};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1Action {
    pub id: String,
    pub action_type: String,
    pub balance_type: String,
    pub direction: String,
    pub extra_parameters: String,
    pub expiration_string: String,
    pub weight: f64,
    pub balance: V1Balance,
}

impl V1Action {
    pub fn as_action(&self) -> Action {
        Action {
            id: self.id.clone(),
            action_type: self.action_type.clone(),
            extra_parameters: self.extra_parameters.clone(),
            filter: String::new(),
            expiration_string: self.expiration_string.clone(),
            weight: self.weight,
            balance: self.balance.as_balance_filter(&self.balance_type),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1Actions {
    pub id: String,
    pub actions: Vec<V1Action>,
}

legacy_record!(V1Actions, prefix::ACTION, id);

impl V1Actions {
    pub fn as_actions(&self) -> Actions {
        Actions {
            id: self.id.clone(),
            actions: self.actions.iter().map(V1Action::as_action).collect(),
        }
    }
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod tests;
