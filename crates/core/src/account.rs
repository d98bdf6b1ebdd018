// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Prepaid/postpaid accounts.

use crate::action::ActionTrigger;
use crate::balance::{Balance, BalanceFilter};
use crate::consts::prefix;
use crate::entity::Entity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts usage matching `filter`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CounterFilter {
    pub value: f64,
    pub filter: BalanceFilter,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitCounter {
    /// `*event` or `*balance`.
    pub counter_type: String,
    pub counters: Vec<CounterFilter>,
}

/// Account keyed by `tenant:account`. Balances are grouped by balance type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub balance_map: BTreeMap<String, Vec<Balance>>,
    pub unit_counters: BTreeMap<String, Vec<UnitCounter>>,
    pub action_triggers: Vec<ActionTrigger>,
    pub allow_negative: bool,
    pub disabled: bool,
}

impl Entity for Account {
    const PREFIX: &'static str = prefix::ACCOUNT;

    fn key_id(&self) -> String {
        self.id.clone()
    }
}
