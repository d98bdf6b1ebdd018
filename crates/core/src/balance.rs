// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Account balances and the selectors that match them.

use crate::string_map::StringMap;
use crate::timing::Timing;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A balance inside an account's balance chain.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub uuid: String,
    pub id: String,
    pub value: f64,
    pub expiration_date: Option<DateTime<Utc>>,
    pub weight: f64,
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

/// Amount applied by an action: a static value or a named formula.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueFormula {
    pub method: String,
    pub params: BTreeMap<String, String>,
    pub static_value: f64,
}

impl ValueFormula {
    pub fn fixed(value: f64) -> Self {
        Self {
            static_value: value,
            ..Self::default()
        }
    }
}

/// Partial balance description. Only `Some` fields take part in matching
/// or get applied when the filter drives a balance update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceFilter {
    pub uuid: Option<String>,
    pub id: Option<String>,
    pub balance_type: Option<String>,
    pub directions: Option<StringMap>,
    pub value: Option<ValueFormula>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub weight: Option<f64>,
    pub destination_ids: Option<StringMap>,
    pub rating_subject: Option<String>,
    pub categories: Option<StringMap>,
    pub shared_groups: Option<StringMap>,
    pub timing_ids: Option<StringMap>,
    pub timings: Vec<Timing>,
    pub disabled: Option<bool>,
    pub factor: Option<BTreeMap<String, f64>>,
    pub blocker: Option<bool>,
}

impl BalanceFilter {
    /// True when no selector is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
