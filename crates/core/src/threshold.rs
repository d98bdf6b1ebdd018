// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Threshold profiles and their runtime counters.

use crate::consts::prefix;
use crate::timing::ActivationInterval;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// `max_hits == -1` means unlimited.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdProfile {
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

crate::filtered_profile!(ThresholdProfile, prefix::THRESHOLD_PROFILE, "*thresholds");

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub tenant: String,
    pub id: String,
    pub hits: i64,
    pub snooze: Option<DateTime<Utc>>,
}

crate::tenant_entity!(Threshold, prefix::THRESHOLD);
