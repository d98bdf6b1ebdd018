// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource profiles and allocations.

use crate::consts::prefix;
use crate::timing::ActivationInterval;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceProfile {
    pub tenant: String,
    pub id: String,
    pub filter_ids: Vec<String>,
    pub activation_interval: Option<ActivationInterval>,
    pub usage_ttl: Option<Duration>,
    pub limit: f64,
    pub allocation_message: String,
    pub blocker: bool,
    pub stored: bool,
    pub weight: f64,
    pub threshold_ids: Vec<String>,
}

crate::filtered_profile!(ResourceProfile, prefix::RESOURCE_PROFILE, "*resources");

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub tenant: String,
    pub id: String,
    pub expiry_time: Option<DateTime<Utc>>,
    pub units: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub tenant: String,
    pub id: String,
    pub usages: BTreeMap<String, ResourceUsage>,
    pub ttl_idx: Vec<String>,
}

crate::tenant_entity!(Resource, prefix::RESOURCE);
