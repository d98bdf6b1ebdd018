// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatcher profiles and the hosts they balance across.

use crate::consts::prefix;
use crate::timing::ActivationInterval;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A host reference inside a dispatcher profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatcherHostProfile {
    pub id: String,
    pub filter_ids: Vec<String>,
    pub weight: f64,
    pub params: BTreeMap<String, String>,
    pub blocker: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatcherProfile {
    pub tenant: String,
    pub id: String,
    pub subsystems: Vec<String>,
    pub filter_ids: Vec<String>,
    pub activation_interval: Option<ActivationInterval>,
    pub strategy: String,
    pub strategy_params: BTreeMap<String, String>,
    pub weight: f64,
    pub hosts: Vec<DispatcherHostProfile>,
}

crate::filtered_profile!(DispatcherProfile, prefix::DISPATCHER_PROFILE, "*dispatchers");

/// Connection details of a dispatchable host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatcherHost {
    pub tenant: String,
    pub id: String,
    pub address: String,
    pub transport: String,
    pub tls: bool,
}

crate::tenant_entity!(DispatcherHost, prefix::DISPATCHER_HOST);
