// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatcher profiles v1: connections instead of hosts.

use super::{legacy_record, migrate_inline_filter_v2};
use ocs_core::consts::prefix;
use ocs_core::{ActivationInterval, DispatcherHostProfile, DispatcherProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1DispatcherConn {
    pub id: String,
    pub filter_ids: Vec<String>,
    pub weight: f64,
    pub params: BTreeMap<String, String>,
    pub blocker: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1DispatcherProfile {
    pub tenant: String,
    pub id: String,
    pub subsystems: Vec<String>,
    pub filter_ids: Vec<String>,
    pub activation_interval: Option<ActivationInterval>,
    pub strategy: String,
    pub strategy_params: BTreeMap<String, String>,
    pub weight: f64,
    pub conns: Vec<V1DispatcherConn>,
}

legacy_record!(V1DispatcherProfile, prefix::DISPATCHER_PROFILE);

fn rewrite(filter_ids: &[String]) -> Vec<String> {
    filter_ids.iter().map(|f| migrate_inline_filter_v2(f)).collect()
}

impl V1DispatcherProfile {
    pub fn as_dispatcher_profile(&self) -> DispatcherProfile {
        DispatcherProfile {
            tenant: self.tenant.clone(),
            id: self.id.clone(),
            subsystems: self.subsystems.clone(),
            filter_ids: rewrite(&self.filter_ids),
            activation_interval: self.activation_interval.clone(),
            strategy: self.strategy.clone(),
            strategy_params: self.strategy_params.clone(),
            weight: self.weight,
            hosts: self
                .conns
                .iter()
                .map(|c| DispatcherHostProfile {
                    id: c.id.clone(),
                    filter_ids: rewrite(&c.filter_ids),
                    weight: c.weight,
                    params: c.params.clone(),
                    blocker: c.blocker,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "dispatchers_tests.rs"]
mod tests;
