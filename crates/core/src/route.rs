// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Route profiles (least-cost and quality based routing).

use crate::consts::prefix;
use crate::timing::ActivationInterval;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub filter_ids: Vec<String>,
    pub account_ids: Vec<String>,
    pub rating_plan_ids: Vec<String>,
    pub resource_ids: Vec<String>,
    pub stat_ids: Vec<String>,
    pub weight: f64,
    pub blocker: bool,
    pub route_parameters: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteProfile {
    pub tenant: String,
    pub id: String,
    pub filter_ids: Vec<String>,
    pub activation_interval: Option<ActivationInterval>,
    pub sorting: String,
    pub sorting_parameters: Vec<String>,
    pub routes: Vec<Route>,
    pub weight: f64,
}

crate::filtered_profile!(RouteProfile, prefix::ROUTE_PROFILE, "*routes");
