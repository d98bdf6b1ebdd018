// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rating data: destinations, rating plans and profiles, rate profiles, load IDs.

use crate::consts::prefix;
use crate::entity::Entity;
use crate::timing::Timing;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub prefixes: Vec<String>,
}

impl Entity for Destination {
    const PREFIX: &'static str = prefix::DESTINATION;

    fn key_id(&self) -> String {
        self.id.clone()
    }
}

/// Destinations containing a dialing prefix.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReverseDestination {
    pub prefix: String,
    pub destination_ids: Vec<String>,
}

impl Entity for ReverseDestination {
    const PREFIX: &'static str = prefix::REVERSE_DESTINATION;

    fn key_id(&self) -> String {
        self.prefix.clone()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub group_interval_start: Duration,
    pub value: f64,
    pub rate_increment: Duration,
    pub rate_unit: Duration,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingInfo {
    pub connect_fee: f64,
    pub rates: Vec<Rate>,
    pub rounding_method: String,
    pub rounding_decimals: i32,
    pub max_cost: f64,
    pub max_cost_strategy: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationRate {
    pub timing: String,
    pub rating: String,
    pub weight: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingPlan {
    pub id: String,
    pub timings: BTreeMap<String, Timing>,
    pub ratings: BTreeMap<String, RatingInfo>,
    pub destination_rates: BTreeMap<String, Vec<DestinationRate>>,
}

impl Entity for RatingPlan {
    const PREFIX: &'static str = prefix::RATING_PLAN;

    fn key_id(&self) -> String {
        self.id.clone()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingPlanActivation {
    pub activation_time: Option<DateTime<Utc>>,
    pub rating_plan_id: String,
    pub fallback_keys: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingProfile {
    pub id: String,
    pub rating_plan_activations: Vec<RatingPlanActivation>,
}

impl Entity for RatingProfile {
    const PREFIX: &'static str = prefix::RATING_PROFILE;

    fn key_id(&self) -> String {
        self.id.clone()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IntervalRate {
    pub interval_start: Duration,
    pub fixed_fee: f64,
    pub recurrent_fee: f64,
    pub unit: Duration,
    pub increment: Duration,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRate {
    pub id: String,
    pub filter_ids: Vec<String>,
    pub activation_times: String,
    pub weight: f64,
    pub blocker: bool,
    pub interval_rates: Vec<IntervalRate>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RateProfile {
    pub tenant: String,
    pub id: String,
    pub filter_ids: Vec<String>,
    pub weight: f64,
    pub min_cost: f64,
    pub max_cost: f64,
    pub max_cost_strategy: String,
    pub rates: BTreeMap<String, ProfileRate>,
}

crate::filtered_profile!(RateProfile, prefix::RATE_PROFILE, "*rate_profiles");

/// Last load time per cache partition. A single record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadIds {
    pub ids: BTreeMap<String, i64>,
}

impl LoadIds {
    pub const KEY_ID: &'static str = "load_ids";
}

impl Entity for LoadIds {
    const PREFIX: &'static str = prefix::LOAD_IDS;

    fn key_id(&self) -> String {
        Self::KEY_ID.to_string()
    }
}
