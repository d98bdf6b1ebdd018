// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::consts::prefix;
use crate::timing::ActivationInterval;
use serde::{Deserialize, Serialize};

/// Forks an event into an extra charging run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargerProfile {
    pub tenant: String,
    pub id: String,
    pub filter_ids: Vec<String>,
    pub activation_interval: Option<ActivationInterval>,
    pub run_id: String,
    pub attribute_ids: Vec<String>,
    pub weight: f64,
}

crate::filtered_profile!(ChargerProfile, prefix::CHARGER_PROFILE, "*chargers");
