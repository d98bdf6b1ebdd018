// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Charger profiles v1: current shape with old inline filter IDs.

use super::{legacy_record, migrate_inline_filter_v2};
use ocs_core::consts::prefix;
use ocs_core::{ActivationInterval, ChargerProfile};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1ChargerProfile {
    pub tenant: String,
    pub id: String,
    pub filter_ids: Vec<String>,
    pub activation_interval: Option<ActivationInterval>,
    pub run_id: String,
    pub attribute_ids: Vec<String>,
    pub weight: f64,
}

legacy_record!(V1ChargerProfile, prefix::CHARGER_PROFILE);

impl V1ChargerProfile {
    pub fn as_charger_profile(&self) -> ChargerProfile {
        ChargerProfile {
            tenant: self.tenant.clone(),
            id: self.id.clone(),
            filter_ids: self
                .filter_ids
                .iter()
                .map(|f| migrate_inline_filter_v2(f))
                .collect(),
            activation_interval: self.activation_interval.clone(),
            run_id: self.run_id.clone(),
            attribute_ids: self.attribute_ids.clone(),
            weight: self.weight,
        }
    }
}

#[cfg(test)]
#[path = "chargers_tests.rs"]
mod tests;
