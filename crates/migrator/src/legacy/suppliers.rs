// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Supplier profiles, the predecessor of route profiles.

use super::legacy_record;
use ocs_core::consts::prefix;
use ocs_core::{ActivationInterval, Route, RouteProfile};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1Supplier {
    pub id: String,
    pub filter_ids: Vec<String>,
    pub account_ids: Vec<String>,
    pub rating_plan_ids: Vec<String>,
    pub resource_ids: Vec<String>,
    pub stat_ids: Vec<String>,
    pub weight: f64,
    pub blocker: bool,
    pub supplier_parameters: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1SupplierProfile {
    pub tenant: String,
    pub id: String,
    pub filter_ids: Vec<String>,
    pub activation_interval: Option<ActivationInterval>,
    pub sorting: String,
    pub sorting_parameters: Vec<String>,
    pub suppliers: Vec<V1Supplier>,
    pub weight: f64,
}

legacy_record!(V1SupplierProfile, prefix::SUPPLIER_PROFILE);

impl V1SupplierProfile {
    pub fn as_route_profile(&self) -> RouteProfile {
        RouteProfile {
            tenant: self.tenant.clone(),
            id: self.id.clone(),
            filter_ids: self.filter_ids.clone(),
            activation_interval: self.activation_interval.clone(),
            sorting: self.sorting.clone(),
            sorting_parameters: self.sorting_parameters.clone(),
            routes: self
                .suppliers
                .iter()
                .map(|s| Route {
                    id: s.id.clone(),
                    filter_ids: s.filter_ids.clone(),
                    account_ids: s.account_ids.clone(),
                    rating_plan_ids: s.rating_plan_ids.clone(),
                    resource_ids: s.resource_ids.clone(),
                    stat_ids: s.stat_ids.clone(),
                    weight: s.weight,
                    blocker: s.blocker,
                    route_parameters: s.supplier_parameters.clone(),
                })
                .collect(),
            weight: self.weight,
        }
    }
}

#[cfg(test)]
#[path = "suppliers_tests.rs"]
mod tests;
