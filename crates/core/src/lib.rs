// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ocs-core: current-shape data model of the charging data store

pub mod account;
pub mod action;
pub mod attribute;
pub mod balance;
pub mod charger;
pub mod consts;
pub mod dispatcher;
pub mod entity;
pub mod filter;
pub mod rating;
pub mod resource;
pub mod route;
pub mod rsr;
pub mod stats;
pub mod string_map;
pub mod tenant;
pub mod threshold;
pub mod timing;
pub mod versions;

pub use account::{Account, CounterFilter, UnitCounter};
pub use action::{
    event_counter_threshold_type, AccountActionPlans, Action, ActionPlan, ActionProfile,
    ActionTiming, ActionTrigger, ActionTriggers, Actions, ApAction, ApDiktat, SharedGroup,
    SharingParameters,
};
pub use attribute::{Attribute, AttributeProfile};
pub use balance::{Balance, BalanceFilter, ValueFormula};
pub use charger::ChargerProfile;
pub use dispatcher::{DispatcherHost, DispatcherHostProfile, DispatcherProfile};
pub use entity::{Entity, FilteredProfile};
pub use filter::{is_indexable, Filter, FilterError, FilterRule, InlineFilter};
pub use rating::{
    Destination, DestinationRate, IntervalRate, LoadIds, ProfileRate, Rate, RateProfile,
    RatingInfo, RatingPlan, RatingPlanActivation, RatingProfile, ReverseDestination,
};
pub use resource::{Resource, ResourceProfile, ResourceUsage};
pub use route::{Route, RouteProfile};
pub use rsr::{RsrError, RsrParser, RsrParsers};
pub use stats::{
    MetricWithFilters, SqItem, StatMetric, StatQueue, StatQueueProfile, UnsupportedMetric,
};
pub use string_map::StringMap;
pub use tenant::{concatenated_key, tenant_or_default, TenantId};
pub use threshold::{Threshold, ThresholdProfile};
pub use timing::{ActivationInterval, RateInterval, Timing};
pub use versions::{current_data_db_versions, Versions};
