// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Legacy record shapes and their transforms toward the current schema.
//!
//! Every transform is pure: it borrows the legacy record and builds a new
//! value, failing only on malformed input.

mod accounts;
mod action_plans;
mod actions;
mod alias;
mod attributes;
mod chargers;
mod dispatchers;
mod filters;
mod shared_groups;
mod stats;
mod suppliers;
mod thresholds;
mod triggers;
mod users;

pub use accounts::{V1Account, V1Balance, V1UnitsCounter, V2Account, V2Balance};
pub use action_plans::{V1ActionPlan, V1ActionPlans, V2ActionPlan};
pub use actions::{V1Action, V1Actions};
pub use alias::{V1Alias, V1AliasValue};
pub use attributes::{
    V1Attribute, V1AttributeProfile, V2Attribute, V2AttributeProfile, V3Attribute,
    V3AttributeProfile, V4Attribute, V4AttributeProfile,
};
pub use chargers::V1ChargerProfile;
pub use dispatchers::{V1DispatcherConn, V1DispatcherProfile};
pub use filters::{
    migrate_inline_filter, migrate_inline_filter_v2, migrate_inline_filter_v4,
    migrate_rsr_filter_v4, V1Filter, V1FilterRule, V4Filter, EXCLUDED_FILTER_TYPES,
};
pub use shared_groups::V1SharedGroup;
pub use stats::{
    StatsDecomposition, V1Stat, V2MetricWithParams, V2StatQueueProfile, V3StatQueueProfile,
};
pub use suppliers::{V1Supplier, V1SupplierProfile};
pub use thresholds::{
    ThresholdDecomposition, V2ActionTrigger, V2BalanceFilter, V2ThresholdProfile,
    V3ThresholdProfile,
};
pub use triggers::{V1ActionTrigger, V1ActionTriggers};
pub use users::V1UserProfile;

use crate::MigratorError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

/// A legacy record stored under `PREFIX + key_id()`.
pub trait LegacyRecord: Serialize + DeserializeOwned + Clone + std::fmt::Debug {
    const PREFIX: &'static str;

    fn key_id(&self) -> String;

    fn storage_key(&self) -> String {
        format!("{}{}", Self::PREFIX, self.key_id())
    }
}

/// Implements [`LegacyRecord`] keyed by one field, or by `tenant:id`.
macro_rules! legacy_record {
    ($ty:ty, $prefix:expr, $field:ident) => {
        impl $crate::legacy::LegacyRecord for $ty {
            const PREFIX: &'static str = $prefix;

            fn key_id(&self) -> String {
                self.$field.clone()
            }
        }
    };
    ($ty:ty, $prefix:expr) => {
        impl $crate::legacy::LegacyRecord for $ty {
            const PREFIX: &'static str = $prefix;

            fn key_id(&self) -> String {
                format!("{}:{}", self.tenant, self.id)
            }
        }
    };
}
pub(crate) use legacy_record;

/// Namespace for identifiers minted while migrating, so re-runs agree.
const LEGACY_NAMESPACE: Uuid = Uuid::from_u128(0x6f63_735f_6d69_6772_6174_6f72_5f76_3100);

/// Stable identifier derived from the parts of a legacy record.
pub(crate) fn derived_uuid(parts: &[&str]) -> String {
    Uuid::new_v5(&LEGACY_NAMESPACE, parts.join("\u{1f}").as_bytes()).to_string()
}

/// `*out:tenant:account` → `tenant:account`.
pub(crate) fn strip_direction(id: &str) -> Result<String, MigratorError> {
    match id.split(':').collect::<Vec<_>>().as_slice() {
        [_, tenant, account] => Ok(format!("{tenant}:{account}")),
        _ => Err(MigratorError::InvalidKey(id.to_string())),
    }
}

/// Account IDs in either the directional or the plain `tenant:account` form.
pub(crate) fn normalize_account_id(id: &str) -> Result<String, MigratorError> {
    match id.split(':').count() {
        2 => Ok(id.to_string()),
        _ => strip_direction(id),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
