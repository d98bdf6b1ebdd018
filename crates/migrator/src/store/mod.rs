// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store adapters: raw legacy record access over a [`DataManager`].
//!
//! Each backend owns a cursor per prefix. Reading past the last record
//! yields [`MigratorError::NoMoreData`] and resets the cursor, so the next
//! read starts a fresh enumeration. Any failed read resets it too: a retry
//! must see the record that failed again.

mod document;
mod internal;
mod keyvalue;

pub use document::DocumentMigrator;
pub use internal::InternalMigrator;
pub use keyvalue::KeyValueMigrator;

use crate::legacy::*;
use crate::MigratorError;
use ocs_storage::{DataManager, DbKind};

/// Backend-specific legacy record access.
pub trait LegacyStore: Send {
    fn data_manager(&self) -> &DataManager;

    /// Next `(key, bytes)` under `prefix`.
    fn next_record(&mut self, prefix: &str) -> Result<(String, Vec<u8>), MigratorError>;

    /// Drop any enumeration in progress.
    fn reset_cursor(&mut self) {}

    fn set_record(&self, key: &str, bytes: Vec<u8>) -> Result<(), MigratorError>;

    fn remove_record(&self, key: &str) -> Result<(), MigratorError>;

    /// Release the underlying store. Closing twice is a no-op.
    fn close(&self) -> Result<(), MigratorError> {
        Ok(self.data_manager().close()?)
    }
}

/// Pick the adapter for the store's backend.
pub fn legacy_store(dm: DataManager) -> Box<dyn LegacyStore> {
    match dm.kind() {
        DbKind::KeyValue => Box::new(KeyValueMigrator::new(dm)),
        DbKind::Document => Box::new(DocumentMigrator::new(dm)),
        DbKind::Internal => Box::new(InternalMigrator::new(dm)),
    }
}

macro_rules! families {
    ($($get:ident, $set:ident, $rem:ident => $ty:ty;)*) => {
        $(
            fn $get(&mut self) -> Result<$ty, MigratorError> {
                self.get_legacy::<$ty>()
            }

            fn $set(&self, record: &$ty) -> Result<(), MigratorError> {
                self.set_legacy(record)
            }

            fn $rem(&self, key_id: &str) -> Result<(), MigratorError> {
                self.rem_legacy::<$ty>(key_id)
            }
        )*
    };
}

/// Typed legacy record access on top of [`LegacyStore`].
pub trait LegacyRecords: LegacyStore {
    fn get_legacy<R: LegacyRecord>(&mut self) -> Result<R, MigratorError> {
        let (key, bytes) = self.next_record(R::PREFIX)?;
        self.data_manager()
            .encoding()
            .decode(&key, &bytes)
            .map_err(|e| {
                self.reset_cursor();
                e.into()
            })
    }

    fn set_legacy<R: LegacyRecord>(&self, record: &R) -> Result<(), MigratorError> {
        let key = record.storage_key();
        let bytes = self.data_manager().encoding().encode(&key, record)?;
        self.set_record(&key, bytes)
    }

    fn rem_legacy<R: LegacyRecord>(&self, key_id: &str) -> Result<(), MigratorError> {
        self.remove_record(&format!("{}{key_id}", R::PREFIX))
    }

    families! {
        get_v1_account, set_v1_account, rem_v1_account => V1Account;
        get_v2_account, set_v2_account, rem_v2_account => V2Account;
        get_v1_actions, set_v1_actions, rem_v1_actions => V1Actions;
        get_v1_action_plans, set_v1_action_plans, rem_v1_action_plans => V1ActionPlans;
        get_v2_action_plan, set_v2_action_plan, rem_v2_action_plan => V2ActionPlan;
        get_v1_action_triggers, set_v1_action_triggers, rem_v1_action_triggers => V1ActionTriggers;
        get_v1_shared_group, set_v1_shared_group, rem_v1_shared_group => V1SharedGroup;
        get_v1_stats, set_v1_stats, rem_v1_stats => V1Stat;
        get_v2_stats, set_v2_stats, rem_v2_stats => V2StatQueueProfile;
        get_v3_stats, set_v3_stats, rem_v3_stats => V3StatQueueProfile;
        get_v2_action_trigger, set_v2_action_trigger, rem_v2_action_trigger => V2ActionTrigger;
        get_v2_threshold_profile, set_v2_threshold_profile, rem_v2_threshold_profile => V2ThresholdProfile;
        get_v3_threshold_profile, set_v3_threshold_profile, rem_v3_threshold_profile => V3ThresholdProfile;
        get_v1_attribute_profile, set_v1_attribute_profile, rem_v1_attribute_profile => V1AttributeProfile;
        get_v2_attribute_profile, set_v2_attribute_profile, rem_v2_attribute_profile => V2AttributeProfile;
        get_v3_attribute_profile, set_v3_attribute_profile, rem_v3_attribute_profile => V3AttributeProfile;
        get_v4_attribute_profile, set_v4_attribute_profile, rem_v4_attribute_profile => V4AttributeProfile;
        get_v1_filter, set_v1_filter, rem_v1_filter => V1Filter;
        get_v4_filter, set_v4_filter, rem_v4_filter => V4Filter;
        get_v1_alias, set_v1_alias, rem_v1_alias => V1Alias;
        get_v1_user, set_v1_user, rem_v1_user => V1UserProfile;
        get_v1_supplier_profile, set_v1_supplier_profile, rem_v1_supplier_profile => V1SupplierProfile;
        get_v1_charger_profile, set_v1_charger_profile, rem_v1_charger_profile => V1ChargerProfile;
        get_v1_dispatcher_profile, set_v1_dispatcher_profile, rem_v1_dispatcher_profile => V1DispatcherProfile;
    }
}

impl<S: LegacyStore + ?Sized> LegacyRecords for S {}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
