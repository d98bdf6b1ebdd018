// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Internal adapter: current records only, legacy access is unsupported.

use super::LegacyStore;
use crate::MigratorError;
use ocs_storage::DataManager;

#[derive(Debug)]
pub struct InternalMigrator {
    dm: DataManager,
}

impl InternalMigrator {
    pub fn new(dm: DataManager) -> Self {
        Self { dm }
    }
}

impl LegacyStore for InternalMigrator {
    fn data_manager(&self) -> &DataManager {
        &self.dm
    }

    fn next_record(&mut self, _prefix: &str) -> Result<(String, Vec<u8>), MigratorError> {
        Err(MigratorError::NotImplemented)
    }

    fn set_record(&self, _key: &str, _bytes: Vec<u8>) -> Result<(), MigratorError> {
        Err(MigratorError::NotImplemented)
    }

    fn remove_record(&self, _key: &str) -> Result<(), MigratorError> {
        Err(MigratorError::NotImplemented)
    }
}

#[cfg(test)]
#[path = "internal_tests.rs"]
mod tests;
