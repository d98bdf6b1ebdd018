// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Key-value adapter: list the keys of a prefix once, then one GET per read.

use super::LegacyStore;
use crate::MigratorError;
use ocs_storage::DataManager;
use tracing::trace;

/// Position within the key listing of one prefix.
#[derive(Debug)]
struct KeyCursor {
    prefix: String,
    keys: Vec<String>,
    next: usize,
}

#[derive(Debug)]
pub struct KeyValueMigrator {
    dm: DataManager,
    cursor: Option<KeyCursor>,
}

impl KeyValueMigrator {
    pub fn new(dm: DataManager) -> Self {
        Self { dm, cursor: None }
    }
}

impl LegacyStore for KeyValueMigrator {
    fn data_manager(&self) -> &DataManager {
        &self.dm
    }

    fn next_record(&mut self, prefix: &str) -> Result<(String, Vec<u8>), MigratorError> {
        if !matches!(&self.cursor, Some(c) if c.prefix == prefix) {
            let keys = self.dm.db().keys_for_prefix(prefix)?;
            trace!(prefix, keys = keys.len(), "listed legacy keys");
            self.cursor = Some(KeyCursor {
                prefix: prefix.to_string(),
                keys,
                next: 0,
            });
        }
        loop {
            let Some(cursor) = self.cursor.as_mut() else {
                return Err(MigratorError::NoMoreData);
            };
            let Some(key) = cursor.keys.get(cursor.next).cloned() else {
                self.cursor = None;
                return Err(MigratorError::NoMoreData);
            };
            cursor.next += 1;
            // keys removed since the listing are skipped
            match self.dm.db().get(&key) {
                Ok(Some(bytes)) => return Ok((key, bytes)),
                Ok(None) => {}
                Err(e) => {
                    self.cursor = None;
                    return Err(e.into());
                }
            }
        }
    }

    fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    fn set_record(&self, key: &str, bytes: Vec<u8>) -> Result<(), MigratorError> {
        Ok(self.dm.db().set(key, bytes)?)
    }

    fn remove_record(&self, key: &str) -> Result<(), MigratorError> {
        self.dm.db().remove(key)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "keyvalue_tests.rs"]
mod tests;
