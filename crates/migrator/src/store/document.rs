// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Document adapter: a lazy collection scan per prefix.

use super::LegacyStore;
use crate::MigratorError;
use ocs_storage::{DataManager, ScanIter};
use std::fmt;

struct ScanCursor {
    prefix: String,
    scan: ScanIter,
}

pub struct DocumentMigrator {
    dm: DataManager,
    cursor: Option<ScanCursor>,
}

impl DocumentMigrator {
    pub fn new(dm: DataManager) -> Self {
        Self { dm, cursor: None }
    }
}

impl fmt::Debug for DocumentMigrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentMigrator")
            .field("dm", &self.dm)
            .field("cursor", &self.cursor.as_ref().map(|c| &c.prefix))
            .finish()
    }
}

impl LegacyStore for DocumentMigrator {
    fn data_manager(&self) -> &DataManager {
        &self.dm
    }

    fn next_record(&mut self, prefix: &str) -> Result<(String, Vec<u8>), MigratorError> {
        if !matches!(&self.cursor, Some(c) if c.prefix == prefix) {
            self.cursor = Some(ScanCursor {
                prefix: prefix.to_string(),
                scan: self.dm.db().scan(prefix)?,
            });
        }
        let next = self.cursor.as_mut().and_then(|c| c.scan.next());
        match next {
            Some(Ok(item)) => Ok(item),
            Some(Err(e)) => {
                self.cursor = None;
                Err(e.into())
            }
            None => {
                self.cursor = None;
                Err(MigratorError::NoMoreData)
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
#[path = "document_tests.rs"]
mod tests;
