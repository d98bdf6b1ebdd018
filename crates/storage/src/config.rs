// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store connection settings.

use crate::db::{DataDb, DbKind};
use crate::{DataManager, DocumentDb, Encoding, KeyValueDb, StoreError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Where a store lives and how its records are encoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DbConfig {
    pub kind: DbKind,
    /// Snapshot file (key-value) or root directory (document).
    pub path: Option<PathBuf>,
    pub encoding: Encoding,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            kind: DbKind::KeyValue,
            path: None,
            encoding: Encoding::default(),
        }
    }
}

impl DbConfig {
    pub fn new(kind: DbKind, path: Option<PathBuf>, encoding: Encoding) -> Self {
        Self {
            kind,
            path,
            encoding,
        }
    }

    /// Both settings address the same store, whatever the record encoding.
    pub fn same_location(&self, other: &DbConfig) -> bool {
        self.kind == other.kind && self.path == other.path
    }

    /// Open the configured store. A key-value store without a path lives in
    /// memory only.
    pub fn open(&self) -> Result<DataManager, StoreError> {
        let db: Arc<dyn DataDb> = match (self.kind, &self.path) {
            (DbKind::KeyValue, Some(path)) => Arc::new(KeyValueDb::open(path)?),
            (DbKind::KeyValue, None) => Arc::new(KeyValueDb::in_memory()),
            (DbKind::Document, Some(path)) => Arc::new(DocumentDb::open(path)?),
            (DbKind::Document, None) => return Err(StoreError::MissingPath(DbKind::Document)),
            (DbKind::Internal, _) => Arc::new(KeyValueDb::internal()),
        };
        Ok(DataManager::new(db, self.encoding))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
