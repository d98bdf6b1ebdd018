// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed access to current-shape records.

use crate::db::{DataDb, DbKind};
use crate::{Encoding, StoreError};
use ocs_core::consts::prefix;
use ocs_core::{Entity, Versions};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// A store handle paired with the encoding of its records.
#[derive(Clone, Debug)]
pub struct DataManager {
    db: Arc<dyn DataDb>,
    encoding: Encoding,
}

impl DataManager {
    pub fn new(db: Arc<dyn DataDb>, encoding: Encoding) -> Self {
        Self { db, encoding }
    }

    pub fn db(&self) -> &Arc<dyn DataDb> {
        &self.db
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn kind(&self) -> DbKind {
        self.db.kind()
    }

    /// True when both managers share the same store handle.
    pub fn same_store(&self, other: &DataManager) -> bool {
        Arc::ptr_eq(&self.db, &other.db)
    }

    /// Decode the record at an arbitrary key.
    pub fn get_raw<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.db.get(key)? {
            Some(bytes) => self.encoding.decode(key, &bytes).map(Some),
            None => Ok(None),
        }
    }

    pub fn set_raw<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = self.encoding.encode(key, value)?;
        self.db.set(key, bytes)
    }

    pub fn remove_raw(&self, key: &str) -> Result<bool, StoreError> {
        self.db.remove(key)
    }

    pub fn get<T: Entity>(&self, key_id: &str) -> Result<Option<T>, StoreError> {
        self.get_raw(&format!("{}{key_id}", T::PREFIX))
    }

    pub fn set<T: Entity>(&self, item: &T) -> Result<(), StoreError> {
        self.set_raw(&item.storage_key(), item)
    }

    pub fn remove<T: Entity>(&self, key_id: &str) -> Result<bool, StoreError> {
        self.db.remove(&format!("{}{key_id}", T::PREFIX))
    }

    /// Key suffixes of every stored `T`.
    pub fn key_ids<T: Entity>(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .db
            .keys_for_prefix(T::PREFIX)?
            .into_iter()
            .filter_map(|k| k.strip_prefix(T::PREFIX).map(String::from))
            .collect())
    }

    pub fn get_all<T: Entity>(&self) -> Result<Vec<T>, StoreError> {
        let mut items = Vec::new();
        for item in self.db.scan(T::PREFIX)? {
            let (key, bytes) = item?;
            items.push(self.encoding.decode(&key, &bytes)?);
        }
        Ok(items)
    }

    /// Stored version map, `None` when the store has never been versioned.
    pub fn get_versions(&self) -> Result<Option<Versions>, StoreError> {
        self.get_raw(prefix::VERSIONS)
    }

    /// Write `versions`. With `overwrite` the stored map is replaced,
    /// otherwise the given keys are merged into it.
    pub fn set_versions(&self, versions: &Versions, overwrite: bool) -> Result<(), StoreError> {
        let merged = if overwrite {
            versions.clone()
        } else {
            let mut stored = self.get_versions()?.unwrap_or_default();
            stored.merge(versions);
            stored
        };
        self.set_raw(prefix::VERSIONS, &merged)
    }

    pub fn remove_versions(&self) -> Result<(), StoreError> {
        self.db.remove(prefix::VERSIONS).map(|_| ())
    }

    pub fn flush(&self) -> Result<(), StoreError> {
        self.db.flush()
    }

    pub fn close(&self) -> Result<(), StoreError> {
        self.db.close()
    }
}

#[cfg(test)]
#[path = "data_manager_tests.rs"]
mod tests;
