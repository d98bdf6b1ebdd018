// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The driver contract every backend implements.

use crate::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One `(key, raw bytes)` item produced by [`DataDb::scan`].
pub type ScanItem = Result<(String, Vec<u8>), StoreError>;

/// Owned, lazily evaluated scan over a key range.
pub type ScanIter = Box<dyn Iterator<Item = ScanItem> + Send>;

/// Backend family of a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbKind {
    /// Flat key space addressed by prefixed keys.
    KeyValue,
    /// Collections of documents.
    Document,
    /// Process-local map without legacy record support.
    Internal,
}

impl DbKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DbKind::KeyValue => "keyvalue",
            DbKind::Document => "document",
            DbKind::Internal => "internal",
        }
    }
}

impl fmt::Display for DbKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keyvalue" | "*keyvalue" => Ok(DbKind::KeyValue),
            "document" | "*document" => Ok(DbKind::Document),
            "internal" | "*internal" => Ok(DbKind::Internal),
            other => Err(format!("unsupported database <{other}>")),
        }
    }
}

/// Raw byte-level access to a store.
///
/// Keys are flat strings of the form `prefix + id`; document backends map the
/// prefix onto a collection. All methods take `&self` so one handle can serve
/// as both input and output of a migration.
pub trait DataDb: Send + Sync + fmt::Debug {
    fn kind(&self) -> DbKind;

    /// All keys starting with `prefix`, sorted.
    fn keys_for_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError>;

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Returns whether the key existed.
    fn remove(&self, key: &str) -> Result<bool, StoreError>;

    /// Lazily read every record under `prefix`.
    fn scan(&self, prefix: &str) -> Result<ScanIter, StoreError>;

    /// Persist pending writes.
    fn flush(&self) -> Result<(), StoreError>;

    /// Flush and reject further operations.
    fn close(&self) -> Result<(), StoreError>;
}
