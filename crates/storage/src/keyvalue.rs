// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered key-value store, in memory or backed by a snapshot file.

use crate::db::{DataDb, DbKind, ScanIter};
use crate::snapshot::StoreSnapshot;
use crate::StoreError;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Default)]
struct Inner {
    entries: BTreeMap<String, Vec<u8>>,
    dirty: bool,
    closed: bool,
}

/// A flat, prefix-addressable key space.
///
/// File-backed instances load the snapshot on open and write it back on
/// [`DataDb::flush`], [`DataDb::close`] or drop.
#[derive(Debug)]
pub struct KeyValueDb {
    kind: DbKind,
    path: Option<PathBuf>,
    inner: Mutex<Inner>,
}

impl KeyValueDb {
    pub fn in_memory() -> Self {
        Self::with_kind(DbKind::KeyValue)
    }

    /// In-memory store reporting itself as [`DbKind::Internal`].
    pub fn internal() -> Self {
        Self::with_kind(DbKind::Internal)
    }

    fn with_kind(kind: DbKind) -> Self {
        Self {
            kind,
            path: None,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Open (or create on first flush) a file-backed store.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let entries = StoreSnapshot::load(path)?
            .map(|s| s.entries)
            .unwrap_or_default();
        debug!(path = %path.display(), keys = entries.len(), "opened key-value store");
        Ok(Self {
            kind: DbKind::KeyValue,
            path: Some(path.to_path_buf()),
            inner: Mutex::new(Inner {
                entries,
                ..Inner::default()
            }),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn save_locked(&self, inner: &mut Inner) -> Result<(), StoreError> {
        if let Some(path) = &self.path {
            if inner.dirty {
                StoreSnapshot::new(inner.entries.clone()).save(path)?;
                inner.dirty = false;
            }
        }
        Ok(())
    }
}

fn open_guard(inner: &Inner) -> Result<(), StoreError> {
    if inner.closed {
        return Err(StoreError::Closed);
    }
    Ok(())
}

impl DataDb for KeyValueDb {
    fn kind(&self) -> DbKind {
        self.kind
    }

    fn keys_for_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let inner = self.inner.lock();
        open_guard(&inner)?;
        Ok(inner
            .entries
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.clone())
            .collect())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let inner = self.inner.lock();
        open_guard(&inner)?;
        Ok(inner.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        open_guard(&inner)?;
        inner.entries.insert(key.to_string(), value);
        inner.dirty = true;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock();
        open_guard(&inner)?;
        let existed = inner.entries.remove(key).is_some();
        inner.dirty |= existed;
        Ok(existed)
    }

    fn scan(&self, prefix: &str) -> Result<ScanIter, StoreError> {
        let inner = self.inner.lock();
        open_guard(&inner)?;
        let items: Vec<_> = inner
            .entries
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| Ok((k.clone(), v.clone())))
            .collect();
        Ok(Box::new(items.into_iter()))
    }

    fn flush(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        open_guard(&inner)?;
        self.save_locked(&mut inner)
    }

    fn close(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        if inner.closed {
            return Ok(());
        }
        self.save_locked(&mut inner)?;
        inner.closed = true;
        Ok(())
    }
}

impl Drop for KeyValueDb {
    fn drop(&mut self) {
        let mut inner = self.inner.lock();
        if inner.closed {
            return;
        }
        if let Err(e) = self.save_locked(&mut inner) {
            warn!(error = %e, "failed to persist key-value store on drop");
        }
    }
}

#[cfg(test)]
#[path = "keyvalue_tests.rs"]
mod tests;
