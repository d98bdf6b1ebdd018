// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk image of a key-value store.
//!
//! The whole key space is written as zstd-compressed JSON. Saves go through a
//! `.tmp` file that is synced and renamed over the target, so a crash mid-save
//! leaves the previous image intact.

use crate::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const ZSTD_LEVEL: i32 = 3;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub entries: BTreeMap<String, Vec<u8>>,
    pub saved_at: Option<DateTime<Utc>>,
}

impl StoreSnapshot {
    pub fn new(entries: BTreeMap<String, Vec<u8>>) -> Self {
        Self {
            entries,
            saved_at: Some(Utc::now()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_vec(self).map_err(|e| StoreError::Encode {
            key: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let compressed = zstd::encode_all(json.as_slice(), ZSTD_LEVEL)?;
        write_atomic(path, &compressed)
    }

    /// Load the image at `path`, `None` when the file does not exist.
    ///
    /// A file that cannot be decompressed or parsed is an error; the store is
    /// never silently reset.
    pub fn load(path: &Path) -> Result<Option<Self>, StoreError> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read(path)?;
        let corrupt = |reason: String| StoreError::Corrupt {
            path: path.display().to_string(),
            reason,
        };
        let json = zstd::decode_all(raw.as_slice()).map_err(|e| corrupt(e.to_string()))?;
        let snapshot = serde_json::from_slice(&json).map_err(|e| corrupt(e.to_string()))?;
        Ok(Some(snapshot))
    }
}

/// Write `data` to `path` via a synced temp file and rename.
pub(crate) fn write_atomic(path: &Path, data: &[u8]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    {
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(data)?;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
    }
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
