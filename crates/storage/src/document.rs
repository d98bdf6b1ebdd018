// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Document store: one directory per collection, one file per document.
//!
//! Flat keys are mapped onto `(collection, id)` through the key prefix, e.g.
//! `acc_cgrates.org:1001` lives in `accounts/` as document `cgrates.org:1001`.
//! Keys without a known prefix go to the `singletons` collection whole.

use crate::db::{DataDb, DbKind, ScanItem, ScanIter};
use crate::snapshot::write_atomic;
use crate::StoreError;
use ocs_core::consts::prefix as p;
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const DOC_EXT: &str = "doc";
const SINGLETONS: &str = "singletons";

const COLLECTIONS: &[(&str, &str)] = &[
    (p::ACCOUNT, "accounts"),
    (p::ACCOUNT_ACTION_PLANS, "account_action_plans"),
    (p::ACTION, "actions"),
    (p::ACTION_PLAN, "action_plans"),
    (p::ACTION_PROFILE, "action_profiles"),
    (p::ACTION_TRIGGER, "action_triggers"),
    (p::ALIAS, "aliases"),
    (p::ATTRIBUTE_PROFILE, "attribute_profiles"),
    (p::CDR_STATS, "cdr_stats"),
    (p::CHARGER_PROFILE, "charger_profiles"),
    (p::DESTINATION, "destinations"),
    (p::DISPATCHER_HOST, "dispatcher_hosts"),
    (p::DISPATCHER_PROFILE, "dispatcher_profiles"),
    (p::FILTER, "filters"),
    (p::FILTER_INDEX, "filter_indexes"),
    (p::LOAD_IDS, "load_ids"),
    (p::RATE_PROFILE, "rate_profiles"),
    (p::RATING_PLAN, "rating_plans"),
    (p::RATING_PROFILE, "rating_profiles"),
    (p::RESOURCE, "resources"),
    (p::RESOURCE_PROFILE, "resource_profiles"),
    (p::REVERSE_ALIAS, "reverse_aliases"),
    (p::REVERSE_DESTINATION, "reverse_destinations"),
    (p::ROUTE_PROFILE, "route_profiles"),
    (p::SHARED_GROUP, "shared_groups"),
    (p::STAT_QUEUE, "stat_queues"),
    (p::STAT_QUEUE_PROFILE, "stat_queue_profiles"),
    (p::SUPPLIER_PROFILE, "supplier_profiles"),
    (p::THRESHOLD, "thresholds"),
    (p::THRESHOLD_PROFILE, "threshold_profiles"),
    (p::TIMING, "timings"),
    (p::USER, "users"),
];

/// Collection name and document id for a flat key.
pub fn collection_for_key(key: &str) -> (&'static str, &str) {
    for &(prefix, collection) in COLLECTIONS {
        if let Some(id) = key.strip_prefix(prefix) {
            return (collection, id);
        }
    }
    (SINGLETONS, key)
}

fn prefix_of_collection(collection: &str) -> &'static str {
    COLLECTIONS
        .iter()
        .find(|(_, c)| *c == collection)
        .map(|(key_prefix, _)| *key_prefix)
        .unwrap_or("")
}

/// Percent-encode a document id into a portable file stem. A leading dot
/// is encoded too so no document becomes a hidden file.
fn encode_id(id: &str) -> String {
    let encoded = urlencoding::encode(id);
    match encoded.strip_prefix('.') {
        Some(rest) => format!("%2E{rest}"),
        None => encoded.into_owned(),
    }
}

fn decode_id(stem: &str) -> Option<String> {
    urlencoding::decode(stem).ok().map(|id| id.into_owned())
}

#[derive(Debug)]
pub struct DocumentDb {
    root: PathBuf,
    closed: Mutex<bool>,
}

impl DocumentDb {
    /// Open a document store rooted at `root`, creating the directory.
    pub fn open(root: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(root)?;
        debug!(root = %root.display(), "opened document store");
        Ok(Self {
            root: root.to_path_buf(),
            closed: Mutex::new(false),
        })
    }

    fn guard(&self) -> Result<(), StoreError> {
        if *self.closed.lock() {
            return Err(StoreError::Closed);
        }
        Ok(())
    }

    fn doc_path(&self, key: &str) -> PathBuf {
        let (collection, id) = collection_for_key(key);
        self.root
            .join(collection)
            .join(format!("{}.{DOC_EXT}", encode_id(id)))
    }

    fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Collections that may hold keys starting with `prefix`.
    fn candidate_collections(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let (collection, _) = collection_for_key(prefix);
        if collection != SINGLETONS {
            return Ok(vec![collection.to_string()]);
        }
        self.collection_names()
    }

    fn collection_keys(&self, collection: &str) -> Result<Vec<(String, PathBuf)>, StoreError> {
        let dir = self.root.join(collection);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let key_prefix = prefix_of_collection(collection);
        let mut keys = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(DOC_EXT) {
                continue;
            }
            let Some(id) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(decode_id)
            else {
                continue;
            };
            keys.push((format!("{key_prefix}{id}"), path));
        }
        Ok(keys)
    }

    fn matching(&self, prefix: &str) -> Result<Vec<(String, PathBuf)>, StoreError> {
        let mut out = Vec::new();
        for collection in self.candidate_collections(prefix)? {
            out.extend(
                self.collection_keys(&collection)?
                    .into_iter()
                    .filter(|(k, _)| k.starts_with(prefix)),
            );
        }
        out.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(out)
    }
}

impl DataDb for DocumentDb {
    fn kind(&self) -> DbKind {
        DbKind::Document
    }

    fn keys_for_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        self.guard()?;
        Ok(self.matching(prefix)?.into_iter().map(|(k, _)| k).collect())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.guard()?;
        match fs::read(self.doc_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.guard()?;
        write_atomic(&self.doc_path(key), &value)
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        self.guard()?;
        match fs::remove_file(self.doc_path(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Documents are read one by one as the cursor advances.
    fn scan(&self, prefix: &str) -> Result<ScanIter, StoreError> {
        self.guard()?;
        let docs = self.matching(prefix)?;
        Ok(Box::new(docs.into_iter().filter_map(
            |(key, path)| -> Option<ScanItem> {
                match fs::read(&path) {
                    Ok(bytes) => Some(Ok((key, bytes))),
                    // removed after the listing was taken
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
                    Err(e) => Some(Err(e.into())),
                }
            },
        )))
    }

    fn flush(&self) -> Result<(), StoreError> {
        self.guard()
    }

    fn close(&self) -> Result<(), StoreError> {
        *self.closed.lock() = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
