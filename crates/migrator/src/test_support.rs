// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store and migrator factories for unit tests.

use crate::{Migrator, MigratorOptions};
use ocs_core::Versions;
use ocs_storage::{DataManager, DbConfig, DbKind, Encoding};

// ── Stores ──────────────────────────────────────────────────────────────────

pub fn memory_store() -> DataManager {
    DbConfig::new(DbKind::KeyValue, None, Encoding::Binary)
        .open()
        .unwrap()
}

pub fn document_store(root: &std::path::Path) -> DataManager {
    DbConfig::new(DbKind::Document, Some(root.to_path_buf()), Encoding::Json)
        .open()
        .unwrap()
}

/// Stamp `dm` with the given versions, replacing any stored map.
pub fn stamp(dm: &DataManager, versions: &[(&str, i64)]) {
    dm.set_versions(&Versions::from_iter(versions.iter().copied()), true)
        .unwrap();
}

pub fn stored_version(dm: &DataManager, key: &str) -> Option<i64> {
    dm.get_versions().unwrap().and_then(|v| v.get(key))
}

// ── Migrators ───────────────────────────────────────────────────────────────

pub fn options(dry_run: bool) -> MigratorOptions {
    MigratorOptions {
        dry_run,
        ..MigratorOptions::default()
    }
}

/// Migrator between two fresh handles; returns the handles for inspection.
pub fn migrator_pair(dry_run: bool) -> (Migrator, DataManager, DataManager) {
    let dm_in = memory_store();
    let dm_out = memory_store();
    let migrator = Migrator::new(dm_in.clone(), dm_out.clone(), options(dry_run));
    (migrator, dm_in, dm_out)
}

/// Migrator reading and writing one handle.
pub fn migrator_shared(dm: &DataManager) -> Migrator {
    Migrator::new(dm.clone(), dm.clone(), options(false))
}

/// Run one tag and return the count recorded for `key`.
pub fn run(migrator: &mut Migrator, tag: &str, key: &str) -> i64 {
    let (result, stats) = migrator.migrate(&[tag]);
    result.unwrap();
    stats.get(key).copied().unwrap_or(0)
}
