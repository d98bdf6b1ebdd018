// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Storage layer for the charging data store

mod config;
mod data_manager;
mod db;
mod document;
mod encoding;
mod error;
mod filter_index;
mod keyvalue;
mod snapshot;

pub use config::DbConfig;
pub use data_manager::DataManager;
pub use db::{DataDb, DbKind, ScanItem, ScanIter};
pub use document::{collection_for_key, DocumentDb};
pub use encoding::Encoding;
pub use error::StoreError;
pub use filter_index::{FilterIndex, UNINDEXED_KEY};
pub use keyvalue::KeyValueDb;
pub use snapshot::StoreSnapshot;
