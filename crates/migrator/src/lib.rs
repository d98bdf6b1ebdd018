// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ocs-migrator: upgrades stored records to the current schema versions

mod error;
pub mod legacy;
mod migrator;
mod sparse;
pub mod store;
mod tasks;
mod versions;

pub use error::{MigratorError, OrNoMoreData};
pub use migrator::{Migrator, MigratorOptions, DEFAULT_TENANT};
pub use store::{legacy_store, LegacyRecords, LegacyStore};
pub use tasks::supported_tags;
pub use versions::{EntityVersion, VersionCheck, VersionRegistry};

#[cfg(test)]
pub(crate) mod test_support;
