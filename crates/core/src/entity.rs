// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Storage identity of current-shape records.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record persisted under `PREFIX + key_id()`.
pub trait Entity: Serialize + DeserializeOwned + Clone + std::fmt::Debug {
    const PREFIX: &'static str;

    /// Key suffix after the prefix, usually `tenant:id` or a global id.
    fn key_id(&self) -> String;

    fn storage_key(&self) -> String {
        format!("{}{}", Self::PREFIX, self.key_id())
    }
}

/// A tenant-scoped profile selected by filters and covered by a filter index.
pub trait FilteredProfile: Entity {
    /// Index family, e.g. `*attributes`.
    const INDEX_KIND: &'static str;

    fn tenant(&self) -> &str;
    fn id(&self) -> &str;
    fn filter_ids(&self) -> &[String];
    fn filter_ids_mut(&mut self) -> &mut Vec<String>;
}

/// Implements [`Entity`] and [`FilteredProfile`] for a `tenant`/`id`/`filter_ids` struct.
#[macro_export]
macro_rules! filtered_profile {
    ($ty:ty, $prefix:expr, $kind:expr) => {
        impl $crate::entity::Entity for $ty {
            const PREFIX: &'static str = $prefix;

            fn key_id(&self) -> String {
                format!("{}:{}", self.tenant, self.id)
            }
        }

        impl $crate::entity::FilteredProfile for $ty {
            const INDEX_KIND: &'static str = $kind;

            fn tenant(&self) -> &str {
                &self.tenant
            }

            fn id(&self) -> &str {
                &self.id
            }

            fn filter_ids(&self) -> &[String] {
                &self.filter_ids
            }

            fn filter_ids_mut(&mut self) -> &mut Vec<String> {
                &mut self.filter_ids
            }
        }
    };
}

/// Implements [`Entity`] for a record keyed by `tenant:id`.
#[macro_export]
macro_rules! tenant_entity {
    ($ty:ty, $prefix:expr) => {
        impl $crate::entity::Entity for $ty {
            const PREFIX: &'static str = $prefix;

            fn key_id(&self) -> String {
                format!("{}:{}", self.tenant, self.id)
            }
        }
    };
}
