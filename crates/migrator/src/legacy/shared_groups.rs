// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared groups v1: members as a plain list.

use super::legacy_record;
use ocs_core::consts::prefix;
use ocs_core::{SharedGroup, SharingParameters};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1SharedGroup {
    pub id: String,
    pub account_parameters: BTreeMap<String, SharingParameters>,
    pub member_ids: Vec<String>,
}

legacy_record!(V1SharedGroup, prefix::SHARED_GROUP, id);

impl V1SharedGroup {
    pub fn as_shared_group(&self) -> SharedGroup {
        SharedGroup {
            id: self.id.clone(),
            account_parameters: self.account_parameters.clone(),
            member_ids: self.member_ids.iter().map(String::as_str).collect(),
        }
    }
}

#[cfg(test)]
#[path = "shared_groups_tests.rs"]
mod tests;
