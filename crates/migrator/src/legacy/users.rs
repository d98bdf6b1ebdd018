// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User profiles v1, replaced by attribute profiles.

use super::LegacyRecord;
use crate::MigratorError;
use ocs_core::consts::{meta, prefix, NESTING_SEP};
use ocs_core::{tenant_or_default, Attribute, AttributeProfile, RsrParsers};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1UserProfile {
    pub tenant: String,
    pub user_name: String,
    pub masked: bool,
    pub profile: BTreeMap<String, String>,
    pub weight: f64,
}

impl LegacyRecord for V1UserProfile {
    const PREFIX: &'static str = prefix::USER;

    fn key_id(&self) -> String {
        format!("{}:{}", self.tenant, self.user_name)
    }
}

fn current_field_name(field: &str) -> &str {
    match field {
        "ReqType" => "RequestType",
        other => other,
    }
}

impl V1UserProfile {
    /// Fields named in `users_filters` select the profile; the rest are
    /// written onto the request.
    pub fn as_attribute_profile(
        &self,
        default_tenant: &str,
        users_filters: &[String],
    ) -> Result<AttributeProfile, MigratorError> {
        let mut filter_ids = Vec::new();
        let mut attributes = Vec::new();
        for (field, value) in &self.profile {
            let field = current_field_name(field);
            if users_filters.iter().any(|f| f == field) {
                filter_ids.push(format!(
                    "{}:~{}{NESTING_SEP}{field}:{value}",
                    meta::STRING,
                    meta::REQ
                ));
                continue;
            }
            attributes.push(Attribute {
                filter_ids: Vec::new(),
                path: format!("{}{NESTING_SEP}{field}", meta::REQ),
                attr_type: meta::VARIABLE.to_string(),
                value: RsrParsers::parse(value)?,
            });
        }
        Ok(AttributeProfile {
            tenant: tenant_or_default(&self.tenant, default_tenant).to_string(),
            id: self.user_name.clone(),
            contexts: vec![meta::ANY.to_string()],
            filter_ids,
            activation_interval: None,
            attributes,
            blocker: false,
            weight: self.weight,
        })
    }
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
