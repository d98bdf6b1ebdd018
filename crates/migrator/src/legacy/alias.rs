// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Aliases v1, replaced by attribute profiles.

use super::LegacyRecord;
use crate::MigratorError;
use ocs_core::consts::{meta, prefix, NESTING_SEP};
use ocs_core::{concatenated_key, tenant_or_default, Attribute, AttributeProfile, RsrParsers};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const ALIAS_WEIGHT: f64 = 20.0;

/// Field name an alias used to rewrite the tenant itself.
const TENANT_PAIR: &str = "*tenant";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1AliasValue {
    pub destination_id: String,
    /// field → initial value → substitute
    pub pairs: BTreeMap<String, BTreeMap<String, String>>,
    pub weight: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1Alias {
    pub direction: String,
    pub tenant: String,
    pub category: String,
    pub account: String,
    pub subject: String,
    pub context: String,
    pub values: Vec<V1AliasValue>,
}

impl LegacyRecord for V1Alias {
    const PREFIX: &'static str = prefix::ALIAS;

    fn key_id(&self) -> String {
        concatenated_key(&[
            &self.direction,
            &self.tenant,
            &self.category,
            &self.account,
            &self.subject,
            &self.context,
        ])
    }
}

fn is_set(value: &str) -> bool {
    !value.is_empty() && value != meta::ANY
}

fn request_string(field: &str, value: &str) -> String {
    format!("{}:~{}{NESTING_SEP}{field}:{value}", meta::STRING, meta::REQ)
}

impl V1Alias {
    pub fn as_attribute_profile(
        &self,
        default_tenant: &str,
    ) -> Result<AttributeProfile, MigratorError> {
        let mut filter_ids = Vec::new();
        for (field, value) in [
            ("Category", &self.category),
            ("Account", &self.account),
            ("Subject", &self.subject),
        ] {
            if is_set(value) {
                filter_ids.push(request_string(field, value));
            }
        }

        let mut destination = "";
        let mut attributes = Vec::new();
        for value in &self.values {
            if !is_set(destination) {
                destination = &value.destination_id;
            }
            for (field, by_initial) in &value.pairs {
                let field = if field == TENANT_PAIR { "Tenant" } else { field.as_str() };
                for (initial, substitute) in by_initial {
                    attributes.push(Attribute {
                        filter_ids: if is_set(initial) {
                            vec![request_string(field, initial)]
                        } else {
                            Vec::new()
                        },
                        path: format!("{}{NESTING_SEP}{field}", meta::REQ),
                        attr_type: meta::VARIABLE.to_string(),
                        value: RsrParsers::parse(substitute)?,
                    });
                }
            }
        }
        if is_set(destination) {
            filter_ids.push(format!(
                "{}:~{}{NESTING_SEP}Destination:{destination}",
                meta::DESTINATIONS,
                meta::REQ
            ));
        }

        Ok(AttributeProfile {
            tenant: tenant_or_default(&self.tenant, default_tenant).to_string(),
            id: self.key_id(),
            contexts: vec![meta::ANY.to_string()],
            filter_ids,
            activation_interval: None,
            attributes,
            blocker: false,
            weight: ALIAS_WEIGHT,
        })
    }
}

#[cfg(test)]
#[path = "alias_tests.rs"]
mod tests;
