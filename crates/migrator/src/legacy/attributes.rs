// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Attribute profiles v1 to v4.
//!
//! v1 nests attributes as `field → initial value → attribute`. v2 flattens
//! that into a list, v3 turns `initial`/`append` into filter IDs, v4 adds
//! the attribute type and v5 (current) roots paths and values under `*req`.

use super::legacy_record;
use crate::MigratorError;
use ocs_core::consts::{meta, prefix, NESTING_SEP};
use ocs_core::{ActivationInterval, Attribute, AttributeProfile, RsrParsers};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1Attribute {
    pub field_name: String,
    pub initial: String,
    pub substitute: String,
    pub append: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1AttributeProfile {
    pub tenant: String,
    pub id: String,
    pub contexts: Vec<String>,
    pub filter_ids: Vec<String>,
    pub activation_interval: Option<ActivationInterval>,
    pub attributes: BTreeMap<String, BTreeMap<String, V1Attribute>>,
    pub weight: f64,
}

legacy_record!(V1AttributeProfile, prefix::ATTRIBUTE_PROFILE);

impl V1AttributeProfile {
    /// Flatten the nested map in key order.
    pub fn as_v2(&self) -> Result<V2AttributeProfile, MigratorError> {
        let mut attributes = Vec::new();
        for by_initial in self.attributes.values() {
            for attr in by_initial.values() {
                attributes.push(V2Attribute {
                    field_name: attr.field_name.clone(),
                    initial: Some(attr.initial.clone()),
                    substitute: RsrParsers::parse(&attr.substitute)?,
                    append: attr.append,
                });
            }
        }
        Ok(V2AttributeProfile {
            tenant: self.tenant.clone(),
            id: self.id.clone(),
            contexts: self.contexts.clone(),
            filter_ids: self.filter_ids.clone(),
            activation_interval: self.activation_interval.clone(),
            attributes,
            blocker: false,
            weight: self.weight,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V2Attribute {
    pub field_name: String,
    pub initial: Option<String>,
    pub substitute: RsrParsers,
    pub append: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V2AttributeProfile {
    pub tenant: String,
    pub id: String,
    pub contexts: Vec<String>,
    pub filter_ids: Vec<String>,
    pub activation_interval: Option<ActivationInterval>,
    pub attributes: Vec<V2Attribute>,
    pub blocker: bool,
    pub weight: f64,
}

legacy_record!(V2AttributeProfile, prefix::ATTRIBUTE_PROFILE);

impl V2Attribute {
    fn match_filters(&self) -> Vec<String> {
        let mut filter_ids = Vec::new();
        if !self.append {
            filter_ids.push(format!("{}:{}:", meta::EXISTS, self.field_name));
        }
        if self.initial.as_deref() != Some(meta::ANY) {
            filter_ids.push(format!(
                "{}:{}:{}",
                meta::STRING,
                self.field_name,
                self.initial.as_deref().unwrap_or_default()
            ));
        }
        filter_ids
    }
}

impl V2AttributeProfile {
    pub fn as_v3(&self) -> V3AttributeProfile {
        V3AttributeProfile {
            tenant: self.tenant.clone(),
            id: self.id.clone(),
            contexts: self.contexts.clone(),
            filter_ids: self.filter_ids.clone(),
            activation_interval: self.activation_interval.clone(),
            attributes: self
                .attributes
                .iter()
                .map(|attr| V3Attribute {
                    filter_ids: attr.match_filters(),
                    field_name: attr.field_name.clone(),
                    substitute: attr.substitute.clone(),
                })
                .collect(),
            blocker: self.blocker,
            weight: self.weight,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V3Attribute {
    pub filter_ids: Vec<String>,
    pub field_name: String,
    pub substitute: RsrParsers,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V3AttributeProfile {
    pub tenant: String,
    pub id: String,
    pub contexts: Vec<String>,
    pub filter_ids: Vec<String>,
    pub activation_interval: Option<ActivationInterval>,
    pub attributes: Vec<V3Attribute>,
    pub blocker: bool,
    pub weight: f64,
}

legacy_record!(V3AttributeProfile, prefix::ATTRIBUTE_PROFILE);

impl V3AttributeProfile {
    pub fn as_v4(&self) -> V4AttributeProfile {
        V4AttributeProfile {
            tenant: self.tenant.clone(),
            id: self.id.clone(),
            contexts: self.contexts.clone(),
            filter_ids: self.filter_ids.clone(),
            activation_interval: self.activation_interval.clone(),
            attributes: self
                .attributes
                .iter()
                .map(|attr| V4Attribute {
                    filter_ids: attr.filter_ids.clone(),
                    field_name: attr.field_name.clone(),
                    attr_type: meta::VARIABLE.to_string(),
                    value: attr.substitute.clone(),
                })
                .collect(),
            blocker: self.blocker,
            weight: self.weight,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V4Attribute {
    pub filter_ids: Vec<String>,
    pub field_name: String,
    pub attr_type: String,
    pub value: RsrParsers,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V4AttributeProfile {
    pub tenant: String,
    pub id: String,
    pub contexts: Vec<String>,
    pub filter_ids: Vec<String>,
    pub activation_interval: Option<ActivationInterval>,
    pub attributes: Vec<V4Attribute>,
    pub blocker: bool,
    pub weight: f64,
}

legacy_record!(V4AttributeProfile, prefix::ATTRIBUTE_PROFILE);

impl V4AttributeProfile {
    pub fn as_attribute_profile(&self) -> Result<AttributeProfile, MigratorError> {
        let mut attributes = Vec::with_capacity(self.attributes.len());
        for attr in &self.attributes {
            attributes.push(Attribute {
                filter_ids: attr.filter_ids.clone(),
                path: format!("{}{NESTING_SEP}{}", meta::REQ, attr.field_name),
                attr_type: attr.attr_type.clone(),
                value: attr.value.qualified_under_request()?,
            });
        }
        Ok(AttributeProfile {
            tenant: self.tenant.clone(),
            id: self.id.clone(),
            contexts: self.contexts.clone(),
            filter_ids: self.filter_ids.clone(),
            activation_interval: self.activation_interval.clone(),
            attributes,
            blocker: self.blocker,
            weight: self.weight,
        })
    }
}

#[cfg(test)]
#[path = "attributes_tests.rs"]
mod tests;
