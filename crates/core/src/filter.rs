// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named filters and the inline `type:element:values` filter syntax.

use crate::consts::{meta, prefix, CONCATENATED_KEY_SEP, META_PREFIX, PIPE_SEP};
use crate::timing::ActivationInterval;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unsupported filter type <{0}>")]
    UnsupportedType(String),
    #[error("filter type <{0}> requires an element")]
    MissingElement(String),
    #[error("filter type <{0}> requires values")]
    MissingValues(String),
}

/// Filter types understood by the rule engine, without the `*not` variants.
const RULE_TYPES: &[&str] = &[
    "*string",
    "*prefix",
    "*suffix",
    "*exists",
    "*empty",
    "*rsr",
    "*stats",
    "*resources",
    "*destinations",
    "*timings",
    "*lt",
    "*lte",
    "*gt",
    "*gte",
    "*eq",
    "*cronexp",
    "*regex",
    "*ipnet",
];

/// Types whose rules do not need values.
const VALUELESS_TYPES: &[&str] = &["*exists", "*empty"];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRule {
    pub rule_type: String,
    pub element: String,
    pub values: Vec<String>,
}

impl FilterRule {
    /// Build a validated rule.
    pub fn new(
        rule_type: &str,
        element: impl Into<String>,
        values: Vec<String>,
    ) -> Result<Self, FilterError> {
        let base = rule_type.strip_prefix("*not").map(|t| format!("*{t}"));
        let base = base.as_deref().unwrap_or(rule_type);
        if !RULE_TYPES.contains(&base) {
            return Err(FilterError::UnsupportedType(rule_type.to_string()));
        }
        let element = element.into();
        if element.is_empty() && !matches!(base, "*rsr" | "*stats" | "*resources") {
            return Err(FilterError::MissingElement(rule_type.to_string()));
        }
        if values.is_empty() && !VALUELESS_TYPES.contains(&base) {
            return Err(FilterError::MissingValues(rule_type.to_string()));
        }
        Ok(Self {
            rule_type: rule_type.to_string(),
            element,
            values,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub tenant: String,
    pub id: String,
    pub rules: Vec<FilterRule>,
    pub activation_interval: Option<ActivationInterval>,
}

crate::tenant_entity!(Filter, prefix::FILTER);

/// A filter ID written inline as `type:element:value|value`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineFilter {
    pub rule_type: String,
    pub element: String,
    pub values: Vec<String>,
}

impl InlineFilter {
    /// Parse an inline filter ID. Named filter references return `None`.
    pub fn parse(filter_id: &str) -> Option<Self> {
        if !filter_id.starts_with(META_PREFIX) {
            return None;
        }
        let mut parts = filter_id.splitn(3, CONCATENATED_KEY_SEP);
        let rule_type = parts.next()?;
        let element = parts.next()?;
        let values = parts.next()?;
        Some(Self {
            rule_type: rule_type.to_string(),
            element: element.to_string(),
            values: values.split(PIPE_SEP).map(String::from).collect(),
        })
    }

    pub fn into_rule(self) -> FilterRule {
        FilterRule {
            rule_type: self.rule_type,
            element: self.element,
            values: self.values,
        }
    }
}

/// Rule types whose values can be looked up through a filter index.
pub fn is_indexable(rule_type: &str) -> bool {
    rule_type == meta::STRING || rule_type == meta::PREFIX
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
