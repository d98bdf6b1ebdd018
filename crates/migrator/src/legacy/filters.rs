// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filters v1–v4 and the inline filter ID rewriters.
//!
//! Versions 1 to 3 share one shape (`field_name`); they differ only in how
//! the field is qualified. Version 4 is the current shape with `*rsr`
//! rules still carrying several values per rule.

use super::legacy_record;
use crate::MigratorError;
use ocs_core::consts::{
    meta, prefix, AND_SEP, CONCATENATED_KEY_SEP, DYNAMIC_DATA_PREFIX, FILTER_VAL_END,
    FILTER_VAL_START, IN_FIELD_SEP, META_PREFIX, NESTING_SEP, PIPE_SEP,
};
use ocs_core::{ActivationInterval, Filter, FilterRule};
use serde::{Deserialize, Serialize};

/// Filter types whose element is not a request field.
pub const EXCLUDED_FILTER_TYPES: &[&str] = &[
    meta::RSR,
    meta::STATS,
    meta::RESOURCES,
    meta::NOT_RSR,
    meta::NOT_STATS,
    meta::NOT_RESOURCES,
];

/// Roots a field may already be qualified under.
const QUALIFIED_ROOTS: &[&str] = &[
    meta::REQ,
    meta::VARS,
    meta::CGREQ,
    meta::CGREP,
    meta::REP,
    meta::ACT,
];

fn under_request(field: &str) -> String {
    format!("{DYNAMIC_DATA_PREFIX}{}{NESTING_SEP}{field}", meta::REQ)
}

fn is_qualified(field: &str) -> bool {
    field
        .strip_prefix(DYNAMIC_DATA_PREFIX)
        .is_some_and(|f| QUALIFIED_ROOTS.iter().any(|root| f.starts_with(root)))
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1FilterRule {
    pub rule_type: String,
    pub field_name: String,
    pub values: Vec<String>,
}

/// Filter as stored by versions 1, 2 and 3.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1Filter {
    pub tenant: String,
    pub id: String,
    pub rules: Vec<V1FilterRule>,
    pub activation_interval: Option<ActivationInterval>,
}

legacy_record!(V1Filter, prefix::FILTER);

impl V1Filter {
    fn with_rules(&self, rules: Vec<FilterRule>) -> V4Filter {
        V4Filter {
            tenant: self.tenant.clone(),
            id: self.id.clone(),
            rules,
            activation_interval: self.activation_interval.clone(),
        }
    }

    /// Version 1: bare field names gain the `~*req.` root.
    pub fn as_v4_from_v1(&self) -> V4Filter {
        let rules = self
            .rules
            .iter()
            .map(|rule| {
                let keep = rule.field_name.is_empty()
                    || rule.field_name.starts_with(DYNAMIC_DATA_PREFIX)
                    || EXCLUDED_FILTER_TYPES.contains(&rule.rule_type.as_str());
                FilterRule {
                    rule_type: rule.rule_type.clone(),
                    element: if keep {
                        rule.field_name.clone()
                    } else {
                        under_request(&rule.field_name)
                    },
                    values: rule.values.clone(),
                }
            })
            .collect();
        self.with_rules(rules)
    }

    /// Version 2: `~Field` becomes `~*req.Field`; `*rsr` values are
    /// qualified instead of the element.
    pub fn as_v4_from_v2(&self) -> V4Filter {
        let rules = self
            .rules
            .iter()
            .map(|rule| {
                let mut out = FilterRule {
                    rule_type: rule.rule_type.clone(),
                    element: rule.field_name.clone(),
                    values: rule.values.clone(),
                };
                let is_rsr = rule.rule_type == meta::RSR;
                if (rule.field_name.is_empty() && !is_rsr) || is_qualified(&rule.field_name) {
                    return out;
                }
                if is_rsr {
                    out.values = rule
                        .values
                        .iter()
                        .map(|v| match v.strip_prefix(DYNAMIC_DATA_PREFIX) {
                            _ if is_qualified(v) => v.clone(),
                            Some(field) => under_request(field),
                            None => under_request(v),
                        })
                        .collect();
                } else {
                    let field = rule
                        .field_name
                        .strip_prefix(DYNAMIC_DATA_PREFIX)
                        .unwrap_or(&rule.field_name);
                    out.element = under_request(field);
                }
                out
            })
            .collect();
        self.with_rules(rules)
    }

    /// Version 3 only renamed the field.
    pub fn as_v4_from_v3(&self) -> V4Filter {
        let rules = self
            .rules
            .iter()
            .map(|rule| FilterRule {
                rule_type: rule.rule_type.clone(),
                element: rule.field_name.clone(),
                values: rule.values.clone(),
            })
            .collect();
        self.with_rules(rules)
    }
}

/// Filter as stored by version 4.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V4Filter {
    pub tenant: String,
    pub id: String,
    pub rules: Vec<FilterRule>,
    pub activation_interval: Option<ActivationInterval>,
}

legacy_record!(V4Filter, prefix::FILTER);

impl V4Filter {
    /// Split every `*rsr`/`*notrsr` rule into one rule per RSR value.
    pub fn as_filter(&self) -> Result<Filter, MigratorError> {
        let mut rules = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            if rule.rule_type != meta::RSR && rule.rule_type != meta::NOT_RSR {
                rules.push(rule.clone());
                continue;
            }
            for value in &rule.values {
                let (element, values) =
                    migrate_rsr_filter_v4(value).map_err(|reason| MigratorError::InvalidRecord {
                        key: format!("{}{}:{}", prefix::FILTER, self.tenant, self.id),
                        reason: format!("{reason} for filter<{}:{}>", self.tenant, self.id),
                    })?;
                if values.is_empty() {
                    continue;
                }
                rules.push(FilterRule {
                    rule_type: rule.rule_type.clone(),
                    element,
                    values,
                });
            }
        }
        Ok(Filter {
            tenant: self.tenant.clone(),
            id: self.id.clone(),
            rules,
            activation_interval: self.activation_interval.clone(),
        })
    }
}

/// Split an RSR filter `~Field:s/x/y/{*conv}(v1&v2)` into its element and
/// values. Values without a `(…)` tail are not filters: both parts are empty.
pub fn migrate_rsr_filter_v4(rsr: &str) -> Result<(String, Vec<String>), String> {
    if !rsr.ends_with(FILTER_VAL_END) {
        return Ok((String::new(), Vec::new()));
    }
    let start = match rsr.find(FILTER_VAL_START) {
        Some(i) if i >= 1 => i,
        _ => return Err(format!("invalid RSRFilter start rule in string: <{rsr}> ")),
    };
    let values = rsr[start + 1..rsr.len() - 1]
        .split(AND_SEP)
        .map(String::from)
        .collect();
    let mut element = &rsr[..start];
    if let Some(conv) = element.find("{*") {
        if !element.ends_with('}') {
            return Err(format!("invalid converter terminator in rule: <{element}>"));
        }
        element = &element[..conv];
    }
    if element.starts_with(DYNAMIC_DATA_PREFIX) && element.len() > 1 {
        if let Some(cut) = element.find(":s/") {
            element = &element[..cut];
        }
    }
    Ok((element.to_string(), values))
}

fn split_inline(filter_id: &str) -> Option<Vec<&str>> {
    if filter_id.is_empty() || !filter_id.starts_with(META_PREFIX) {
        return None;
    }
    let parts: Vec<&str> = filter_id.split(CONCATENATED_KEY_SEP).collect();
    (parts.len() >= 3).then_some(parts)
}

/// Rewrite a version 1 inline filter ID (`*string:Account:1001`).
pub fn migrate_inline_filter(filter_id: &str) -> String {
    let Some(parts) = split_inline(filter_id) else {
        return filter_id.to_string();
    };
    if parts[1].starts_with(DYNAMIC_DATA_PREFIX) || EXCLUDED_FILTER_TYPES.contains(&parts[0]) {
        return filter_id.to_string();
    }
    format!(
        "{}:{}:{}",
        parts[0],
        under_request(parts[1]),
        parts[2..].join(CONCATENATED_KEY_SEP)
    )
}

/// Rewrite a version 2 inline filter ID (`*string:~Account:1001`).
pub fn migrate_inline_filter_v2(filter_id: &str) -> String {
    let Some(mut parts) = split_inline(filter_id) else {
        return filter_id.to_string();
    };
    if !parts[1].is_empty() && is_qualified(parts[1]) {
        return filter_id.to_string();
    }
    if parts[0] != meta::RSR {
        let field = parts[1].strip_prefix(DYNAMIC_DATA_PREFIX).unwrap_or(parts[1]);
        return format!(
            "{}:{}:{}",
            parts[0],
            under_request(field),
            parts[2..].join(CONCATENATED_KEY_SEP)
        );
    }
    if is_qualified(parts[2]) {
        return filter_id.to_string();
    }
    parts[2] = parts[2].strip_prefix(DYNAMIC_DATA_PREFIX).unwrap_or(parts[2]);
    format!(
        "{}::{}",
        parts[0],
        under_request(&parts[2..].join(CONCATENATED_KEY_SEP))
    )
}

/// Rewrite version 4 inline filter IDs: `*rsr::a(x);b(y)` becomes one
/// `*rsr:el:vals` ID per RSR value. IDs already in element form are kept.
pub fn migrate_inline_filter_v4(filter_ids: &[String]) -> Result<Vec<String>, String> {
    let mut out = Vec::with_capacity(filter_ids.len());
    for filter_id in filter_ids {
        let legacy = [meta::RSR, meta::NOT_RSR].into_iter().find_map(|t| {
            filter_id
                .strip_prefix(t)
                .and_then(|rest| rest.strip_prefix("::"))
                .map(|body| (t, body))
        });
        let Some((rule_type, body)) = legacy else {
            out.push(filter_id.clone());
            continue;
        };
        for value in body.split(IN_FIELD_SEP) {
            let (element, values) = migrate_rsr_filter_v4(value)?;
            if values.is_empty() {
                continue;
            }
            out.push(format!("{rule_type}:{element}:{}", values.join(PIPE_SEP)));
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "filters_tests.rs"]
mod tests;
