// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! RSR value expressions.
//!
//! A rule is either a static value (`"1001"`) or a dynamic reference
//! (`"~*req.Account"`) optionally followed by search-and-replace segments
//! (`:s/regex/replacement/`), a converter block (`{*duration_seconds}`) and a
//! filter block (`(value&other)`). Rules are kept as their source text; parsing
//! validates the structure and compiles every regex once.

use crate::consts::{DYNAMIC_DATA_PREFIX, IN_FIELD_SEP, META_PREFIX, NESTING_SEP};
use crate::consts::meta;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RsrError {
    #[error("invalid search regexp <{pattern}> in rule <{rule}>: {reason}")]
    InvalidRegex {
        rule: String,
        pattern: String,
        reason: String,
    },
    #[error("invalid RSR rule <{0}>")]
    InvalidRule(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct SearchReplace {
    pattern: String,
    replacement: String,
}

/// One parsed RSR rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsrParser {
    rules: String,
    path: Option<String>,
    search_replace: Vec<SearchReplace>,
}

impl RsrParser {
    pub fn parse(rule: &str) -> Result<Self, RsrError> {
        let Some(body) = rule.strip_prefix(DYNAMIC_DATA_PREFIX) else {
            return Ok(Self {
                rules: rule.to_string(),
                path: None,
                search_replace: Vec::new(),
            });
        };

        let path_end = [":s/", "{*", "("]
            .iter()
            .filter_map(|sep| body.find(sep))
            .min()
            .unwrap_or(body.len());
        let path = &body[..path_end];
        if path.is_empty() {
            return Err(RsrError::InvalidRule(rule.to_string()));
        }

        let mut rest = &body[path_end..];
        let mut search_replace = Vec::new();
        while let Some(seg) = rest.strip_prefix(":s/") {
            let (pattern, after) = seg
                .split_once('/')
                .ok_or_else(|| RsrError::InvalidRule(rule.to_string()))?;
            let (replacement, after) = after
                .split_once('/')
                .ok_or_else(|| RsrError::InvalidRule(rule.to_string()))?;
            Regex::new(pattern).map_err(|e| RsrError::InvalidRegex {
                rule: rule.to_string(),
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
            search_replace.push(SearchReplace {
                pattern: pattern.to_string(),
                replacement: replacement.to_string(),
            });
            rest = after;
        }
        if let Some(conv) = rest.strip_prefix("{*") {
            let end = conv
                .find('}')
                .ok_or_else(|| RsrError::InvalidRule(rule.to_string()))?;
            rest = &conv[end + 1..];
        }
        if !rest.is_empty() && !(rest.starts_with('(') && rest.ends_with(')')) {
            return Err(RsrError::InvalidRule(rule.to_string()));
        }

        Ok(Self {
            rules: rule.to_string(),
            path: Some(path.to_string()),
            search_replace,
        })
    }

    /// Source text of the rule.
    pub fn rules(&self) -> &str {
        &self.rules
    }

    /// Referenced path without the `~` marker, `None` for static values.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn is_dynamic(&self) -> bool {
        self.path.is_some()
    }

    /// Number of `:s/…/…/` segments.
    pub fn search_replace_count(&self) -> usize {
        self.search_replace.len()
    }

    /// Re-root a bare dynamic path (`~Account`) under the request (`~*req.Account`).
    pub fn qualified_under_request(&self) -> Result<Self, RsrError> {
        match &self.path {
            Some(path) if !path.starts_with(META_PREFIX) => {
                let tail = &self.rules[DYNAMIC_DATA_PREFIX.len()..];
                Self::parse(&format!(
                    "{DYNAMIC_DATA_PREFIX}{}{NESTING_SEP}{tail}",
                    meta::REQ
                ))
            }
            _ => Ok(self.clone()),
        }
    }
}

/// An ordered list of rules, stored as their source strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct RsrParsers(Vec<RsrParser>);

impl RsrParsers {
    /// Parse a `;`-separated rule list. Empty input yields no rules.
    pub fn parse(s: &str) -> Result<Self, RsrError> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        s.split(IN_FIELD_SEP)
            .map(RsrParser::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RsrParser> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply [`RsrParser::qualified_under_request`] to every rule.
    pub fn qualified_under_request(&self) -> Result<Self, RsrError> {
        self.0
            .iter()
            .map(RsrParser::qualified_under_request)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for RsrParsers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules: Vec<&str> = self.0.iter().map(RsrParser::rules).collect();
        f.write_str(&rules.join(IN_FIELD_SEP))
    }
}

impl TryFrom<Vec<String>> for RsrParsers {
    type Error = RsrError;

    fn try_from(rules: Vec<String>) -> Result<Self, Self::Error> {
        rules
            .iter()
            .map(|r| RsrParser::parse(r))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<RsrParsers> for Vec<String> {
    fn from(parsers: RsrParsers) -> Self {
        parsers.0.into_iter().map(|p| p.rules).collect()
    }
}

#[cfg(test)]
#[path = "rsr_tests.rs"]
mod tests;
