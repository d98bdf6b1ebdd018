// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Set-like `id → enabled` map used for balance selectors and plan members.

use crate::consts::IN_FIELD_SEP;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parsed form of `"a;b;!c"`: `{a: true, b: true, c: false}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringMap(BTreeMap<String, bool>);

impl StringMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `;`-separated list. A leading `!` marks a negated entry.
    /// Empty input and empty segments produce no entries.
    pub fn parse(s: &str) -> Self {
        let mut map = BTreeMap::new();
        for item in s.split(IN_FIELD_SEP) {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            match item.strip_prefix('!') {
                Some(negated) => map.insert(negated.to_string(), false),
                None => map.insert(item.to_string(), true),
            };
        }
        Self(map)
    }

    pub fn insert(&mut self, key: impl Into<String>, enabled: bool) {
        self.0.insert(key.into(), enabled);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Keys in order, including negated ones.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Keys as rule values, negated entries rendered with a leading `!`.
    pub fn to_values(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|(k, enabled)| if *enabled { k.clone() } else { format!("!{k}") })
            .collect()
    }

    pub fn extend(&mut self, other: &StringMap) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), *v);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for StringMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(|k| (k.into(), true)).collect())
    }
}

#[cfg(test)]
#[path = "string_map_tests.rs"]
mod tests;
