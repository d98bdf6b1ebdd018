// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Zero-means-unset conversion of legacy scalar fields.

use chrono::{DateTime, Utc};
use ocs_core::StringMap;

/// Legacy values whose zero value meant "not set".
pub trait Sparse: Sized {
    fn is_unset(&self) -> bool;

    fn non_empty(self) -> Option<Self> {
        if self.is_unset() {
            None
        } else {
            Some(self)
        }
    }
}

impl Sparse for String {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl Sparse for f64 {
    fn is_unset(&self) -> bool {
        *self == 0.0
    }
}

impl Sparse for bool {
    fn is_unset(&self) -> bool {
        !*self
    }
}

impl Sparse for StringMap {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

/// Legacy timestamps used the Unix epoch for "never".
pub fn non_zero_time(t: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    t.filter(|t| t.timestamp() != 0)
}

/// Parse a legacy `;`-list into a map, `None` when empty.
pub fn string_map(s: &str) -> Option<StringMap> {
    StringMap::parse(s).non_empty()
}

#[cfg(test)]
#[path = "sparse_tests.rs"]
mod tests;
