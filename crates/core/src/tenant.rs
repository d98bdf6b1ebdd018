// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tenant-scoped identifiers and composite key helpers.

use crate::consts::CONCATENATED_KEY_SEP;
use std::fmt;

/// A `tenant:id` pair identifying a tenant-scoped record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TenantId {
    pub tenant: String,
    pub id: String,
}

impl TenantId {
    pub fn new(tenant: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            tenant: tenant.into(),
            id: id.into(),
        }
    }

    /// Parse `"tenant:id"`. The id may itself contain `:`.
    ///
    /// Returns `None` when there is no separator.
    pub fn parse(key: &str) -> Option<Self> {
        let (tenant, id) = key.split_once(CONCATENATED_KEY_SEP)?;
        Some(Self::new(tenant, id))
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.tenant, CONCATENATED_KEY_SEP, self.id)
    }
}

/// Join key parts with the `:` separator.
pub fn concatenated_key(parts: &[&str]) -> String {
    parts.join(CONCATENATED_KEY_SEP)
}

/// Fall back to `default_tenant` when `tenant` is empty or the `*any` marker.
pub fn tenant_or_default<'a>(tenant: &'a str, default_tenant: &'a str) -> &'a str {
    if tenant.is_empty() || tenant == crate::consts::meta::ANY {
        default_tenant
    } else {
        tenant
    }
}

#[cfg(test)]
#[path = "tenant_tests.rs"]
mod tests;
