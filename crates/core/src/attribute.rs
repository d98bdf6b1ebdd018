// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Attribute profiles: conditional field rewrites applied to events.

use crate::consts::prefix;
use crate::rsr::RsrParsers;
use crate::timing::ActivationInterval;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub filter_ids: Vec<String>,
    /// Destination path, e.g. `*req.Account`.
    pub path: String,
    /// How `value` is applied, e.g. `*variable`.
    pub attr_type: String,
    pub value: RsrParsers,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeProfile {
    pub tenant: String,
    pub id: String,
    pub contexts: Vec<String>,
    pub filter_ids: Vec<String>,
    pub activation_interval: Option<ActivationInterval>,
    pub attributes: Vec<Attribute>,
    pub blocker: bool,
    pub weight: f64,
}

crate::filtered_profile!(AttributeProfile, prefix::ATTRIBUTE_PROFILE, "*attributes");
