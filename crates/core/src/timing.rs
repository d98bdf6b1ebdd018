// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time windows and recurring timings.

use crate::consts::{meta, prefix};
use crate::entity::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validity window of a profile. Open ends are `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivationInterval {
    pub activation_time: Option<DateTime<Utc>>,
    pub expiry_time: Option<DateTime<Utc>>,
}

impl ActivationInterval {
    /// `None` when both ends are open.
    pub fn from_bounds(
        activation_time: Option<DateTime<Utc>>,
        expiry_time: Option<DateTime<Utc>>,
    ) -> Option<Self> {
        if activation_time.is_none() && expiry_time.is_none() {
            return None;
        }
        Some(Self {
            activation_time,
            expiry_time,
        })
    }
}

/// A recurring calendar timing. Empty lists match everything.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub id: String,
    pub years: Vec<i32>,
    pub months: Vec<u32>,
    pub month_days: Vec<u32>,
    pub week_days: Vec<u32>,
    pub start_time: String,
    pub end_time: String,
}

impl Timing {
    /// One-shot timings fire immediately on load.
    pub fn is_asap(&self) -> bool {
        self.start_time == meta::ASAP
    }
}

impl Entity for Timing {
    const PREFIX: &'static str = prefix::TIMING;

    fn key_id(&self) -> String {
        self.id.clone()
    }
}

/// Timing plus the weight used to order overlapping intervals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RateInterval {
    pub timing: Timing,
    pub weight: f64,
}
