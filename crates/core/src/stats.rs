// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stat queue profiles, queues and metric state.

use crate::consts::prefix;
use crate::timing::ActivationInterval;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported metric type <{0}>")]
pub struct UnsupportedMetric(pub String);

/// Metric families. A metric ID is the family optionally followed by
/// `#` and a parameter, e.g. `*sum#~*req.Usage`.
const METRIC_TYPES: &[&str] = &[
    "*asr", "*acd", "*tcd", "*acc", "*tcc", "*pdd", "*ddc", "*sum", "*average", "*distinct",
];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricWithFilters {
    pub metric_id: String,
    pub filter_ids: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatQueueProfile {
    pub tenant: String,
    pub id: String,
    pub filter_ids: Vec<String>,
    pub activation_interval: Option<ActivationInterval>,
    pub queue_length: i64,
    pub ttl: Option<Duration>,
    pub min_items: i64,
    pub metrics: Vec<MetricWithFilters>,
    pub stored: bool,
    pub blocker: bool,
    pub weight: f64,
    pub threshold_ids: Vec<String>,
}

crate::filtered_profile!(StatQueueProfile, prefix::STAT_QUEUE_PROFILE, "*stats");

/// Accumulated state of one metric.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatMetric {
    pub metric_id: String,
    pub filter_ids: Vec<String>,
    pub min_items: i64,
    pub sum: f64,
    pub count: i64,
}

impl StatMetric {
    /// Empty metric state, rejecting unknown metric families.
    pub fn new(
        metric_id: &str,
        min_items: i64,
        filter_ids: Vec<String>,
    ) -> Result<Self, UnsupportedMetric> {
        let family = metric_id.split('#').next().unwrap_or(metric_id);
        if !METRIC_TYPES.contains(&family) {
            return Err(UnsupportedMetric(metric_id.to_string()));
        }
        Ok(Self {
            metric_id: metric_id.to_string(),
            filter_ids,
            min_items,
            sum: 0.0,
            count: 0,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SqItem {
    pub event_id: String,
    pub expiry_time: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatQueue {
    pub tenant: String,
    pub id: String,
    pub sq_items: Vec<SqItem>,
    pub sq_metrics: BTreeMap<String, StatMetric>,
}

crate::tenant_entity!(StatQueue, prefix::STAT_QUEUE);

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
