// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stats v1 (CDR stats), v2 (metrics with parameters) and v3 (old inline
//! filter IDs).

use super::{legacy_record, migrate_inline_filter_v2, ThresholdDecomposition, V2ActionTrigger};
use crate::MigratorError;
use chrono::{DateTime, SecondsFormat, Utc};
use ocs_core::consts::{meta, prefix, META_PREFIX};
use ocs_core::{
    ActivationInterval, Filter, FilterRule, MetricWithFilters, StatMetric, StatQueue,
    StatQueueProfile,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::time::Duration;

/// CDR stats queue configuration as stored by version 1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V1Stat {
    pub id: String,
    pub queue_length: i64,
    pub time_window: Duration,
    pub save_interval: Duration,
    pub metrics: Vec<String>,
    pub setup_interval: Vec<DateTime<Utc>>,
    pub tor: Vec<String>,
    pub cdr_host: Vec<String>,
    pub cdr_source: Vec<String>,
    pub req_type: Vec<String>,
    pub direction: Vec<String>,
    pub tenant: Vec<String>,
    pub category: Vec<String>,
    pub account: Vec<String>,
    pub subject: Vec<String>,
    pub destination_ids: Vec<String>,
    pub usage_interval: Vec<Duration>,
    pub pdd_interval: Vec<Duration>,
    pub supplier: Vec<String>,
    pub disconnect_cause: Vec<String>,
    pub mediation_run_ids: Vec<String>,
    pub rated_account: Vec<String>,
    pub rated_subject: Vec<String>,
    pub cost_interval: Vec<f64>,
    pub triggers: Vec<V2ActionTrigger>,
}

legacy_record!(V1Stat, prefix::CDR_STATS, id);

/// Records produced from one CDR stats configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsDecomposition {
    pub filter: Filter,
    pub profile: StatQueueProfile,
    pub queue: StatQueue,
    pub thresholds: Vec<ThresholdDecomposition>,
}

fn element(field: &str) -> String {
    format!("~{}.{field}", meta::REQ)
}

fn format_duration(d: &Duration) -> String {
    format!("{}s", d.as_secs_f64())
}

fn format_time(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// `[lower]` → `*gte lower`, `[lower, upper]` → `*lt upper`.
fn interval_rule<T>(
    rules: &mut Vec<FilterRule>,
    field: &str,
    bounds: &[T],
    render: impl Fn(&T) -> String,
) -> Result<(), MigratorError> {
    let (rule_type, bound) = match bounds {
        [lower] => (meta::GTE, lower),
        [_, upper] => (meta::LT, upper),
        _ => return Ok(()),
    };
    rules.push(FilterRule::new(rule_type, element(field), vec![render(bound)])?);
    Ok(())
}

fn string_rule(
    rules: &mut Vec<FilterRule>,
    rule_type: &str,
    field: &str,
    values: &[String],
) -> Result<(), MigratorError> {
    if !values.is_empty() {
        rules.push(FilterRule::new(rule_type, element(field), values.to_vec())?);
    }
    Ok(())
}

fn normalize_metric(metric: &str) -> String {
    let metric = if metric.starts_with(META_PREFIX) {
        metric.to_string()
    } else {
        format!("{META_PREFIX}{metric}")
    };
    metric.to_lowercase()
}

fn display<T: Display>(v: &T) -> String {
    v.to_string()
}

impl V1Stat {
    fn filter_rules(&self) -> Result<Vec<FilterRule>, MigratorError> {
        let mut rules = Vec::new();
        interval_rule(&mut rules, "SetupInterval", &self.setup_interval, format_time)?;
        for (field, values) in [
            ("ToR", &self.tor),
            ("CdrHost", &self.cdr_host),
            ("CdrSource", &self.cdr_source),
            ("ReqType", &self.req_type),
            ("Direction", &self.direction),
            ("Tenant", &self.tenant),
            ("Category", &self.category),
            ("Account", &self.account),
            ("Subject", &self.subject),
        ] {
            string_rule(&mut rules, meta::STRING, field, values)?;
        }
        string_rule(
            &mut rules,
            meta::DESTINATIONS,
            "Destination",
            &self.destination_ids,
        )?;
        interval_rule(&mut rules, "UsageInterval", &self.usage_interval, format_duration)?;
        interval_rule(&mut rules, "PddInterval", &self.pdd_interval, format_duration)?;
        for (field, values) in [
            ("Supplier", &self.supplier),
            ("DisconnectCause", &self.disconnect_cause),
            ("MediationRunIds", &self.mediation_run_ids),
            ("RatedAccount", &self.rated_account),
            ("RatedSubject", &self.rated_subject),
        ] {
            string_rule(&mut rules, meta::STRING, field, values)?;
        }
        interval_rule(&mut rules, "CostInterval", &self.cost_interval, display)?;
        Ok(rules)
    }

    pub fn as_stats(&self, default_tenant: &str) -> Result<StatsDecomposition, MigratorError> {
        let filter = Filter {
            tenant: default_tenant.to_string(),
            id: self.id.clone(),
            rules: self.filter_rules()?,
            activation_interval: None,
        };

        let mut metrics = Vec::with_capacity(self.metrics.len());
        let mut sq_metrics = BTreeMap::new();
        for metric in &self.metrics {
            let metric_id = normalize_metric(metric);
            sq_metrics.insert(metric_id.clone(), StatMetric::new(&metric_id, 0, Vec::new())?);
            metrics.push(MetricWithFilters {
                metric_id,
                filter_ids: Vec::new(),
            });
        }

        let profile = StatQueueProfile {
            tenant: default_tenant.to_string(),
            id: self.id.clone(),
            filter_ids: vec![self.id.clone()],
            activation_interval: None,
            queue_length: self.queue_length,
            ttl: None,
            min_items: 0,
            metrics,
            stored: !self.save_interval.is_zero(),
            blocker: false,
            weight: 0.0,
            threshold_ids: self.triggers.iter().map(|t| t.id.clone()).collect(),
        };
        let queue = StatQueue {
            tenant: default_tenant.to_string(),
            id: self.id.clone(),
            sq_items: Vec::new(),
            sq_metrics,
        };
        let thresholds = self
            .triggers
            .iter()
            .map(|t| t.as_threshold(default_tenant))
            .collect();

        Ok(StatsDecomposition {
            filter,
            profile,
            queue,
            thresholds,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V2MetricWithParams {
    pub metric_id: String,
    pub parameters: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V2StatQueueProfile {
    pub tenant: String,
    pub id: String,
    pub filter_ids: Vec<String>,
    pub activation_interval: Option<ActivationInterval>,
    pub queue_length: i64,
    pub ttl: Duration,
    pub metrics: Vec<V2MetricWithParams>,
    pub blocker: bool,
    pub stored: bool,
    pub weight: f64,
    pub min_items: i64,
    pub threshold_ids: Vec<String>,
}

legacy_record!(V2StatQueueProfile, prefix::STAT_QUEUE_PROFILE);

impl V2StatQueueProfile {
    /// Parameters fold into the metric ID as `metric#parameters`.
    pub fn as_v3(&self) -> V3StatQueueProfile {
        let metrics = self
            .metrics
            .iter()
            .map(|m| MetricWithFilters {
                metric_id: if m.parameters.is_empty() {
                    m.metric_id.clone()
                } else {
                    format!("{}#{}", m.metric_id, m.parameters)
                },
                filter_ids: Vec::new(),
            })
            .collect();
        V3StatQueueProfile {
            tenant: self.tenant.clone(),
            id: self.id.clone(),
            filter_ids: self.filter_ids.clone(),
            activation_interval: self.activation_interval.clone(),
            queue_length: self.queue_length,
            ttl: (!self.ttl.is_zero()).then_some(self.ttl),
            min_items: self.min_items,
            metrics,
            stored: self.stored,
            blocker: self.blocker,
            weight: self.weight,
            threshold_ids: self.threshold_ids.clone(),
        }
    }
}

/// Current shape with inline filters not yet rooted under `~*req`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V3StatQueueProfile {
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

legacy_record!(V3StatQueueProfile, prefix::STAT_QUEUE_PROFILE);

fn rewrite_filter_ids(ids: &[String]) -> Vec<String> {
    ids.iter().map(|f| migrate_inline_filter_v2(f)).collect()
}

impl V3StatQueueProfile {
    pub fn as_stat_queue_profile(&self) -> StatQueueProfile {
        StatQueueProfile {
            tenant: self.tenant.clone(),
            id: self.id.clone(),
            filter_ids: rewrite_filter_ids(&self.filter_ids),
            activation_interval: self.activation_interval.clone(),
            queue_length: self.queue_length,
            ttl: self.ttl,
            min_items: self.min_items,
            metrics: self
                .metrics
                .iter()
                .map(|m| MetricWithFilters {
                    metric_id: m.metric_id.clone(),
                    filter_ids: rewrite_filter_ids(&m.filter_ids),
                })
                .collect(),
            stored: self.stored,
            blocker: self.blocker,
            weight: self.weight,
            threshold_ids: self.threshold_ids.clone(),
        }
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
