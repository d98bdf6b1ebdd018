// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering of command results.

use crate::color;
use crate::table::{KeyTable, ValueColumn};
use clap::ValueEnum;
use ocs_core::Versions;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Outcome of one `migrate` invocation.
#[derive(Debug, Serialize)]
pub struct MigrationReport<'a> {
    pub tags: &'a [String],
    pub dry_run: bool,
    pub same_data_db: bool,
    pub stats: &'a BTreeMap<String, i64>,
    pub migrated: i64,
    pub error: Option<String>,
}

impl<'a> MigrationReport<'a> {
    pub fn new(
        tags: &'a [String],
        options: &ocs_migrator::MigratorOptions,
        stats: &'a BTreeMap<String, i64>,
        error: Option<String>,
    ) -> Self {
        Self {
            tags,
            dry_run: options.dry_run,
            same_data_db: options.same_data_db,
            stats,
            migrated: stats.values().sum(),
            error,
        }
    }

    /// Keys with at least one record written, or every key when nothing was.
    pub fn rows(&self) -> Vec<(String, Vec<String>)> {
        let touched: Vec<_> = self.stats.iter().filter(|(_, n)| **n > 0).collect();
        let rows = if touched.is_empty() {
            self.stats.iter().collect()
        } else {
            touched
        };
        rows.into_iter()
            .map(|(key, n)| (key.clone(), vec![n.to_string()]))
            .collect()
    }

    fn table(&self) -> KeyTable {
        let mut table = KeyTable::new(vec![ValueColumn::count("MIGRATED")]);
        for (key, values) in self.rows() {
            table.row(key, values);
        }
        table
    }

    pub fn summary(&self) -> String {
        match (&self.error, self.dry_run) {
            (Some(_), _) => format!("{} record(s) migrated before failure", self.migrated),
            (None, true) => "Dry run complete".to_string(),
            (None, false) => format!("{} record(s) migrated", self.migrated),
        }
    }
}

pub fn print_report(report: &MigrationReport<'_>, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if report.dry_run {
                println!("Dry run: no changes made\n");
            }
            report.table().render(&mut std::io::stdout())?;
            println!("\n{}", color::header(&report.summary()));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}

/// Stored version map against the versions this build writes.
#[derive(Debug, Serialize)]
pub struct VersionsReport<'a> {
    pub stored: Option<&'a Versions>,
    pub current: &'a Versions,
    pub outdated: Vec<String>,
}

impl<'a> VersionsReport<'a> {
    pub fn new(stored: Option<&'a Versions>, current: &'a Versions) -> Self {
        let outdated = stored.map(|s| s.outdated(current)).unwrap_or_default();
        Self {
            stored,
            current,
            outdated,
        }
    }

    /// One row per key known to either map.
    pub fn rows(&self) -> Vec<(String, Vec<String>)> {
        let mut keys: Vec<&str> = self.current.iter().map(|(k, _)| k).collect();
        if let Some(stored) = self.stored {
            keys.extend(stored.iter().map(|(k, _)| k));
        }
        keys.sort_unstable();
        keys.dedup();
        let mut rows = Vec::with_capacity(keys.len());
        for key in keys {
            let stored = self
                .stored
                .and_then(|s| s.get(key))
                .map_or_else(|| "-".to_string(), |v| v.to_string());
            let current = self
                .current
                .get(key)
                .map_or_else(|| "-".to_string(), |v| v.to_string());
            rows.push((key.to_string(), vec![stored, current]));
        }
        rows
    }

    fn table(&self) -> KeyTable {
        let mut table = KeyTable::new(vec![
            ValueColumn::plain("STORED"),
            ValueColumn::muted("CURRENT"),
        ]);
        for (key, values) in self.rows() {
            table.row(key, values);
        }
        table
    }
}

pub fn print_versions(report: &VersionsReport<'_>, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if report.stored.is_none() {
                println!("No versions stored\n");
            }
            report.table().render(&mut std::io::stdout())?;
            if report.stored.is_some() {
                if report.outdated.is_empty() {
                    println!("\n{}", color::header("Up to date"));
                } else {
                    println!(
                        "\n{} {}",
                        color::header("Outdated:"),
                        report.outdated.join(", ")
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}

pub fn print_tags<'a>(
    tags: impl Iterator<Item = &'a str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let tags: Vec<&str> = tags.collect();
    match format {
        OutputFormat::Text => {
            for tag in tags {
                println!("{tag}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tags)?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
