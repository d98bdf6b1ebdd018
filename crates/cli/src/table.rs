// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Key-per-row tables for version maps and migration stats.
//!
//! The first column is always the version key, left-aligned. Every other
//! column holds a number (or `-`) and is right-aligned. Color is applied
//! after padding so escape codes never count towards a width.

use std::io::{self, Write};

use crate::color;

/// Header of the key column.
const KEY_HEADER: &str = "KEY";

/// Column separator: double space.
const SEP: &str = "  ";

/// How a value cell is styled once padded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellStyle {
    Plain,
    /// Reference values shown next to the interesting ones.
    Muted,
    /// Record counts: zero muted, anything else green.
    Count,
}

/// A right-aligned value column.
#[derive(Clone, Copy, Debug)]
pub struct ValueColumn {
    pub name: &'static str,
    pub style: CellStyle,
}

impl ValueColumn {
    pub fn plain(name: &'static str) -> Self {
        Self { name, style: CellStyle::Plain }
    }

    pub fn muted(name: &'static str) -> Self {
        Self { name, style: CellStyle::Muted }
    }

    pub fn count(name: &'static str) -> Self {
        Self { name, style: CellStyle::Count }
    }
}

pub struct KeyTable {
    columns: Vec<ValueColumn>,
    rows: Vec<(String, Vec<String>)>,
    colorize: bool,
}

impl KeyTable {
    pub fn new(columns: Vec<ValueColumn>) -> Self {
        Self::with_color(columns, color::should_colorize())
    }

    pub fn with_color(columns: Vec<ValueColumn>, colorize: bool) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            colorize,
        }
    }

    /// Add a row. Missing values render as blanks.
    pub fn row(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.rows.push((key.into(), values));
    }

    /// Header plus rows. An empty table writes nothing.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let key_width = self
            .rows
            .iter()
            .map(|(key, _)| key.len())
            .fold(KEY_HEADER.len(), usize::max);
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|(_, values)| values.get(i).map(String::len))
                    .fold(col.name.len(), usize::max)
            })
            .collect();

        let mut header = vec![self.header(&format!("{KEY_HEADER:<key_width$}"))];
        for (col, width) in self.columns.iter().zip(&widths) {
            header.push(self.header(&format!("{:>width$}", col.name)));
        }
        writeln!(out, "{}", header.join(SEP))?;

        for (key, values) in &self.rows {
            let mut cells = vec![format!("{key:<key_width$}")];
            for (i, (col, width)) in self.columns.iter().zip(&widths).enumerate() {
                let value = values.get(i).map_or("", String::as_str);
                cells.push(self.stylize(&format!("{value:>width$}"), col.style));
            }
            writeln!(out, "{}", cells.join(SEP))?;
        }
        Ok(())
    }

    fn header(&self, text: &str) -> String {
        if self.colorize {
            color::apply_header(text)
        } else {
            text.to_string()
        }
    }

    fn stylize(&self, text: &str, style: CellStyle) -> String {
        if !self.colorize {
            return text.to_string();
        }
        match style {
            CellStyle::Plain => text.to_string(),
            CellStyle::Muted => color::apply_muted(text),
            CellStyle::Count => color::apply_count(text),
        }
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
