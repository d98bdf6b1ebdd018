// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ocs-migrate tags`

use crate::output::{self, OutputFormat};
use anyhow::Result;

pub fn handle(format: OutputFormat) -> Result<()> {
    output::print_tags(ocs_migrator::supported_tags(), format)
}
