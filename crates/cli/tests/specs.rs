//! Behavioral tests for the ocs-migrate CLI.
//!
//! These tests are black-box: they invoke the binary and verify stdout,
//! stderr, exit codes and the stores left on disk.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/config.rs"]
mod cli_config;
#[path = "specs/cli/help.rs"]
mod cli_help;
#[path = "specs/cli/migrate.rs"]
mod cli_migrate;
#[path = "specs/cli/versions.rs"]
mod cli_versions;
