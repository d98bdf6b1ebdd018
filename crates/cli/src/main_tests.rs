// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use clap::error::ErrorKind;
use ocs_storage::{DbKind, Encoding};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn migrate_splits_exec_tags() {
    let cli = parse(&["ocs-migrate", "migrate", "--exec", "*accounts,*filters"]);
    let Some(Commands::Migrate(args)) = cli.command else {
        panic!("expected migrate");
    };
    assert_eq!(args.exec, vec!["*accounts", "*filters"]);
    assert!(!args.dry_run);
    assert_eq!(cli.output, OutputFormat::Text);
}

#[test]
fn migrate_requires_exec() {
    let err = Cli::try_parse_from(["ocs-migrate", "migrate"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn migrate_parses_store_flags() {
    let cli = parse(&[
        "ocs-migrate",
        "migrate",
        "--exec",
        "*users",
        "--dry-run",
        "--in-kind",
        "document",
        "--in-path",
        "/data/in",
        "--out-encoding",
        "*json",
        "--users-filters",
        "Account,Subject",
        "-o",
        "json",
    ]);
    let Some(Commands::Migrate(args)) = cli.command else {
        panic!("expected migrate");
    };
    assert!(args.dry_run);
    assert_eq!(args.in_kind, Some(DbKind::Document));
    assert_eq!(args.in_path, Some(PathBuf::from("/data/in")));
    assert_eq!(args.out_encoding, Some(Encoding::Json));
    assert_eq!(
        args.users_filters,
        Some(vec!["Account".to_string(), "Subject".to_string()])
    );
    assert_eq!(cli.output, OutputFormat::Json);
}

#[yare::parameterized(
    kind = { "--in-kind", "sql" },
    encoding = { "--out-encoding", "msgpack" },
)]
fn bad_store_values_are_rejected(flag: &str, value: &str) {
    let err = Cli::try_parse_from(["ocs-migrate", "migrate", "--exec", "*accounts", flag, value])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn global_flags_follow_subcommand() {
    let cli = parse(&[
        "ocs-migrate",
        "versions",
        "--path",
        "/data/store.snap",
        "--config",
        "/etc/ocs/migrator.toml",
        "--log-level",
        "debug",
    ]);
    assert_eq!(cli.config, Some(PathBuf::from("/etc/ocs/migrator.toml")));
    assert_eq!(cli.log_level.as_deref(), Some("debug"));
    let Some(Commands::Versions(args)) = cli.command else {
        panic!("expected versions");
    };
    assert_eq!(args.path, Some(PathBuf::from("/data/store.snap")));
    assert_eq!(args.kind, None);
}

#[test]
fn version_flag() {
    let err = Cli::try_parse_from(["ocs-migrate", "--version"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}

#[test]
fn format_error_skips_redundant_chain() {
    let err = anyhow::Error::new(std::io::Error::other("disk full")).context("disk full");
    assert_eq!(format_error(&err), "disk full");
}

#[test]
fn format_error_renders_distinct_causes() {
    let err = anyhow::Error::new(std::io::Error::other("disk full"))
        .context("failed to close stores");
    assert_eq!(
        format_error(&err),
        "failed to close stores\n\nCaused by:\n    0: disk full"
    );
}
