//! CLI help output
//!
//! Verify help text and the tag listing.

use crate::prelude::*;

#[test]
fn no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("migrate")
        .stdout_has("versions")
        .stdout_has("tags");
}

#[test]
fn migrate_help_shows_store_flags() {
    cli()
        .args(&["migrate", "--help"])
        .passes()
        .stdout_has("--exec")
        .stdout_has("--in-path")
        .stdout_has("--out-encoding")
        .stdout_has("--dry-run");
}

#[test]
fn tags_lists_every_task() {
    cli()
        .args(&["tags"])
        .passes()
        .stdout_has("*accounts\n")
        .stdout_has("*filters\n")
        .stdout_has("*set_versions\n")
        .stdout_has("*suppliers\n");
}

#[test]
fn tags_as_json() {
    let run = cli().args(&["tags", "-o", "json"]).passes();
    let tags = run.json();
    let tags = tags.as_array().unwrap();
    assert!(tags.iter().any(|t| t == "*cdr_stats"));
    assert!(tags.iter().any(|t| t == "*thresholds"));
}

#[test]
fn unknown_subcommand_fails() {
    let out = cli().args(&["frobnicate"]).command().output().unwrap();
    assert!(!out.status.success());
}
