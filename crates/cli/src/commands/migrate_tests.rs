// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use ocs_core::consts::version_key as vk;
use ocs_core::{Destination, Versions};
use ocs_storage::DbConfig;
use similar_asserts::assert_eq;
use tempfile::tempdir;

fn args(exec: &[&str]) -> MigrateArgs {
    MigrateArgs {
        exec: exec.iter().map(|t| t.to_string()).collect(),
        dry_run: false,
        in_kind: None,
        in_path: None,
        in_encoding: None,
        out_kind: None,
        out_path: None,
        out_encoding: None,
        default_tenant: None,
        users_filters: None,
    }
}

fn destination() -> Destination {
    Destination {
        id: "DST_DE".into(),
        prefixes: vec!["+49".into()],
    }
}

fn seed(db: &DbConfig, versions: Option<Versions>) {
    let dm = db.open().unwrap();
    if let Some(versions) = versions {
        dm.set_versions(&versions, true).unwrap();
    }
    dm.set(&destination()).unwrap();
    dm.close().unwrap();
}

fn file_stores(dir: &std::path::Path) -> (DbConfig, DbConfig) {
    (
        DbConfig::new(DbKind::KeyValue, Some(dir.join("in.snap")), Encoding::Binary),
        DbConfig::new(DbKind::Document, Some(dir.join("out")), Encoding::Json),
    )
}

#[test]
fn flags_override_config() {
    let mut config = MigratorConfig::default();
    config.migrator.users_filters = vec!["Subject".into()];
    let mut a = args(&["*users"]);
    a.dry_run = true;
    a.out_kind = Some(DbKind::Document);
    a.out_path = Some("/data/out".into());
    a.default_tenant = Some("itsyscom.com".into());
    a.apply(&mut config);

    assert!(config.migrator.dry_run);
    assert_eq!(config.migrator.default_tenant, "itsyscom.com");
    assert_eq!(config.migrator.users_filters, vec!["Subject".to_string()]);
    assert_eq!(
        config.output,
        DbConfig::new(DbKind::Document, Some("/data/out".into()), Encoding::Binary)
    );
    assert_eq!(config.input, DbConfig::default());
}

#[test]
fn dry_run_flag_cannot_be_unset_by_absence() {
    let mut config = MigratorConfig::default();
    config.migrator.dry_run = true;
    args(&["*accounts"]).apply(&mut config);
    assert!(config.migrator.dry_run);
}

#[test]
fn moves_records_between_file_stores() {
    let dir = tempdir().unwrap();
    let (input, output) = file_stores(dir.path());
    seed(&input, Some([(vk::DESTINATIONS, 1)].into_iter().collect()));

    let config = MigratorConfig {
        input: input.clone(),
        output: output.clone(),
        ..MigratorConfig::default()
    };
    handle(args(&["*destinations"]), config, OutputFormat::Json).unwrap();

    let dm_out = output.open().unwrap();
    assert_eq!(dm_out.get::<Destination>("DST_DE").unwrap(), Some(destination()));
    assert_eq!(
        dm_out.get_versions().unwrap().and_then(|v| v.get(vk::DESTINATIONS)),
        Some(1)
    );
    let dm_in = input.open().unwrap();
    assert_eq!(dm_in.get::<Destination>("DST_DE").unwrap(), None);
}

#[test]
fn dry_run_leaves_both_stores_alone() {
    let dir = tempdir().unwrap();
    let (input, output) = file_stores(dir.path());
    seed(&input, Some([(vk::DESTINATIONS, 1)].into_iter().collect()));

    let config = MigratorConfig {
        input: input.clone(),
        output: output.clone(),
        ..MigratorConfig::default()
    };
    let mut a = args(&["*destinations"]);
    a.dry_run = true;
    handle(a, config, OutputFormat::Text).unwrap();

    assert_eq!(output.open().unwrap().get_versions().unwrap(), None);
    assert_eq!(
        input.open().unwrap().get::<Destination>("DST_DE").unwrap(),
        Some(destination())
    );
}

#[test]
fn unversioned_input_fails() {
    let dir = tempdir().unwrap();
    let (input, output) = file_stores(dir.path());
    seed(&input, None);

    let config = MigratorConfig {
        input,
        output,
        ..MigratorConfig::default()
    };
    let err = handle(args(&["*destinations"]), config, OutputFormat::Text).unwrap_err();
    assert_eq!(err.to_string(), "undefined versions");
}

#[test]
fn unknown_tag_fails() {
    let err = handle(args(&["*bogus"]), MigratorConfig::default(), OutputFormat::Text).unwrap_err();
    assert_eq!(err.to_string(), "unsupported migration task <*bogus>");
}
