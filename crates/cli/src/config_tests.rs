// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

#[test]
fn empty_file_gives_defaults() {
    let config = MigratorConfig::parse("").unwrap();
    similar_asserts::assert_eq!(config, MigratorConfig::default());
    similar_asserts::assert_eq!(config.migrator.default_tenant, "cgrates.org");
    assert!(config.same_data_db());
}

#[test]
fn full_file_parses() {
    let config = MigratorConfig::parse(
        r#"
[migrator]
dry_run = true
default_tenant = "itsyscom.com"
users_filters = ["Account", "Subject"]

[in]
kind = "document"
path = "/data/legacy"
encoding = "json"

[out]
kind = "keyvalue"
path = "/data/current.snap"
"#,
    )
    .unwrap();

    similar_asserts::assert_eq!(
        config,
        MigratorConfig {
            migrator: MigratorSection {
                dry_run: true,
                default_tenant: "itsyscom.com".into(),
                users_filters: vec!["Account".into(), "Subject".into()],
            },
            input: DbConfig::new(
                DbKind::Document,
                Some("/data/legacy".into()),
                Encoding::Json
            ),
            output: DbConfig::new(
                DbKind::KeyValue,
                Some("/data/current.snap".into()),
                Encoding::Binary
            ),
        }
    );
    assert!(!config.same_data_db());
}

#[yare::parameterized(
    unknown_section = { "[cache]\nsize = 1" },
    unknown_field = { "[migrator]\nverbose = true" },
    bad_kind = { "[in]\nkind = \"sql\"" },
    bad_encoding = { "[out]\nencoding = \"msgpack\"" },
)]
fn invalid_files_are_rejected(content: &str) {
    assert!(MigratorConfig::parse(content).is_err());
}

#[test]
fn options_carry_migrator_section() {
    let mut config = MigratorConfig::default();
    config.migrator.dry_run = true;
    config.migrator.users_filters = vec!["Account".into()];
    config.output.path = Some("/tmp/out.snap".into());

    let options = config.options();
    assert!(options.dry_run);
    assert!(!options.same_data_db);
    similar_asserts::assert_eq!(options.users_filters, vec!["Account".to_string()]);
    similar_asserts::assert_eq!(options.default_tenant, "cgrates.org");
}

#[test]
fn overrides_replace_only_given_fields() {
    let mut db = DbConfig::new(DbKind::Document, Some("/a".into()), Encoding::Json);
    StoreOverrides {
        path: Some("/b".into()),
        ..StoreOverrides::default()
    }
    .apply(&mut db);
    similar_asserts::assert_eq!(db, DbConfig::new(DbKind::Document, Some("/b".into()), Encoding::Json));

    StoreOverrides {
        kind: Some(DbKind::KeyValue),
        encoding: Some(Encoding::Binary),
        path: None,
    }
    .apply(&mut db);
    similar_asserts::assert_eq!(db, DbConfig::new(DbKind::KeyValue, Some("/b".into()), Encoding::Binary));
}

#[test]
fn load_reports_missing_file() {
    let dir = tempdir().unwrap();
    let err = MigratorConfig::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config"));
}

#[test]
fn load_reads_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("migrator.toml");
    std::fs::write(&path, "[migrator]\ndry_run = true\n").unwrap();
    assert!(MigratorConfig::load(&path).unwrap().migrator.dry_run);
}

#[test]
fn shared_store_opens_one_handle() {
    let config = MigratorConfig::default();
    let (dm_in, dm_out) = config.open_stores().unwrap();
    assert!(dm_in.same_store(&dm_out));
}

#[test]
fn distinct_stores_open_two_handles() {
    let dir = tempdir().unwrap();
    let mut config = MigratorConfig::default();
    config.output = DbConfig::new(DbKind::Document, Some(dir.path().to_path_buf()), Encoding::Json);

    let (dm_in, dm_out) = config.open_stores().unwrap();
    assert!(!dm_in.same_store(&dm_out));
    similar_asserts::assert_eq!(dm_out.kind(), DbKind::Document);
}

#[test]
fn document_store_without_path_fails_to_open() {
    let mut config = MigratorConfig::default();
    config.input.kind = DbKind::Document;
    let err = config.open_stores().unwrap_err();
    assert!(err.to_string().contains("failed to open input document store"));
}

#[test]
fn same_path_with_other_encoding_is_the_same_store() {
    let dir = tempdir().unwrap();
    let mut config = MigratorConfig::default();
    config.input = DbConfig::new(DbKind::Document, Some(dir.path().to_path_buf()), Encoding::Binary);
    config.output = DbConfig::new(DbKind::Document, Some(dir.path().to_path_buf()), Encoding::Json);

    assert!(config.same_data_db());
    let err = config.open_stores().unwrap_err();
    assert!(err.to_string().contains("re-encoding in place is not supported"));
}
