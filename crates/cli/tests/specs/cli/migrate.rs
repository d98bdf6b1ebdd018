//! `ocs-migrate migrate`

use crate::prelude::*;
use ocs_core::{Destination, Filter};
use ocs_storage::StoreError;

fn destination() -> Destination {
    Destination {
        id: "DST_DE".into(),
        prefixes: vec!["+49".into(), "+4930".into()],
    }
}

#[test]
fn moves_current_records_and_prints_stats() {
    let stores = Stores::new();
    stores.stamp(&[(vk::DESTINATIONS, 1)]);
    stores.seed(|dm| dm.set(&destination()).unwrap());

    stores.migrate("*destinations").passes().stdout_eq(
        "\
KEY           MIGRATED
Destinations         1

1 record(s) migrated
",
    );

    let dm_out = stores.output().open().unwrap();
    assert_eq!(dm_out.get::<Destination>("DST_DE").unwrap(), Some(destination()));
    assert_eq!(
        dm_out.get_versions().unwrap().and_then(|v| v.get(vk::DESTINATIONS)),
        Some(1)
    );
    assert!(stores.output_path().join("destinations").is_dir());
}

#[test]
fn json_stats() {
    let stores = Stores::new();
    stores.stamp(&[(vk::DESTINATIONS, 1)]);
    stores.seed(|dm| dm.set(&destination()).unwrap());

    let run = stores.migrate("*destinations").args(&["-o", "json"]).passes();
    let report = run.json();
    assert_eq!(report["tags"], serde_json::json!(["*destinations"]));
    assert_eq!(report["stats"]["Destinations"], 1);
    assert_eq!(report["migrated"], 1);
    assert_eq!(report["dry_run"], false);
    assert!(report["error"].is_null());
}

#[test]
fn dry_run_writes_nothing() {
    let stores = Stores::new();
    stores.stamp(&[(vk::DESTINATIONS, 1)]);
    stores.seed(|dm| dm.set(&destination()).unwrap());

    stores
        .migrate("*destinations")
        .args(&["--dry-run"])
        .passes()
        .stdout_has("Dry run: no changes made")
        .stdout_has("Dry run complete");

    let dm_in = stores.input().open().unwrap();
    assert_eq!(dm_in.get::<Destination>("DST_DE").unwrap(), Some(destination()));
    assert_eq!(stores.output().open().unwrap().get_versions().unwrap(), None);
}

#[test]
fn unversioned_input_exits_one() {
    let stores = Stores::new();
    stores.seed(|dm| dm.set(&destination()).unwrap());

    stores
        .migrate("*destinations")
        .fails()
        .stderr_has("Error: undefined versions")
        .stdout_has("0 record(s) migrated before failure");
}

#[test]
fn failure_keeps_stats_of_earlier_tags() {
    let stores = Stores::new();
    stores.stamp(&[(vk::DESTINATIONS, 1)]);
    stores.seed(|dm| dm.set(&destination()).unwrap());

    let run = stores
        .migrate("*destinations,*accounts")
        .args(&["-o", "json"])
        .fails();
    let report = run.json();
    assert_eq!(report["stats"]["Destinations"], 1);
    assert_eq!(
        report["error"],
        "unsupported version 0 for <Accounts>"
    );
    assert!(run.stderr().contains("unsupported version 0 for <Accounts>"));
}

#[test]
fn unknown_tag_exits_one() {
    let stores = Stores::new();
    stores
        .migrate("*bogus")
        .fails()
        .stderr_has("unsupported migration task <*bogus>");
}

#[test]
fn same_store_upgrades_filters_in_place() {
    let stores = Stores::new();
    stores.stamp(&[(vk::FILTERS, 5)]);
    stores.seed(|dm| {
        dm.set(&Filter {
            tenant: "cgrates.org".into(),
            id: "FLTR_1".into(),
            ..Filter::default()
        })
        .unwrap()
    });
    let path = stores.input_path().display().to_string();

    cli()
        .args(&["migrate", "--exec", "*filters", "--in-path", &path, "--out-path", &path])
        .passes()
        .stdout_has("0 record(s) migrated");

    let dm = stores.input().open().unwrap();
    assert!(dm.get::<Filter>("cgrates.org:FLTR_1").unwrap().is_some());
    assert!(matches!(dm.close(), Ok(())));
    assert!(matches!(dm.get_versions(), Err(StoreError::Closed)));
}
