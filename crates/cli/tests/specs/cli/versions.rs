//! `ocs-migrate versions`

use crate::prelude::*;

#[test]
fn empty_store_has_no_versions() {
    let stores = Stores::new();
    let path = stores.input_path().display().to_string();
    cli()
        .args(&["versions", "--path", &path])
        .passes()
        .stdout_has("No versions stored")
        .stdout_has("Accounts");
}

#[test]
fn stamped_store_lists_outdated_keys() {
    let stores = Stores::new();
    stores.stamp(&[(vk::ACCOUNTS, 2), (vk::FILTERS, 5)]);
    let path = stores.input_path().display().to_string();

    let run = cli()
        .args(&["versions", "--path", &path, "-o", "json"])
        .passes();
    let report = run.json();
    assert_eq!(report["stored"]["Accounts"], 2);
    assert_eq!(report["current"]["Accounts"], 3);
    let outdated = report["outdated"].as_array().unwrap();
    assert!(outdated.iter().any(|k| k == "Accounts"));
    assert!(!outdated.iter().any(|k| k == "RQF"));
}

#[test]
fn set_versions_brings_store_up_to_date() {
    let stores = Stores::new();
    stores.stamp(&[(vk::ACCOUNTS, 1)]);
    let path = stores.input_path().display().to_string();

    cli()
        .args(&["migrate", "--exec", "*set_versions", "--in-path", &path, "--out-path", &path])
        .passes();

    cli()
        .args(&["versions", "--path", &path])
        .passes()
        .stdout_has("Up to date");
}

#[test]
fn document_store_needs_a_path() {
    cli()
        .args(&["versions", "--kind", "document"])
        .fails()
        .stderr_has("failed to open input document store");
}
