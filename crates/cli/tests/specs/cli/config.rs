//! Config file and logging flags

use crate::prelude::*;

#[test]
fn config_file_names_both_stores() {
    let stores = Stores::new();
    stores.stamp(&[(vk::DESTINATIONS, 1)]);
    let config = stores.root().join("migrator.toml");
    std::fs::write(
        &config,
        format!(
            "[in]\npath = {:?}\n\n[out]\nkind = \"document\"\npath = {:?}\nencoding = \"json\"\n",
            stores.input_path().display().to_string(),
            stores.output_path().display().to_string(),
        ),
    )
    .unwrap();

    cli()
        .args(&["migrate", "--exec", "*destinations"])
        .env("OCS_MIGRATOR_CONFIG", &config)
        .passes();

    let versions = stores.output().open().unwrap().get_versions().unwrap();
    assert_eq!(versions.and_then(|v| v.get(vk::DESTINATIONS)), Some(1));
}

#[test]
fn config_dry_run_applies() {
    let stores = Stores::new();
    stores.stamp(&[(vk::DESTINATIONS, 1)]);
    let config = stores.root().join("migrator.toml");
    std::fs::write(&config, "[migrator]\ndry_run = true\n").unwrap();

    let mut args = vec!["migrate", "--exec", "*destinations", "--config"];
    let config_path = config.display().to_string();
    args.push(&config_path);
    let store_args = stores.store_args();
    args.extend(store_args.iter().map(String::as_str));

    cli().args(&args).passes().stdout_has("Dry run complete");
    assert_eq!(stores.output().open().unwrap().get_versions().unwrap(), None);
}

#[test]
fn invalid_config_is_reported() {
    let stores = Stores::new();
    let config = stores.root().join("migrator.toml");
    std::fs::write(&config, "[migrator]\nverbose = true\n").unwrap();
    let config_path = config.display().to_string();

    cli()
        .args(&["versions", "--config", &config_path])
        .fails()
        .stderr_has("invalid config");
}

#[test]
fn log_file_receives_output() {
    let stores = Stores::new();
    stores.stamp(&[(vk::DESTINATIONS, 1)]);
    let log = stores.root().join("logs/migrate.log");
    let log_path = log.display().to_string();
    let mut args = vec!["migrate", "--exec", "*destinations", "--log-level", "info", "--log-file"];
    args.push(&log_path);
    let store_args = stores.store_args();
    args.extend(store_args.iter().map(String::as_str));

    cli().args(&args).passes();
    let content = std::fs::read_to_string(&log).unwrap();
    assert!(content.contains("migration finished"), "log: {content}");
}
