use super::*;

fn stored(pairs: &[(&str, i64)]) -> Versions {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}

#[test]
fn every_entity_has_a_current_version() {
    let registry = VersionRegistry::new();
    for entity in ENTITIES {
        let current = registry.current(entity.key);
        assert!(current.is_some(), "{} has no current version", entity.key);
        assert!(entity.legacy.iter().all(|v| Some(*v) < current));
    }
}

#[test]
fn tags_are_unique() {
    let registry = VersionRegistry::new();
    let mut tags: Vec<_> = registry.tags().collect();
    let n = tags.len();
    tags.sort();
    tags.dedup();
    assert_eq!(tags.len(), n);
}

#[test]
fn missing_version_map_is_undefined() {
    let err = VersionRegistry::new().check(None, "Accounts").unwrap_err();
    assert!(matches!(err, MigratorError::UndefinedVersion));
}

#[yare::parameterized(
    current = { "Accounts", 3, Some(VersionCheck::Current) },
    legacy_v1 = { "Accounts", 1, Some(VersionCheck::Outdated(1)) },
    legacy_v2 = { "Accounts", 2, Some(VersionCheck::Outdated(2)) },
    attributes_v4 = { "Attributes", 4, Some(VersionCheck::Outdated(4)) },
    newer = { "Accounts", 4, None },
    no_decoder = { "Destinations", 0, None },
    zero = { "Attributes", 0, None },
)]
fn classify(key: &str, version: i64, expected: Option<VersionCheck>) {
    let versions = stored(&[(key, version)]);
    let got = VersionRegistry::new().check(Some(&versions), key);
    match expected {
        Some(check) => assert_eq!(got.unwrap(), check),
        None => assert!(matches!(
            got,
            Err(MigratorError::UnsupportedVersion { version: v, .. }) if v == version
        )),
    }
}

#[test]
fn missing_key_is_unsupported() {
    let versions = stored(&[("Actions", 2)]);
    let err = VersionRegistry::new()
        .check(Some(&versions), "Accounts")
        .unwrap_err();
    assert!(matches!(
        err,
        MigratorError::UnsupportedVersion { ref key, version: 0 } if key == "Accounts"
    ));
}

#[test]
fn suppliers_share_the_routes_version() {
    let registry = VersionRegistry::new();
    assert_eq!(
        registry.entity("*suppliers").map(|e| e.key),
        registry.entity("*routes").map(|e| e.key)
    );
    assert!(registry.entity("*bogus").is_none());
}
