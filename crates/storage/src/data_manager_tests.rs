use super::*;
use crate::KeyValueDb;
use ocs_core::{Destination, Filter, FilterRule};

fn manager(encoding: Encoding) -> DataManager {
    DataManager::new(Arc::new(KeyValueDb::in_memory()), encoding)
}

fn destination(id: &str, prefixes: &[&str]) -> Destination {
    Destination {
        id: id.to_string(),
        prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
    }
}

#[yare::parameterized(
    json = { Encoding::Json },
    binary = { Encoding::Binary },
)]
fn typed_set_get_remove(encoding: Encoding) {
    let dm = manager(encoding);
    let dst = destination("NAT", &["0256", "0257"]);

    dm.set(&dst).unwrap();
    assert_eq!(dm.get::<Destination>("NAT").unwrap(), Some(dst));
    assert!(dm.db().get("dst_NAT").unwrap().is_some());

    assert!(dm.remove::<Destination>("NAT").unwrap());
    assert_eq!(dm.get::<Destination>("NAT").unwrap(), None);
}

#[test]
fn get_all_and_key_ids_stay_within_prefix() {
    let dm = manager(Encoding::Json);
    dm.set(&destination("A", &["1"])).unwrap();
    dm.set(&destination("B", &["2"])).unwrap();
    dm.set(&Filter {
        tenant: "cgrates.org".into(),
        id: "F1".into(),
        rules: vec![FilterRule::new("*string", "~*req.Account", vec!["1001".into()]).unwrap()],
        activation_interval: None,
    })
    .unwrap();

    assert_eq!(dm.key_ids::<Destination>().unwrap(), vec!["A", "B"]);
    let all: Vec<Destination> = dm.get_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(dm.key_ids::<Filter>().unwrap(), vec!["cgrates.org:F1"]);
}

#[test]
fn decode_failure_names_the_key() {
    let dm = manager(Encoding::Json);
    dm.db().set("dst_BAD", b"not json".to_vec()).unwrap();
    let err = dm.get::<Destination>("BAD").unwrap_err();
    assert!(matches!(err, StoreError::Decode { ref key, .. } if key == "dst_BAD"));
}

#[test]
fn fresh_store_has_no_versions() {
    assert_eq!(manager(Encoding::Binary).get_versions().unwrap(), None);
}

#[test]
fn set_versions_merges_unless_overwriting() {
    let dm = manager(Encoding::Binary);
    dm.set_versions(&Versions::from_iter([("Accounts", 1), ("Actions", 1)]), true)
        .unwrap();

    dm.set_versions(&Versions::from_iter([("Accounts", 3)]), false)
        .unwrap();
    assert_eq!(
        dm.get_versions().unwrap(),
        Some(Versions::from_iter([("Accounts", 3), ("Actions", 1)]))
    );

    dm.set_versions(&Versions::from_iter([("Timing", 1)]), true)
        .unwrap();
    assert_eq!(
        dm.get_versions().unwrap(),
        Some(Versions::from_iter([("Timing", 1)]))
    );

    dm.remove_versions().unwrap();
    assert_eq!(dm.get_versions().unwrap(), None);
}

#[test]
fn same_store_compares_handles() {
    let a = manager(Encoding::Json);
    let b = DataManager::new(Arc::clone(a.db()), Encoding::Binary);
    let c = manager(Encoding::Json);
    assert!(a.same_store(&b));
    assert!(!a.same_store(&c));
}
