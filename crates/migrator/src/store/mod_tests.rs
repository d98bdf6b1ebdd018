use super::*;
use ocs_storage::{DbConfig, Encoding};
use tempfile::tempdir;

fn shared_group(id: &str) -> V1SharedGroup {
    V1SharedGroup {
        id: id.into(),
        member_ids: vec!["1001".into()],
        ..Default::default()
    }
}

fn drain(store: &mut dyn LegacyStore) -> Vec<String> {
    let mut ids = Vec::new();
    loop {
        match store.get_v1_shared_group() {
            Ok(sg) => ids.push(sg.id),
            Err(e) if e.is_no_more_data() => return ids,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}

fn stores() -> Vec<(Box<dyn LegacyStore>, tempfile::TempDir)> {
    let dir = tempdir().unwrap();
    let kv = DbConfig::new(DbKind::KeyValue, None, Encoding::Binary).open().unwrap();
    let doc = DbConfig::new(DbKind::Document, Some(dir.path().to_path_buf()), Encoding::Json)
        .open()
        .unwrap();
    vec![
        (legacy_store(kv), tempdir().unwrap()),
        (legacy_store(doc), dir),
    ]
}

#[test]
fn backend_follows_store_kind() {
    let internal = DbConfig::new(DbKind::Internal, None, Encoding::Json).open().unwrap();
    let mut store = legacy_store(internal);
    assert!(matches!(
        store.get_v1_account(),
        Err(MigratorError::NotImplemented)
    ));
}

#[test]
fn empty_prefix_is_no_more_data_at_once() {
    for (mut store, _dir) in stores() {
        assert!(store.get_v1_filter().unwrap_err().is_no_more_data());
    }
}

#[test]
fn cursor_enumerates_then_resets() {
    for (mut store, _dir) in stores() {
        store.set_v1_shared_group(&shared_group("SG_A")).unwrap();
        store.set_v1_shared_group(&shared_group("SG_B")).unwrap();

        assert_eq!(drain(store.as_mut()), vec!["SG_A", "SG_B"]);
        // a drained cursor starts over
        assert_eq!(drain(store.as_mut()), vec!["SG_A", "SG_B"]);
    }
}

#[test]
fn removed_records_are_gone() {
    for (mut store, _dir) in stores() {
        store.set_v1_shared_group(&shared_group("SG_A")).unwrap();
        store.rem_v1_shared_group("SG_A").unwrap();
        assert!(drain(store.as_mut()).is_empty());
        assert_eq!(store.data_manager().db().get("shg_SG_A").unwrap(), None);
    }
}

#[test]
fn records_use_the_store_encoding() {
    let dm = DbConfig::new(DbKind::KeyValue, None, Encoding::Json).open().unwrap();
    let store = legacy_store(dm);
    store.set_v1_shared_group(&shared_group("SG_A")).unwrap();
    let raw = store.data_manager().db().get("shg_SG_A").unwrap().unwrap();
    assert!(raw.starts_with(b"{"));
}

#[test]
fn undecodable_record_names_its_key() {
    let dm = DbConfig::new(DbKind::KeyValue, None, Encoding::Json).open().unwrap();
    dm.db().set("shg_BROKEN", b"not json".to_vec()).unwrap();
    let mut store = legacy_store(dm);
    let err = store.get_v1_shared_group().unwrap_err();
    assert!(err.to_string().contains("shg_BROKEN"), "{err}");
}

#[test]
fn close_is_idempotent() {
    for (store, _dir) in stores() {
        store.close().unwrap();
        store.close().unwrap();
        assert!(store.set_v1_shared_group(&shared_group("SG_A")).is_err());
    }
}
