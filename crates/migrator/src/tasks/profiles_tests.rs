use super::*;
use crate::legacy::{
    V1ChargerProfile, V1DispatcherConn, V1DispatcherProfile, V1Supplier, V1SupplierProfile,
};
use crate::test_support::*;
use ocs_core::consts::tag;

fn host(id: &str) -> DispatcherHost {
    DispatcherHost {
        tenant: "cgrates.org".into(),
        id: id.into(),
        address: "127.0.0.1:2012".into(),
        transport: "*json".into(),
        tls: false,
    }
}

fn supplier_profile() -> V1SupplierProfile {
    V1SupplierProfile {
        tenant: "cgrates.org".into(),
        id: "SPP_1".into(),
        filter_ids: vec!["*string:~*req.Account:1001".into()],
        sorting: "*weight".into(),
        suppliers: vec![V1Supplier {
            id: "supplier1".into(),
            weight: 10.0,
            ..V1Supplier::default()
        }],
        ..V1SupplierProfile::default()
    }
}

#[test]
fn v1_chargers_are_upgraded_and_indexed() {
    let (mut m, dm_in, dm_out) = migrator_pair(false);
    stamp(&dm_in, &[(vk::CHARGERS, 1)]);
    let v1 = V1ChargerProfile {
        tenant: "cgrates.org".into(),
        id: "CPP_1".into(),
        filter_ids: vec!["*string:Account:1001".into()],
        run_id: "*default".into(),
        attribute_ids: vec!["*none".into()],
        ..V1ChargerProfile::default()
    };
    m.dm_in.set_v1_charger_profile(&v1).unwrap();

    similar_asserts::assert_eq!(run(&mut m, tag::CHARGERS, vk::CHARGERS), 1);
    similar_asserts::assert_eq!(
        dm_out.get::<ChargerProfile>("cgrates.org:CPP_1").unwrap(),
        Some(v1.as_charger_profile())
    );
    let index = dm_out.get_filter_index("*chargers", "cgrates.org").unwrap().unwrap();
    assert!(index.entries["*string:*req.Account:1001"].contains("CPP_1"));
}

#[test]
fn v1_dispatchers_bring_hosts() {
    let (mut m, dm_in, dm_out) = migrator_pair(false);
    stamp(&dm_in, &[(vk::DISPATCHERS, 1)]);
    let v1 = V1DispatcherProfile {
        tenant: "cgrates.org".into(),
        id: "DSP_1".into(),
        strategy: "*first".into(),
        conns: vec![V1DispatcherConn {
            id: "HOST_1".into(),
            filter_ids: vec!["*string:Account:1001".into()],
            ..V1DispatcherConn::default()
        }],
        ..V1DispatcherProfile::default()
    };
    m.dm_in.set_v1_dispatcher_profile(&v1).unwrap();
    dm_in.set(&host("HOST_1")).unwrap();

    similar_asserts::assert_eq!(run(&mut m, tag::DISPATCHERS, vk::DISPATCHERS), 1);
    let profile = dm_out
        .get::<DispatcherProfile>("cgrates.org:DSP_1")
        .unwrap()
        .unwrap();
    similar_asserts::assert_eq!(profile, v1.as_dispatcher_profile());
    similar_asserts::assert_eq!(
        profile.hosts[0].filter_ids,
        vec!["*string:~*req.Account:1001".to_string()]
    );
    similar_asserts::assert_eq!(dm_out.get::<DispatcherHost>("cgrates.org:HOST_1").unwrap(), Some(host("HOST_1")));
    assert!(dm_in.key_ids::<DispatcherHost>().unwrap().is_empty());
}

#[yare::parameterized(
    routes = { tag::ROUTES },
    suppliers = { tag::SUPPLIERS },
)]
fn suppliers_become_routes(task: &str) {
    let (mut m, dm_in, dm_out) = migrator_pair(false);
    stamp(&dm_in, &[(vk::ROUTES, 1)]);
    m.dm_in.set_v1_supplier_profile(&supplier_profile()).unwrap();

    similar_asserts::assert_eq!(run(&mut m, task, vk::ROUTES), 1);
    similar_asserts::assert_eq!(
        dm_out.get::<RouteProfile>("cgrates.org:SPP_1").unwrap(),
        Some(supplier_profile().as_route_profile())
    );
    assert!(dm_in.db().keys_for_prefix("spp_").unwrap().is_empty());
    similar_asserts::assert_eq!(stored_version(&dm_out, vk::ROUTES), Some(2));
}

#[test]
fn resources_move_with_their_usage() {
    let (mut m, dm_in, dm_out) = migrator_pair(false);
    stamp(&dm_in, &[(vk::RESOURCE, 1)]);
    let profile = ResourceProfile {
        tenant: "cgrates.org".into(),
        id: "RES_1".into(),
        limit: 2.0,
        ..ResourceProfile::default()
    };
    let usage = Resource {
        tenant: "cgrates.org".into(),
        id: "RES_1".into(),
        ..Resource::default()
    };
    dm_in.set(&profile).unwrap();
    dm_in.set(&usage).unwrap();

    similar_asserts::assert_eq!(run(&mut m, tag::RESOURCES, vk::RESOURCE), 1);
    similar_asserts::assert_eq!(dm_out.get::<ResourceProfile>("cgrates.org:RES_1").unwrap(), Some(profile));
    similar_asserts::assert_eq!(dm_out.get::<Resource>("cgrates.org:RES_1").unwrap(), Some(usage));
    let index = dm_out.get_filter_index("*resources", "cgrates.org").unwrap().unwrap();
    assert!(index.entries[ocs_storage::UNINDEXED_KEY].contains("RES_1"));
}

#[test]
fn profile_with_missing_filter_fails_reindex() {
    let (mut m, dm_in, _) = migrator_pair(false);
    stamp(&dm_in, &[(vk::CHARGERS, 2)]);
    dm_in
        .set(&ChargerProfile {
            tenant: "cgrates.org".into(),
            id: "CPP_1".into(),
            filter_ids: vec!["FLTR_MISSING".into()],
            ..ChargerProfile::default()
        })
        .unwrap();

    let (result, _) = m.migrate(&[tag::CHARGERS]);
    assert!(matches!(
        result,
        Err(MigratorError::Store(ocs_storage::StoreError::BrokenReference { .. }))
    ));
}
