use super::*;
use crate::legacy::LegacyRecord;
use similar_asserts::assert_eq;

#[test]
fn supplier_profile_becomes_route_profile() {
    let spp = V1SupplierProfile {
        tenant: "cgrates.org".into(),
        id: "SPP_1".into(),
        filter_ids: vec!["*string:~*req.Account:1001".into()],
        sorting: "*least_cost".into(),
        sorting_parameters: vec!["param1".into()],
        suppliers: vec![V1Supplier {
            id: "supplier1".into(),
            rating_plan_ids: vec!["RPL_1".into()],
            weight: 10.0,
            blocker: true,
            supplier_parameters: "param".into(),
            ..Default::default()
        }],
        weight: 20.0,
        ..Default::default()
    };
    assert_eq!(spp.storage_key(), "spp_cgrates.org:SPP_1");
    assert_eq!(
        spp.as_route_profile(),
        RouteProfile {
            tenant: "cgrates.org".into(),
            id: "SPP_1".into(),
            filter_ids: vec!["*string:~*req.Account:1001".into()],
            activation_interval: None,
            sorting: "*least_cost".into(),
            sorting_parameters: vec!["param1".into()],
            routes: vec![Route {
                id: "supplier1".into(),
                rating_plan_ids: vec!["RPL_1".into()],
                weight: 10.0,
                blocker: true,
                route_parameters: "param".into(),
                ..Default::default()
            }],
            weight: 20.0,
        }
    );
}
