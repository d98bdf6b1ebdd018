use super::*;
use similar_asserts::assert_eq;

#[test]
fn conns_become_hosts() {
    let v1 = V1DispatcherProfile {
        tenant: "cgrates.org".into(),
        id: "DSP_1".into(),
        subsystems: vec!["*any".into()],
        filter_ids: vec!["*string:Account:1001".into()],
        strategy: "*weight".into(),
        weight: 20.0,
        conns: vec![V1DispatcherConn {
            id: "ALL".into(),
            filter_ids: vec!["*prefix:~Destination:+49".into()],
            weight: 10.0,
            params: BTreeMap::from([("*ratio".to_string(), "1".to_string())]),
            blocker: false,
        }],
        ..Default::default()
    };
    assert_eq!(
        v1.as_dispatcher_profile(),
        DispatcherProfile {
            tenant: "cgrates.org".into(),
            id: "DSP_1".into(),
            subsystems: vec!["*any".into()],
            filter_ids: vec!["*string:~*req.Account:1001".into()],
            activation_interval: None,
            strategy: "*weight".into(),
            strategy_params: BTreeMap::new(),
            weight: 20.0,
            hosts: vec![DispatcherHostProfile {
                id: "ALL".into(),
                filter_ids: vec!["*prefix:~*req.Destination:+49".into()],
                weight: 10.0,
                params: BTreeMap::from([("*ratio".to_string(), "1".to_string())]),
                blocker: false,
            }],
        }
    );
}
