use super::*;
use ocs_core::{BalanceFilter, StringMap, Timing, ValueFormula};
use similar_asserts::assert_eq;

#[test]
fn v1_action_to_current() {
    let timing = Timing {
        id: "WEEKENDS".into(),
        week_days: vec![6, 0],
        start_time: "00:00:00".into(),
        ..Default::default()
    };
    let v1 = V1Actions {
        id: "TOPUP_10".into(),
        actions: vec![V1Action {
            id: "topup".into(),
            action_type: "*topup".into(),
            balance_type: "*monetary".into(),
            direction: "*out".into(),
            weight: 20.0,
            balance: V1Balance {
                value: 10.0,
                destination_ids: "NAT;!RET".into(),
                timings: vec![timing.clone()],
                ..Default::default()
            },
            ..Default::default()
        }],
    };

    let actions = v1.as_actions();
    assert_eq!(actions.id, "TOPUP_10");
    let mut destinations = StringMap::from_iter(["NAT"]);
    destinations.insert("RET", false);
    assert_eq!(
        actions.actions,
        vec![Action {
            id: "topup".into(),
            action_type: "*topup".into(),
            weight: 20.0,
            balance: BalanceFilter {
                balance_type: Some("*monetary".into()),
                value: Some(ValueFormula::fixed(10.0)),
                destination_ids: Some(destinations),
                timings: vec![timing],
                ..Default::default()
            },
            ..Default::default()
        }]
    );
}

#[test]
fn empty_balance_yields_empty_filter() {
    let action = V1Action {
        id: "log".into(),
        action_type: "*log".into(),
        ..Default::default()
    }
    .as_action();
    assert!(action.balance.is_empty());
}
