use super::*;
use chrono::TimeZone;
use crate::legacy::LegacyRecord;
use ocs_core::StringMap;

fn v1_trigger() -> V1ActionTrigger {
    V1ActionTrigger {
        id: "STANDARD_TRIGGER".into(),
        threshold_type: "*min_counter".into(),
        threshold_value: 10.0,
        balance_type: "*voice".into(),
        balance_direction: "*out".into(),
        balance_destination_ids: "GERMANY_O2".into(),
        actions_id: "LOG_WARNING".into(),
        weight: 10.0,
        ..Default::default()
    }
}

#[test]
fn trigger_balance_is_sparse() {
    let at = v1_trigger().as_trigger();
    assert_eq!(at.threshold_type, "*min_event_counter");
    assert_eq!(
        at.balance,
        BalanceFilter {
            balance_type: Some("*voice".into()),
            directions: Some(StringMap::from_iter(["*out"])),
            destination_ids: Some(StringMap::from_iter(["GERMANY_O2"])),
            ..Default::default()
        }
    );
    assert_eq!(at.expiration_date, None);
    assert_eq!(at.actions_id, "LOG_WARNING");
}

#[test]
fn balance_expiration_sets_trigger_window() {
    let expires = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single();
    let at = V1ActionTrigger {
        balance_expiration_date: expires,
        ..v1_trigger()
    }
    .as_trigger();
    assert_eq!(at.balance.expiration_date, expires);
    assert_eq!(at.expiration_date, expires);
    assert_eq!(at.activation_date, expires);
    assert_eq!(at.last_execution_time, expires);
}

#[test]
fn unique_id_is_deterministic() {
    let a = v1_trigger().as_trigger();
    let b = v1_trigger().as_trigger();
    assert_eq!(a.unique_id, b.unique_id);
    assert!(!a.unique_id.is_empty());
}

#[yare::parameterized(
    min_counter = { "*min_counter", "*min_event_counter" },
    max_counter = { "*max_counter", "*max_event_counter" },
    min_balance = { "*min_balance", "*min_balance" },
)]
fn threshold_type_rename(legacy: &str, current: &str) {
    let at = V1ActionTrigger {
        threshold_type: legacy.into(),
        ..v1_trigger()
    }
    .as_trigger();
    assert_eq!(at.threshold_type, current);
}

#[test]
fn trigger_list_keeps_order() {
    let list = V1ActionTriggers {
        id: "ATRS_1".into(),
        triggers: vec![
            v1_trigger(),
            V1ActionTrigger {
                id: "SECOND".into(),
                ..v1_trigger()
            },
        ],
    };
    assert_eq!(list.key_id(), "ATRS_1");
    let atrs = list.as_action_triggers();
    assert_eq!(atrs.id, "ATRS_1");
    let ids: Vec<_> = atrs.triggers.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["STANDARD_TRIGGER", "SECOND"]);
}

#[test]
fn missing_direction_stays_unset() {
    let at = V1ActionTrigger {
        balance_direction: String::new(),
        ..v1_trigger()
    }
    .as_trigger();
    assert_eq!(at.balance.directions, None);
}
