use super::*;
use ocs_core::StringMap;

#[test]
fn members_become_a_set() {
    let v1 = V1SharedGroup {
        id: "SG_1".into(),
        account_parameters: BTreeMap::from([(
            "*any".to_string(),
            SharingParameters {
                strategy: "*lowest".into(),
                rating_subject: String::new(),
            },
        )]),
        member_ids: vec!["1001".into(), "1002".into(), "1001".into()],
    };
    let sg = v1.as_shared_group();
    assert_eq!(sg.member_ids, StringMap::from_iter(["1001", "1002"]));
    assert_eq!(sg.account_parameters["*any"].strategy, "*lowest");
}
