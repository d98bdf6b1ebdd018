use super::*;
use similar_asserts::assert_eq;

fn user() -> V1UserProfile {
    V1UserProfile {
        tenant: "cgrates.org".into(),
        user_name: "1001".into(),
        masked: false,
        profile: BTreeMap::from([
            ("Account".to_string(), "1002".to_string()),
            ("ReqType".to_string(), "*prepaid".to_string()),
            ("Subject".to_string(), "~Account".to_string()),
        ]),
        weight: 10.0,
    }
}

fn variable(field: &str, value: &str) -> Attribute {
    Attribute {
        filter_ids: vec![],
        path: format!("*req.{field}"),
        attr_type: "*variable".into(),
        value: RsrParsers::parse(value).unwrap(),
    }
}

#[test]
fn key_is_tenant_and_user_name() {
    assert_eq!(user().storage_key(), "usr_cgrates.org:1001");
}

#[test]
fn profile_fields_become_attributes() {
    assert_eq!(
        user().as_attribute_profile("itsyscom.com", &[]).unwrap(),
        AttributeProfile {
            tenant: "cgrates.org".into(),
            id: "1001".into(),
            contexts: vec!["*any".into()],
            filter_ids: vec![],
            activation_interval: None,
            attributes: vec![
                variable("Account", "1002"),
                variable("RequestType", "*prepaid"),
                variable("Subject", "~Account"),
            ],
            blocker: false,
            weight: 10.0,
        }
    );
}

#[test]
fn filter_fields_select_the_profile() {
    let filters = vec!["Account".to_string(), "RequestType".to_string()];
    let profile = user().as_attribute_profile("cgrates.org", &filters).unwrap();
    assert_eq!(
        profile.filter_ids,
        vec![
            "*string:~*req.Account:1002".to_string(),
            "*string:~*req.RequestType:*prepaid".to_string(),
        ]
    );
    assert_eq!(profile.attributes, vec![variable("Subject", "~Account")]);
}

#[test]
fn empty_tenant_uses_default() {
    let u = V1UserProfile {
        tenant: String::new(),
        ..user()
    };
    assert_eq!(
        u.as_attribute_profile("itsyscom.com", &[]).unwrap().tenant,
        "itsyscom.com"
    );
}
