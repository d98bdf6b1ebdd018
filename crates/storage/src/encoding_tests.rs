use super::*;
use ocs_core::{AttributeProfile, BalanceFilter, RsrParsers, StringMap};

fn sample_profile() -> AttributeProfile {
    AttributeProfile {
        tenant: "cgrates.org".to_string(),
        id: "ATTR_1".to_string(),
        contexts: vec!["*any".to_string()],
        filter_ids: vec!["*string:~*req.Account:1001".to_string()],
        attributes: vec![ocs_core::Attribute {
            filter_ids: vec![],
            path: "*req.Subject".to_string(),
            attr_type: "*variable".to_string(),
            value: RsrParsers::parse("~*req.Account").unwrap(),
        }],
        weight: 20.0,
        ..AttributeProfile::default()
    }
}

#[yare::parameterized(
    json = { Encoding::Json },
    binary = { Encoding::Binary },
)]
fn profile_survives_both_encodings(enc: Encoding) {
    let profile = sample_profile();
    let bytes = enc.encode("alp_x", &profile).unwrap();
    let back: AttributeProfile = enc.decode("alp_x", &bytes).unwrap();
    assert_eq!(back, profile);
}

#[test]
fn sparse_filter_keeps_unset_fields_in_binary() {
    let bf = BalanceFilter {
        destination_ids: Some(StringMap::parse("NAT")),
        weight: Some(10.0),
        ..BalanceFilter::default()
    };
    let bytes = Encoding::Binary.encode("k", &bf).unwrap();
    let back: BalanceFilter = Encoding::Binary.decode("k", &bytes).unwrap();
    assert_eq!(back, bf);
    assert_eq!(back.categories, None);
}

#[test]
fn decode_error_names_key() {
    let err = Encoding::Json
        .decode::<AttributeProfile>("alp_broken", b"{not json")
        .unwrap_err();
    assert!(err.to_string().contains("alp_broken"));
}

#[yare::parameterized(
    json = { "json", Encoding::Json },
    meta_json = { "*json", Encoding::Json },
    binary = { "binary", Encoding::Binary },
)]
fn parse_encoding(s: &str, expected: Encoding) {
    assert_eq!(s.parse::<Encoding>().unwrap(), expected);
}

#[test]
fn parse_unknown_encoding() {
    assert!("msgpack".parse::<Encoding>().is_err());
}
