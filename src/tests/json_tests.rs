use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::config::{SOURCE_TAG_KEY, SOURCE_TAG_VALUE};
use crate::error::{EncodeError, ParseError};
use crate::json::{
    decode_json_data_to_dictionary, decode_json_string_to_dictionary,
    encode_array_to_json_string, encode_dictionary_to_json_data,
    encode_dictionary_to_json_string, encode_dictionary_to_json_string_with_source,
    JsonDictionary,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LinkParams {
    campaign: String,
    click_count: u32,
    score: f64,
    tags: Vec<String>,
}

fn sample_dictionary() -> JsonDictionary {
    match json!({
        "a": 1,
        "nested": {"list": [1, "two", 3.5, null, false], "empty": {}},
        "unicode": "日本語 \"quoted\" \\ slash",
    }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[test]
fn dictionary_round_trip() {
    let dictionary = sample_dictionary();
    let text = encode_dictionary_to_json_string(&dictionary).unwrap();
    assert_eq!(decode_json_string_to_dictionary(&text).unwrap(), dictionary);

    let data = encode_dictionary_to_json_data(&dictionary).unwrap();
    assert_eq!(decode_json_data_to_dictionary(&data).unwrap(), dictionary);
}

#[test]
fn struct_encodes_as_dictionary() {
    let params = LinkParams {
        campaign: "spring".to_string(),
        click_count: 3,
        score: 0.5,
        tags: vec!["x".to_string()],
    };
    let text = encode_dictionary_to_json_string(&params).unwrap();
    let decoded = decode_json_string_to_dictionary(&text).unwrap();
    assert_eq!(decoded["campaign"], json!("spring"));
    assert_eq!(decoded["clickCount"], json!(3));
    assert_eq!(decoded["tags"], json!(["x"]));
}

#[test]
fn source_tag_is_injected_only_when_requested() {
    let dictionary = json!({"a": 1});

    let untagged = encode_dictionary_to_json_string_with_source(&dictionary, false).unwrap();
    assert_eq!(untagged, r#"{"a":1}"#);

    let tagged = encode_dictionary_to_json_string_with_source(&dictionary, true).unwrap();
    let decoded = decode_json_string_to_dictionary(&tagged).unwrap();
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded["a"], json!(1));
    assert_eq!(decoded[SOURCE_TAG_KEY], json!(SOURCE_TAG_VALUE));
}

#[test]
fn source_tag_overwrites_existing_source() {
    let dictionary = json!({"source": "caller"});
    let tagged = encode_dictionary_to_json_string_with_source(&dictionary, true).unwrap();
    let decoded = decode_json_string_to_dictionary(&tagged).unwrap();
    assert_eq!(decoded[SOURCE_TAG_KEY], json!(SOURCE_TAG_VALUE));
}

#[test]
fn array_encoding_preserves_order() {
    let items = vec![json!(3), json!("b"), json!({"k": [true]}), json!(null)];
    assert_eq!(
        encode_array_to_json_string(&items).unwrap(),
        r#"[3,"b",{"k":[true]},null]"#
    );
    let empty: [u8; 0] = [];
    assert_eq!(encode_array_to_json_string(&empty).unwrap(), "[]");
}

#[test]
fn non_finite_numbers_are_encode_errors() {
    let mut dictionary = BTreeMap::new();
    dictionary.insert("ratio", f64::NAN);
    assert!(matches!(
        encode_dictionary_to_json_string(&dictionary),
        Err(EncodeError::NonFiniteNumber(_))
    ));

    assert!(matches!(
        encode_array_to_json_string(&[1.0, f64::INFINITY]),
        Err(EncodeError::NonFiniteNumber(_))
    ));

    let params = LinkParams {
        campaign: "c".to_string(),
        click_count: 0,
        score: f64::NEG_INFINITY,
        tags: Vec::new(),
    };
    assert!(matches!(
        encode_dictionary_to_json_data(&params),
        Err(EncodeError::NonFiniteNumber(_))
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        decode_json_string_to_dictionary("not json"),
        Err(ParseError::InvalidJson(_))
    ));
    assert!(matches!(
        decode_json_string_to_dictionary(""),
        Err(ParseError::InvalidJson(_))
    ));
    assert!(matches!(
        decode_json_data_to_dictionary(&[0xff, 0xfe]),
        Err(ParseError::InvalidJson(_))
    ));
}

#[test]
fn non_object_top_level_is_rejected() {
    assert_eq!(
        decode_json_string_to_dictionary("[1,2,3]"),
        Err(ParseError::NotAnObject("array".to_string()))
    );
    assert_eq!(
        decode_json_string_to_dictionary("\"text\""),
        Err(ParseError::NotAnObject("string".to_string()))
    );
    assert_eq!(
        decode_json_data_to_dictionary(b"null"),
        Err(ParseError::NotAnObject("null".to_string()))
    );
}

#[test]
fn empty_dictionary_edge_cases() {
    assert_eq!(encode_dictionary_to_json_string(&JsonDictionary::new()).unwrap(), "{}");
    assert!(decode_json_string_to_dictionary("{}").unwrap().is_empty());
    assert!(decode_json_data_to_dictionary(b" { } ").unwrap().is_empty());
}

fn round_trip(value: Value) -> Value {
    let dictionary = json!({ "x": value });
    let text = encode_dictionary_to_json_string(&dictionary).unwrap();
    let decoded = decode_json_string_to_dictionary(&text).unwrap();
    decoded["x"].clone()
}

#[test]
fn number_edge_cases_round_trip_exactly() {
    let floats = [
        0.1 + 0.2,
        1.0715660391465826e-75,
        f64::MIN_POSITIVE,
        5e-324,
        f64::MAX,
        f64::MIN,
        f64::EPSILON,
        -123456.78901234567,
        9007199254740993.0,
    ];
    for f in floats {
        assert_eq!(round_trip(json!(f)).as_f64(), Some(f), "float {:e}", f);
    }
    assert_eq!(round_trip(json!(u64::MAX)).as_u64(), Some(u64::MAX));
    assert_eq!(round_trip(json!(i64::MIN)).as_i64(), Some(i64::MIN));
}

/// Many pseudo-random bit patterns, so shortest-representation floats are
/// covered across the whole exponent range.
#[test]
fn arbitrary_finite_floats_round_trip_exactly() {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut checked = 0;
    while checked < 20_000 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let f = f64::from_bits(state);
        if !f.is_finite() {
            continue;
        }
        let mut dictionary = BTreeMap::new();
        dictionary.insert("x", f);
        let text = encode_dictionary_to_json_string(&dictionary).unwrap();
        let decoded = decode_json_string_to_dictionary(&text).unwrap();
        assert_eq!(decoded["x"].as_f64(), Some(f), "{} came back changed", text);
        checked += 1;
    }
}
