use aws_sdk_dynamodbstreams::{
    primitives::Blob,
    types::{AttributeValue, Record, StreamRecord},
};
use std::collections::HashMap;

pub const DEADBEEF: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];
pub const DISEASE: [u8; 4] = [0x0D, 0x15, 0xEA, 0x5E];

pub fn s(val: &str) -> AttributeValue {
    AttributeValue::S(val.into())
}

pub fn n(val: &str) -> AttributeValue {
    AttributeValue::N(val.into())
}

pub fn m(entries: Vec<(&str, AttributeValue)>) -> AttributeValue {
    AttributeValue::M(image(entries))
}

pub fn image(entries: Vec<(&str, AttributeValue)>) -> HashMap<String, AttributeValue> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// An image holding every kind of attribute value.
pub fn all_types_image() -> HashMap<String, AttributeValue> {
    image(vec![
        ("binary", AttributeValue::B(Blob::new(DEADBEEF))),
        ("boolean", AttributeValue::Bool(true)),
        (
            "binarySet",
            AttributeValue::Bs(vec![Blob::new(DEADBEEF), Blob::new(DISEASE)]),
        ),
        ("list", AttributeValue::L(vec![s("a"), n("1")])),
        (
            "map",
            m(vec![
                ("innerA", s("value")),
                ("innerB", m(vec![("innerInner", s("innerInnerValue"))])),
            ]),
        ),
        ("numberIntNegative", n("-1")),
        ("numberIntZero", n("0")),
        ("numberIntPositive", n("2000")),
        ("numberFloatNegative", n("-0.3")),
        ("numberFloatZero", n("0.0")),
        ("numberFloatPositive", n("+0.3")),
        (
            "numberSet",
            AttributeValue::Ns(vec!["0".into(), "0.5".into(), "1".into()]),
        ),
        ("null", AttributeValue::Null(true)),
        ("string", s("string value")),
        ("stringSet", AttributeValue::Ss(vec!["A".into(), "B".into()])),
    ])
}

pub fn create_record(
    keys: HashMap<String, AttributeValue>,
    new_image: Option<HashMap<String, AttributeValue>>,
    old_image: Option<HashMap<String, AttributeValue>>,
) -> Record {
    let dynamodb = StreamRecord::builder()
        .set_keys(Some(keys))
        .set_new_image(new_image)
        .set_old_image(old_image)
        .sequence_number("0001")
        .build();
    Record::builder().dynamodb(dynamodb).build()
}
