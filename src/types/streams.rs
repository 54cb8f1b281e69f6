use super::{Attribute, SourceAttribute};

use aws_sdk_dynamodbstreams::types::AttributeValue;

impl SourceAttribute for AttributeValue {
    fn into_attribute(self) -> Attribute<Self> {
        match self {
            AttributeValue::B(blob) => Attribute::Binary(blob),
            AttributeValue::Bool(b) => Attribute::Boolean(b),
            AttributeValue::Bs(blobs) => Attribute::BinarySet(blobs),
            AttributeValue::L(list) => Attribute::List(list),
            AttributeValue::M(map) => Attribute::Map(map),
            AttributeValue::N(n) => Attribute::Number(n),
            AttributeValue::Ns(ns) => Attribute::NumberSet(ns),
            AttributeValue::Null(_) => Attribute::Null,
            AttributeValue::S(s) => Attribute::String(s),
            AttributeValue::Ss(ss) => Attribute::StringSet(ss),
            other => Attribute::Unsupported(format!("{other:?}")),
        }
    }
}
