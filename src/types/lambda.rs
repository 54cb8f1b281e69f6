use super::{Attribute, SourceAttribute};

use aws_sdk_dynamodb::primitives::Blob;
use serde_dynamo::AttributeValue;

impl SourceAttribute for AttributeValue {
    fn into_attribute(self) -> Attribute<Self> {
        match self {
            AttributeValue::B(bytes) => Attribute::Binary(Blob::new(bytes)),
            AttributeValue::Bool(b) => Attribute::Boolean(b),
            AttributeValue::Bs(bytes) => {
                Attribute::BinarySet(bytes.into_iter().map(Blob::new).collect())
            }
            AttributeValue::L(list) => Attribute::List(list),
            AttributeValue::M(map) => Attribute::Map(map),
            AttributeValue::N(n) => Attribute::Number(n),
            AttributeValue::Ns(ns) => Attribute::NumberSet(ns),
            AttributeValue::Null(_) => Attribute::Null,
            AttributeValue::S(s) => Attribute::String(s),
            AttributeValue::Ss(ss) => Attribute::StringSet(ss),
        }
    }
}
