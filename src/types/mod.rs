mod lambda;
mod streams;

use aws_sdk_dynamodb::primitives::Blob;
use std::collections::HashMap;

/// The kind of an attribute value read from a change record, together with its payload.
///
/// Exactly one kind is active. Nested lists and maps keep the source representation `V`
/// so that they can be converted lazily, one level at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute<V> {
    Binary(Blob),
    Boolean(bool),
    BinarySet(Vec<Blob>),
    List(Vec<V>),
    Map(HashMap<String, V>),
    /// Decimal number kept as its string form.
    Number(String),
    NumberSet(Vec<String>),
    Null,
    String(String),
    StringSet(Vec<String>),
    /// A kind the source representation carries but this crate does not recognize.
    Unsupported(String),
}

impl<V> Attribute<V> {
    /// Name of the kind, as written in DynamoDB JSON.
    pub fn kind(&self) -> &str {
        match self {
            Self::Binary(_) => "B",
            Self::Boolean(_) => "BOOL",
            Self::BinarySet(_) => "BS",
            Self::List(_) => "L",
            Self::Map(_) => "M",
            Self::Number(_) => "N",
            Self::NumberSet(_) => "NS",
            Self::Null => "NULL",
            Self::String(_) => "S",
            Self::StringSet(_) => "SS",
            Self::Unsupported(kind) => kind.as_str(),
        }
    }
}

/// An attribute value as delivered by an event source.
///
/// Implemented for [`aws_sdk_dynamodbstreams::types::AttributeValue`] and for
/// [`serde_dynamo::AttributeValue`], which is how Lambda DynamoDB events carry item images.
pub trait SourceAttribute: Sized {
    /// Consume the value and expose its kind.
    fn into_attribute(self) -> Attribute<Self>;
}
