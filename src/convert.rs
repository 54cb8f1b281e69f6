use super::{
    error::{Error, Position},
    types::{Attribute, SourceAttribute},
};

use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use tracing::trace;

/// How a map entry holding a Null attribute is written to the converted item.
///
/// Null elements inside lists are always kept as `NULL` so that element positions never shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Nulls {
    /// Drop the entry, so the decoder sees the attribute as missing.
    #[default]
    Omit,
    /// Keep the entry as `NULL: true`.
    Keep,
}

/// Convert one attribute value from an event source into a DynamoDB attribute value.
///
/// A Null attribute has no counterpart and converts to `None`.
///
/// ```rust
/// use aws_sdk_dynamodbstreams::types::AttributeValue;
/// use dynamo_image::convert;
///
/// let value = convert(AttributeValue::N("+0.3".into())).unwrap();
/// assert_eq!(value.unwrap().as_n().unwrap(), "+0.3");
///
/// let value = convert(AttributeValue::Null(true)).unwrap();
/// assert!(value.is_none());
/// ```
pub fn convert<V: SourceAttribute>(value: V) -> Result<Option<AttributeValue>, Error> {
    Converter::default().convert(value)
}

/// Recursive attribute value conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    nulls: Nulls,
}

impl Converter {
    /// Create a converter writing Null map entries as `nulls` says.
    pub fn new(nulls: Nulls) -> Self {
        Self { nulls }
    }

    /// How Null map entries are written to the converted item.
    pub fn nulls(&self) -> Nulls {
        self.nulls
    }

    /// Convert one attribute value, recursing into lists and maps.
    pub fn convert<V: SourceAttribute>(&self, value: V) -> Result<Option<AttributeValue>, Error> {
        let value = match value.into_attribute() {
            Attribute::Binary(blob) => AttributeValue::B(blob),
            Attribute::Boolean(b) => AttributeValue::Bool(b),
            Attribute::BinarySet(blobs) => AttributeValue::Bs(blobs),
            Attribute::List(list) => AttributeValue::L(self.list_of(list)?),
            Attribute::Map(map) => AttributeValue::M(self.map_of(map)?),
            Attribute::Number(n) => AttributeValue::N(n),
            Attribute::NumberSet(ns) => AttributeValue::Ns(ns),
            Attribute::Null => return Ok(None),
            Attribute::String(s) => AttributeValue::S(s),
            Attribute::StringSet(ss) => AttributeValue::Ss(ss),
            Attribute::Unsupported(kind) => return Err(Error::UnsupportedKind(kind)),
        };

        Ok(Some(value))
    }

    /// Convert list elements in order. A failing element is reported with its index.
    pub fn list_of<V: SourceAttribute>(&self, list: Vec<V>) -> Result<Vec<AttributeValue>, Error> {
        list.into_iter()
            .enumerate()
            .map(|(index, value)| {
                self.convert(value)
                    .map(|value| value.unwrap_or(AttributeValue::Null(true)))
                    .map_err(|err| Error::at(Position::Index(index), err))
            })
            .collect()
    }

    /// Convert map values key by key. A failing value is reported with its key.
    pub fn map_of<V: SourceAttribute>(
        &self,
        map: HashMap<String, V>,
    ) -> Result<HashMap<String, AttributeValue>, Error> {
        let mut output = HashMap::with_capacity(map.len());

        for (key, value) in map {
            let value = match self.convert(value) {
                Ok(value) => value,
                Err(err) => return Err(Error::at(Position::Key(key), err)),
            };

            match (value, self.nulls) {
                (Some(value), _) => {
                    output.insert(key, value);
                }
                (None, Nulls::Keep) => {
                    output.insert(key, AttributeValue::Null(true));
                }
                (None, Nulls::Omit) => {
                    trace!("Omit null attribute: {key}");
                }
            }
        }

        Ok(output)
    }
}
