use super::error::Error;

use aws_sdk_dynamodb::types::AttributeValue;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Populate a Rust value from a converted item.
///
/// Field names and type coercion (number strings into integers or floats, sets into
/// sequences, nested maps into structs) belong entirely to the implementation.
pub trait Decoder {
    /// Decode the item into `T`.
    fn decode<T: DeserializeOwned>(&self, item: HashMap<String, AttributeValue>) -> Result<T, Error>;
}

/// Decoder backed by [`serde_dynamo`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeDynamo;

impl Decoder for SerdeDynamo {
    fn decode<T: DeserializeOwned>(&self, item: HashMap<String, AttributeValue>) -> Result<T, Error> {
        serde_dynamo::aws_sdk_dynamodb_1::from_item(item).map_err(|err| Error::Decode(Box::new(err)))
    }
}
