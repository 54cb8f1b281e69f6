//! # Unmarshaler
//!
//! [`Unmarshaler`] converts every attribute of an item image and decodes the converted item
//! into any type implementing [`Deserialize`](serde::Deserialize).
//!
//! ```rust
//! use aws_sdk_dynamodbstreams::types::AttributeValue;
//! use dynamo_image as image;
//! use serde::Deserialize;
//! use std::collections::HashMap;
//!
//! #[derive(Debug, Deserialize)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let item = HashMap::from([
//!     ("name".to_string(), AttributeValue::S("Alice".into())),
//!     ("age".to_string(), AttributeValue::N("30".into())),
//! ]);
//!
//! let person: Person = image::unmarshaler::builder().build().unmarshal_image(item).unwrap();
//! assert_eq!(person.name, "Alice");
//! assert_eq!(person.age, 30);
//! ```
//!
//! ## Null attributes
//!
//! By default a Null attribute is dropped from the converted item, so the decoder sees a
//! missing attribute and an `Option` field becomes `None`. Decoders that expect an explicit
//! `NULL` can be served with [`Nulls::Keep`].
//!
//! ```rust
//! use dynamo_image::{unmarshaler, Nulls};
//!
//! let unmarshaler = unmarshaler::builder().nulls(Nulls::Keep).build();
//! ```

mod builder;

use super::{
    convert::{Converter, Nulls},
    decode::{Decoder, SerdeDynamo},
    error::Error,
    record::{self, ImageKind},
    types::SourceAttribute,
};

use aws_sdk_dynamodbstreams::types::Record;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

pub use builder::UnmarshalerBuilder;

/// Create [`UnmarshalerBuilder`].
pub fn builder() -> UnmarshalerBuilder<SerdeDynamo> {
    UnmarshalerBuilder::new()
}

/// Unmarshal an item image with the default configuration.
///
/// Null attributes are omitted and [`serde_dynamo`] populates the target.
pub fn unmarshal_image<T, V>(image: HashMap<String, V>) -> Result<T, Error>
where
    T: DeserializeOwned,
    V: SourceAttribute,
{
    Unmarshaler::<SerdeDynamo>::default().unmarshal_image(image)
}

/// Convert item images and decode them into Rust values.
#[derive(Debug, Clone, Default)]
pub struct Unmarshaler<D = SerdeDynamo>
where
    D: Decoder,
{
    converter: Converter,
    decoder: D,
}

impl<D> Unmarshaler<D>
where
    D: Decoder,
{
    /// How Null map entries are written to the converted item.
    pub fn nulls(&self) -> Nulls {
        self.converter.nulls()
    }

    /// The decoder populating Rust values from converted items.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Convert every attribute of the image and decode the result into `T`.
    ///
    /// The first attribute failing conversion aborts the call with an error naming its key,
    /// and the decoder is never invoked.
    pub fn unmarshal_image<T, V>(&self, image: HashMap<String, V>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        V: SourceAttribute,
    {
        let item = self.converter.map_of(image)?;
        self.decoder.decode(item)
    }

    /// Unmarshal one of the images carried by a DynamoDB Streams record.
    ///
    /// Return `None` when the record has no such image, for example the old image of an
    /// `INSERT` event or any image of a `KEYS_ONLY` stream other than the keys.
    pub fn unmarshal_record<T>(&self, record: &Record, kind: ImageKind) -> Result<Option<T>, Error>
    where
        T: DeserializeOwned,
    {
        record::image(record, kind)
            .cloned()
            .map(|image| self.unmarshal_image(image))
            .transpose()
    }
}
