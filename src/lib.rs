//! Unmarshal item images of [Amazon DynamoDB Streams](https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/streamsmain.html)
//! records into your own Rust types.
//!
//! Stream records carry item images as
//! [`aws_sdk_dynamodbstreams::types::AttributeValue`] trees, while the serde ecosystem for
//! DynamoDB speaks [`aws_sdk_dynamodb::types::AttributeValue`]. This crate converts the former
//! into the latter and decodes the result with [`serde_dynamo`].
//!
//! ## Getting Started
//!
//! Edit your **Cargo.toml** at first.
//!
//! ```toml
//! [dependencies]
//! dynamo-image = "0.1"
//! serde = { version = "1", features = ["derive"] }
//! ```
//!
//! Then in code, decode the new image of a record into a struct.
//!
//! ```rust
//! use aws_sdk_dynamodbstreams::types::{AttributeValue, Record, StreamRecord};
//! use dynamo_image::{self as image, ImageKind};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct Person {
//!     id: String,
//!     age: u32,
//!     nickname: Option<String>,
//! }
//!
//! let dynamodb = StreamRecord::builder()
//!     .new_image("Id", AttributeValue::S("pk0".into()))
//!     .new_image("Age", AttributeValue::N("30".into()))
//!     .new_image("Nickname", AttributeValue::Null(true))
//!     .build();
//! let record = Record::builder().dynamodb(dynamodb).build();
//!
//! let unmarshaler = image::unmarshaler::builder().build();
//! let person: Person = unmarshaler
//!     .unmarshal_record(&record, ImageKind::NewImage)
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(person.id, "pk0");
//! assert_eq!(person.age, 30);
//! assert!(person.nickname.is_none());
//! ```
//!
//! ## Lambda events
//!
//! Item images of Lambda DynamoDB events are [`serde_dynamo::AttributeValue`] trees and can be
//! passed to [`unmarshal_image`] as they are.

/// Attribute value conversion.
pub mod convert;

/// Common errors.
pub mod error;

/// Decoders populating Rust values from converted items.
pub mod decode;

/// Item images of DynamoDB Streams records.
pub mod record;

/// Data structures used by conversion.
pub mod types;

/// Conversion and decoding of whole item images.
pub mod unmarshaler;

pub use convert::{convert, Converter, Nulls};
pub use decode::{Decoder, SerdeDynamo};
pub use error::{Error, Position};
pub use record::ImageKind;
pub use types::{Attribute, SourceAttribute};
pub use unmarshaler::{unmarshal_image, Unmarshaler};
