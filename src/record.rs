use aws_sdk_dynamodbstreams::types::{AttributeValue, Record};
use std::collections::HashMap;

/// Which item image of a stream record to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// The primary key attributes of the modified item.
    Keys,
    /// The item as it appeared after it was modified.
    NewImage,
    /// The item as it appeared before it was modified.
    OldImage,
}

/// Return the requested image of the record, if the record carries one.
pub fn image(record: &Record, kind: ImageKind) -> Option<&HashMap<String, AttributeValue>> {
    let dynamodb = record.dynamodb()?;

    match kind {
        ImageKind::Keys => dynamodb.keys(),
        ImageKind::NewImage => dynamodb.new_image(),
        ImageKind::OldImage => dynamodb.old_image(),
    }
}
