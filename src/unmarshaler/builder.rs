use super::{
    super::{
        convert::{Converter, Nulls},
        decode::{Decoder, SerdeDynamo},
    },
    Unmarshaler,
};

/// A builder for [`Unmarshaler`].
#[derive(Debug)]
pub struct UnmarshalerBuilder<D>
where
    D: Decoder,
{
    nulls: Nulls,
    decoder: D,
}

impl UnmarshalerBuilder<SerdeDynamo> {
    /// Create a new `UnmarshalerBuilder`.
    pub fn new() -> Self {
        Self {
            nulls: Nulls::Omit,
            decoder: SerdeDynamo,
        }
    }
}

impl<D> UnmarshalerBuilder<D>
where
    D: Decoder,
{
    /// Set how Null map entries are written to the converted item.
    ///
    /// Setting this is optional. If you omit calling this method, `Nulls::Omit` is used as
    /// default value.
    pub fn nulls(self, nulls: Nulls) -> Self {
        Self { nulls, ..self }
    }

    /// Set the decoder populating Rust values from converted items.
    ///
    /// Setting any decoder is optional. If you omit calling this method,
    /// [`SerdeDynamo`] is used as default value.
    pub fn decoder<E: Decoder>(self, decoder: E) -> UnmarshalerBuilder<E> {
        UnmarshalerBuilder {
            nulls: self.nulls,
            decoder,
        }
    }

    /// Consumes the builder and constructs an [`Unmarshaler`].
    pub fn build(self) -> Unmarshaler<D> {
        Unmarshaler {
            converter: Converter::new(self.nulls),
            decoder: self.decoder,
        }
    }
}

impl Default for UnmarshalerBuilder<SerdeDynamo> {
    fn default() -> Self {
        Self::new()
    }
}
