//! Lenient value adapters
//!
//! Each field type knows how to write itself as JSON and how to read itself
//! back from whatever the document actually holds. Reading never fails for a
//! type mismatch: `decode` answers `Ok(None)` and the caller reports it.

mod collection;
mod primitive;

use serde_json::Value;

use crate::codec::Codec;
use crate::error::Result;
use crate::handler::ParseExceptionHandler;
use crate::json_type::JsonType;

/// A field type the codec can read and write
pub trait WireValue: Sized {
    /// Write the value as JSON
    ///
    /// # Errors
    ///
    /// Returns an error when a nested record cannot be encoded.
    fn encode(&self, codec: &Codec) -> Result<Value>;

    /// Read the value, coercing where the document uses a neighbouring kind
    ///
    /// `Ok(None)` means the JSON could not be coerced. `Err` is reserved for
    /// problems with the record definitions themselves.
    ///
    /// # Errors
    ///
    /// Returns an error when a nested record has colliding wire names.
    fn decode(value: &Value, scope: &DecodeScope<'_>) -> Result<Option<Self>>;
}

/// Decode `value` into `slot`, leaving it untouched on a mismatch
///
/// Returns whether the slot was written.
///
/// # Errors
///
/// Returns the errors of [`WireValue::decode`].
pub fn decode_into<T: WireValue>(
    slot: &mut T,
    value: &Value,
    scope: &DecodeScope<'_>,
) -> Result<bool> {
    match T::decode(value, scope)? {
        Some(decoded) => {
            *slot = decoded;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Where in a record the decoder currently is
///
/// Carried into nested values so list and map adapters can name the field
/// when they report a dropped item.
#[derive(Clone, Copy)]
pub struct DecodeScope<'a> {
    codec:      &'a Codec,
    type_name:  &'a str,
    field_name: &'a str,
}

impl<'a> DecodeScope<'a> {
    /// Scope for `field_name` of record `type_name`
    #[must_use]
    pub const fn new(codec: &'a Codec, type_name: &'a str, field_name: &'a str) -> Self {
        Self {
            codec,
            type_name,
            field_name,
        }
    }

    /// The codec doing the decoding
    #[must_use]
    pub const fn codec(&self) -> &'a Codec { self.codec }

    /// Record being decoded
    #[must_use]
    pub const fn type_name(&self) -> &'a str { self.type_name }

    /// Field being decoded
    #[must_use]
    pub const fn field_name(&self) -> &'a str { self.field_name }

    fn handler(&self) -> &'a dyn ParseExceptionHandler { self.codec.exception_handler() }

    /// Report a list item that had to be dropped
    pub fn report_list_item(&self, found: JsonType) {
        self.handler()
            .on_parse_list_item_exception(self.type_name, self.field_name, found);
    }

    /// Report a map entry that had to be dropped
    pub fn report_map_item(&self, map_key: &str, found: JsonType) {
        self.handler()
            .on_parse_map_item_exception(self.type_name, self.field_name, map_key, found);
    }
}

impl std::fmt::Debug for DecodeScope<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodeScope")
            .field("type_name", &self.type_name)
            .field("field_name", &self.field_name)
            .finish_non_exhaustive()
    }
}
