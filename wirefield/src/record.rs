//! Records: structs whose fields are written as one JSON object
//!
//! Normally implemented with `#[derive(WireRecord)]`, which also implements
//! [`WireValue`](crate::WireValue) so records nest inside other records, lists
//! and maps.

use serde_json::Value;

use crate::codec::Codec;
use crate::error::Result;
use crate::naming::FieldDescriptor;
use crate::value::DecodeScope;

/// A struct the codec maps to and from a JSON object
///
/// Decoding starts from `Default::default()`, so a field missing from the
/// document, or holding a value that cannot be coerced, keeps its default.
pub trait WireRecord: Default + 'static {
    /// Name used in error messages and exception reports
    const TYPE_NAME: &'static str;

    /// Declared fields, in declaration order
    fn fields() -> &'static [FieldDescriptor];

    /// Encode the field at `index` of [`WireRecord::fields`]
    ///
    /// # Errors
    ///
    /// Returns the errors of [`WireValue::encode`](crate::WireValue::encode).
    fn encode_field(&self, index: usize, codec: &Codec) -> Result<Value>;

    /// Decode `value` into the field at `index`
    ///
    /// Returns `Ok(false)` when the value could not be coerced; the field is
    /// left untouched in that case.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`WireValue::decode`](crate::WireValue::decode).
    fn decode_field(&mut self, index: usize, value: &Value, scope: &DecodeScope<'_>)
    -> Result<bool>;
}
