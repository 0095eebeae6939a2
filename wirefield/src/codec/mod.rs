//! The record codec
//!
//! Maps [`WireRecord`]s to and from JSON using one [`FieldNamingStrategy`] for
//! both directions. Text is parsed and printed by `serde_json`; this module
//! only decides which key each field lives under and how forgiving reads are.

mod builder;
mod singleton;

use std::collections::HashSet;
use std::sync::Arc;

pub use builder::CodecBuilder;
use error_stack::{Report, ResultExt};
use serde_json::{Map, Value};
pub use singleton::{set_singleton, singleton};

use crate::error::{Error, Result};
use crate::handler::ParseExceptionHandler;
use crate::json_type::JsonType;
use crate::naming::{FieldDescriptor, FieldNamingStrategy};
use crate::record::WireRecord;
use crate::value::DecodeScope;

/// Encodes and decodes records
///
/// Immutable once built and cheap to share: the naming strategy and the
/// exception handler sit behind `Arc`s.
#[derive(Clone)]
pub struct Codec {
    naming:          Arc<dyn FieldNamingStrategy>,
    handler:         Arc<dyn ParseExceptionHandler>,
    serialize_nulls: bool,
    pretty:          bool,
}

impl Default for Codec {
    fn default() -> Self { CodecBuilder::new().build() }
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec")
            .field("naming", &"<dyn FieldNamingStrategy>")
            .field("handler", &"<dyn ParseExceptionHandler>")
            .field("serialize_nulls", &self.serialize_nulls)
            .field("pretty", &self.pretty)
            .finish()
    }
}

impl Codec {
    /// Start configuring a codec
    #[must_use]
    pub fn builder() -> CodecBuilder { CodecBuilder::new() }

    pub(crate) fn exception_handler(&self) -> &dyn ParseExceptionHandler { &*self.handler }

    /// Whether `null` field values are written out
    #[must_use]
    pub const fn serializes_nulls(&self) -> bool { self.serialize_nulls }

    /// Wire names of `T`'s fields, in declaration order
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateWireName`] when two fields resolve to the
    /// same name.
    pub fn wire_names<T: WireRecord>(&self) -> Result<Vec<String>> {
        let names: Vec<String> = T::fields()
            .iter()
            .map(|field| self.naming.translate_name(field))
            .collect();

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(Report::new(Error::DuplicateWireName {
                    type_name: T::TYPE_NAME,
                    wire_name: name.clone(),
                })
                .attach(format!("Declared fields: {}", declared_names::<T>())));
            }
        }
        Ok(names)
    }

    /// Encode a record as a JSON object
    ///
    /// A `null` field value is left out when the field's default also encodes
    /// as `null`, unless the codec was built with `serialize_nulls(true)`.
    /// Otherwise it is written as an explicit `null` so decoding does not
    /// restore the default in its place.
    ///
    /// Non-finite floats (`NaN`, `inf`) have no JSON form and encode as
    /// `null`; decoding such a field gives back its default, not the
    /// original value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateWireName`] when two fields resolve to the
    /// same wire name, or any error raised while encoding a field value.
    pub fn to_value<T: WireRecord>(&self, record: &T) -> Result<Value> {
        let names = self.wire_names::<T>()?;
        let mut object = Map::with_capacity(names.len());
        let mut defaults: Option<T> = None;

        for (index, name) in names.into_iter().enumerate() {
            let value = record.encode_field(index, self)?;
            if value.is_null() && !self.serialize_nulls {
                let default = defaults.get_or_insert_with(T::default);
                if default.encode_field(index, self)?.is_null() {
                    continue;
                }
            }
            object.insert(name, value);
        }

        tracing::debug!("Encoded {} with {} keys", T::TYPE_NAME, object.len());
        Ok(Value::Object(object))
    }

    /// Encode a record as JSON text
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Codec::to_value`], or
    /// [`Error::Serialization`] when the encoded value cannot be printed.
    pub fn to_string<T: WireRecord>(&self, record: &T) -> Result<String> {
        let value = self.to_value(record)?;
        let text = if self.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        text.change_context(Error::serialization_failed(
            T::TYPE_NAME,
            "encoded value could not be printed",
        ))
    }

    /// Decode a record from JSON text
    ///
    /// # Errors
    ///
    /// Returns [`Error::JsonParse`] when `text` is not valid JSON, and the
    /// errors of [`Codec::from_value`] otherwise.
    pub fn from_str<T: WireRecord>(&self, text: &str) -> Result<T> {
        let value: Value = serde_json::from_str(text)
            .change_context(Error::invalid_json(T::TYPE_NAME, "text is not valid JSON"))
            .map_err(|report| {
                report.attach(format!("Input length: {} bytes", text.len()))
            })?;
        self.from_value(&value)
    }

    /// Decode a record from a parsed JSON value
    ///
    /// The value must be an object. Anything inside it that does not fit is
    /// reported to the exception handler and leaves the default in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedRoot`] when `value` is not an object and
    /// [`Error::DuplicateWireName`] when two fields resolve to the same name.
    pub fn from_value<T: WireRecord>(&self, value: &Value) -> Result<T> {
        match value {
            Value::Object(object) => self.decode_object(object),
            other => Err(Report::new(Error::UnexpectedRoot {
                type_name: T::TYPE_NAME,
                found:     JsonType::of(other),
            })),
        }
    }

    /// Decode a record nested inside another value
    ///
    /// Returns `Ok(None)` when `value` is not an object, so the enclosing
    /// field or container can report the mismatch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateWireName`] when two fields of `T` resolve to
    /// the same name.
    pub fn decode_nested<T: WireRecord>(&self, value: &Value) -> Result<Option<T>> {
        match value {
            Value::Object(object) => self.decode_object(object).map(Some),
            _ => Ok(None),
        }
    }

    fn decode_object<T: WireRecord>(&self, object: &Map<String, Value>) -> Result<T> {
        let names = self.wire_names::<T>()?;
        let fields = T::fields();
        let mut record = T::default();

        for (key, value) in object {
            let Some(index) = names.iter().position(|name| name == key) else {
                tracing::trace!("Ignoring unknown key '{key}' for {}", T::TYPE_NAME);
                continue;
            };
            let field_name = fields[index].declared_name();
            let scope = DecodeScope::new(self, T::TYPE_NAME, field_name);

            if record.decode_field(index, value, &scope)? {
                continue;
            }
            if value.is_null() {
                tracing::trace!("Keeping default for {}#{field_name}: null", T::TYPE_NAME);
            } else {
                self.handler
                    .on_parse_object_exception(T::TYPE_NAME, field_name, JsonType::of(value));
            }
        }

        tracing::debug!("Decoded {} from {} keys", T::TYPE_NAME, object.len());
        Ok(record)
    }
}

fn declared_names<T: WireRecord>() -> String {
    T::fields()
        .iter()
        .map(FieldDescriptor::declared_name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests;
