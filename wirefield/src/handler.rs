//! Callbacks for values the lenient decoder had to drop

use crate::json_type::JsonType;

/// Told about every value the decoder could not coerce
///
/// Decoding never fails for a type mismatch inside a document. The offending
/// field keeps its default (or the offending list/map item is dropped) and one
/// of these methods is called instead, so callers can log or report it.
pub trait ParseExceptionHandler: Send + Sync {
    /// A record field held a value of the wrong kind
    fn on_parse_object_exception(&self, type_name: &str, field_name: &str, found: JsonType);

    /// An item of a list field could not be decoded
    fn on_parse_list_item_exception(&self, type_name: &str, field_name: &str, found: JsonType);

    /// An entry of a map field could not be decoded
    fn on_parse_map_item_exception(
        &self,
        type_name: &str,
        field_name: &str,
        map_key: &str,
        found: JsonType,
    );
}

/// Default handler: emits a `tracing` warning per dropped value
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingExceptionHandler;

impl ParseExceptionHandler for LoggingExceptionHandler {
    fn on_parse_object_exception(&self, type_name: &str, field_name: &str, found: JsonType) {
        tracing::warn!("Failed to parse {type_name}#{field_name}: document holds {found}");
    }

    fn on_parse_list_item_exception(&self, type_name: &str, field_name: &str, found: JsonType) {
        tracing::warn!("Failed to parse list item of {type_name}#{field_name}: item is {found}");
    }

    fn on_parse_map_item_exception(
        &self,
        type_name: &str,
        field_name: &str,
        map_key: &str,
        found: JsonType,
    ) {
        tracing::warn!(
            "Failed to parse map entry '{map_key}' of {type_name}#{field_name}: value is {found}"
        );
    }
}

/// Handler that drops every report
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentExceptionHandler;

impl ParseExceptionHandler for SilentExceptionHandler {
    fn on_parse_object_exception(&self, _type_name: &str, _field_name: &str, _found: JsonType) {}

    fn on_parse_list_item_exception(&self, _type_name: &str, _field_name: &str, _found: JsonType) {
    }

    fn on_parse_map_item_exception(
        &self,
        _type_name: &str,
        _field_name: &str,
        _map_key: &str,
        _found: JsonType,
    ) {
    }
}
