//! Containers: `Option`, lists and string-keyed maps
//!
//! Lists and maps decode item by item. An item that cannot be coerced is
//! dropped and reported through the scope; the rest of the container survives.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

use super::{DecodeScope, WireValue};
use crate::codec::Codec;
use crate::error::Result;
use crate::json_type::JsonType;

impl<T: WireValue> WireValue for Option<T> {
    fn encode(&self, codec: &Codec) -> Result<Value> {
        self.as_ref()
            .map_or(Ok(Value::Null), |inner| inner.encode(codec))
    }

    fn decode(value: &Value, scope: &DecodeScope<'_>) -> Result<Option<Self>> {
        if value.is_null() {
            return Ok(Some(None));
        }
        Ok(T::decode(value, scope)?.map(Some))
    }
}

impl<T: WireValue> WireValue for Vec<T> {
    fn encode(&self, codec: &Codec) -> Result<Value> {
        self.iter()
            .map(|item| item.encode(codec))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }

    fn decode(value: &Value, scope: &DecodeScope<'_>) -> Result<Option<Self>> {
        let Value::Array(items) = value else {
            return Ok(None);
        };

        let mut decoded = Self::with_capacity(items.len());
        for item in items {
            match T::decode(item, scope)? {
                Some(v) => decoded.push(v),
                None => scope.report_list_item(JsonType::of(item)),
            }
        }
        Ok(Some(decoded))
    }
}

/// Decode every entry of `value`, handing survivors to `insert`
fn decode_entries<T: WireValue>(
    value: &Value,
    scope: &DecodeScope<'_>,
    mut insert: impl FnMut(String, T),
) -> Result<bool> {
    let Value::Object(entries) = value else {
        return Ok(false);
    };

    for (key, item) in entries {
        match T::decode(item, scope)? {
            Some(v) => insert(key.clone(), v),
            None => scope.report_map_item(key, JsonType::of(item)),
        }
    }
    Ok(true)
}

fn encode_entries<'a, T: WireValue + 'a>(
    entries: impl Iterator<Item = (&'a String, &'a T)>,
    codec: &Codec,
) -> Result<Value> {
    let mut object = Map::new();
    for (key, item) in entries {
        object.insert(key.clone(), item.encode(codec)?);
    }
    Ok(Value::Object(object))
}

impl<T: WireValue, S: BuildHasher + Default> WireValue for HashMap<String, T, S> {
    fn encode(&self, codec: &Codec) -> Result<Value> { encode_entries(self.iter(), codec) }

    fn decode(value: &Value, scope: &DecodeScope<'_>) -> Result<Option<Self>> {
        let mut decoded = Self::default();
        let is_object = decode_entries(value, scope, |key, item| {
            decoded.insert(key, item);
        })?;
        Ok(is_object.then_some(decoded))
    }
}

impl<T: WireValue> WireValue for BTreeMap<String, T> {
    fn encode(&self, codec: &Codec) -> Result<Value> { encode_entries(self.iter(), codec) }

    fn decode(value: &Value, scope: &DecodeScope<'_>) -> Result<Option<Self>> {
        let mut decoded = Self::new();
        let is_object = decode_entries(value, scope, |key, item| {
            decoded.insert(key, item);
        })?;
        Ok(is_object.then_some(decoded))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;
    use crate::handler::ParseExceptionHandler;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl Recorder {
        fn reports(&self) -> Vec<String> { self.0.lock().expect("recorder lock").clone() }
    }

    impl ParseExceptionHandler for Recorder {
        fn on_parse_object_exception(&self, type_name: &str, field_name: &str, found: JsonType) {
            self.0
                .lock()
                .expect("recorder lock")
                .push(format!("object {type_name}#{field_name} {found}"));
        }

        fn on_parse_list_item_exception(
            &self,
            type_name: &str,
            field_name: &str,
            found: JsonType,
        ) {
            self.0
                .lock()
                .expect("recorder lock")
                .push(format!("list {type_name}#{field_name} {found}"));
        }

        fn on_parse_map_item_exception(
            &self,
            type_name: &str,
            field_name: &str,
            map_key: &str,
            found: JsonType,
        ) {
            self.0
                .lock()
                .expect("recorder lock")
                .push(format!("map {type_name}#{field_name}[{map_key}] {found}"));
        }
    }

    fn recording_codec() -> (Codec, Recorder) {
        let recorder = Recorder::default();
        let codec = Codec::builder()
            .parse_exception_handler(recorder.clone())
            .build();
        (codec, recorder)
    }

    #[test]
    fn test_option_null_and_value() {
        let codec = Codec::default();
        let scope = DecodeScope::new(&codec, "Bean", "stature");
        assert_eq!(Option::<i32>::decode(&json!(null), &scope).expect("decode"), Some(None));
        assert_eq!(Option::<i32>::decode(&json!("180"), &scope).expect("decode"), Some(Some(180)));
        assert_eq!(Option::<i32>::decode(&json!([]), &scope).expect("decode"), None);
        assert_eq!(None::<i32>.encode(&codec).expect("encode"), json!(null));
    }

    #[test]
    fn test_list_drops_bad_items_and_reports_them() {
        let (codec, recorder) = recording_codec();
        let scope = DecodeScope::new(&codec, "Bean", "interest");
        let decoded = Vec::<String>::decode(&json!(["code", 7, {"x": 1}, null]), &scope)
            .expect("decode");
        assert_eq!(decoded, Some(vec!["code".to_string(), "7".to_string()]));
        assert_eq!(
            recorder.reports(),
            vec!["list Bean#interest object", "list Bean#interest null"]
        );
    }

    #[test]
    fn test_list_rejects_non_array() {
        let (codec, recorder) = recording_codec();
        let scope = DecodeScope::new(&codec, "Bean", "interest");
        assert_eq!(Vec::<String>::decode(&json!("code"), &scope).expect("decode"), None);
        assert!(recorder.reports().is_empty());
    }

    #[test]
    fn test_map_drops_bad_entries_and_reports_them() {
        let (codec, recorder) = recording_codec();
        let scope = DecodeScope::new(&codec, "Bean", "scores");
        let decoded = BTreeMap::<String, i64>::decode(&json!({"a": 1, "b": "2", "c": []}), &scope)
            .expect("decode")
            .expect("object");
        assert_eq!(decoded.get("a"), Some(&1));
        assert_eq!(decoded.get("b"), Some(&2));
        assert!(!decoded.contains_key("c"));
        assert_eq!(recorder.reports(), vec!["map Bean#scores[c] array"]);
    }

    #[test]
    fn test_hash_map_round_trip() {
        let codec = Codec::default();
        let scope = DecodeScope::new(&codec, "Bean", "scores");
        let mut original = HashMap::new();
        original.insert("x".to_string(), vec![1_u8, 2]);
        let encoded = original.encode(&codec).expect("encode");
        assert_eq!(encoded, json!({"x": [1, 2]}));
        let decoded = HashMap::<String, Vec<u8>>::decode(&encoded, &scope).expect("decode");
        assert_eq!(decoded, Some(original));
    }
}
