use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use super::*;
use crate::naming::{FieldDescriptor, FieldNameResolver, MarkerSet, MarkerTag};
use crate::value::{WireValue, decode_into};

const SNAKE: MarkerSet = MarkerSet::empty().with(MarkerTag::LowerCaseUnderscore);

static PROFILE_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::new_static("age", MarkerSet::empty()),
    FieldDescriptor::new_static("userDesc", SNAKE),
    FieldDescriptor::new_static("nickName", MarkerSet::empty()),
];

/// Hand-written record, shaped like the derive output
#[derive(Debug, Clone, PartialEq)]
struct Profile {
    age:       i32,
    user_desc: String,
    nick_name: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            age:       20,
            user_desc: "123".to_string(),
            nick_name: None,
        }
    }
}

impl WireRecord for Profile {
    const TYPE_NAME: &'static str = "Profile";

    fn fields() -> &'static [FieldDescriptor] { &PROFILE_FIELDS }

    fn encode_field(&self, index: usize, codec: &Codec) -> Result<Value> {
        match index {
            0 => self.age.encode(codec),
            1 => self.user_desc.encode(codec),
            2 => self.nick_name.encode(codec),
            _ => Ok(Value::Null),
        }
    }

    fn decode_field(
        &mut self,
        index: usize,
        value: &Value,
        scope: &DecodeScope<'_>,
    ) -> Result<bool> {
        match index {
            0 => decode_into(&mut self.age, value, scope),
            1 => decode_into(&mut self.user_desc, value, scope),
            2 => decode_into(&mut self.nick_name, value, scope),
            _ => Ok(false),
        }
    }
}

static CLASH_FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor::new_static("user_desc", MarkerSet::empty()),
    FieldDescriptor::new_static("userDesc", SNAKE),
];

#[derive(Debug, Default)]
struct Clash;

impl WireRecord for Clash {
    const TYPE_NAME: &'static str = "Clash";

    fn fields() -> &'static [FieldDescriptor] { &CLASH_FIELDS }

    fn encode_field(&self, _index: usize, _codec: &Codec) -> Result<Value> { Ok(Value::Null) }

    fn decode_field(
        &mut self,
        _index: usize,
        _value: &Value,
        _scope: &DecodeScope<'_>,
    ) -> Result<bool> {
        Ok(false)
    }
}

static MEASURE_FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor::new_static("stature", MarkerSet::empty()),
    FieldDescriptor::new_static("ratio", MarkerSet::empty()),
];

/// Record whose optional field defaults to a value
#[derive(Debug, Clone, PartialEq)]
struct Measure {
    stature: Option<i32>,
    ratio:   f64,
}

impl Default for Measure {
    fn default() -> Self {
        Self {
            stature: Some(180),
            ratio:   1.0,
        }
    }
}

impl WireRecord for Measure {
    const TYPE_NAME: &'static str = "Measure";

    fn fields() -> &'static [FieldDescriptor] { &MEASURE_FIELDS }

    fn encode_field(&self, index: usize, codec: &Codec) -> Result<Value> {
        match index {
            0 => self.stature.encode(codec),
            1 => self.ratio.encode(codec),
            _ => Ok(Value::Null),
        }
    }

    fn decode_field(
        &mut self,
        index: usize,
        value: &Value,
        scope: &DecodeScope<'_>,
    ) -> Result<bool> {
        match index {
            0 => decode_into(&mut self.stature, value, scope),
            1 => decode_into(&mut self.ratio, value, scope),
            _ => Ok(false),
        }
    }
}

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
            .push(format!("{type_name}#{field_name} {found}"));
    }

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

fn resolver_codec() -> (Codec, Recorder) {
    let recorder = Recorder::default();
    let codec = Codec::builder()
        .field_naming_strategy(FieldNameResolver::new())
        .parse_exception_handler(recorder.clone())
        .build();
    (codec, recorder)
}

#[test]
fn test_wire_names_follow_markers() {
    let (codec, _) = resolver_codec();
    assert_eq!(
        codec.wire_names::<Profile>().expect("names"),
        vec!["age", "user_desc", "nickName"]
    );
}

#[test]
fn test_encode_uses_wire_names_and_skips_nulls() {
    let (codec, _) = resolver_codec();
    let value = codec.to_value(&Profile::default()).expect("encode");
    assert_eq!(value, json!({"age": 20, "user_desc": "123"}));
}

#[test]
fn test_serialize_nulls_keeps_null_keys() {
    let codec = Codec::builder()
        .field_naming_strategy(FieldNameResolver::new())
        .serialize_nulls(true)
        .build();
    assert!(codec.serializes_nulls());
    let value = codec.to_value(&Profile::default()).expect("encode");
    assert_eq!(value, json!({"age": 20, "user_desc": "123", "nickName": null}));
}

#[test]
fn test_decode_reads_wire_names_only() {
    let (codec, _) = resolver_codec();
    let profile: Profile = codec
        .from_str(r#"{"userDesc": "ignored", "user_desc": "321"}"#)
        .expect("decode");
    assert_eq!(profile.user_desc, "321");
    assert_eq!(profile.age, 20);
}

#[test]
fn test_missing_fields_keep_defaults() {
    let (codec, recorder) = resolver_codec();
    let profile: Profile = codec.from_str("{}").expect("decode");
    assert_eq!(profile, Profile::default());
    assert!(recorder.reports().is_empty());
}

#[test]
fn test_mismatch_keeps_default_and_reports() {
    let (codec, recorder) = resolver_codec();
    let profile: Profile = codec
        .from_value(&json!({"age": {"years": 3}, "nickName": "wheel"}))
        .expect("decode");
    assert_eq!(profile.age, 20);
    assert_eq!(profile.nick_name.as_deref(), Some("wheel"));
    assert_eq!(recorder.reports(), vec!["Profile#age object"]);
}

#[test]
fn test_null_resets_optional_and_keeps_required() {
    let (codec, recorder) = resolver_codec();
    let profile: Profile = codec
        .from_value(&json!({"age": null, "user_desc": null, "nickName": null}))
        .expect("decode");
    assert_eq!(profile, Profile::default());
    assert!(recorder.reports().is_empty());
}

#[test]
fn test_round_trip() {
    let (codec, recorder) = resolver_codec();
    let original = Profile {
        age:       33,
        user_desc: "wheels".to_string(),
        nick_name: Some("hjq".to_string()),
    };
    let text = codec.to_string(&original).expect("encode");
    let decoded: Profile = codec.from_str(&text).expect("decode");
    assert_eq!(decoded, original);
    assert!(recorder.reports().is_empty());
}

#[test]
fn test_none_over_non_null_default_is_written() {
    let (codec, recorder) = resolver_codec();
    let original = Measure {
        stature: None,
        ratio:   2.0,
    };

    let text = codec.to_string(&original).expect("encode");
    assert_eq!(text, r#"{"stature":null,"ratio":2.0}"#);

    let decoded: Measure = codec.from_str(&text).expect("decode");
    assert_eq!(decoded, original);
    assert!(recorder.reports().is_empty());
}

#[test]
fn test_non_finite_float_decodes_to_default() {
    let (codec, recorder) = resolver_codec();
    let original = Measure {
        stature: Some(170),
        ratio:   f64::INFINITY,
    };

    let value = codec.to_value(&original).expect("encode");
    assert_eq!(value, json!({"stature": 170, "ratio": null}));

    let decoded: Measure = codec.from_value(&value).expect("decode");
    assert!((decoded.ratio - 1.0).abs() < f64::EPSILON);
    assert_eq!(decoded.stature, Some(170));
    assert!(recorder.reports().is_empty());
}

#[test]
fn test_pretty_output() {
    let codec = Codec::builder().pretty(true).build();
    let text = codec.to_string(&Profile::default()).expect("encode");
    assert!(text.contains('\n'));
    assert!(text.contains("\"userDesc\": \"123\""));
}

#[test]
fn test_non_object_root_is_an_error() {
    let (codec, _) = resolver_codec();
    let report = codec
        .from_value::<Profile>(&json!([1, 2]))
        .expect_err("arrays are not records");
    assert!(matches!(
        report.current_context(),
        Error::UnexpectedRoot {
            type_name: "Profile",
            found:     JsonType::Array,
        }
    ));
}

#[test]
fn test_malformed_text_is_an_error() {
    let (codec, _) = resolver_codec();
    let report = codec
        .from_str::<Profile>("{\"age\": ")
        .expect_err("truncated input");
    assert!(matches!(report.current_context(), Error::JsonParse(_)));
}

#[test]
fn test_colliding_wire_names_are_an_error() {
    let (codec, _) = resolver_codec();
    let report = codec
        .to_value(&Clash)
        .expect_err("both fields map to user_desc");
    assert!(matches!(
        report.current_context(),
        Error::DuplicateWireName { wire_name, .. } if wire_name == "user_desc"
    ));
    assert!(codec.from_str::<Clash>("{}").is_err());
}

#[test]
fn test_identity_codec_does_not_collide() {
    let codec = Codec::default();
    assert_eq!(
        codec.wire_names::<Clash>().expect("names"),
        vec!["user_desc", "userDesc"]
    );
}

#[test]
fn test_nested_decode_rejects_non_objects() {
    let codec = Codec::default();
    assert!(
        codec
            .decode_nested::<Profile>(&json!("text"))
            .expect("decode")
            .is_none()
    );
    assert!(
        codec
            .decode_nested::<Profile>(&json!({}))
            .expect("decode")
            .is_some()
    );
}
