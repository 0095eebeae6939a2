//! Scalars: strings, booleans, integers, floats and raw JSON
//!
//! Coercions accepted on read:
//! - string: any string; numbers and booleans are stringified
//! - bool: booleans; numbers (non-zero is `true`); `"true"`, `"false"`, `"1"`, `"0"`
//! - integers: integral numbers, fractional numbers truncated toward zero, numeric strings
//! - floats: numbers and numeric strings

use serde_json::{Number, Value};

use super::{DecodeScope, WireValue};
use crate::codec::Codec;
use crate::error::Result;

/// Largest magnitude an `f64` may have and still truncate into an `i128`
const I128_FLOAT_LIMIT: f64 = 1.7e38;

impl WireValue for String {
    fn encode(&self, _codec: &Codec) -> Result<Value> { Ok(Value::String(self.clone())) }

    fn decode(value: &Value, _scope: &DecodeScope<'_>) -> Result<Option<Self>> {
        Ok(match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        })
    }
}

impl WireValue for bool {
    fn encode(&self, _codec: &Codec) -> Result<Value> { Ok(Value::Bool(*self)) }

    fn decode(value: &Value, _scope: &DecodeScope<'_>) -> Result<Option<Self>> {
        Ok(match value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => number_to_integer(n).map(|i| i != 0),
            Value::String(s) => parse_bool(s),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        })
    }
}

impl WireValue for Value {
    fn encode(&self, _codec: &Codec) -> Result<Value> { Ok(self.clone()) }

    fn decode(value: &Value, _scope: &DecodeScope<'_>) -> Result<Option<Self>> {
        Ok(Some(value.clone()))
    }
}

macro_rules! impl_wire_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WireValue for $ty {
                fn encode(&self, _codec: &Codec) -> Result<Value> { Ok(Value::from(*self)) }

                fn decode(value: &Value, _scope: &DecodeScope<'_>) -> Result<Option<Self>> {
                    Ok(coerce_integer(value).and_then(|i| <$ty>::try_from(i).ok()))
                }
            }
        )*
    };
}

impl_wire_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl WireValue for f64 {
    fn encode(&self, _codec: &Codec) -> Result<Value> { Ok(Value::from(*self)) }

    fn decode(value: &Value, _scope: &DecodeScope<'_>) -> Result<Option<Self>> {
        Ok(coerce_float(value))
    }
}

impl WireValue for f32 {
    fn encode(&self, _codec: &Codec) -> Result<Value> { Ok(Value::from(*self)) }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "narrowing to the declared field width is the requested behaviour"
    )]
    fn decode(value: &Value, _scope: &DecodeScope<'_>) -> Result<Option<Self>> {
        Ok(coerce_float(value)
            .filter(|f| f.abs() <= f64::from(Self::MAX))
            .map(|f| f as Self))
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") || text == "1" {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") || text == "0" {
        Some(false)
    } else {
        None
    }
}

fn coerce_integer(value: &Value) -> Option<i128> {
    match value {
        Value::Number(n) => number_to_integer(n),
        Value::String(s) => parse_integer(s),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

fn number_to_integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
        .or_else(|| n.as_f64().and_then(truncate_float))
}

fn parse_integer(text: &str) -> Option<i128> {
    let text = text.trim();
    text.parse::<i128>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().and_then(truncate_float))
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "range is checked against I128_FLOAT_LIMIT before the cast"
)]
fn truncate_float(f: f64) -> Option<i128> {
    (f.is_finite() && f.abs() < I128_FLOAT_LIMIT).then(|| f.trunc() as i128)
}

fn coerce_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}
