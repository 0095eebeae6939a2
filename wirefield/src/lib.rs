//! # wirefield
//!
//! Marker-driven field naming for JSON records, plus a lenient codec that
//! uses it.
//!
//! A field's wire name comes from a [`FieldNamingStrategy`]. The stock
//! [`FieldNameResolver`] writes fields tagged with
//! [`MarkerTag::LowerCaseUnderscore`] in `lower_case_with_underscores` and
//! leaves every other field as declared:
//!
//! ```ignore
//! use wirefield::{Codec, FieldNameResolver, WireRecord};
//!
//! #[derive(Debug, Default, WireRecord)]
//! struct DataClassBean {
//!     age:       i32,
//!     #[wire(lower_case_underscore)]
//!     user_desc: String,
//! }
//!
//! let codec = Codec::builder()
//!     .field_naming_strategy(FieldNameResolver::new())
//!     .build();
//! let bean: DataClassBean = codec.from_str(r#"{"age": "20", "user_desc": "321"}"#)?;
//! ```
//!
//! Decoding never gives up on a whole document because one value has the
//! wrong type: the field keeps its default and the codec's
//! [`ParseExceptionHandler`] is told.

mod codec;
mod error;
mod handler;
mod json_type;
pub mod naming;
mod record;
mod value;

pub use codec::{Codec, CodecBuilder, set_singleton, singleton};
pub use error::{Error, Result};
pub use handler::{LoggingExceptionHandler, ParseExceptionHandler, SilentExceptionHandler};
pub use json_type::JsonType;
pub use naming::{
    FieldDescriptor, FieldNameResolver, FieldNamingStrategy, MarkerSet, MarkerTag, NamingPolicy,
};
pub use record::WireRecord;
pub use serde_json::Value;
pub use value::{DecodeScope, WireValue, decode_into};
#[cfg(feature = "derive")]
pub use wirefield_macros::WireRecord;
