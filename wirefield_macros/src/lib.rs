//! Procedural macros for wirefield

mod attributes;
mod wire_record;

use proc_macro::TokenStream;

/// Derives `wirefield::WireRecord` and `wirefield::WireValue` for a struct with
/// named fields.
///
/// # Example
///
/// ```ignore
/// #[derive(Default, WireRecord)]
/// struct DataClassBean {
///     age: i32,
///
///     #[wire(lower_case_underscore)]
///     user_desc: String,
///
///     #[wire(declared_name = "alias")]
///     nick: Option<String>,
///
///     #[wire(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// Each field's declared name is the lowerCamelCase spelling of its identifier
/// (`user_desc` is declared as `userDesc`) unless `declared_name` says
/// otherwise. The codec's naming strategy then turns declared names into wire
/// names.
///
/// Field attributes:
/// - `lower_case_underscore` attaches `MarkerTag::LowerCaseUnderscore`
/// - `declared_name = "..."` sets the declared name verbatim
/// - `skip` leaves the field out of encoding and decoding; it keeps its default
///
/// The struct must implement `Default`: decoding starts from it.
#[proc_macro_derive(WireRecord, attributes(wire))]
pub fn derive_wire_record(input: TokenStream) -> TokenStream {
    wire_record::derive_wire_record_impl(input)
}
