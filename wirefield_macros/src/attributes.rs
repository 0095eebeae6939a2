//! Parsing of `#[wire(...)]` field attributes

use heck::ToLowerCamelCase;
use syn::{Attribute, Field, Ident, LitStr, Type};

/// A field that takes part in encoding and decoding
pub struct WireField {
    pub ident:                 Ident,
    pub ty:                    Type,
    pub declared_name:         String,
    pub lower_case_underscore: bool,
}

/// Field attribute values gathered from every `#[wire(...)]` on a field
#[derive(Default)]
struct FieldAttributes {
    declared_name:         Option<String>,
    lower_case_underscore: bool,
    skip:                  bool,
}

/// Parse a named field, returning `None` for `#[wire(skip)]`
pub fn parse_field(field: &Field) -> syn::Result<Option<WireField>> {
    let Some(ident) = field.ident.clone() else {
        return Err(syn::Error::new_spanned(
            field,
            "WireRecord fields must be named",
        ));
    };

    let attributes = parse_attributes(&field.attrs)?;
    if attributes.skip {
        return Ok(None);
    }

    let declared_name = attributes
        .declared_name
        .unwrap_or_else(|| default_declared_name(&ident));

    Ok(Some(WireField {
        ident,
        ty: field.ty.clone(),
        declared_name,
        lower_case_underscore: attributes.lower_case_underscore,
    }))
}

/// `user_desc` is declared as `userDesc`; raw identifiers lose their `r#`
fn default_declared_name(ident: &Ident) -> String {
    let name = ident.to_string();
    name.strip_prefix("r#")
        .unwrap_or(&name)
        .to_lower_camel_case()
}

fn parse_attributes(attrs: &[Attribute]) -> syn::Result<FieldAttributes> {
    let mut attributes = FieldAttributes::default();

    for attr in attrs {
        if !attr.path().is_ident("wire") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("lower_case_underscore") {
                attributes.lower_case_underscore = true;
                Ok(())
            } else if meta.path.is_ident("skip") {
                attributes.skip = true;
                Ok(())
            } else if meta.path.is_ident("declared_name") {
                let value = meta.value()?;
                let s: LitStr = value.parse()?;
                attributes.declared_name = Some(s.value());
                Ok(())
            } else {
                Err(meta.error("unsupported wire attribute"))
            }
        })?;
    }

    Ok(attributes)
}
