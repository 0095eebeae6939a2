//! `WireRecord` derive macro implementation

use std::collections::HashSet;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

use crate::attributes::{WireField, parse_field};

/// Implementation of the `WireRecord` derive macro
pub fn derive_wire_record_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "WireRecord cannot be derived for generic structs",
        ));
    }

    let Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new_spanned(
            struct_name,
            "WireRecord can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data_struct.fields else {
        return Err(syn::Error::new_spanned(
            &data_struct.fields,
            "WireRecord can only be derived for structs with named fields",
        ));
    };

    let mut fields = Vec::new();
    let mut declared = HashSet::new();
    for field in &named.named {
        if let Some(wire_field) = parse_field(field)? {
            if !declared.insert(wire_field.declared_name.clone()) {
                return Err(syn::Error::new_spanned(
                    &wire_field.ident,
                    format!(
                        "duplicate declared name `{}` in WireRecord `{struct_name}`",
                        wire_field.declared_name
                    ),
                ));
            }
            fields.push(wire_field);
        }
    }

    let type_name = struct_name.to_string();
    let field_count = fields.len();
    let descriptors = fields.iter().map(generate_descriptor);
    let encode_field = generate_encode_field(&fields);
    let decode_field = generate_decode_field(&fields);

    Ok(quote! {
        impl ::wirefield::WireRecord for #struct_name {
            const TYPE_NAME: &'static str = #type_name;

            fn fields() -> &'static [::wirefield::FieldDescriptor] {
                static FIELDS: [::wirefield::FieldDescriptor; #field_count] = [
                    #(#descriptors,)*
                ];
                &FIELDS
            }

            #encode_field

            #decode_field
        }

        impl ::wirefield::WireValue for #struct_name {
            fn encode(
                &self,
                codec: &::wirefield::Codec,
            ) -> ::wirefield::Result<::wirefield::Value> {
                codec.to_value(self)
            }

            fn decode(
                value: &::wirefield::Value,
                scope: &::wirefield::DecodeScope<'_>,
            ) -> ::wirefield::Result<::core::option::Option<Self>> {
                scope.codec().decode_nested::<Self>(value)
            }
        }
    })
}

fn generate_descriptor(field: &WireField) -> TokenStream2 {
    let declared_name = &field.declared_name;
    let markers = if field.lower_case_underscore {
        quote! {
            ::wirefield::MarkerSet::empty().with(::wirefield::MarkerTag::LowerCaseUnderscore)
        }
    } else {
        quote! { ::wirefield::MarkerSet::empty() }
    };

    quote! {
        ::wirefield::FieldDescriptor::new_static(#declared_name, #markers)
    }
}

fn generate_encode_field(fields: &[WireField]) -> TokenStream2 {
    let arms = fields.iter().enumerate().map(|(index, field)| {
        let ident = &field.ident;
        quote! {
            #index => ::wirefield::WireValue::encode(&self.#ident, codec)
        }
    });

    quote! {
        fn encode_field(
            &self,
            index: usize,
            codec: &::wirefield::Codec,
        ) -> ::wirefield::Result<::wirefield::Value> {
            match index {
                #(#arms,)*
                _ => {
                    let _ = codec;
                    ::core::result::Result::Ok(::wirefield::Value::Null)
                }
            }
        }
    }
}

fn generate_decode_field(fields: &[WireField]) -> TokenStream2 {
    let arms = fields.iter().enumerate().map(|(index, field)| {
        let ident = &field.ident;
        let ty = &field.ty;
        quote! {
            #index => ::wirefield::decode_into::<#ty>(&mut self.#ident, value, scope)
        }
    });

    quote! {
        fn decode_field(
            &mut self,
            index: usize,
            value: &::wirefield::Value,
            scope: &::wirefield::DecodeScope<'_>,
        ) -> ::wirefield::Result<bool> {
            match index {
                #(#arms,)*
                _ => {
                    let _ = (value, scope);
                    ::core::result::Result::Ok(false)
                }
            }
        }
    }
}
