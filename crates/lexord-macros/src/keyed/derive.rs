//! Implementation of the `#[derive(Keyed)]` macro.
//!
//! Generates an implementation of the `Keyed` trait and field name
//! constants for building named orderings without string typos.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_key_attrs, KeyType};

/// Main implementation of the Keyed derive macro.
pub fn keyed_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Keyed can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Keyed can only be derived for structs",
            ))
        }
    };

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut field_names: Vec<String> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let key_attrs = parse_key_attrs(&field.attrs)?;
        if key_attrs.skip {
            continue;
        }
        let key_type = match key_attrs.key_type {
            Some(t) => t,
            None => continue,
        };

        let key_name = key_attrs.rename.unwrap_or_else(|| field_name.to_string());
        if field_names.contains(&key_name) {
            return Err(Error::new(
                field.span(),
                format!("duplicate key name '{}'", key_name),
            ));
        }

        let const_name = format_ident!("{}", to_screaming_snake_case(&key_name));
        field_constants.push(quote! {
            /// Field name constant for named orderings.
            pub const #const_name: &'static str = #key_name;
        });

        let value_expr = match key_type {
            KeyType::String => {
                quote! { ::lexord::Value::Str(::core::convert::AsRef::<str>::as_ref(&self.#field_name)) }
            }
            KeyType::Number => {
                quote! { ::lexord::Value::Number(::lexord::Number::from(self.#field_name)) }
            }
            KeyType::Bool => {
                quote! { ::lexord::Value::Bool(self.#field_name) }
            }
        };

        field_matches.push(quote! {
            #key_name => #value_expr,
        });
        field_names.push(key_name);
    }

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #impl_generics ::lexord::Keyed for #struct_name #ty_generics #where_clause {
            fn key_value(&self, field: &str) -> ::lexord::Value<'_> {
                match field {
                    #(#field_matches)*
                    _ => ::lexord::Value::None,
                }
            }

            fn key_fields() -> &'static [&'static str] {
                &[#(#field_names),*]
            }
        }
    };

    Ok(expanded)
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = c.is_lowercase();
        }
    }

    result
}
