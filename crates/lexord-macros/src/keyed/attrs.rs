//! Attribute parsing for the Keyed derive macro.
//!
//! Parses the `#[key(...)]` field attributes.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Ident, Lit, Meta, Result, Token,
};

/// The kind of value a keyed field produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    /// String field: `#[key(String)]`
    String,
    /// Number field: `#[key(Number)]`
    Number,
    /// Boolean field: `#[key(Bool)]`
    Bool,
}

impl KeyType {
    /// Parse a key type from an identifier.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        match ident.to_string().as_str() {
            "String" | "string" | "str" => Ok(KeyType::String),
            "Number" | "number" => Ok(KeyType::Number),
            "Bool" | "bool" | "boolean" => Ok(KeyType::Bool),
            other => Err(Error::new(
                ident.span(),
                format!(
                    "unknown key type: '{}'. Expected one of: String, Number, Bool",
                    other
                ),
            )),
        }
    }
}

/// Field-level attributes from `#[key(...)]`.
#[derive(Debug, Clone, Default)]
pub struct KeyAttr {
    /// The kind of value this field produces.
    pub key_type: Option<KeyType>,
    /// Exclude this field.
    pub skip: bool,
    /// Custom field name (default: the Rust field name).
    pub rename: Option<String>,
}

impl Parse for KeyAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = KeyAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if let Some(ident) = p.get_ident() {
                        if attr.key_type.is_some() {
                            return Err(Error::new(ident.span(), "duplicate key type"));
                        }
                        attr.key_type = Some(KeyType::from_ident(ident)?);
                    } else {
                        return Err(Error::new(
                            p.span(),
                            "expected key type: String, Number, Bool, or skip",
                        ));
                    }
                }

                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    match &nv.value {
                        syn::Expr::Lit(syn::ExprLit {
                            lit: Lit::Str(s), ..
                        }) => attr.rename = Some(s.value()),
                        other => {
                            return Err(Error::new(
                                other.span(),
                                "rename must be a string literal",
                            ))
                        }
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown key attribute. Expected: String, Number, Bool, skip, or rename = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extract the `#[key(...)]` attribute from a field's attributes.
pub fn parse_key_attrs(attrs: &[Attribute]) -> Result<KeyAttr> {
    for attr in attrs {
        if attr.path().is_ident("key") {
            return attr.parse_args::<KeyAttr>();
        }
    }
    Ok(KeyAttr::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_key(tokens: &str) -> Result<KeyAttr> {
        syn::parse_str::<KeyAttr>(tokens)
    }

    #[test]
    fn test_key_string() {
        let attr = parse_key("String").unwrap();
        assert_eq!(attr.key_type, Some(KeyType::String));
        assert!(!attr.skip);
    }

    #[test]
    fn test_key_string_aliases() {
        assert_eq!(parse_key("string").unwrap().key_type, Some(KeyType::String));
        assert_eq!(parse_key("str").unwrap().key_type, Some(KeyType::String));
    }

    #[test]
    fn test_key_number() {
        let attr = parse_key("Number").unwrap();
        assert_eq!(attr.key_type, Some(KeyType::Number));
    }

    #[test]
    fn test_key_bool() {
        assert_eq!(parse_key("Bool").unwrap().key_type, Some(KeyType::Bool));
        assert_eq!(parse_key("bool").unwrap().key_type, Some(KeyType::Bool));
    }

    #[test]
    fn test_key_skip() {
        let attr = parse_key("skip").unwrap();
        assert!(attr.skip);
        assert_eq!(attr.key_type, None);
    }

    #[test]
    fn test_key_rename() {
        let attr = parse_key(r#"Number, rename = "rank""#).unwrap();
        assert_eq!(attr.key_type, Some(KeyType::Number));
        assert_eq!(attr.rename, Some("rank".to_string()));
    }

    #[test]
    fn test_key_rename_requires_string() {
        let result = parse_key("Number, rename = 3");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("rename must be a string literal"));
    }

    #[test]
    fn test_key_invalid_type() {
        let result = parse_key("Timestamp");
        assert!(result.unwrap_err().to_string().contains("unknown key type"));
    }

    #[test]
    fn test_key_duplicate_type() {
        let result = parse_key("String, Number");
        assert!(result.unwrap_err().to_string().contains("duplicate key type"));
    }

    #[test]
    fn test_key_unknown_name_value() {
        let result = parse_key(r#"alias = "x""#);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown key attribute"));
    }
}
