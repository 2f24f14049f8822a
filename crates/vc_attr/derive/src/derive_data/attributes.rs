use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::{RECORD_ATTRIBUTE_NAME, TAG_ATTRIBUTE_NAME};

// -----------------------------------------------------------------------------
// TypeAttributes

/// Type level `#[record(...)]` options.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[record(auto_register)]`
    pub auto_register: Option<Span>,
    /// `#[record(type_path = "...")]`
    pub type_path: Option<LitStr>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident(TAG_ATTRIBUTE_NAME) {
                return Err(syn::Error::new_spanned(
                    attr,
                    "`#[tag(...)]` can only be applied to fields",
                ));
            }
            if !attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("auto_register") {
                    this.auto_register = Some(meta.path.span());
                    Ok(())
                } else if meta.path.is_ident("type_path") {
                    if this.type_path.is_some() {
                        return Err(meta.error("duplicate `type_path`"));
                    }
                    this.type_path = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("hidden") || meta.path.is_ident("skip") {
                    Err(meta.error("this option can only be applied to fields"))
                } else {
                    Err(meta.error("unknown record attribute, expected `auto_register` or `type_path`"))
                }
            })?;
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Field level `#[record(...)]` and `#[tag(...)]` options.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[record(hidden)]`
    pub hidden: Option<Span>,
    /// `#[record(skip)]`
    pub skip: Option<Span>,
    /// `#[tag(key = "value")]`, in declaration order.
    pub tags: Vec<(String, LitStr)>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("hidden") {
                        this.hidden = Some(meta.path.span());
                        Ok(())
                    } else if meta.path.is_ident("skip") {
                        this.skip = Some(meta.path.span());
                        Ok(())
                    } else {
                        Err(meta.error("unknown record attribute, expected `hidden` or `skip`"))
                    }
                })?;
            } else if attr.path().is_ident(TAG_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| {
                    let Some(key) = meta.path.get_ident() else {
                        return Err(meta.error("tag keys must be plain identifiers"));
                    };
                    let key = key.unraw().to_string();
                    let value: LitStr = meta.value()?.parse()?;
                    this.tags.push((key, value));
                    Ok(())
                })?;
            }
        }

        if let (Some(_), Some(span)) = (this.hidden, this.skip) {
            return Err(syn::Error::new(span, "`skip` and `hidden` cannot be combined"));
        }

        Ok(this)
    }
}
