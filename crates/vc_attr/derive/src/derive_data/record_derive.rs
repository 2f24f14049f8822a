use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Ident, Type};

use super::{FieldAttributes, RecordMeta, TypeAttributes};

// -----------------------------------------------------------------------------
// RecordField

/// One named field of the derived struct.
pub(crate) struct RecordField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
    /// `true` for a plain `pub` field.
    pub is_pub: bool,
    /// The position among declared fields, `None` for skipped fields.
    pub declaration_index: Option<usize>,
}

impl RecordField<'_> {
    /// The field name as seen at runtime, without a raw `r#` prefix.
    #[inline]
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    #[inline]
    pub fn is_declared(&self) -> bool {
        self.declaration_index.is_some()
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.is_pub && self.attrs.hidden.is_none()
    }

    /// Generates the `FieldInfo` expression of a declared field.
    pub fn to_info_tokens(&self, vc_attr_path: &syn::Path) -> TokenStream {
        let field_info_ = crate::path::field_info_(vc_attr_path);
        let visibility_ = crate::path::visibility_(vc_attr_path);

        let name = self.name();
        let ty = self.ty;
        let visibility = if self.is_visible() {
            quote! { #visibility_::Visible }
        } else {
            quote! { #visibility_::Hidden }
        };

        let with_tags = if self.attrs.tags.is_empty() {
            crate::utils::empty()
        } else {
            let tags = self.attrs.tags.iter().map(|(key, value)| {
                quote! { (#key, #value) }
            });
            quote! { .with_tags(&[#(#tags),*]) }
        };

        quote! {
            #field_info_::new::<#ty>(#name, #visibility) #with_tags
        }
    }
}

// -----------------------------------------------------------------------------
// RecordDerive

/// A parsed `#[derive(Record)]` input.
pub(crate) struct RecordDerive<'a> {
    meta: RecordMeta<'a>,
    fields: Vec<RecordField<'a>>,
}

impl<'a> RecordDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Record` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Record` cannot be derived for unions",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let meta = RecordMeta::new(attrs, &input.ident, &input.generics);

        if let Some(type_path) = &meta.attrs().type_path
            && meta.impl_with_generic()
        {
            return Err(syn::Error::new(
                type_path.span(),
                "`type_path` is not supported on generic records",
            ));
        }

        let named = match &data.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(unnamed) => {
                return Err(syn::Error::new_spanned(
                    unnamed,
                    "`Record` cannot be derived for tuple structs, use named fields",
                ));
            }
        };

        let mut fields = Vec::with_capacity(named.len());
        let mut errors: Option<syn::Error> = None;
        let mut declaration_index = 0usize;

        for field in named {
            let attrs = match FieldAttributes::parse_attrs(&field.attrs) {
                Ok(attrs) => attrs,
                Err(err) => {
                    match &mut errors {
                        Some(errors) => errors.combine(err),
                        None => errors = Some(err),
                    }
                    continue;
                }
            };

            let Some(ident) = field.ident.as_ref() else {
                continue;
            };

            let index = if attrs.skip.is_some() {
                None
            } else {
                declaration_index += 1;
                Some(declaration_index - 1)
            };

            fields.push(RecordField {
                ident,
                ty: &field.ty,
                attrs,
                is_pub: matches!(field.vis, syn::Visibility::Public(_)),
                declaration_index: index,
            });
        }

        if let Some(errors) = errors {
            return Err(errors);
        }

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &RecordMeta<'a> {
        &self.meta
    }

    /// The declared fields in declaration order.
    #[inline]
    pub fn declared_fields(&self) -> impl Iterator<Item = &RecordField<'a>> {
        self.fields.iter().filter(|field| field.is_declared())
    }

    /// The fields excluded with `#[record(skip)]`.
    #[inline]
    pub fn skipped_fields(&self) -> impl Iterator<Item = &RecordField<'a>> {
        self.fields.iter().filter(|field| !field.is_declared())
    }

    /// Generates the `RecordInfo` expression.
    pub fn to_info_tokens(&self) -> TokenStream {
        let vc_attr_path = self.meta.vc_attr_path();
        let record_info_ = crate::path::record_info_(vc_attr_path);

        let type_path = self.meta.type_path_tokens();
        let type_ident = self.meta.ident().to_string();
        let fields = self
            .declared_fields()
            .map(|field| field.to_info_tokens(vc_attr_path));

        quote! {
            #record_info_::new::<Self>(#type_path, #type_ident, &[#(#fields),*])
        }
    }
}
