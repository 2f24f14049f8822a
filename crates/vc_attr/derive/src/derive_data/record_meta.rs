use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, ImplGenerics, Path, TypeGenerics};

use super::TypeAttributes;

/// The type level part of a record derive.
pub(crate) struct RecordMeta<'a> {
    vc_attr_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl core::fmt::Debug for RecordMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecordMeta")
            .field("vc_attr_path", &self.vc_attr_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> RecordMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            vc_attr_path: crate::path::vc_attr(),
            attrs,
            ident,
            generics,
        }
    }

    #[inline]
    pub fn vc_attr_path(&self) -> &Path {
        &self.vc_attr_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    /// Whether the type has type or const parameters.
    ///
    /// Lifetime-only generics do not count: the record must be `'static`
    /// anyway, so every instantiation is the same type.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
            || self.generics.const_params().next().is_some()
    }

    /// Returns the `type_path` expression, a `&'static str`.
    pub fn type_path_tokens(&self) -> TokenStream {
        if let Some(type_path) = &self.attrs.type_path {
            return type_path.to_token_stream();
        }
        if self.impl_with_generic() {
            quote! { ::core::any::type_name::<Self>() }
        } else {
            let ident = self.ident.to_string();
            quote! { ::core::concat!(::core::module_path!(), "::", #ident) }
        }
    }

    /// Splits the generics for an impl block, adding the bounds every
    /// record impl needs.
    ///
    /// Declared field types that mention a type parameter get a `Typed`
    /// bound, skipped ones a `Default` bound.
    pub fn split_generics<'b>(
        &'b self,
        declared: impl Iterator<Item = &'b syn::Type>,
        skipped: impl Iterator<Item = &'b syn::Type>,
    ) -> (ImplGenerics<'b>, TypeGenerics<'b>, TokenStream) {
        let mut generic_where_clause = quote! { where };

        if self.impl_with_generic() {
            generic_where_clause.extend(quote! {
                Self: ::core::any::Any + ::core::marker::Send + ::core::marker::Sync,
            });
        } else if self.generics.lifetimes().next().is_some() {
            generic_where_clause.extend(quote! { Self: 'static, });
        }

        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        let type_param_idents = self
            .generics
            .type_params()
            .map(|type_param| type_param.ident.clone())
            .collect::<Vec<Ident>>();

        if !type_param_idents.is_empty() {
            let typed_ = crate::path::typed_(&self.vc_attr_path);
            let default_ = quote! { ::core::default::Default };

            let bounded = declared
                .map(|ty| (ty, &typed_))
                .chain(skipped.map(|ty| (ty, &default_)));

            let mut seen: Vec<(&syn::Type, &TokenStream)> = Vec::new();
            for (ty, bound) in bounded {
                if seen.iter().any(|&(t, b)| t == ty && core::ptr::eq(b, bound)) {
                    continue;
                }
                seen.push((ty, bound));
                if crate::utils::is_any_ident_in_token_stream(
                    &type_param_idents,
                    ty.to_token_stream(),
                ) {
                    generic_where_clause.extend(quote! { #ty: #bound, });
                }
            }
        }

        (impl_generics, ty_generics, generic_where_clause)
    }
}
