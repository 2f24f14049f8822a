//! Paths into `vc_attr` used by the generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `vc_attr` crate.
///
/// 1. For crates that depend on `vc_attr`, `::vc_attr` is returned.
/// 2. For crates that depend on `vc_record`, `::vc_record::attr` is returned.
/// 3. Otherwise `::vc_attr` is returned, which may be incorrect.
///
/// This reads the caller's `Cargo.toml`, so it is resolved once per
/// derive and passed around.
pub(crate) fn vc_attr() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_attr"))
}

#[inline(always)]
pub(crate) fn typed_(vc_attr_path: &syn::Path) -> TokenStream {
    quote! { #vc_attr_path::field::Typed }
}

#[inline(always)]
pub(crate) fn field_(vc_attr_path: &syn::Path) -> TokenStream {
    quote! { #vc_attr_path::field::Field }
}

#[inline(always)]
pub(crate) fn kind_(vc_attr_path: &syn::Path) -> TokenStream {
    quote! { #vc_attr_path::field::Kind }
}

#[inline(always)]
pub(crate) fn field_ref_(vc_attr_path: &syn::Path) -> TokenStream {
    quote! { #vc_attr_path::field::FieldRef }
}

#[inline(always)]
pub(crate) fn field_mut_(vc_attr_path: &syn::Path) -> TokenStream {
    quote! { #vc_attr_path::field::FieldMut }
}

#[inline(always)]
pub(crate) fn record_(vc_attr_path: &syn::Path) -> TokenStream {
    quote! { #vc_attr_path::record::Record }
}

#[inline(always)]
pub(crate) fn record_type_(vc_attr_path: &syn::Path) -> TokenStream {
    quote! { #vc_attr_path::record::RecordType }
}

#[inline(always)]
pub(crate) fn record_info_(vc_attr_path: &syn::Path) -> TokenStream {
    quote! { #vc_attr_path::info::RecordInfo }
}

#[inline(always)]
pub(crate) fn field_info_(vc_attr_path: &syn::Path) -> TokenStream {
    quote! { #vc_attr_path::info::FieldInfo }
}

#[inline(always)]
pub(crate) fn visibility_(vc_attr_path: &syn::Path) -> TokenStream {
    quote! { #vc_attr_path::info::Visibility }
}

#[inline(always)]
pub(crate) fn non_generic_info_cell_(vc_attr_path: &syn::Path) -> TokenStream {
    quote! { #vc_attr_path::info::NonGenericInfoCell }
}

#[inline(always)]
pub(crate) fn generic_info_cell_(vc_attr_path: &syn::Path) -> TokenStream {
    quote! { #vc_attr_path::info::GenericInfoCell }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn record_registry_(vc_attr_path: &syn::Path) -> TokenStream {
    quote! { #vc_attr_path::registry::RecordRegistry }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(vc_attr_path: &syn::Path) -> TokenStream {
    quote! { #vc_attr_path::__macro_exports::auto_register }
}
