use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::RecordDerive;

/// Generate implementation code for `Record`.
pub(crate) fn impl_trait_record(derive: &RecordDerive) -> TokenStream {
    let meta = derive.meta();
    let vc_attr_path = meta.vc_attr_path();
    let record_ = crate::path::record_(vc_attr_path);
    let record_type_ = crate::path::record_type_(vc_attr_path);
    let record_info_ = crate::path::record_info_(vc_attr_path);
    let field_ = crate::path::field_(vc_attr_path);

    let (indices, idents): (Vec<usize>, Vec<_>) = derive
        .declared_fields()
        .filter_map(|field| Some((field.declaration_index?, field.ident)))
        .unzip();

    let real_ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(
        derive.declared_fields().map(|field| field.ty),
        derive.skipped_fields().map(|field| field.ty),
    );

    quote! {
        impl #impl_generics #record_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn record_info(&self) -> &'static #record_info_ {
                <Self as #record_type_>::info()
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #field_> {
                match index {
                    #( #indices => ::core::option::Option::Some(&self.#idents), )*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #field_> {
                match index {
                    #( #indices => ::core::option::Option::Some(&mut self.#idents), )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

/// Generate implementation code for `RecordType`.
///
/// The info is built once: in a `OnceLock` cell for concrete types, and in a
/// map keyed by `TypeId` for generic ones, whose statics are shared by every
/// instantiation.
pub(crate) fn impl_trait_record_type(derive: &RecordDerive) -> TokenStream {
    let meta = derive.meta();
    let vc_attr_path = meta.vc_attr_path();
    let record_type_ = crate::path::record_type_(vc_attr_path);
    let record_info_ = crate::path::record_info_(vc_attr_path);

    let info_tokens = derive.to_info_tokens();

    let inner_cell_tokens = if meta.impl_with_generic() {
        let info_cell = crate::path::generic_info_cell_(vc_attr_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_info_cell_(vc_attr_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #info_tokens
            })
        }
    };

    let real_ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(
        derive.declared_fields().map(|field| field.ty),
        derive.skipped_fields().map(|field| field.ty),
    );

    quote! {
        impl #impl_generics #record_type_ for #real_ident #ty_generics #where_clause {
            fn info() -> &'static #record_info_ {
                #inner_cell_tokens
            }
        }
    }
}
