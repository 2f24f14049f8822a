use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::RecordDerive;

/// Generate implementation code for `Typed`.
///
/// Values are handled field by field through the field types' own `Typed`
/// impls; skipped fields are reset to `Default` on clone and ignored
/// otherwise.
pub(crate) fn impl_trait_typed(derive: &RecordDerive) -> TokenStream {
    let meta = derive.meta();
    let vc_attr_path = meta.vc_attr_path();
    let typed_ = crate::path::typed_(vc_attr_path);
    let field_ = crate::path::field_(vc_attr_path);
    let kind_ = crate::path::kind_(vc_attr_path);
    let field_ref_ = crate::path::field_ref_(vc_attr_path);
    let field_mut_ = crate::path::field_mut_(vc_attr_path);

    let declared = derive.declared_fields().map(|field| field.ident).collect::<Vec<_>>();
    let names = derive.declared_fields().map(|field| field.name());
    let skipped = derive.skipped_fields().map(|field| field.ident);

    let real_ident = meta.ident();
    let ident_str = real_ident.to_string();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(
        derive.declared_fields().map(|field| field.ty),
        derive.skipped_fields().map(|field| field.ty),
    );

    quote! {
        impl #impl_generics #typed_ for #real_ident #ty_generics #where_clause {
            const KIND: #kind_ = #kind_::Record;

            fn clone_value(&self) -> Self {
                Self {
                    #( #declared: #typed_::clone_value(&self.#declared), )*
                    #( #skipped: ::core::default::Default::default(), )*
                }
            }

            fn value_eq(&self, _other: &Self) -> bool {
                true #( && #typed_::value_eq(&self.#declared, &_other.#declared) )*
            }

            fn value_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(#ident_str)
                    #( .field(#names, &(&self.#declared as &dyn #field_)) )*
                    .finish()
            }

            #[inline]
            fn value_ref(&self) -> #field_ref_<'_> {
                #field_ref_::Record(self)
            }

            #[inline]
            fn value_mut(&mut self) -> #field_mut_<'_> {
                #field_mut_::Record(self)
            }
        }
    }
}
