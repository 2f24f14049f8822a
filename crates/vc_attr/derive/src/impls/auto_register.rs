use proc_macro2::TokenStream;

use crate::derive_data::RecordMeta;

/// Submits a function registering the record, for `#[record(auto_register)]`.
///
/// Generic records have no single type to register and get nothing.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(meta: &RecordMeta) -> TokenStream {
    let Some(span) = meta.attrs().auto_register else {
        return crate::utils::empty();
    };
    if meta.impl_with_generic() {
        return crate::utils::empty();
    }

    let vc_attr_path = meta.vc_attr_path();
    let auto_register_ = crate::path::auto_register_(vc_attr_path);
    let record_registry_ = crate::path::record_registry_(vc_attr_path);
    let real_ident = meta.ident();

    quote::quote_spanned! { span =>
        #auto_register_::inventory::submit! {
            #auto_register_::__AutoRegisterFunc(|registry: &mut #record_registry_| {
                registry.register::<#real_ident>();
            })
        }
    }
}

#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &RecordMeta) -> TokenStream {
    crate::utils::empty()
}
