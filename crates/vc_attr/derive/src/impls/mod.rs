// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod trait_record;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::RecordDerive;

use auto_register::get_auto_register_impl;
use trait_record::{impl_trait_record, impl_trait_record_type};
use trait_typed::impl_trait_typed;

/// Generates every impl of `#[derive(Record)]`.
pub(crate) fn impl_record(derive: &RecordDerive) -> TokenStream {
    let typed_tokens = impl_trait_typed(derive);
    let record_tokens = impl_trait_record(derive);
    let record_type_tokens = impl_trait_record_type(derive);
    let auto_register_tokens = get_auto_register_impl(derive.meta());

    quote! {
        #typed_tokens

        #record_tokens

        #record_type_tokens

        #auto_register_tokens
    }
}
