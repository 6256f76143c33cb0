mod fields;
mod model;
mod primitive_enum;
mod util;

use crate::schema::{Model, PrimitiveEnum};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for quern types
    quern: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let model_impls = self.expand_model_impls();
        let model_field_struct = self.expand_field_struct();

        wrap_in_const(quote! {
            #model_impls
            #model_field_struct
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        quern: quote!(_quern::codegen_support),
    }
    .expand()
}

pub(super) fn primitive_enum(primitive: &PrimitiveEnum) -> TokenStream {
    wrap_in_const(primitive_enum::expand(
        primitive,
        &quote!(_quern::codegen_support),
    ))
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use quern as _quern;
            #code
        };
    }
}
