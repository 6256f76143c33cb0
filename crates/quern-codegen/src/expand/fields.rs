use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Generates the `<Model>Fields` struct with one typed handle per field.
    pub(super) fn expand_field_struct(&self) -> TokenStream {
        let quern = &self.quern;
        let vis = &self.model.vis;
        let field_struct_ident = &self.model.field_struct_ident;
        let model_ident = &self.model.ident;

        let methods = self.model.fields.iter().map(|field| {
            let field_ident = &field.ident;
            let ty = &field.ty;
            let index = util::int(field.index);
            let schema = self.expand_field_schema(field);

            quote! {
                #vis fn #field_ident(&self) -> #quern::Path<#model_ident, #ty> {
                    #quern::Path::new(#index, #schema)
                }
            }
        });

        quote! {
            #vis struct #field_struct_ident {
                _p: (),
            }

            impl #field_struct_ident {
                #( #methods )*
            }
        }
    }
}
