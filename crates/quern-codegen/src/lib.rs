mod expand;
mod schema;

use proc_macro2::TokenStream;

/// Expands `#[derive(Model)]`.
pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::DeriveInput = syn::parse2(input)?;
    let model = schema::Model::from_ast(&item)?;

    Ok(expand::model(&model))
}

/// Expands `#[derive(Enum)]`.
pub fn generate_enum(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::DeriveInput = syn::parse2(input)?;
    let primitive = schema::PrimitiveEnum::from_ast(&item)?;

    Ok(expand::primitive_enum(&primitive))
}
