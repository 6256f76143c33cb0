extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `quern::Model` for a struct with named fields.
///
/// Fields are stored in declaration order and the first one must be the
/// integer `id`. Mark a field `#[unique]` to add a uniqueness constraint to
/// its column.
#[proc_macro_derive(Model, attributes(unique))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match quern_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Derives `Primitive` for a field-less enum, storing its discriminant.
#[proc_macro_derive(Enum)]
pub fn derive_enum(input: TokenStream) -> TokenStream {
    match quern_codegen::generate_enum(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
