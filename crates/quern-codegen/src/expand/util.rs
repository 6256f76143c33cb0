use proc_macro2::{Literal, TokenStream};
use quote::ToTokens;

/// An unsuffixed integer literal, so `0` rather than `0usize` in output.
pub(crate) fn int(v: usize) -> TokenStream {
    Literal::usize_unsuffixed(v).into_token_stream()
}
