use crate::schema::PrimitiveEnum;

use proc_macro2::TokenStream;
use quote::quote;

/// Stores the enum by its discriminant, through the serialized fallback.
pub(super) fn expand(primitive: &PrimitiveEnum, quern: &TokenStream) -> TokenStream {
    let ident = &primitive.ident;
    let name = ident.to_string();
    let variants = &primitive.variants;

    quote! {
        impl #quern::stmt::Primitive for #ident {
            fn ty() -> #quern::stmt::Type {
                #quern::stmt::Type::Enum(#name)
            }

            fn adapt(&self) -> #quern::Result<#quern::stmt::Value> {
                let discriminant: i64 = match self {
                    #( Self::#variants => Self::#variants as i64, )*
                };
                #quern::stmt::Primitive::adapt(&#quern::stmt::Json(discriminant))
            }

            fn convert(value: #quern::stmt::Value) -> #quern::Result<Self> {
                let discriminant = match value {
                    #quern::stmt::Value::Integer(v) => v,
                    value => <#quern::stmt::Json<i64> as #quern::stmt::Primitive>::convert(value)?.0,
                };

                #(
                    if discriminant == Self::#variants as i64 {
                        return ::std::result::Result::Ok(Self::#variants);
                    }
                )*

                ::std::result::Result::Err(#quern::Error::type_conversion(
                    #quern::stmt::Value::Integer(discriminant),
                    #name,
                ))
            }
        }
    }
}
