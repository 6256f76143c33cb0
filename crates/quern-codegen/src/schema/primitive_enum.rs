use super::ErrorSet;

/// A field-less enum stored by its integer discriminant.
#[derive(Debug)]
pub(crate) struct PrimitiveEnum {
    pub(crate) ident: syn::Ident,
    pub(crate) variants: Vec<syn::Ident>,
}

impl PrimitiveEnum {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let syn::Data::Enum(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "`Enum` can only be derived for enums",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "enum generics are not supported",
            ));
        }

        if data.variants.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "`Enum` requires at least one variant",
            ));
        }

        let mut errs = ErrorSet::new();

        for variant in &data.variants {
            if !matches!(variant.fields, syn::Fields::Unit) {
                errs.push(syn::Error::new_spanned(
                    variant,
                    "enum variants cannot carry fields",
                ));
            }
        }

        errs.finish()?;

        Ok(Self {
            ident: ast.ident.clone(),
            variants: data.variants.iter().map(|v| v.ident.clone()).collect(),
        })
    }
}
