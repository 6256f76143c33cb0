use syn::ext::IdentExt;

use super::ErrorSet;

#[derive(Debug)]
pub(crate) struct Field {
    /// Position of the field in the struct, which is its column position
    pub(crate) index: usize,

    /// Rust identifier, also used as the column name
    pub(crate) ident: syn::Ident,

    /// Declared Rust type; must implement `Primitive`
    pub(crate) ty: syn::Type,

    /// Annotated with `#[unique]`
    pub(crate) unique: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, index: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut unique = false;

        for attr in &field.attrs {
            if !attr.path().is_ident("unique") {
                continue;
            }

            if let Err(err) = attr.meta.require_path_only() {
                errs.push(syn::Error::new(err.span(), "`#[unique]` takes no arguments"));
            } else if unique {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "duplicate #[unique] attribute",
                ));
            } else {
                unique = true;
            }
        }

        errs.finish()?;

        Ok(Self {
            index,
            ident: ident.clone(),
            ty: field.ty.clone(),
            unique,
        })
    }

    /// Column name as written in generated field metadata.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}
