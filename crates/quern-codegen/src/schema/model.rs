use super::{ErrorSet, Field};

use quote::format_ident;

#[derive(Debug)]
pub(crate) struct Model {
    /// Model visibility
    pub(crate) vis: syn::Visibility,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// The field struct identifier, e.g. `UserFields`
    pub(crate) field_struct_ident: syn::Ident,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let syn::Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "`Model` can only be derived for structs with named fields",
            ));
        };

        let syn::Fields::Named(node) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &data.fields,
                "model fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        for (index, node) in node.named.iter().enumerate() {
            match Field::from_ast(node, index) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        errs.finish()?;

        Ok(Self {
            vis: ast.vis.clone(),
            ident: ast.ident.clone(),
            fields,
            field_struct_ident: format_ident!("{}Fields", ast.ident),
        })
    }

    /// The declared model name, which the table name is derived from.
    pub(crate) fn name(&self) -> String {
        self.ident.to_string()
    }
}
