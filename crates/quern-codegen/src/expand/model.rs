use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impls(&self) -> TokenStream {
        let quern = &self.quern;
        let vis = &self.model.vis;
        let model_ident = &self.model.ident;
        let model_name = self.model.name();
        let field_struct_ident = &self.model.field_struct_ident;
        let field_names = self.model.fields.iter().map(|field| field.name());
        let field_schemas = self.model.fields.iter().map(|field| self.expand_field_schema(field));
        let load_body = self.expand_load_body();
        let dump_arms = self.expand_dump_arms();
        let set_id_body = self.expand_set_id_body();

        quote! {
            impl #model_ident {
                #vis fn fields() -> #field_struct_ident {
                    #field_struct_ident { _p: () }
                }

                #vis fn all() -> #quern::Select<#model_ident> {
                    #quern::Select::all()
                }

                #vis fn filter(filter: #quern::stmt::Predicate) -> #quern::Select<#model_ident> {
                    #quern::Select::all().filter(filter)
                }
            }

            impl #quern::Model for #model_ident {
                const NAME: &'static str = #model_name;

                const FIELDS: &'static [&'static str] = &[ #( #field_names ),* ];

                fn schema() -> ::std::vec::Vec<#quern::schema::Field> {
                    ::std::vec![ #( #field_schemas ),* ]
                }

                fn load(mut record: #quern::stmt::ValueRecord) -> #quern::Result<Self> {
                    #load_body
                }

                fn dump_field(&self, index: usize) -> #quern::Result<#quern::stmt::Value> {
                    match index {
                        #( #dump_arms )*
                        _ => ::std::result::Result::Err(#quern::Error::from_args(format_args!(
                            "model `{}` has no field #{}",
                            #model_name,
                            index,
                        ))),
                    }
                }

                fn set_id(&mut self, id: i64) -> #quern::Result<()> {
                    #set_id_body
                }
            }
        }
    }

    /// Runtime metadata for one field.
    pub(super) fn expand_field_schema(&self, field: &crate::schema::Field) -> TokenStream {
        let quern = &self.quern;
        let model_name = self.model.name();
        let name = field.name();
        let ty = &field.ty;
        let unique = field.unique;

        quote! {
            #quern::schema::Field::of::<#ty>(#model_name, #name).set_unique(#unique)
        }
    }

    fn expand_load_body(&self) -> TokenStream {
        let quern = &self.quern;
        let model_name = self.model.name();
        let width = util::int(self.model.fields.len());

        let fields = self.model.fields.iter().map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            let index = util::int(field.index);
            quote!(#ident: <#ty as #quern::stmt::Primitive>::convert(record.take(#index))?,)
        });

        quote! {
            if record.len() != #width {
                return ::std::result::Result::Err(#quern::Error::from_args(format_args!(
                    "model `{}` has {} fields, but {} given",
                    #model_name,
                    #width,
                    record.len(),
                )));
            }

            ::std::result::Result::Ok(Self {
                #( #fields )*
            })
        }
    }

    fn expand_dump_arms(&self) -> Vec<TokenStream> {
        let quern = &self.quern;

        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let ty = &field.ty;
                let index = util::int(field.index);
                quote!(#index => <#ty as #quern::stmt::Primitive>::adapt(&self.#ident),)
            })
            .collect()
    }

    fn expand_set_id_body(&self) -> TokenStream {
        let quern = &self.quern;
        let model_name = self.model.name();

        // Registration rejects models whose first field is not an integer `id`.
        let Some(field) = self.model.fields.first() else {
            return quote! {
                let _ = id;
                ::std::result::Result::Err(#quern::Error::from_args(format_args!(
                    "model `{}` has no fields",
                    #model_name,
                )))
            };
        };

        let ident = &field.ident;
        let ty = &field.ty;

        quote! {
            self.#ident = <#ty as #quern::stmt::Primitive>::convert(
                #quern::stmt::Value::Integer(id),
            )?;
            ::std::result::Result::Ok(())
        }
    }
}
