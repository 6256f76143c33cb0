use super::Field;
use crate::{Error, Result};

/// Ordered field metadata for one model.
///
/// Field order is the column order: it drives row conversion and the INSERT
/// parameter list. The first field is always the integer `id` column.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSignature {
    pub name: &'static str,
    pub fields: Vec<Field>,
}

impl ModelSignature {
    /// Validates a model's fields and builds its signature.
    pub fn prepare(name: &'static str, fields: Vec<Field>) -> Result<ModelSignature> {
        let Some(id) = fields.first() else {
            return Err(Error::model_definition(name, "model has no fields"));
        };

        if id.name != "id" {
            return Err(Error::model_definition(
                name,
                format!("the first field should be `id`, found `{}`", id.name),
            ));
        }

        if !id.ty.is_integer() {
            return Err(Error::model_definition(
                name,
                format!("`id` should be an integer, found {}", id.ty),
            ));
        }

        if let Some(field) = fields.iter().find(|field| field.model != name) {
            return Err(Error::model_definition(
                name,
                format!("{field} belongs to another model"),
            ));
        }

        Ok(ModelSignature { name, fields })
    }

    /// Lower-cased table name.
    pub fn table_name(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn id(&self) -> &Field {
        &self.fields[0]
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Every field except `id`, in declaration order.
    pub fn data_fields(&self) -> &[Field] {
        &self.fields[1..]
    }
}
