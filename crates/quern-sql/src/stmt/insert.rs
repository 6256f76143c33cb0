use super::*;

use quern_core::{Error, ModelSignature, Result};

/// Inserts one row and reports its identity.
#[derive(Debug, Clone)]
pub struct Insert {
    pub table: String,

    /// Column names, in declaration order
    pub columns: Vec<String>,

    /// One value per column
    pub values: Vec<Value>,
}

impl Statement {
    /// Inserts `values`, given for every field except `id`, in declaration
    /// order.
    pub fn insert(signature: &ModelSignature, values: Vec<Value>) -> Result<Self> {
        let columns: Vec<_> = signature
            .data_fields()
            .iter()
            .map(|field| field.name.to_lowercase())
            .collect();

        if columns.len() != values.len() {
            return Err(Error::invalid_statement(format!(
                "model {} has {} insertable fields, but {} values given",
                signature.name,
                columns.len(),
                values.len()
            )));
        }

        Ok(Insert {
            table: signature.table_name(),
            columns,
            values,
        }
        .into())
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
