use super::*;

use quern_core::ModelSignature;

/// `CREATE TABLE IF NOT EXISTS`. The identity column is implied; each
/// flavor renders its own auto-increment primary key for it.
#[derive(Debug, Clone)]
pub struct CreateTable {
    pub name: String,
    pub columns: Vec<ColumnDef>,
}

impl Statement {
    pub fn create_table(signature: &ModelSignature) -> Self {
        CreateTable {
            name: signature.table_name(),
            columns: signature
                .data_fields()
                .iter()
                .map(ColumnDef::from_field)
                .collect(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
