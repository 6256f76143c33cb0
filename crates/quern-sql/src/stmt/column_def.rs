use quern_core::{schema::Field, stmt::Type};

/// One column of a `CREATE TABLE`, other than the identity column.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub ty: Type,
    pub unique: bool,
}

impl ColumnDef {
    pub fn from_field(field: &Field) -> ColumnDef {
        ColumnDef {
            name: field.name.to_lowercase(),
            ty: field.ty.clone(),
            unique: field.unique,
        }
    }
}
