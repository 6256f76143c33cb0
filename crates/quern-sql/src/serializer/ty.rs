use super::Serializer;

use quern_core::stmt::Type;

impl Serializer {
    /// Native column type for `ty`, or the flavor's generic type for values
    /// that go through the serialized fallback.
    pub fn column_type(&self, ty: &Type) -> &'static str {
        match ty {
            Type::Integer => "INTEGER",
            Type::Float => "REAL",
            Type::Text => "TEXT",
            Type::Union(union) => match union.single() {
                Some(ty) => self.column_type(ty),
                None => self.default_column_type(),
            },
            _ => self.default_column_type(),
        }
    }

    pub fn default_column_type(&self) -> &'static str {
        if self.is_sqlite() {
            "BLOB"
        } else {
            "BYTEA"
        }
    }

    /// Definition of the auto-increment identity column.
    pub(super) fn identity_column(&self) -> &'static str {
        if self.is_sqlite() {
            "id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL"
        } else {
            "id SERIAL PRIMARY KEY NOT NULL"
        }
    }
}
