use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};
use quern_core::stmt::Value as CoreValue;

/// Binds a core value as a SQLite parameter.
#[derive(Debug)]
pub(crate) struct Value<'a>(pub(crate) &'a CoreValue);

impl Value<'_> {
    /// Converts a raw SQLite column value into a core value.
    pub(crate) fn from_sql(value: SqlValue) -> CoreValue {
        match value {
            SqlValue::Null => CoreValue::Null,
            SqlValue::Integer(v) => CoreValue::Integer(v),
            SqlValue::Real(v) => CoreValue::Real(v),
            SqlValue::Text(v) => CoreValue::Text(v),
            SqlValue::Blob(v) => CoreValue::Blob(v),
        }
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self.0 {
            CoreValue::Null => ToSqlOutput::Owned(SqlValue::Null),
            CoreValue::Integer(v) => ToSqlOutput::Owned(SqlValue::Integer(*v)),
            CoreValue::Real(v) => ToSqlOutput::Owned(SqlValue::Real(*v)),
            CoreValue::Text(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
            CoreValue::Blob(v) => ToSqlOutput::Borrowed(ValueRef::Blob(&v[..])),
        })
    }
}
