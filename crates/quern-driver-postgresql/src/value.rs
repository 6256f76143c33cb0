use quern_core::{err, stmt::Value as CoreValue, Result};
use tokio_postgres::{
    types::{private::BytesMut, to_sql_checked, IsNull, ToSql, Type},
    Row,
};

type BoxError = Box<dyn std::error::Error + Sync + Send>;

/// Binds a core value as a PostgreSQL parameter.
///
/// PostgreSQL infers parameter types from the statement, so integers and
/// floats are narrowed to whatever width the server asks for.
#[derive(Debug)]
pub(crate) struct Value<'a>(pub(crate) &'a CoreValue);

impl ToSql for Value<'_> {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> std::result::Result<IsNull, BoxError> {
        match self.0 {
            CoreValue::Null => Ok(IsNull::Yes),
            CoreValue::Integer(value) => match *ty {
                Type::INT2 => i16::try_from(*value)?.to_sql(ty, out),
                Type::INT4 => i32::try_from(*value)?.to_sql(ty, out),
                Type::INT8 => value.to_sql(ty, out),
                Type::FLOAT8 => (*value as f64).to_sql(ty, out),
                Type::BOOL => (*value != 0).to_sql(ty, out),
                _ => Err(mismatch(self.0, ty)),
            },
            CoreValue::Real(value) => match *ty {
                Type::FLOAT4 => (*value as f32).to_sql(ty, out),
                Type::FLOAT8 => value.to_sql(ty, out),
                _ => Err(mismatch(self.0, ty)),
            },
            CoreValue::Text(value) => match *ty {
                Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME | Type::UNKNOWN => {
                    value.to_sql(ty, out)
                }
                _ => Err(mismatch(self.0, ty)),
            },
            CoreValue::Blob(value) => match *ty {
                Type::BYTEA => value.to_sql(ty, out),
                _ => Err(mismatch(self.0, ty)),
            },
        }
    }

    // Nulls bind to any column; the match above rejects everything else.
    fn accepts(_: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

fn mismatch(value: &CoreValue, ty: &Type) -> BoxError {
    format!("cannot bind {} value to a {ty} parameter", value.kind_name()).into()
}

/// Reads every column of `row` into core values.
pub(crate) fn from_row(row: &Row) -> Result<Vec<CoreValue>> {
    let mut values = Vec::with_capacity(row.len());

    for (index, column) in row.columns().iter().enumerate() {
        values.push(from_column(row, index, column.type_())?);
    }

    Ok(values)
}

fn from_column(row: &Row, index: usize, ty: &Type) -> Result<CoreValue> {
    // `Type` is not an enum we can exhaustively match on, so compare by value.
    let value = match *ty {
        Type::INT2 => get::<i16>(row, index)?.map(|v| CoreValue::Integer(v.into())),
        Type::INT4 => get::<i32>(row, index)?.map(|v| CoreValue::Integer(v.into())),
        Type::INT8 => get::<i64>(row, index)?.map(CoreValue::Integer),
        Type::BOOL => get::<bool>(row, index)?.map(|v| CoreValue::Integer(v.into())),
        Type::FLOAT4 => get::<f32>(row, index)?.map(|v| CoreValue::Real(v.into())),
        Type::FLOAT8 => get::<f64>(row, index)?.map(CoreValue::Real),
        Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME => {
            get::<String>(row, index)?.map(CoreValue::Text)
        }
        Type::BYTEA => get::<Vec<u8>>(row, index)?.map(CoreValue::Blob),
        _ => {
            return Err(err!(
                "unsupported PostgreSQL column type `{ty}` for column {index}"
            ))
        }
    };

    Ok(value.unwrap_or(CoreValue::Null))
}

fn get<'a, T>(row: &'a Row, index: usize) -> Result<Option<T>>
where
    T: tokio_postgres::types::FromSql<'a>,
{
    row.try_get::<_, Option<T>>(index)
        .map_err(|err| err!("failed to read column {index}: {err}"))
}
