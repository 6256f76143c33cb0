use super::{codec, Type, Value};
use crate::{Error, Result};

/// A Rust type that can be stored in a model field.
///
/// `adapt` turns the value into something a driver can bind; `convert` is
/// the way back from a raw column. Conversion never guesses: a value that
/// does not decode is a `TypeConversion` error.
pub trait Primitive: Sized {
    /// Semantic type of a field declared with this Rust type.
    fn ty() -> Type;

    /// Converts the value into its storage representation.
    fn adapt(&self) -> Result<Value>;

    /// Rebuilds the value from a raw column.
    fn convert(value: Value) -> Result<Self>;

    /// Runtime type of this particular value, checked against the field type
    /// when it is used as a comparison operand.
    fn operand_ty(&self) -> Type {
        Self::ty()
    }
}

/// Whole reals in `MIN_REAL..MAX_REAL` convert to `i64` exactly.
const MIN_REAL: f64 = i64::MIN as f64;
const MAX_REAL: f64 = i64::MAX as f64;

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Primitive for $ty {
                fn ty() -> Type {
                    Type::Integer
                }

                fn adapt(&self) -> Result<Value> {
                    i64::try_from(*self)
                        .map(Value::Integer)
                        .map_err(|_| crate::err!("integer {} is out of range for storage", self))
                }

                fn convert(value: Value) -> Result<Self> {
                    let to_type = stringify!($ty);
                    let int = match &value {
                        Value::Integer(v) => *v,
                        // `as` saturates, so anything outside i64 is rejected first.
                        Value::Real(v) if v.fract() == 0.0 && (MIN_REAL..MAX_REAL).contains(v) => {
                            *v as i64
                        }
                        Value::Text(v) => match v.trim().parse::<i64>() {
                            Ok(v) => v,
                            Err(_) => return Err(Error::type_conversion(value, to_type)),
                        },
                        Value::Blob(_) => return codec::decode(value, to_type),
                        _ => return Err(Error::type_conversion(value, to_type)),
                    };
                    <$ty>::try_from(int).map_err(|_| Error::type_conversion(value, to_type))
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Primitive for $ty {
                fn ty() -> Type {
                    Type::Float
                }

                fn adapt(&self) -> Result<Value> {
                    Ok(Value::Real(f64::from(*self)))
                }

                fn convert(value: Value) -> Result<Self> {
                    let to_type = stringify!($ty);
                    match &value {
                        Value::Real(v) => Ok(*v as $ty),
                        Value::Integer(v) => Ok(*v as $ty),
                        Value::Text(v) => v
                            .trim()
                            .parse::<$ty>()
                            .map_err(|_| Error::type_conversion(value, to_type)),
                        Value::Blob(_) => codec::decode(value, to_type),
                        Value::Null => Err(Error::type_conversion(value, to_type)),
                    }
                }
            }
        )*
    };
}

impl_float!(f32, f64);

impl Primitive for String {
    fn ty() -> Type {
        Type::Text
    }

    fn adapt(&self) -> Result<Value> {
        Ok(Value::Text(self.clone()))
    }

    fn convert(value: Value) -> Result<Self> {
        match value {
            Value::Text(v) => Ok(v),
            Value::Integer(v) => Ok(v.to_string()),
            Value::Real(v) => Ok(v.to_string()),
            Value::Blob(_) => codec::decode(value, "String"),
            Value::Null => Err(Error::type_conversion(value, "String")),
        }
    }
}

/// Booleans have no native column type and go through the serialized
/// fallback.
impl Primitive for bool {
    fn ty() -> Type {
        Type::Bool
    }

    fn adapt(&self) -> Result<Value> {
        codec::encode(self)
    }

    fn convert(value: Value) -> Result<Self> {
        match &value {
            Value::Integer(v) => Ok(*v != 0),
            Value::Text(v) => v
                .parse()
                .map_err(|_| Error::type_conversion(value, "bool")),
            _ => codec::decode(value, "bool"),
        }
    }
}

impl<T: Primitive> Primitive for Option<T> {
    fn ty() -> Type {
        T::ty().nullable()
    }

    fn adapt(&self) -> Result<Value> {
        match self {
            Some(value) => value.adapt(),
            None => Ok(Value::Null),
        }
    }

    fn convert(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::convert(value).map(Some)
        }
    }

    fn operand_ty(&self) -> Type {
        match self {
            Some(value) => value.operand_ty(),
            None => Type::Null,
        }
    }
}
