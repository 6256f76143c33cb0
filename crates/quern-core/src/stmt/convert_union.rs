use super::Value;
use crate::{Error, Result};

/// Tries each candidate conversion in order and returns the first success.
///
/// This is how a [`Primitive`](super::Primitive) whose type is a union of
/// several members loads itself:
///
/// ```
/// # use quern_core::stmt::{convert_union, Primitive, Value};
/// #[derive(Debug, PartialEq)]
/// enum Score {
///     Points(i64),
///     Grade(String),
/// }
///
/// let score = convert_union::<Score>(
///     Value::Text("A+".into()),
///     &[
///         &|v| i64::convert(v).map(Score::Points),
///         &|v| String::convert(v).map(Score::Grade),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(score, Score::Grade("A+".into()));
/// ```
pub fn convert_union<T>(value: Value, candidates: &[&dyn Fn(Value) -> Result<T>]) -> Result<T> {
    for candidate in candidates {
        if let Ok(converted) = candidate(value.clone()) {
            return Ok(converted);
        }
    }

    Err(Error::type_conversion(value, std::any::type_name::<T>()))
}
