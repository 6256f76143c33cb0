use super::{codec, Primitive, Type, Value};
use crate::{Error, Result};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Temporal values are stored as ISO-8601 text inside the serialized
/// fallback. Stored values of one type must sort bytewise in time order,
/// which is what ordering comparisons run against.
macro_rules! impl_chrono_primitive {
    ($ty:ty, $name:ident, $lit:literal, $format:expr, $parse:expr) => {
        impl Primitive for $ty {
            fn ty() -> Type {
                Type::$name
            }

            fn adapt(&self) -> Result<Value> {
                let format: fn(&$ty) -> String = $format;
                codec::encode(&format(self))
            }

            fn convert(value: Value) -> Result<Self> {
                let text = match &value {
                    Value::Text(text) => text.clone(),
                    Value::Blob(_) => codec::decode::<String>(value.clone(), $lit)?,
                    _ => return Err(Error::type_conversion(value, $lit)),
                };
                let parse: fn(&str) -> Option<$ty> = $parse;
                parse(&text).ok_or_else(|| Error::type_conversion(value, $lit))
            }
        }
    };
}

impl_chrono_primitive!(
    NaiveDate,
    Date,
    "chrono::NaiveDate",
    |v| v.format("%Y-%m-%d").to_string(),
    |s| s.parse().ok()
);

impl_chrono_primitive!(
    NaiveTime,
    Time,
    "chrono::NaiveTime",
    |v| v.format("%H:%M:%S%.f").to_string(),
    |s| s.parse().ok()
);

impl_chrono_primitive!(
    NaiveDateTime,
    DateTime,
    "chrono::NaiveDateTime",
    |v| v.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
    |s| s.parse().ok()
);

impl_chrono_primitive!(
    DateTime<Utc>,
    DateTime,
    "chrono::DateTime<Utc>",
    // Fixed-width fraction and offset; a trailing `Z` would sort after `.`.
    |v| v.format("%Y-%m-%dT%H:%M:%S%.9f+00:00").to_string(),
    |s| DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|v| v.with_timezone(&Utc))
);
