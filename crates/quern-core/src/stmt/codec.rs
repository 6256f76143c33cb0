//! The serialized fallback used for every value without a native column
//! type.

use super::Value;
use crate::{err, Error, Result};

use serde::{de::DeserializeOwned, Serialize};

/// Encodes `value` as JSON bytes in a `Blob`.
pub(crate) fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_vec(value)
        .map(Value::Blob)
        .map_err(|e| err!("failed to serialize {}: {e}", std::any::type_name::<T>()))
}

/// Decodes a fallback-encoded value. `to_type` names the target in the error.
pub(crate) fn decode<T: DeserializeOwned>(value: Value, to_type: &str) -> Result<T> {
    let decoded = match &value {
        Value::Blob(bytes) => serde_json::from_slice(bytes),
        // Some drivers hand serialized columns back as text.
        Value::Text(text) => serde_json::from_str(text),
        _ => return Err(Error::type_conversion(value, to_type)),
    };
    decoded.map_err(|_| Error::type_conversion(value, to_type))
}
