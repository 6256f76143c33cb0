use super::{codec, Primitive, Type, Value};
use crate::Result;

use serde::{de::DeserializeOwned, Serialize};
use std::ops::{Deref, DerefMut};

/// Stores any serde value (structured records, maps, lists) through the
/// serialized fallback.
///
/// ```
/// # use quern_core::stmt::{Json, Primitive};
/// let tags = Json(vec!["a".to_string(), "b".to_string()]);
/// let stored = tags.adapt().unwrap();
/// assert_eq!(Json::<Vec<String>>::convert(stored).unwrap(), tags);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Json(value)
    }
}

impl<T: Serialize + DeserializeOwned> Primitive for Json<T> {
    fn ty() -> Type {
        Type::Serialized(std::any::type_name::<T>())
    }

    fn adapt(&self) -> Result<Value> {
        codec::encode(&self.0)
    }

    fn convert(value: Value) -> Result<Self> {
        codec::decode(value, std::any::type_name::<T>()).map(Json)
    }
}
