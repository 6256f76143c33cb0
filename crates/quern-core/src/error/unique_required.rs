use super::{db::DbError, Error};
use crate::stmt::Value;

/// A statement violated a uniqueness constraint.
#[derive(Debug)]
pub(super) struct UniqueRequiredError {
    pub(super) field: Box<str>,
    pub(super) db: DbError,
}

impl std::error::Error for UniqueRequiredError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.db)
    }
}

impl core::fmt::Display for UniqueRequiredError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "value for field `{}` must be unique", self.field)
    }
}

impl Error {
    /// Creates a uniqueness violation for `field`, keeping the driver error
    /// and the statement that triggered it.
    pub fn unique_required(
        field: impl Into<String>,
        query: impl Into<String>,
        args: &[Value],
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(super::ErrorKind::UniqueRequired(UniqueRequiredError {
            field: field.into().into(),
            db: DbError {
                query: query.into().into(),
                args: args.to_vec(),
                inner: Box::new(err),
            },
        }))
    }

    pub fn is_unique_required(&self) -> bool {
        self.unique_field().is_some()
    }

    /// The column whose uniqueness was violated.
    pub fn unique_field(&self) -> Option<&str> {
        self.find_kind(|kind| match kind {
            super::ErrorKind::UniqueRequired(err) => Some(&err.field),
            _ => None,
        })
        .map(|field| &**field)
    }
}
