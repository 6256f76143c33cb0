use super::Error;
use crate::stmt::Value;

/// A failure reported by a driver while running a statement.
///
/// Carries the statement text and its bound arguments so the failing call can
/// be reproduced from the error alone.
#[derive(Debug)]
pub(super) struct DbError {
    pub(super) query: Box<str>,
    pub(super) args: Vec<Value>,
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DbError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{} on query `{}` with args {:?}",
            self.inner, self.query, self.args
        )?;

        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Wraps a driver error together with the statement that produced it.
    pub fn db(
        query: impl Into<String>,
        args: &[Value],
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(super::ErrorKind::Db(DbError {
            query: query.into().into(),
            args: args.to_vec(),
            inner: Box::new(err),
        }))
    }

    /// Returns `true` for any statement failure, unique violations included.
    pub fn is_db(&self) -> bool {
        self.db_query().is_some()
    }

    /// The SQL text of the failed statement, if this is a database error.
    pub fn db_query(&self) -> Option<&str> {
        self.find_kind(|kind| match kind {
            super::ErrorKind::Db(err) => Some(err),
            super::ErrorKind::UniqueRequired(err) => Some(&err.db),
            _ => None,
        })
        .map(|err| &*err.query)
    }

    /// The arguments bound to the failed statement, if this is a database
    /// error.
    pub fn db_args(&self) -> Option<&[Value]> {
        self.find_kind(|kind| match kind {
            super::ErrorKind::Db(err) => Some(err),
            super::ErrorKind::UniqueRequired(err) => Some(&err.db),
            _ => None,
        })
        .map(|err| &err.args[..])
    }
}
