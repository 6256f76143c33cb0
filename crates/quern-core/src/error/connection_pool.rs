use super::Error;

/// Failure to open a connection or to borrow one from a pool.
#[derive(Debug)]
pub(super) struct ConnectionPoolError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ConnectionPoolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ConnectionPoolError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "connection failed: {}", self.inner)
    }
}

impl Error {
    /// Creates an error from a failure while connecting, building a pool or
    /// borrowing from one.
    pub fn connection_pool(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::ConnectionPool(ConnectionPoolError {
            inner: Box::new(err),
        }))
    }

    pub fn is_connection_pool(&self) -> bool {
        self.find_kind(|kind| match kind {
            super::ErrorKind::ConnectionPool(err) => Some(err),
            _ => None,
        })
        .is_some()
    }
}
