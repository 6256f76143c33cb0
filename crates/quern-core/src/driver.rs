use crate::{async_trait, stmt::Value, stmt::ValueRecord, Result};

use std::fmt::Debug;

/// SQL dialect spoken by a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Sqlite,
    Postgresql,
}

/// The narrow interface Quern needs from a database backend.
///
/// Every method receives fully rendered SQL and its adapted arguments. Drivers
/// wrap every backend failure into [`Error::db`](crate::Error::db) (or
/// [`Error::unique_required`](crate::Error::unique_required)) at a single
/// point, so callers see the same error shape whatever the backend.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Dialect used to render statements for this driver.
    fn flavor(&self) -> Flavor;

    /// Establishes the connection (or pool). Calling it again is a no-op.
    async fn open(&self) -> Result<()>;

    /// Releases the connection (or pool). The driver reconnects lazily if used
    /// again.
    async fn close(&self) -> Result<()>;

    /// Runs a statement and returns the number of affected rows.
    async fn execute(&self, sql: &str, args: &[Value]) -> Result<u64>;

    /// Runs an INSERT and returns the identity of the new row.
    async fn execute_insert(&self, sql: &str, args: &[Value]) -> Result<i64>;

    /// Runs a query and returns its first row, if any.
    async fn fetch_one(&self, sql: &str, args: &[Value]) -> Result<Option<ValueRecord>> {
        Ok(self.fetch_all(sql, args).await?.into_iter().next())
    }

    /// Runs a query and returns every row.
    async fn fetch_all(&self, sql: &str, args: &[Value]) -> Result<Vec<ValueRecord>>;
}
