mod value;
use value::Value;

use quern_core::{async_trait, driver::Flavor, stmt, Driver, Error, Result};
use rusqlite::{params_from_iter, Connection};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Single-connection SQLite backend.
///
/// The connection is opened lazily on first use and every statement runs
/// while holding the connection lock, so at most one statement is in flight.
#[derive(Debug)]
pub struct Sqlite {
    target: Target,
    connection: Mutex<Option<Connection>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a connection string.
    ///
    /// Accepts `sqlite::memory:`, `sqlite://<path>` and `sqlite:<path>`; an
    /// empty path or `:memory:` selects an in-memory database.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();

        let Some(path) = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
        else {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url}"
            )));
        };

        Ok(match path {
            "" | ":memory:" => Self::in_memory(),
            path => Self::open(path),
        })
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::with_target(Target::InMemory)
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::with_target(Target::File(path.as_ref().to_path_buf()))
    }

    fn with_target(target: Target) -> Self {
        Self {
            target,
            connection: Mutex::new(None),
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.target == Target::InMemory
    }

    fn connect(&self) -> rusqlite::Result<Connection> {
        let connection = match &self.target {
            Target::File(path) => Connection::open(path),
            Target::InMemory => Connection::open_in_memory(),
        }?;

        tracing::info!(database = ?self.target, "opened sqlite connection");
        Ok(connection)
    }

    /// Runs `f` against the shared connection, opening it first if needed.
    ///
    /// Every statement goes through here, which makes it the one place driver
    /// errors are translated, failures to connect included.
    async fn run<R>(
        &self,
        sql: &str,
        args: &[stmt::Value],
        f: impl FnOnce(&Connection, Vec<Value<'_>>) -> rusqlite::Result<R>,
    ) -> Result<R> {
        tracing::debug!(sql, args = args.len(), "executing statement");

        let mut guard = self.connection.lock().await;
        let result = match &mut *guard {
            Some(connection) => Ok(connection),
            slot => self.connect().map(|connection| slot.insert(connection)),
        };

        result
            .and_then(|connection| f(&*connection, args.iter().map(Value).collect()))
            .map_err(|err| translate(err, sql, args))
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn flavor(&self) -> Flavor {
        Flavor::Sqlite
    }

    async fn open(&self) -> Result<()> {
        let mut guard = self.connection.lock().await;
        if guard.is_none() {
            *guard = Some(self.connect().map_err(Error::connection_pool)?);
        }
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        let Some(connection) = self.connection.lock().await.take() else {
            return Ok(());
        };

        connection
            .close()
            .map_err(|(_, err)| Error::connection_pool(err))?;

        tracing::info!(database = ?self.target, "closed sqlite connection");
        Ok(())
    }

    async fn execute(&self, sql: &str, args: &[stmt::Value]) -> Result<u64> {
        self.run(sql, args, |connection, params| {
            let count = connection.execute(sql, params_from_iter(params))?;
            Ok(count as u64)
        })
        .await
    }

    async fn execute_insert(&self, sql: &str, args: &[stmt::Value]) -> Result<i64> {
        self.run(sql, args, |connection, params| {
            connection.execute(sql, params_from_iter(params))?;
            Ok(connection.last_insert_rowid())
        })
        .await
    }

    async fn fetch_all(&self, sql: &str, args: &[stmt::Value]) -> Result<Vec<stmt::ValueRecord>> {
        self.run(sql, args, |connection, params| {
            let mut stmt = connection.prepare(sql)?;
            let width = stmt.column_count();
            let mut rows = stmt.query(params_from_iter(params))?;

            let mut ret = vec![];
            while let Some(row) = rows.next()? {
                let mut items = Vec::with_capacity(width);
                for index in 0..width {
                    items.push(Value::from_sql(row.get(index)?));
                }
                ret.push(stmt::ValueRecord::from_vec(items));
            }
            Ok(ret)
        })
        .await
    }
}

/// Wraps a rusqlite error with the statement that caused it.
fn translate(err: rusqlite::Error, sql: &str, args: &[stmt::Value]) -> Error {
    if let Some(field) = unique_violation(&err) {
        return Error::unique_required(field, sql, args, err);
    }
    Error::db(sql, args, err)
}

/// Extracts the column from `UNIQUE constraint failed: <table>.<column>`.
fn unique_violation(err: &rusqlite::Error) -> Option<String> {
    let rusqlite::Error::SqliteFailure(failure, Some(message)) = err else {
        return None;
    };
    if failure.code != rusqlite::ErrorCode::ConstraintViolation {
        return None;
    }

    let columns = message.strip_prefix("UNIQUE constraint failed: ")?;
    // Composite constraints list every column; report the first.
    let first = columns.split(", ").next()?;
    let column = first.rsplit('.').next()?;
    Some(column.to_string())
}
