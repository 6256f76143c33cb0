mod value;
use value::Value;

use deadpool::managed::{Metrics, Object, RecycleError, RecycleResult};
use quern_core::{async_trait, driver::Flavor, err, stmt, Driver, Error, Result};
use tokio::sync::{Mutex, RwLock};
use tokio_postgres::{error::SqlState, types::ToSql, Client, Config, NoTls};
use url::Url;

type Pool = deadpool::managed::Pool<Manager>;

/// Pooled PostgreSQL backend.
///
/// The pool is created on first use. Statements borrow a connection each and
/// run independently, bounded only by the pool size.
#[derive(Debug)]
pub struct PostgreSQL {
    config: Config,
    max_size: usize,
    min_idle: usize,
    pool: RwLock<Option<Pool>>,
    /// Held by the single task building the pool.
    init: Mutex<()>,
}

impl PostgreSQL {
    pub const DEFAULT_MAX_SIZE: usize = 5;
    pub const DEFAULT_MIN_IDLE: usize = 1;

    /// Create a driver from a `postgres://` or `postgresql://` URL.
    ///
    /// No connection is made until the driver is opened or first used.
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        if !matches!(url.scheme(), "postgres" | "postgresql") {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `postgresql` scheme; url={url}"
            )));
        }

        let host = url.host_str().ok_or_else(|| {
            Error::invalid_connection_url(format!("missing host in connection URL; url={url}"))
        })?;

        let dbname = url.path().trim_start_matches('/');
        if dbname.is_empty() {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={url}"
            )));
        }

        let mut config = Config::new();
        config.host(host);
        config.dbname(dbname);

        if let Some(port) = url.port() {
            config.port(port);
        }

        if !url.username().is_empty() {
            config.user(url.username());
        }

        if let Some(password) = url.password() {
            config.password(password);
        }

        Ok(Self::with_config(config))
    }

    /// Create a driver from an already built client configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            max_size: Self::DEFAULT_MAX_SIZE,
            min_idle: Self::DEFAULT_MIN_IDLE,
            pool: RwLock::new(None),
            init: Mutex::new(()),
        }
    }

    /// Maximum number of physical connections.
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size.max(1);
        self
    }

    /// Connections established eagerly when the pool is created.
    pub fn min_idle(mut self, min_idle: usize) -> Self {
        self.min_idle = min_idle;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn pool(&self) -> Result<Pool> {
        if let Some(pool) = &*self.pool.read().await {
            return Ok(pool.clone());
        }

        let _init = self.init.lock().await;

        // Another task may have finished while we waited for the init lock.
        if let Some(pool) = &*self.pool.read().await {
            return Ok(pool.clone());
        }

        let pool = self.build_pool().await?;
        *self.pool.write().await = Some(pool.clone());
        Ok(pool)
    }

    async fn build_pool(&self) -> Result<Pool> {
        let pool = Pool::builder(Manager {
            config: self.config.clone(),
        })
        .max_size(self.max_size)
        .runtime(deadpool::Runtime::Tokio1)
        .build()
        .map_err(Error::connection_pool)?;

        let mut warm = Vec::with_capacity(self.min_idle);
        for _ in 0..self.min_idle.min(self.max_size) {
            warm.push(pool.get().await.map_err(Error::connection_pool)?);
        }
        drop(warm);

        tracing::info!(
            database = self.config.get_dbname(),
            max_size = self.max_size,
            min_idle = self.min_idle,
            "opened postgresql pool"
        );
        Ok(pool)
    }

    /// Checks out a connection for `sql`. Failing to connect is reported
    /// like any other failure of the statement.
    async fn client(&self, sql: &str, args: &[stmt::Value]) -> Result<Object<Manager>> {
        tracing::debug!(sql, args = args.len(), "executing statement");

        let pool = self
            .pool()
            .await
            .map_err(|err| Error::db(sql, args, err))?;
        pool.get().await.map_err(|err| Error::db(sql, args, err))
    }
}

#[async_trait]
impl Driver for PostgreSQL {
    fn flavor(&self) -> Flavor {
        Flavor::Postgresql
    }

    async fn open(&self) -> Result<()> {
        self.pool().await?;
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        let _init = self.init.lock().await;

        if let Some(pool) = self.pool.write().await.take() {
            pool.close();
            tracing::info!(
                database = self.config.get_dbname(),
                "closed postgresql pool"
            );
        }
        Ok(())
    }

    async fn execute(&self, sql: &str, args: &[stmt::Value]) -> Result<u64> {
        let client = self.client(sql, args).await?;
        let params = params(args);

        client
            .execute(sql, &as_refs(&params))
            .await
            .map_err(|err| translate(err, sql, args))
    }

    async fn execute_insert(&self, sql: &str, args: &[stmt::Value]) -> Result<i64> {
        let client = self.client(sql, args).await?;
        let params = params(args);

        let rows = client
            .query(sql, &as_refs(&params))
            .await
            .map_err(|err| translate(err, sql, args))?;

        let Some(row) = rows.first() else {
            return Err(err!("INSERT returned no identity; query=`{sql}`"));
        };

        match value::from_row(row)?.into_iter().next() {
            Some(stmt::Value::Integer(id)) => Ok(id),
            other => Err(err!(
                "INSERT returned a non-integer identity {other:?}; query=`{sql}`"
            )),
        }
    }

    async fn fetch_all(&self, sql: &str, args: &[stmt::Value]) -> Result<Vec<stmt::ValueRecord>> {
        let client = self.client(sql, args).await?;
        let params = params(args);

        let rows = client
            .query(sql, &as_refs(&params))
            .await
            .map_err(|err| translate(err, sql, args))?;

        rows.iter()
            .map(|row| Ok(stmt::ValueRecord::from_vec(value::from_row(row)?)))
            .collect()
    }
}

fn params(args: &[stmt::Value]) -> Vec<Value<'_>> {
    args.iter().map(Value).collect()
}

fn as_refs<'a>(params: &'a [Value<'_>]) -> Vec<&'a (dyn ToSql + Sync)> {
    params
        .iter()
        .map(|param| param as &(dyn ToSql + Sync))
        .collect()
}

/// Wraps a tokio-postgres error with the statement that caused it.
fn translate(err: tokio_postgres::Error, sql: &str, args: &[stmt::Value]) -> Error {
    let field = err
        .as_db_error()
        .filter(|db| db.code() == &SqlState::UNIQUE_VIOLATION)
        .and_then(|db| db.detail().and_then(unique_column).or(db.column()))
        .map(str::to_string);

    match field {
        Some(field) => Error::unique_required(field, sql, args, err),
        None => Error::db(sql, args, err),
    }
}

/// Extracts the column from a detail such as `Key (name)=(ann) already exists.`
fn unique_column(detail: &str) -> Option<&str> {
    let columns = detail.strip_prefix("Key (")?;
    let (columns, _) = columns.split_once(")=")?;
    // Composite keys list every column; report the first.
    columns.split(", ").next().map(str::trim)
}

#[derive(Debug)]
struct Manager {
    config: Config,
}

impl deadpool::managed::Manager for Manager {
    type Type = Client;
    type Error = tokio_postgres::Error;

    async fn create(&self) -> std::result::Result<Client, Self::Error> {
        let (client, connection) = self.config.connect(NoTls).await?;

        tokio::spawn(async move {
            if let Err(err) = connection.await {
                tracing::error!(%err, "postgresql connection error");
            }
        });

        Ok(client)
    }

    async fn recycle(&self, client: &mut Client, _: &Metrics) -> RecycleResult<Self::Error> {
        if client.is_closed() {
            return Err(RecycleError::Message("connection closed".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::unique_column;

    #[test]
    fn unique_column_from_detail() {
        assert_eq!(
            unique_column("Key (name)=(ann) already exists."),
            Some("name")
        );
        assert_eq!(
            unique_column("Key (email, tenant)=(a@b.c, 1) already exists."),
            Some("email")
        );
        assert_eq!(unique_column("something else"), None);
    }
}
