use super::PoolConfig;
use crate::{Driver, Error, Result};

use serde::Deserialize;
use std::sync::Arc;

/// A named database connection, as accepted by
/// [`Builder::connection`](super::Builder::connection).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConnectionConfig {
    #[serde(default = "ConnectionConfig::default_name")]
    pub name: String,
    pub url: String,
}

impl ConnectionConfig {
    pub const DEFAULT_NAME: &'static str = "main";

    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    fn default_name() -> String {
        Self::DEFAULT_NAME.to_string()
    }
}

/// Builds the driver for a connection string.
///
/// The scheme picks the backend. A decorated scheme such as
/// `sqlite+rusqlite` or `postgresql+tokio` is reduced to the bare one before
/// the URL is handed to the driver, and `memory` is a fresh in-memory SQLite
/// database.
pub(crate) fn driver(url: &str, pool: &PoolConfig) -> Result<Arc<dyn Driver>> {
    if url == "memory" {
        return connect_sqlite("sqlite::memory:");
    }

    let Some((scheme, rest)) = url.split_once(':') else {
        return Err(Error::invalid_connection_url(format!(
            "missing scheme; url={url}"
        )));
    };

    let backend = scheme.split_once('+').map_or(scheme, |(backend, _)| backend);

    match backend {
        "sqlite" => connect_sqlite(&format!("sqlite:{rest}")),
        "postgres" | "postgresql" => connect_postgresql(&format!("postgresql:{rest}"), pool),
        _ => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Arc<dyn Driver>> {
    Ok(Arc::new(quern_driver_sqlite::Sqlite::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(url: &str) -> Result<Arc<dyn Driver>> {
    Err(Error::invalid_connection_url(format!(
        "`sqlite` feature not enabled; url={url}"
    )))
}

#[cfg(feature = "postgresql")]
fn connect_postgresql(url: &str, pool: &PoolConfig) -> Result<Arc<dyn Driver>> {
    let driver = quern_driver_postgresql::PostgreSQL::new(url)?
        .max_size(pool.max_size)
        .min_idle(pool.min_idle);
    Ok(Arc::new(driver))
}

#[cfg(not(feature = "postgresql"))]
fn connect_postgresql(url: &str, _pool: &PoolConfig) -> Result<Arc<dyn Driver>> {
    Err(Error::invalid_connection_url(format!(
        "`postgresql` feature not enabled; url={url}"
    )))
}
