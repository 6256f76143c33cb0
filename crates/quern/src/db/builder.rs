use super::{connect, ConnectionConfig, Db, PoolConfig, Shared};
use crate::{err, schema::Field, Driver, Model, Result};

use indexmap::IndexMap;
use quern_core::ModelSignature;
use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    /// Registered models, prepared when the `Db` is built
    models: Vec<(&'static str, fn() -> Vec<Field>)>,

    /// Named connections, in the order they were added
    connections: Vec<(String, Connect)>,

    pool: PoolConfig,
}

enum Connect {
    Url(String),
    Driver(Arc<dyn Driver>),
}

impl Builder {
    pub fn register<M: Model>(&mut self) -> &mut Self {
        self.models.push((M::NAME, M::schema));
        self
    }

    /// Adds a named connection. The first one added is the default.
    pub fn connect(&mut self, name: impl Into<String>, url: impl Into<String>) -> &mut Self {
        self.connections.push((name.into(), Connect::Url(url.into())));
        self
    }

    pub fn connection(&mut self, config: ConnectionConfig) -> &mut Self {
        self.connect(config.name, config.url)
    }

    /// Adds a named connection backed by an already constructed driver.
    pub fn driver(&mut self, name: impl Into<String>, driver: impl Driver) -> &mut Self {
        self.connections
            .push((name.into(), Connect::Driver(Arc::new(driver))));
        self
    }

    /// Pool sizing for pooled backends.
    pub fn pool(&mut self, config: PoolConfig) -> &mut Self {
        self.pool = config;
        self
    }

    /// Prepares every registered model, then opens every connection.
    pub async fn build(&mut self) -> Result<Db> {
        let mut signatures = IndexMap::new();
        for &(name, schema) in &self.models {
            if !signatures.contains_key(&name) {
                signatures.insert(name, ModelSignature::prepare(name, schema())?);
            }
        }

        let mut connections: IndexMap<String, Arc<dyn Driver>> = IndexMap::new();
        for (name, connect) in &self.connections {
            if connections.contains_key(name) {
                return Err(err!("database `{name}` is already configured"));
            }

            let driver = match connect {
                Connect::Url(url) => connect::driver(url, &self.pool)?,
                Connect::Driver(driver) => driver.clone(),
            };
            connections.insert(name.clone(), driver);
        }

        let Some((name, driver)) = connections.first() else {
            return Err(err!("no database connection configured"));
        };
        let (name, driver) = (name.clone(), driver.clone());

        for driver in connections.values() {
            driver.open().await?;
        }

        Ok(Db {
            shared: Arc::new(Shared {
                signatures,
                connections,
            }),
            name,
            driver,
        })
    }
}
