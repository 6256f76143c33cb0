mod builder;
mod connect;
mod pool;

pub use builder::Builder;
pub use connect::ConnectionConfig;
pub use pool::PoolConfig;

use crate::{
    err,
    stmt::{BinaryOp, Operand, Predicate, Type, Value},
    Assignments, Driver, Error, Model, Result, Select, Tracked,
};

use indexmap::IndexMap;
use quern_core::ModelSignature;
use quern_sql::{
    stmt::{Assignment, Projection},
    Serializer, Statement,
};
use std::sync::Arc;

/// Shared state between all `Db` clones.
struct Shared {
    /// Prepared model signatures, by model name
    signatures: IndexMap<&'static str, ModelSignature>,

    /// Named connections; the first is the default
    connections: IndexMap<String, Arc<dyn Driver>>,
}

/// A database handle bound to one of the configured connections.
///
/// Cloning is cheap. Each operation issues exactly one statement, or none
/// when there is nothing to do.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,

    /// Name of the selected connection
    name: String,

    driver: Arc<dyn Driver>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// A handle to the connection called `name`, sharing models and
    /// connections with `self`.
    pub fn using(&self, name: &str) -> Result<Db> {
        let Some(driver) = self.shared.connections.get(name) else {
            return Err(err!("database `{name}` is not configured"));
        };

        Ok(Db {
            shared: self.shared.clone(),
            name: name.to_string(),
            driver: driver.clone(),
        })
    }

    /// Name of the selected connection.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.driver
    }

    /// The prepared signature of a registered model.
    pub fn signature<M: Model>(&self) -> Result<&ModelSignature> {
        self.shared
            .signatures
            .get(M::NAME)
            .ok_or_else(|| Error::model_definition(M::NAME, "model is not registered"))
    }

    /// Creates a table for every registered model, unless it exists.
    pub async fn create_tables(&self) -> Result<()> {
        for signature in self.shared.signatures.values() {
            self.exec(&Statement::create_table(signature)).await?;
        }
        Ok(())
    }

    /// Inserts `record` and returns it with the identity the database
    /// assigned.
    pub async fn insert<M: Model>(&self, mut record: M) -> Result<M> {
        let signature = self.signature::<M>()?;

        let values = (1..signature.fields.len())
            .map(|index| record.dump_field(index))
            .collect::<Result<Vec<_>>>()?;

        let (sql, args) = self.serialize(&Statement::insert(signature, values)?);
        let id = self.driver().execute_insert(&sql, &args).await?;

        record.set_id(id)?;
        Ok(record)
    }

    /// Returns the first row matching `query`.
    pub async fn fetchone<M: Model>(&self, query: Select<M>) -> Result<Option<M>> {
        let stmt = self.select_stmt(query, Projection::Table)?;
        let (sql, args) = self.serialize(&stmt);

        self.driver()
            .fetch_one(&sql, &args)
            .await?
            .map(M::load)
            .transpose()
    }

    /// Returns every row matching `query`.
    ///
    /// Over a join only the columns of `M` are selected.
    pub async fn fetchall<M: Model>(&self, query: Select<M>) -> Result<Vec<M>> {
        let stmt = self.select_stmt(query, Projection::Table)?;
        let (sql, args) = self.serialize(&stmt);

        self.driver()
            .fetch_all(&sql, &args)
            .await?
            .into_iter()
            .map(M::load)
            .collect()
    }

    /// Returns `(M, B)` pairs from a query joined against `B`.
    ///
    /// A side is `None` where an outer join found no matching row.
    pub async fn fetchall_joined<M: Model, B: Model>(
        &self,
        query: Select<M>,
    ) -> Result<Vec<(Option<M>, Option<B>)>> {
        self.signature::<B>()?;

        let stmt = self.select_stmt(query, Projection::All)?;
        let (sql, args) = self.serialize(&stmt);
        let rows = self.driver().fetch_all(&sql, &args).await?;

        let width = M::FIELDS.len() + B::FIELDS.len();

        rows.into_iter()
            .map(|mut row| {
                if row.len() != width {
                    return Err(err!(
                        "joined row of `{}` and `{}` should have {width} columns, found {}",
                        M::NAME,
                        B::NAME,
                        row.len()
                    ));
                }

                let rhs = row.split_off(M::FIELDS.len());
                Ok((load_side::<M>(row)?, load_side::<B>(rhs)?))
            })
            .collect()
    }

    /// Sets `assignments` on every row matching `filter`, returning the
    /// number of rows changed.
    pub async fn update<M: Model>(
        &self,
        assignments: Assignments<M>,
        filter: Option<Predicate>,
    ) -> Result<u64> {
        let signature = self.signature::<M>()?;
        let stmt = Statement::update(signature, assignments.into_sql(), filter)?;
        self.exec(&stmt).await
    }

    /// Writes the fields of `record` changed since it was tracked.
    ///
    /// Nothing is issued when no field other than `id` changed.
    pub async fn save<M: Model>(&self, record: &mut Tracked<M>) -> Result<()> {
        let signature = self.signature::<M>()?;

        let changed = record.changed_attributes()?;
        let mut assignments = vec![];

        for (index, field) in signature.fields.iter().enumerate().skip(1) {
            if changed.contains(field.name) {
                assignments.push(Assignment {
                    column: field.name.to_lowercase(),
                    value: record.dump_field(index)?,
                });
            }
        }

        if assignments.is_empty() {
            return Ok(());
        }

        let Some(id) = record.id()? else {
            tracing::warn!(model = M::NAME, "skipping save of a record without an id");
            return Ok(());
        };

        let filter = signature.id().compare(
            BinaryOp::Eq,
            Operand {
                ty: Type::Integer,
                value: Value::Integer(id),
            },
        )?;

        self.exec(&Statement::update(signature, assignments, Some(filter))?)
            .await?;

        record.reset()
    }

    /// Deletes every row matching `filter`, returning how many were removed.
    pub async fn delete<M: Model>(&self, filter: Option<Predicate>) -> Result<u64> {
        let signature = self.signature::<M>()?;
        self.exec(&Statement::delete(signature, filter)).await
    }

    pub async fn drop_table<M: Model>(&self) -> Result<()> {
        let signature = self.signature::<M>()?;
        self.exec(&Statement::drop_table(signature)).await?;
        Ok(())
    }

    /// Runs raw SQL on the selected connection.
    pub async fn execute(&self, sql: &str, args: &[Value]) -> Result<u64> {
        self.driver().execute(sql, args).await
    }

    /// Closes every connection. Later use reconnects lazily.
    pub async fn close(&self) -> Result<()> {
        for driver in self.shared.connections.values() {
            driver.close().await?;
        }
        Ok(())
    }

    fn select_stmt<M: Model>(&self, query: Select<M>, projection: Projection) -> Result<Statement> {
        let signature = self.signature::<M>()?;

        // `SELECT *` already matches the model when nothing is joined.
        let projection = if query.has_joins() {
            projection
        } else {
            Projection::All
        };

        Ok(query.into_sql(signature, projection).into())
    }

    fn serialize(&self, stmt: &Statement) -> (String, Vec<Value>) {
        let mut args = vec![];
        let sql = Serializer::new(self.driver().flavor()).serialize(stmt, &mut args);
        (sql, args)
    }

    async fn exec(&self, stmt: &Statement) -> Result<u64> {
        let (sql, args) = self.serialize(stmt);
        self.driver().execute(&sql, &args).await
    }
}

/// Loads one side of a joined row, or `None` when its identity is NULL.
fn load_side<M: Model>(record: quern_core::stmt::ValueRecord) -> Result<Option<M>> {
    match record.first() {
        Some(Value::Null) => Ok(None),
        _ => M::load(record).map(Some),
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("connection", &self.name())
            .field(
                "connections",
                &self.shared.connections.keys().collect::<Vec<_>>(),
            )
            .field(
                "models",
                &self.shared.signatures.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}
