use super::{ColumnRef, Join, Path, Predicate};
use crate::Model;

use quern_core::{stmt, ModelSignature};
use quern_sql::stmt::{Projection, Select as SqlSelect};
use std::marker::PhantomData;

/// A query over model `M`.
pub struct Select<M> {
    filter: Option<Predicate>,
    joins: Vec<stmt::Join>,
    order_by: Option<ColumnRef>,
    reverse: bool,
    limit: Option<u64>,
    offset: u64,
    _p: PhantomData<fn() -> M>,
}

impl<M: Model> Select<M> {
    /// Every row of the table.
    pub fn all() -> Self {
        Self {
            filter: None,
            joins: vec![],
            order_by: None,
            reverse: false,
            limit: None,
            offset: 0,
            _p: PhantomData,
        }
    }

    /// Restricts the rows returned. Calling it again ANDs the predicates.
    pub fn filter(mut self, filter: Predicate) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => existing.and(filter),
            None => filter,
        });
        self
    }

    pub fn join<T: Model>(mut self, join: Join<T>) -> Self {
        self.joins.push(join.untyped);
        self
    }

    /// Sorts by a field of this model or of a joined one.
    pub fn order_by<N: Model, T>(mut self, path: &Path<N, T>) -> Self {
        self.order_by = Some(path.column());
        self
    }

    /// Sorts in descending order.
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn has_joins(&self) -> bool {
        !self.joins.is_empty()
    }

    pub(crate) fn into_sql(self, signature: &ModelSignature, projection: Projection) -> SqlSelect {
        let mut select = SqlSelect::new(signature);
        select.projection = projection;
        select.joins = self.joins;
        select.filter = self.filter;
        select.order_by = self.order_by;
        select.desc = self.reverse;
        select.limit = self.limit;
        select.offset = self.offset;
        select
    }
}

impl<M: Model> Default for Select<M> {
    fn default() -> Self {
        Self::all()
    }
}
