use super::{JoinKind, Path};
use crate::Model;

use quern_core::stmt;
use std::marker::PhantomData;

/// A join against the table of model `T`.
///
/// The two paths name the related columns, one on each side, in any order.
/// Their types are not checked against each other.
pub struct Join<T> {
    pub(crate) untyped: stmt::Join,
    _p: PhantomData<fn() -> T>,
}

impl<T: Model> Join<T> {
    pub fn inner<L, LT, R, RT>(lhs: &Path<L, LT>, rhs: &Path<R, RT>) -> Self
    where
        L: Model,
        R: Model,
    {
        Self::new(JoinKind::Inner, lhs, rhs)
    }

    pub fn left<L, LT, R, RT>(lhs: &Path<L, LT>, rhs: &Path<R, RT>) -> Self
    where
        L: Model,
        R: Model,
    {
        Self::new(JoinKind::Left, lhs, rhs)
    }

    pub fn right<L, LT, R, RT>(lhs: &Path<L, LT>, rhs: &Path<R, RT>) -> Self
    where
        L: Model,
        R: Model,
    {
        Self::new(JoinKind::Right, lhs, rhs)
    }

    fn new<L, LT, R, RT>(kind: JoinKind, lhs: &Path<L, LT>, rhs: &Path<R, RT>) -> Self
    where
        L: Model,
        R: Model,
    {
        Self {
            untyped: stmt::Join::new(kind, T::NAME, lhs.column(), rhs.column()),
            _p: PhantomData,
        }
    }

    pub fn kind(&self) -> JoinKind {
        self.untyped.kind
    }
}

impl<T> std::fmt::Display for Join<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.untyped, f)
    }
}
