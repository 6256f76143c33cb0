use super::{BinaryOp, ColumnRef, IntoOperand, Predicate, Primitive};
use crate::{schema::Field, Model, Result};

use std::{fmt, marker::PhantomData};

/// A typed handle to field `T` of model `M`.
///
/// Comparison methods check operator support and operand types, and fail
/// with an operator error before any statement is built.
pub struct Path<M, T> {
    index: usize,
    field: Field,
    _p: PhantomData<fn() -> (M, T)>,
}

impl<M: Model, T> Path<M, T> {
    pub fn new(index: usize, field: Field) -> Self {
        Self {
            index,
            field,
            _p: PhantomData,
        }
    }

    /// Position of the field in the model.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn column(&self) -> ColumnRef {
        self.field.column()
    }

    pub fn eq(&self, rhs: impl IntoOperand) -> Result<Predicate> {
        self.field.compare(BinaryOp::Eq, rhs)
    }

    pub fn ne(&self, rhs: impl IntoOperand) -> Result<Predicate> {
        self.field.compare(BinaryOp::Ne, rhs)
    }

    pub fn lt(&self, rhs: impl IntoOperand) -> Result<Predicate> {
        self.field.compare(BinaryOp::Lt, rhs)
    }

    pub fn le(&self, rhs: impl IntoOperand) -> Result<Predicate> {
        self.field.compare(BinaryOp::Le, rhs)
    }

    pub fn gt(&self, rhs: impl IntoOperand) -> Result<Predicate> {
        self.field.compare(BinaryOp::Gt, rhs)
    }

    pub fn ge(&self, rhs: impl IntoOperand) -> Result<Predicate> {
        self.field.compare(BinaryOp::Ge, rhs)
    }

    pub fn in_list<I>(&self, rhs: I) -> Result<Predicate>
    where
        I: IntoIterator,
        I::Item: IntoOperand,
    {
        self.field.in_list(rhs)
    }

    pub fn is_null(&self) -> Result<Predicate> {
        self.field.is_null()
    }

    /// Reads this field from `record`.
    pub fn get(&self, record: &M) -> Result<T>
    where
        T: Primitive,
    {
        T::convert(record.dump_field(self.index)?)
    }
}

impl<M, T> Clone for Path<M, T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            field: self.field.clone(),
            _p: PhantomData,
        }
    }
}

impl<M, T> fmt::Debug for Path<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("index", &self.index)
            .field("field", &self.field)
            .finish()
    }
}
