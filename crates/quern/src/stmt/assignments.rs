use super::{IntoOperand, Path, Value};
use crate::{Error, Model, Result};

use indexmap::IndexMap;
use quern_sql::stmt::Assignment;
use std::marker::PhantomData;

/// Column values for an UPDATE of model `M`.
///
/// Setting the same field twice keeps the last value.
pub struct Assignments<M> {
    values: IndexMap<&'static str, Value>,
    _p: PhantomData<fn() -> M>,
}

impl<M: Model> Assignments<M> {
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
            _p: PhantomData,
        }
    }

    /// Sets `path` to `value`, which must match the field's type.
    pub fn set<T>(mut self, path: &Path<M, T>, value: impl IntoOperand) -> Result<Self> {
        let field = path.field();
        let operand = value.into_operand()?;

        if !field.compare_type(&operand.ty) {
            return Err(Error::operator(
                field,
                format!(
                    "unable to assign {:?} of type {}",
                    operand.value, operand.ty
                ),
            ));
        }

        self.values.insert(field.name, operand.value);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn into_sql(self) -> Vec<Assignment> {
        self.values
            .into_iter()
            .map(|(column, value)| Assignment {
                column: column.to_lowercase(),
                value,
            })
            .collect()
    }
}

impl<M: Model> Default for Assignments<M> {
    fn default() -> Self {
        Self::new()
    }
}
