use crate::{
    stmt::{BinaryOp, ColumnRef, IntoOperand, Operand, Predicate, Primitive, Type},
    Error, Result,
};

use std::{fmt, hash};

/// Metadata for one model field.
///
/// A field is identified by its (model, name) pair; equality and hashing
/// ignore everything else.
#[derive(Debug, Clone)]
pub struct Field {
    /// Name of the owning model, as declared
    pub model: &'static str,

    /// Field name, which is also the column name
    pub name: &'static str,

    pub ty: Type,

    /// Adds a `UNIQUE` constraint to the column
    pub unique: bool,

    /// `=`, `!=`, `IN` and `IS NULL` are allowed
    pub eq: bool,

    /// `<`, `<=`, `>` and `>=` are allowed
    pub ordered: bool,
}

impl Field {
    pub fn new(model: &'static str, name: &'static str, ty: Type) -> Field {
        let ordered = ty.is_ordered();
        Field {
            model,
            name,
            ty,
            unique: false,
            eq: true,
            ordered,
        }
    }

    /// Builds the field for a Rust field of type `T`.
    pub fn of<T: Primitive>(model: &'static str, name: &'static str) -> Field {
        Field::new(model, name, T::ty())
    }

    pub fn set_unique(mut self, unique: bool) -> Field {
        self.unique = unique;
        self
    }

    /// Whether a value of runtime type `ty` can be compared with this field.
    pub fn compare_type(&self, ty: &Type) -> bool {
        self.ty.accepts(ty)
    }

    pub fn column(&self) -> ColumnRef {
        ColumnRef::new(self.model, self.name)
    }

    /// Builds `self <op> operand`.
    pub fn compare(&self, op: BinaryOp, operand: impl IntoOperand) -> Result<Predicate> {
        let allowed = if op.is_ordering() {
            self.ordered
        } else {
            self.eq
        };
        if !allowed {
            return Err(Error::operator(
                self,
                format!("`{op}` is not supported for {}", self.ty),
            ));
        }

        let operand = operand.into_operand()?;
        self.check_operand(&operand)?;
        Ok(Predicate::binary_op(op, self.column(), operand.value))
    }

    /// Builds `self IN (operands...)`. Every element is checked.
    pub fn in_list<I>(&self, operands: I) -> Result<Predicate>
    where
        I: IntoIterator,
        I::Item: IntoOperand,
    {
        if !self.eq {
            return Err(Error::operator(self, "`IN` is not supported"));
        }

        let mut values = vec![];
        for operand in operands {
            let operand = operand.into_operand()?;
            self.check_operand(&operand)?;
            values.push(operand.value);
        }

        Ok(Predicate::in_list(self.column(), values))
    }

    pub fn is_null(&self) -> Result<Predicate> {
        if !self.eq {
            return Err(Error::operator(self, "`IS NULL` is not supported"));
        }
        Ok(Predicate::is_null(self.column()))
    }

    fn check_operand(&self, operand: &Operand) -> Result<()> {
        if self.compare_type(&operand.ty) {
            Ok(())
        } else {
            Err(Error::operator(
                self,
                format!(
                    "unable to compare with {:?} of type {}",
                    operand.value, operand.ty
                ),
            ))
        }
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.model == other.model && self.name == other.name
    }
}

impl Eq for Field {}

impl hash::Hash for Field {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.model.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Field {}.{}: {}>", self.model, self.name, self.ty)
    }
}
