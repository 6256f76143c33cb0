use super::{Primitive, Type, Value};
use crate::Result;

/// A comparison operand: the adapted storage value plus the runtime type it
/// was adapted from.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    pub ty: Type,
    pub value: Value,
}

impl Operand {
    pub fn new<T: Primitive>(value: &T) -> Result<Operand> {
        Ok(Operand {
            ty: value.operand_ty(),
            value: value.adapt()?,
        })
    }
}

/// Anything usable as the right-hand side of a field comparison.
pub trait IntoOperand {
    fn into_operand(self) -> Result<Operand>;
}

impl<T: Primitive> IntoOperand for T {
    fn into_operand(self) -> Result<Operand> {
        Operand::new(&self)
    }
}

impl IntoOperand for &str {
    fn into_operand(self) -> Result<Operand> {
        Ok(Operand {
            ty: Type::Text,
            value: Value::Text(self.to_string()),
        })
    }
}

impl IntoOperand for Operand {
    fn into_operand(self) -> Result<Operand> {
        Ok(self)
    }
}
