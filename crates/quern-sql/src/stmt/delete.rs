use super::*;

use quern_core::ModelSignature;

#[derive(Debug, Clone)]
pub struct Delete {
    pub table: String,
    pub filter: Option<Predicate>,
}

impl Statement {
    pub fn delete(signature: &ModelSignature, filter: Option<Predicate>) -> Self {
        Delete {
            table: signature.table_name(),
            filter,
        }
        .into()
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
