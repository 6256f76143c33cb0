use super::*;

use quern_core::{Error, ModelSignature, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Value,
}

#[derive(Debug, Clone)]
pub struct Update {
    pub table: String,
    pub assignments: Vec<Assignment>,
    pub filter: Option<Predicate>,
}

impl Statement {
    /// Sets each `(column, value)` pair on rows matching `filter`.
    pub fn update(
        signature: &ModelSignature,
        assignments: Vec<Assignment>,
        filter: Option<Predicate>,
    ) -> Result<Self> {
        if assignments.is_empty() {
            return Err(Error::invalid_statement(format!(
                "update of {} has no assignments",
                signature.name
            )));
        }

        Ok(Update {
            table: signature.table_name(),
            assignments,
            filter,
        }
        .into())
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
