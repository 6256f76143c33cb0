use super::*;

use quern_core::ModelSignature;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// `*`, every column of every joined table
    All,

    /// `"table".*`, only the columns of the queried table
    Table,
}

#[derive(Debug, Clone)]
pub struct Select {
    pub table: String,
    pub projection: Projection,
    pub joins: Vec<Join>,
    pub filter: Option<Predicate>,
    pub order_by: Option<ColumnRef>,
    pub desc: bool,
    pub limit: Option<u64>,
    pub offset: u64,
}

impl Select {
    pub fn new(signature: &ModelSignature) -> Select {
        Select {
            table: signature.table_name(),
            projection: Projection::All,
            joins: vec![],
            filter: None,
            order_by: None,
            desc: false,
            limit: None,
            offset: 0,
        }
    }
}

impl Statement {
    pub fn select(signature: &ModelSignature) -> Self {
        Select::new(signature).into()
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
