use super::*;

use quern_core::ModelSignature;

/// A statement to drop a SQL table.
#[derive(Debug, Clone)]
pub struct DropTable {
    pub name: String,
}

impl Statement {
    pub fn drop_table(signature: &ModelSignature) -> Self {
        DropTable {
            name: signature.table_name(),
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
