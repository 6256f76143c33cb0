mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod drop_table;
pub use drop_table::DropTable;

mod insert;
pub use insert::Insert;

mod select;
pub use select::{Projection, Select};

mod update;
pub use update::{Assignment, Update};

pub use quern_core::stmt::*;

#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    Delete(Delete),
    DropTable(DropTable),
    Insert(Insert),
    Select(Select),
    Update(Update),
}
