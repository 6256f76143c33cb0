pub mod db;
pub use db::{ConnectionConfig, Db, PoolConfig};

mod model;
pub use model::Model;

pub mod stmt;
pub use stmt::{Assignments, Join, Path, Select};

mod tracked;
pub use tracked::Tracked;

mod utils;
pub use utils::{contains, group_by, group_joined, is_null};

pub use quern_core::{bail, err, schema, Driver, Error, Result};

pub use quern_macros::{Enum, Model};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        stmt::{self, Path, Select},
        Error, Model, Result,
    };
    pub use quern_core::schema;
}
