mod assignments;
pub use assignments::Assignments;

mod join;
pub use join::Join;

mod path;
pub use path::Path;

mod select;
pub use select::Select;

pub use quern_core::stmt::{
    convert_union, BinaryOp, ColumnRef, IntoOperand, JoinKind, Json, Operand, Predicate,
    Primitive, Type, TypeUnion, Value, ValueRecord,
};
