mod codec;

mod column;
pub use column::ColumnRef;

mod convert_union;
pub use convert_union::convert_union;

mod join;
pub use join::{Join, JoinKind};

mod json;
pub use json::Json;

mod op_binary;
pub use op_binary::BinaryOp;

mod operand;
pub use operand::{IntoOperand, Operand};

mod predicate;
pub use predicate::{Comparison, Predicate};

mod primitive;
pub use primitive::Primitive;

mod primitive_chrono;

mod ty;
pub use ty::Type;

mod ty_union;
pub use ty_union::TypeUnion;

mod value;
pub use value::Value;

mod value_cmp;

mod value_record;
pub use value_record::ValueRecord;
