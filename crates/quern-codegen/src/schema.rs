mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod model;
pub(crate) use model::Model;

mod primitive_enum;
pub(crate) use primitive_enum::PrimitiveEnum;
