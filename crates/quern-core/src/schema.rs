mod field;
pub use field::Field;

mod signature;
pub use signature::ModelSignature;
