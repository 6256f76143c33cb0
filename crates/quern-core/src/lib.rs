pub mod driver;
pub use driver::{Driver, Flavor};

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::ModelSignature;

pub mod stmt;

/// A Result type alias that uses Quern's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
