#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod expr;

mod flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

mod statement;
mod ty;

use crate::stmt::Statement;

use quern_core::Flavor;

/// Serialize a statement to a SQL string
///
/// Serialization runs in two phases. Statements and predicates render a
/// dialect-neutral skeleton where every bound value is a `?` marker, pushing
/// values to `params` in the same order. The markers are then renumbered left
/// to right into the flavor's placeholder syntax.
#[derive(Debug)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new(flavor: Flavor) -> Serializer {
        Serializer { flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut skeleton = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut skeleton,
            params,
        };

        stmt.to_sql(&mut fmt);

        self.paste_placeholders(&skeleton)
    }
}
