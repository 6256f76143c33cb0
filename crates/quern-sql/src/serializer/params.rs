use super::{Formatter, ToSql};

use quern_core::stmt;

pub trait Params {
    fn push(&mut self, param: &stmt::Value) -> Placeholder;
}

/// Position (1-based) of a bound value.
///
/// Serialized as the neutral `?` marker; the serializer turns markers into
/// flavor-specific placeholders once the whole statement is rendered.
pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push('?');
    }
}
