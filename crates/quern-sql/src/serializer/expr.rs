use super::{Formatter, Params, ToSql};

use quern_core::stmt::{ColumnRef, Join, Predicate};

impl ToSql for &Predicate {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        // Predicates render their own markers; only their values are
        // collected here, in marker order.
        f.dst.push_str(&self.to_string());
        for value in self.values() {
            f.params.push(&value);
        }
    }
}

impl ToSql for &Join {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push_str(&self.to_string());
    }
}

impl ToSql for &ColumnRef {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push_str(&self.to_string());
    }
}
