use super::{Comma, Formatter, Ident, Params, ToSql};

use crate::stmt::{self, Projection};

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            stmt::Statement::CreateTable(stmt) => stmt.to_sql(f),
            stmt::Statement::Delete(stmt) => stmt.to_sql(f),
            stmt::Statement::DropTable(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Select(stmt) => stmt.to_sql(f),
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::ColumnDef {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let ty = f.serializer.column_type(&self.ty);
        let unique = if self.unique { " UNIQUE" } else { "" };

        fmt!(f, &self.name, " ", ty, unique);
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let identity = f.serializer.identity_column();
        let sep = if self.columns.is_empty() { "" } else { ", " };

        fmt!(
            f,
            "CREATE TABLE IF NOT EXISTS ",
            Ident(&self.name),
            " (",
            identity,
            sep,
            Comma(&self.columns),
            ")",
        );
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "DROP TABLE ", Ident(&self.name));
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "INSERT INTO ", Ident(&self.table));

        if self.columns.is_empty() {
            fmt!(f, " DEFAULT VALUES");
        } else {
            let values: Vec<_> = self
                .values
                .iter()
                .map(|value| f.params.push(value))
                .collect();

            fmt!(f, " (", Comma(&self.columns), ") VALUES (", Comma(values), ")");
        }

        if f.serializer.is_postgresql() {
            fmt!(f, " RETURNING id");
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "SELECT ");
        match self.projection {
            Projection::All => fmt!(f, "*"),
            Projection::Table => fmt!(f, Ident(&self.table), ".*"),
        }
        fmt!(f, " FROM ", Ident(&self.table));

        for join in &self.joins {
            fmt!(f, " ", join);
        }

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE ", filter);
        }

        if let Some(order_by) = &self.order_by {
            // A bare column is ambiguous once other tables are joined in.
            if self.joins.is_empty() {
                fmt!(f, " ORDER BY ", &order_by.column);
            } else {
                fmt!(f, " ORDER BY ", order_by);
            }
            if self.desc {
                fmt!(f, " DESC");
            }
        }

        match (self.limit, self.offset) {
            (Some(limit), 0) => fmt!(f, " LIMIT ", limit),
            (Some(limit), offset) => fmt!(f, " LIMIT ", limit, " OFFSET ", offset),
            (None, 0) => {}
            // SQLite only accepts OFFSET after a LIMIT clause.
            (None, offset) if f.serializer.is_sqlite() => {
                fmt!(f, " LIMIT -1 OFFSET ", offset)
            }
            (None, offset) => fmt!(f, " OFFSET ", offset),
        }
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(&self.value);
        fmt!(f, &self.column, "=", placeholder);
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "UPDATE ", Ident(&self.table), " SET ", Comma(&self.assignments));

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE ", filter);
        }
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "DELETE FROM ", Ident(&self.table));

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE ", filter);
        }
    }
}
