use super::ColumnRef;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
}

impl JoinKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
        }
    }
}

/// A join against `table` on `lhs = rhs`.
///
/// Joins carry no bound values. Column types are not checked against each
/// other; a mismatch surfaces when the database rejects the statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: String,
    pub on: (ColumnRef, ColumnRef),
}

impl Join {
    pub fn new(kind: JoinKind, target: &str, lhs: ColumnRef, rhs: ColumnRef) -> Join {
        Join {
            kind,
            table: target.to_lowercase(),
            on: (lhs, rhs),
        }
    }
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} JOIN \"{}\" ON {}={}",
            self.kind.as_str(),
            self.table,
            self.on.0,
            self.on.1
        )
    }
}
