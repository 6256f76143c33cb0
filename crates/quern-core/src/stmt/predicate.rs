use super::{BinaryOp, ColumnRef, Value};

use std::fmt;

/// A filter condition over model columns.
///
/// Rendering (`Display`) never inlines values: every bound value shows up as
/// a `?` marker, and [`Predicate::values`] yields the values in the same
/// left-to-right order as the markers.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Equal(Comparison),
    NotEqual(Comparison),
    LessThan(Comparison),
    LessOrEqual(Comparison),
    GreaterThan(Comparison),
    GreaterOrEqual(Comparison),
    ContainedIn {
        column: ColumnRef,
        values: Vec<Value>,
    },
    IsNull(ColumnRef),
    And(Box<Predicate>, Box<Predicate>),
    Or(Box<Predicate>, Box<Predicate>),
}

/// A column compared against a single bound value.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub column: ColumnRef,
    pub value: Value,
}

impl Predicate {
    pub fn binary_op(op: BinaryOp, column: ColumnRef, value: Value) -> Predicate {
        let cmp = Comparison { column, value };
        match op {
            BinaryOp::Eq => Predicate::Equal(cmp),
            BinaryOp::Ne => Predicate::NotEqual(cmp),
            BinaryOp::Lt => Predicate::LessThan(cmp),
            BinaryOp::Le => Predicate::LessOrEqual(cmp),
            BinaryOp::Gt => Predicate::GreaterThan(cmp),
            BinaryOp::Ge => Predicate::GreaterOrEqual(cmp),
        }
    }

    pub fn in_list(column: ColumnRef, values: Vec<Value>) -> Predicate {
        Predicate::ContainedIn { column, values }
    }

    pub fn is_null(column: ColumnRef) -> Predicate {
        Predicate::IsNull(column)
    }

    pub fn and(self, rhs: Predicate) -> Predicate {
        Predicate::And(Box::new(self), Box::new(rhs))
    }

    pub fn or(self, rhs: Predicate) -> Predicate {
        Predicate::Or(Box::new(self), Box::new(rhs))
    }

    /// The comparison operator and operand, for the six scalar comparisons.
    pub fn as_comparison(&self) -> Option<(BinaryOp, &Comparison)> {
        match self {
            Predicate::Equal(cmp) => Some((BinaryOp::Eq, cmp)),
            Predicate::NotEqual(cmp) => Some((BinaryOp::Ne, cmp)),
            Predicate::LessThan(cmp) => Some((BinaryOp::Lt, cmp)),
            Predicate::LessOrEqual(cmp) => Some((BinaryOp::Le, cmp)),
            Predicate::GreaterThan(cmp) => Some((BinaryOp::Gt, cmp)),
            Predicate::GreaterOrEqual(cmp) => Some((BinaryOp::Ge, cmp)),
            _ => None,
        }
    }

    /// Bound values in the order their markers appear in the rendered text.
    pub fn values(&self) -> Vec<Value> {
        let mut values = vec![];
        self.collect_values(&mut values);
        values
    }

    pub fn collect_values(&self, dst: &mut Vec<Value>) {
        match self {
            Predicate::ContainedIn { values, .. } => dst.extend(values.iter().cloned()),
            Predicate::IsNull(_) => {}
            Predicate::And(lhs, rhs) | Predicate::Or(lhs, rhs) => {
                lhs.collect_values(dst);
                rhs.collect_values(dst);
            }
            _ => {
                if let Some((_, cmp)) = self.as_comparison() {
                    dst.push(cmp.value.clone());
                }
            }
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::ContainedIn { values, .. } if values.is_empty() => f.write_str("1 = 0"),
            Predicate::ContainedIn { column, values } => {
                write!(f, "{column} IN (")?;
                for i in 0..values.len() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str("?")?;
                }
                f.write_str(")")
            }
            Predicate::IsNull(column) => write!(f, "{column} IS NULL"),
            Predicate::And(lhs, rhs) => write!(f, "({lhs} AND {rhs})"),
            Predicate::Or(lhs, rhs) => write!(f, "({lhs} OR {rhs})"),
            _ => match self.as_comparison() {
                Some((op, cmp)) => write!(f, "{} {op} ?", cmp.column),
                None => Ok(()),
            },
        }
    }
}
