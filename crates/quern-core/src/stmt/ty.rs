use super::TypeUnion;

use std::fmt;

/// Semantic type of a model field or operand.
///
/// All Rust integer widths collapse into `Integer` and both float widths into
/// `Float`; the codec is what tells them apart when loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Bool,
    Integer,
    Float,
    Text,
    Date,
    Time,
    DateTime,

    /// A field-less enumeration stored by discriminant
    Enum(&'static str),

    /// Any serde value stored through the serialized fallback
    Serialized(&'static str),

    /// One of several types, possibly nullable
    Union(TypeUnion),

    /// The type of an absent value (`None`)
    Null,
}

impl Type {
    /// Shorthand for a union over `types`.
    pub fn union(types: impl IntoIterator<Item = Type>) -> Type {
        Type::Union(TypeUnion::from_types(types))
    }

    /// Whether `<`, `<=`, `>` and `>=` are meaningful for this type.
    pub fn is_ordered(&self) -> bool {
        match self {
            Type::Integer | Type::Float | Type::Date | Type::Time | Type::DateTime => true,
            Type::Union(union) => union.iter().any(Type::is_ordered),
            _ => false,
        }
    }

    /// Whether a value of type `other` may be compared with or stored in a
    /// field of this type.
    pub fn accepts(&self, other: &Type) -> bool {
        match self {
            Type::Union(union) => match other {
                Type::Union(other) => other.iter().all(|ty| union.is_contains_type(ty)),
                _ => union.is_contains_type(other),
            },
            _ => self == other,
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Type::Union(union) => union.is_nullable(),
            Type::Null => true,
            _ => false,
        }
    }

    /// Wraps `self` into a nullable union, merging with an existing union.
    pub fn nullable(self) -> Type {
        let mut union = match self {
            Type::Union(union) => union,
            Type::Null => TypeUnion::new(),
            ty => TypeUnion::from_types([ty]),
        };
        union.set_nullable(true);
        Type::Union(union)
    }

    pub fn is_integer(&self) -> bool {
        match self {
            Type::Integer => true,
            Type::Union(union) => union.is_contains_type(&Type::Integer),
            _ => false,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => f.write_str("Bool"),
            Type::Integer => f.write_str("Integer"),
            Type::Float => f.write_str("Float"),
            Type::Text => f.write_str("Text"),
            Type::Date => f.write_str("Date"),
            Type::Time => f.write_str("Time"),
            Type::DateTime => f.write_str("DateTime"),
            Type::Enum(name) | Type::Serialized(name) => f.write_str(name),
            Type::Union(union) => fmt::Display::fmt(union, f),
            Type::Null => f.write_str("Null"),
        }
    }
}
