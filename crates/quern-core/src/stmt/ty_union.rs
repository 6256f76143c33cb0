use super::Type;

use std::fmt;

/// A type that may hold one of several member types, and optionally nothing.
///
/// `TypeUnion` enforces the set invariant: inserting a type that is already
/// present is a no-op. A `Null` candidate is never stored as a member; it
/// flips the `nullable` flag instead.
#[derive(Debug, Clone, Default)]
pub struct TypeUnion {
    // Invariant: no duplicates, no `Type::Null`, no nested unions.
    types: Vec<Type>,
    nullable: bool,
}

impl TypeUnion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_types(types: impl IntoIterator<Item = Type>) -> Self {
        let mut union = Self::new();
        for ty in types {
            union.insert(ty);
        }
        union
    }

    /// Insert `ty` if it is not already present. Returns whether the union
    /// changed.
    pub fn insert(&mut self, ty: Type) -> bool {
        match ty {
            Type::Null => !std::mem::replace(&mut self.nullable, true),
            Type::Union(other) => {
                let mut changed = false;
                if other.nullable && !self.nullable {
                    self.nullable = true;
                    changed = true;
                }
                for ty in other.types {
                    changed |= self.insert(ty);
                }
                changed
            }
            ty if self.types.contains(&ty) => false,
            ty => {
                self.types.push(ty);
                true
            }
        }
    }

    /// Membership test. `Null` is a member when the union is nullable.
    pub fn is_contains_type(&self, ty: &Type) -> bool {
        match ty {
            Type::Null => self.nullable,
            _ => self.types.contains(ty),
        }
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn set_nullable(&mut self, nullable: bool) {
        self.nullable = nullable;
    }

    /// Member types in declaration order, without `Null`.
    pub fn iter(&self) -> impl Iterator<Item = &Type> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// The only member, when there is exactly one.
    pub fn single(&self) -> Option<&Type> {
        match &self.types[..] {
            [ty] => Some(ty),
            _ => None,
        }
    }
}

/// Set equality: member order is not significant.
impl PartialEq for TypeUnion {
    fn eq(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.types.len() == other.types.len()
            && self.types.iter().all(|t| other.types.contains(t))
    }
}

impl Eq for TypeUnion {}

impl fmt::Display for TypeUnion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ty) in self.types.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            fmt::Display::fmt(ty, f)?;
        }
        if self.nullable {
            if !self.types.is_empty() {
                f.write_str("|")?;
            }
            f.write_str("Null")?;
        }
        Ok(())
    }
}
