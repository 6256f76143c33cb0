use crate::{stmt::Value, Model, Result};

use indexmap::IndexSet;
use std::ops::{Deref, DerefMut};

/// A record that remembers its field values from when it was wrapped, so a
/// save only writes the fields that changed since.
///
/// Writes go through `DerefMut`; changes are found by comparing each field's
/// storage value with the snapshot, not by recording writes. Assigning a
/// field the value it already had is therefore not a change, and a float
/// field holding `NaN` never equals its snapshot, so it always reads as
/// changed.
#[derive(Debug)]
pub struct Tracked<M> {
    record: M,
    snapshot: Vec<Value>,
}

impl<M: Model> Tracked<M> {
    pub fn new(record: M) -> Result<Self> {
        let snapshot = record.dump()?;
        Ok(Self { record, snapshot })
    }

    /// Names of the fields whose value differs from the snapshot, in
    /// declaration order.
    pub fn changed_attributes(&self) -> Result<IndexSet<&'static str>> {
        let mut changed = IndexSet::new();

        for (index, name) in M::FIELDS.iter().enumerate() {
            if self.record.dump_field(index)? != self.snapshot[index] {
                changed.insert(*name);
            }
        }

        Ok(changed)
    }

    /// Takes a new snapshot, clearing the change set.
    pub(crate) fn reset(&mut self) -> Result<()> {
        self.snapshot = self.record.dump()?;
        Ok(())
    }

    pub fn into_inner(self) -> M {
        self.record
    }
}

impl<M> Deref for Tracked<M> {
    type Target = M;

    fn deref(&self) -> &M {
        &self.record
    }
}

impl<M> DerefMut for Tracked<M> {
    fn deref_mut(&mut self) -> &mut M {
        &mut self.record
    }
}
