use crate::{
    schema::Field,
    stmt::{Value, ValueRecord},
    Result,
};

/// A table-backed record type. Implement with `#[derive(Model)]`.
pub trait Model: Sized + Send + Sync + 'static {
    /// Declared model name; the table name is its lower-cased form.
    const NAME: &'static str;

    /// Field names in declaration order.
    const FIELDS: &'static [&'static str];

    /// Field metadata in declaration order. The first field is the identity.
    fn schema() -> Vec<Field>;

    /// Load an instance of the model, populating fields using the given row.
    fn load(record: ValueRecord) -> Result<Self>;

    /// Storage value of the field at `index`.
    fn dump_field(&self, index: usize) -> Result<Value>;

    /// Stores the identity assigned by the database.
    fn set_id(&mut self, id: i64) -> Result<()>;

    /// The identity, or `None` for a record that was never inserted.
    fn id(&self) -> Result<Option<i64>> {
        Ok(self.dump_field(0)?.as_i64())
    }

    /// Storage values of every field.
    fn dump(&self) -> Result<Vec<Value>> {
        (0..Self::FIELDS.len())
            .map(|index| self.dump_field(index))
            .collect()
    }
}
