use crate::{
    stmt::{IntoOperand, Path, Predicate, Primitive},
    Error, Model, Result,
};

use indexmap::IndexMap;
use std::hash::Hash;

/// Groups `records` by the value of `path`, keeping groups in first-seen
/// order.
pub fn group_by<M, T>(
    path: &Path<M, T>,
    records: impl IntoIterator<Item = M>,
) -> Result<IndexMap<T, Vec<M>>>
where
    M: Model,
    T: Primitive + Hash + Eq,
{
    let mut groups: IndexMap<T, Vec<M>> = IndexMap::new();

    for record in records {
        let key = path.get(&record)?;
        groups.entry(key).or_default().push(record);
    }

    Ok(groups)
}

/// Groups joined pairs, as returned by
/// [`Db::fetchall_joined`](crate::Db::fetchall_joined), by a field of either
/// side.
///
/// The side is picked by the model `path` belongs to. Pairs where that side
/// is missing fall under the `None` key.
pub fn group_joined<M, B, K, T>(
    path: &Path<K, T>,
    pairs: impl IntoIterator<Item = (Option<M>, Option<B>)>,
) -> Result<IndexMap<Option<T>, Vec<(Option<M>, Option<B>)>>>
where
    M: Model,
    B: Model,
    K: Model,
    T: Primitive + Hash + Eq,
{
    let lhs = K::NAME == M::NAME;
    if !lhs && K::NAME != B::NAME {
        return Err(Error::operator(
            path.field(),
            format!("field is not part of `{}` or `{}`", M::NAME, B::NAME),
        ));
    }

    let mut groups: IndexMap<Option<T>, Vec<(Option<M>, Option<B>)>> = IndexMap::new();

    for pair in pairs {
        let value = if lhs {
            pair.0.as_ref().map(|record| record.dump_field(path.index()))
        } else {
            pair.1.as_ref().map(|record| record.dump_field(path.index()))
        };

        let key = match value.transpose()? {
            Some(value) => Option::<T>::convert(value)?,
            None => None,
        };
        groups.entry(key).or_default().push(pair);
    }

    Ok(groups)
}

/// `path IN (values...)`
pub fn contains<M, T, I>(path: &Path<M, T>, values: I) -> Result<Predicate>
where
    M: Model,
    I: IntoIterator,
    I::Item: IntoOperand,
{
    path.in_list(values)
}

/// `path IS NULL`
pub fn is_null<M: Model, T>(path: &Path<M, T>) -> Result<Predicate> {
    path.is_null()
}
