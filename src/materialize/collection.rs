use std::{
    fmt::{self, Debug},
    hash::Hash,
};

use indexmap::{IndexMap, IndexSet};

use crate::{Accumulator, ShapeTag};

/// A container whose kind was only known at run time.
///
/// This is the output of eager operations over cursors of the
/// [`kind::Inferred`](crate::kind::Inferred) kind.
#[derive(Clone)]
pub enum Collection<K, V> {
    /// Values in pull order.
    Sequence(Vec<V>),
    /// Key -> value, in the order keys were first inserted.
    Mapping(IndexMap<K, V>),
    /// Distinct values, in the order they were first inserted.
    Set(IndexSet<V>),
}

impl<K, V> Collection<K, V> {
    /// Creates an empty container for a shape.
    ///
    /// Shapes that do not name a container build a sequence.
    #[inline]
    pub fn for_shape(shape: ShapeTag) -> Self {
        match shape {
            ShapeTag::Mapping => Self::Mapping(IndexMap::new()),
            ShapeTag::SetLike => Self::Set(IndexSet::new()),
            ShapeTag::Sequence | ShapeTag::ExternalCursor | ShapeTag::GeneratorFactory => {
                Self::Sequence(Vec::new())
            }
        }
    }

    /// The shape of this container.
    #[inline]
    pub const fn shape(&self) -> ShapeTag {
        match self {
            Self::Sequence(_) => ShapeTag::Sequence,
            Self::Mapping(_) => ShapeTag::Mapping,
            Self::Set(_) => ShapeTag::SetLike,
        }
    }

    /// The number of values held.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(seq) => seq.len(),
            Self::Mapping(map) => map.len(),
            Self::Set(set) => set.len(),
        }
    }

    /// Whether no value is held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the sequence, if this is one.
    #[inline]
    pub fn into_sequence(self) -> Option<Vec<V>> {
        match self {
            Self::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Returns the mapping, if this is one.
    #[inline]
    pub fn into_mapping(self) -> Option<IndexMap<K, V>> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the set, if this is one.
    #[inline]
    pub fn into_set(self) -> Option<IndexSet<V>> {
        match self {
            Self::Set(set) => Some(set),
            _ => None,
        }
    }
}

impl<K, V> Collection<K, V>
where
    K: Hash + Eq,
    V: Hash + Eq,
{
    fn insert(&mut self, value: V, key: K) {
        match self {
            Self::Sequence(seq) => seq.push(value),
            Self::Mapping(map) => {
                map.insert(key, value);
            }
            Self::Set(set) => {
                set.insert(value);
            }
        }
    }
}

impl<K: Debug, V: Debug> Debug for Collection<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(seq) => f.debug_tuple("Sequence").field(seq).finish(),
            Self::Mapping(map) => f.debug_tuple("Mapping").field(map).finish(),
            Self::Set(set) => f.debug_tuple("Set").field(set).finish(),
        }
    }
}

impl<K, V> PartialEq for Collection<K, V>
where
    K: Hash + Eq,
    V: PartialEq + Hash + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Sequence(a), Self::Sequence(b)) => a == b,
            (Self::Mapping(a), Self::Mapping(b)) => a == b,
            (Self::Set(a), Self::Set(b)) => a == b,
            _ => false,
        }
    }
}

impl<K, V> Eq for Collection<K, V>
where
    K: Hash + Eq,
    V: Hash + Eq,
{
}

/// The accumulator of [`kind::Inferred`](crate::kind::Inferred).
///
/// The container is created on the first insertion, from that element's hint
/// or, lacking one, from the hint of the cursor being drained.
/// Finalizing without any insertion yields an empty container of the cursor's hint.
pub struct Inferring<K, V> {
    collection: Option<Collection<K, V>>,
    fallback: ShapeTag,
}

impl<K, V> Inferring<K, V> {
    /// Creates an undecided accumulator.
    #[inline]
    pub const fn new(fallback: ShapeTag) -> Self {
        Self {
            collection: None,
            fallback,
        }
    }
}

impl<K, V> Accumulator<K, V> for Inferring<K, V>
where
    K: Hash + Eq,
    V: Hash + Eq,
{
    type Output = Collection<K, V>;

    fn insert(&mut self, value: V, key: K, hint: Option<ShapeTag>) {
        let fallback = self.fallback;
        self.collection
            .get_or_insert_with(|| Collection::for_shape(hint.unwrap_or(fallback)))
            .insert(value, key);
    }

    #[inline]
    fn finalize(self) -> Self::Output {
        match self.collection {
            Some(collection) => collection,
            None => Collection::for_shape(self.fallback),
        }
    }
}

impl<K: Debug, V: Debug> Debug for Inferring<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inferring")
            .field("collection", &self.collection)
            .field("fallback", &self.fallback)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_hint_decides() {
        let mut acc = Inferring::new(ShapeTag::Sequence);
        acc.insert(1, "a", Some(ShapeTag::Mapping));
        acc.insert(2, "b", Some(ShapeTag::Sequence));
        acc.insert(3, "a", None);

        let map = acc.finalize().into_mapping().unwrap();
        assert_eq!(map.into_iter().collect::<Vec<_>>(), [("a", 3), ("b", 2)]);
    }

    #[test]
    fn fallback_without_hint() {
        let mut acc = Inferring::new(ShapeTag::SetLike);
        for value in [4, 4, 5] {
            acc.insert(value, value, None);
        }
        assert_eq!(acc.finalize().shape(), ShapeTag::SetLike);
    }

    #[test]
    fn empty_uses_fallback() {
        let acc = Inferring::<usize, i32>::new(ShapeTag::ExternalCursor);
        assert_eq!(acc.finalize(), Collection::Sequence(vec![]));

        let acc = Inferring::<usize, i32>::new(ShapeTag::Mapping);
        assert!(acc.finalize().is_empty());
    }

    #[test]
    fn for_shape_is_exhaustive() {
        for tag in ShapeTag::ALL {
            let collection = Collection::<u8, u8>::for_shape(tag);
            let expected = match tag {
                ShapeTag::Mapping => ShapeTag::Mapping,
                ShapeTag::SetLike => ShapeTag::SetLike,
                _ => ShapeTag::Sequence,
            };
            assert_eq!(collection.shape(), expected);
        }
    }
}
