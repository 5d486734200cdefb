use std::{
    collections::{BTreeMap, BTreeSet},
    hash::{BuildHasher, Hash},
};

use indexmap::{IndexMap, IndexSet};

use crate::ShapeTag;

/// An output container in progress.
///
/// It is created empty by a [`Materializer`](crate::Materializer), receives
/// every kept element through [`insert()`](Accumulator::insert), and is handed to the caller
/// by [`finalize()`](Accumulator::finalize). `insert()` is never called after `finalize()`,
/// which consumes the accumulator.
pub trait Accumulator<K, V> {
    /// The finalized container.
    type Output;

    /// Inserts an element the way this container kind does: append, key-set or add.
    ///
    /// `hint` is the element's own materialization hint, if any.
    fn insert(&mut self, value: V, key: K, hint: Option<ShapeTag>);

    /// Returns the finished container.
    fn finalize(self) -> Self::Output;
}

impl<K, V> Accumulator<K, V> for Vec<V> {
    type Output = Self;

    #[inline]
    fn insert(&mut self, value: V, _key: K, _hint: Option<ShapeTag>) {
        // Positions are implied by the pull order.
        self.push(value);
    }

    #[inline]
    fn finalize(self) -> Self::Output {
        self
    }
}

impl<K, V, S> Accumulator<K, V> for IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Output = Self;

    #[inline]
    fn insert(&mut self, value: V, key: K, _hint: Option<ShapeTag>) {
        IndexMap::insert(self, key, value);
    }

    #[inline]
    fn finalize(self) -> Self::Output {
        self
    }
}

impl<K, V> Accumulator<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    type Output = Self;

    #[inline]
    fn insert(&mut self, value: V, key: K, _hint: Option<ShapeTag>) {
        BTreeMap::insert(self, key, value);
    }

    #[inline]
    fn finalize(self) -> Self::Output {
        self
    }
}

impl<K, V, S> Accumulator<K, V> for IndexSet<V, S>
where
    V: Hash + Eq,
    S: BuildHasher,
{
    type Output = Self;

    #[inline]
    fn insert(&mut self, value: V, _key: K, _hint: Option<ShapeTag>) {
        IndexSet::insert(self, value);
    }

    #[inline]
    fn finalize(self) -> Self::Output {
        self
    }
}

impl<K, V> Accumulator<K, V> for BTreeSet<V>
where
    V: Ord,
{
    type Output = Self;

    #[inline]
    fn insert(&mut self, value: V, _key: K, _hint: Option<ShapeTag>) {
        BTreeSet::insert(self, value);
    }

    #[inline]
    fn finalize(self) -> Self::Output {
        self
    }
}
