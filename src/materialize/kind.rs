//! Marker types naming the container family an eager operation rebuilds.
//!
//! A [`Cursor`](crate::Cursor) picks one as its [`Kind`](crate::Cursor::Kind).
//! The marker's [`Materializer`] implementation is the factory for the matching
//! [`Accumulator`], so the decision of *what to build* lives next to the adapter
//! that decided *what was received*.

use std::{
    collections::{BTreeMap, BTreeSet},
    hash::Hash,
};

use indexmap::{IndexMap, IndexSet};

use crate::{Accumulator, Collection, Inferring, ShapeTag};

/// A family of output containers.
pub trait Kind {
    /// The shape of the containers in this family.
    const SHAPE: ShapeTag;
}

/// Creates empty accumulators for a [`Kind`], given the key and value types.
pub trait Materializer<K, V>: Kind {
    /// The finalized container.
    type Output;

    /// The container in progress.
    type Accumulator: Accumulator<K, V, Output = Self::Output>;

    /// Creates an empty accumulator.
    ///
    /// `hint` is the materialization-type hint of the cursor being drained.
    /// Only [`Inferred`] makes use of it.
    fn for_type(hint: ShapeTag) -> Self::Accumulator;
}

/// Rebuilds into a [`Vec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sequence;

/// Rebuilds into an [`IndexMap`], keeping the order in which keys were first inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mapping;

/// Rebuilds into a [`BTreeMap`], for keys that are only [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortedMapping;

/// Rebuilds into an [`IndexSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SetLike;

/// Rebuilds into a [`BTreeSet`], for values that are only [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortedSet;

/// Rebuilds into a [`Collection`] whose variant is decided by the first inserted element.
///
/// The element's own hint wins; otherwise the cursor's hint is used.
/// A hint that does not name a container ([`ShapeTag::ExternalCursor`],
/// [`ShapeTag::GeneratorFactory`]) falls back to a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Inferred;

impl Kind for Sequence {
    const SHAPE: ShapeTag = ShapeTag::Sequence;
}

impl Kind for Mapping {
    const SHAPE: ShapeTag = ShapeTag::Mapping;
}

impl Kind for SortedMapping {
    const SHAPE: ShapeTag = ShapeTag::Mapping;
}

impl Kind for SetLike {
    const SHAPE: ShapeTag = ShapeTag::SetLike;
}

impl Kind for SortedSet {
    const SHAPE: ShapeTag = ShapeTag::SetLike;
}

impl Kind for Inferred {
    const SHAPE: ShapeTag = ShapeTag::ExternalCursor;
}

impl<K, V> Materializer<K, V> for Sequence {
    type Output = Vec<V>;
    type Accumulator = Vec<V>;

    #[inline]
    fn for_type(_hint: ShapeTag) -> Self::Accumulator {
        Vec::new()
    }
}

impl<K, V> Materializer<K, V> for Mapping
where
    K: Hash + Eq,
{
    type Output = IndexMap<K, V>;
    type Accumulator = IndexMap<K, V>;

    #[inline]
    fn for_type(_hint: ShapeTag) -> Self::Accumulator {
        IndexMap::new()
    }
}

impl<K, V> Materializer<K, V> for SortedMapping
where
    K: Ord,
{
    type Output = BTreeMap<K, V>;
    type Accumulator = BTreeMap<K, V>;

    #[inline]
    fn for_type(_hint: ShapeTag) -> Self::Accumulator {
        BTreeMap::new()
    }
}

impl<K, V> Materializer<K, V> for SetLike
where
    V: Hash + Eq,
{
    type Output = IndexSet<V>;
    type Accumulator = IndexSet<V>;

    #[inline]
    fn for_type(_hint: ShapeTag) -> Self::Accumulator {
        IndexSet::new()
    }
}

impl<K, V> Materializer<K, V> for SortedSet
where
    V: Ord,
{
    type Output = BTreeSet<V>;
    type Accumulator = BTreeSet<V>;

    #[inline]
    fn for_type(_hint: ShapeTag) -> Self::Accumulator {
        BTreeSet::new()
    }
}

impl<K, V> Materializer<K, V> for Inferred
where
    K: Hash + Eq,
    V: Hash + Eq,
{
    type Output = Collection<K, V>;
    type Accumulator = Inferring<K, V>;

    #[inline]
    fn for_type(hint: ShapeTag) -> Self::Accumulator {
        Inferring::new(hint)
    }
}
