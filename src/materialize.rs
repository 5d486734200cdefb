//! Rebuilding a container of the same kind as the input.
//!
//! An eager operation producing a container asks the [`Kind`](kind::Kind) of its cursor
//! for an empty [`Accumulator`] ([`Materializer::for_type()`]), inserts every kept element into it,
//! and hands the [finalized](Accumulator::finalize) container back to the caller.
//!
//! | Kind | Output | Insert |
//! |---|---|---|
//! | [`kind::Sequence`] | [`Vec`] | appends the value, ignores the key |
//! | [`kind::Mapping`] | [`IndexMap`](indexmap::IndexMap) | sets the key |
//! | [`kind::SortedMapping`] | [`BTreeMap`](std::collections::BTreeMap) | sets the key |
//! | [`kind::SetLike`] | [`IndexSet`](indexmap::IndexSet) | adds the value |
//! | [`kind::SortedSet`] | [`BTreeSet`](std::collections::BTreeSet) | adds the value |
//! | [`kind::Inferred`] | [`Collection`] | decided by the first element's hint |
//!
//! An accumulator serves exactly one operation. If a callback fails midway,
//! the accumulator is dropped together with everything inserted so far.

mod accumulator;
mod collection;
pub mod kind;

pub use accumulator::*;
pub use collection::*;
pub use kind::Materializer;

use crate::{Cursor, Iterable, KindOf};

/// The container an eager operation returns for an input `I`, holding values of type `V`.
pub type Rebuilt<I, V> = <KindOf<I> as Materializer<<I as Iterable>::Key, V>>::Output;

/// Creates the empty accumulator matching the kind and hint of a cursor.
#[inline]
pub(crate) fn accumulator_for<C, V>(cursor: &C) -> <C::Kind as Materializer<C::Key, V>>::Accumulator
where
    C: Cursor,
    C::Kind: Materializer<C::Key, V>,
{
    <C::Kind as Materializer<C::Key, V>>::for_type(cursor.hint())
}
