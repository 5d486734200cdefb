//! [`Iterable`] implementations for the keyed and set collections of the standard library
//! and of [`indexmap`].
//!
//! - Maps are classified as [`ShapeTag::Mapping`] and adapted into a [`Keyed`] cursor.
//! - Sets are classified as [`ShapeTag::SetLike`] and adapted into a [`Members`] cursor,
//!   whose keys are the values themselves.
//! - [`VecDeque`](std::collections::VecDeque) is a sequence, adapted into a [`Positional`](crate::Positional).
//!
//! Each collection is iterable both by value and by reference.
//! Ordered collections are walked in their own order: insertion order for
//! [`IndexMap`](indexmap::IndexMap), key order for [`BTreeMap`](std::collections::BTreeMap),
//! and the (unspecified) table order for [`HashMap`](std::collections::HashMap).

pub mod btree_map;
pub mod btree_set;
pub mod hash_map;
pub mod hash_set;
pub mod index_map;
pub mod index_set;
pub mod vec_deque;

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    marker::PhantomData,
};

use crate::{Cursor, Element, ShapeTag, kind::Kind};

/// A cursor over `(key, value)` pairs.
///
/// `Kd` is the [`Kind`] eager operations rebuild into.
pub struct Keyed<It, Kd> {
    iter: It,
    hint: ShapeTag,
    _kind: PhantomData<fn() -> Kd>,
}

impl<It, Kd> Keyed<It, Kd> {
    #[inline]
    pub(crate) const fn new(iter: It, hint: ShapeTag) -> Self {
        Self {
            iter,
            hint,
            _kind: PhantomData,
        }
    }
}

impl<It, K, V, Kd> Cursor for Keyed<It, Kd>
where
    It: FusedIterator<Item = (K, V)>,
    Kd: Kind,
{
    type Key = K;
    type Value = V;
    type Kind = Kd;

    #[inline]
    fn pull(&mut self) -> Option<Element<K, V>> {
        self.iter.next().map(Element::from)
    }

    #[inline]
    fn hint(&self) -> ShapeTag {
        self.hint
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<It: Clone, Kd> Clone for Keyed<It, Kd> {
    fn clone(&self) -> Self {
        Self::new(self.iter.clone(), self.hint)
    }
}

impl<It: Debug, Kd> Debug for Keyed<It, Kd> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyed")
            .field("iter", &self.iter)
            .field("hint", &self.hint)
            .finish()
    }
}

/// A cursor over the members of a set. Each key is a clone of its value.
pub struct Members<It, Kd> {
    iter: It,
    _kind: PhantomData<fn() -> Kd>,
}

impl<It, Kd> Members<It, Kd> {
    #[inline]
    pub(crate) const fn new(iter: It) -> Self {
        Self {
            iter,
            _kind: PhantomData,
        }
    }
}

impl<It, Kd> Cursor for Members<It, Kd>
where
    It: FusedIterator<Item: Clone>,
    Kd: Kind,
{
    type Key = It::Item;
    type Value = It::Item;
    type Kind = Kd;

    #[inline]
    fn pull(&mut self) -> Option<Element<It::Item, It::Item>> {
        let value = self.iter.next()?;
        Some(Element::new(value.clone(), value))
    }

    #[inline]
    fn hint(&self) -> ShapeTag {
        ShapeTag::SetLike
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<It: Clone, Kd> Clone for Members<It, Kd> {
    fn clone(&self) -> Self {
        Self::new(self.iter.clone())
    }
}

impl<It: Debug, Kd> Debug for Members<It, Kd> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Members").field("iter", &self.iter).finish()
    }
}

impl<It, Kd> Keyed<It, Kd> {
    #[inline]
    pub(crate) const fn mapping(iter: It) -> Self {
        Self::new(iter, ShapeTag::Mapping)
    }
}

/// Implements [`Iterable`](crate::Iterable) for a collection by value and by reference.
macro_rules! iterable_impl {
    (
        $lt:lifetime, $coll:ident<$($generic:ident),*>, $shape:expr, $ctor:expr,
        into: $into:ty => ($into_key:ty, $into_value:ty),
        iter: $iter:ty => ($iter_key:ty, $iter_value:ty),
        $($gen_bound:ident: $bound:path),* $(,)?
    ) => {
        impl<$($generic),*> $crate::Iterable for $coll<$($generic),*>
        where
            $($gen_bound: $bound,)*
        {
            type Key = $into_key;
            type Value = $into_value;
            type Cursor = $into;

            #[inline]
            fn shape(&self) -> $crate::ShapeTag {
                $shape
            }

            #[inline]
            fn into_cursor(self) -> Self::Cursor {
                $ctor(self.into_iter())
            }
        }

        impl<$lt, $($generic),*> $crate::Iterable for &$lt $coll<$($generic),*>
        where
            $($gen_bound: $bound,)*
        {
            type Key = $iter_key;
            type Value = $iter_value;
            type Cursor = $iter;

            #[inline]
            fn shape(&self) -> $crate::ShapeTag {
                $shape
            }

            #[inline]
            fn into_cursor(self) -> Self::Cursor {
                $ctor(self.iter())
            }
        }
    };
}

pub(crate) use iterable_impl;
