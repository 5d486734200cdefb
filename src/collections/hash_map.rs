//! Cursors for [`HashMap`].
//!
//! This module corresponds to [`std::collections::hash_map`].
//! Eager operations over a `HashMap` rebuild an [`IndexMap`](indexmap::IndexMap),
//! so the table order observed while walking is kept in the output.

use std::collections::{HashMap, hash_map};

use super::{Keyed, iterable_impl};
use crate::{ShapeTag, kind};

/// The cursor of a [`HashMap`] adapted by value.
pub type IntoCursor<K, V> = Keyed<hash_map::IntoIter<K, V>, kind::Mapping>;

/// The cursor of a [`&HashMap`](HashMap).
pub type Cursor<'a, K, V> = Keyed<hash_map::Iter<'a, K, V>, kind::Mapping>;

iterable_impl!(
    'a, HashMap<K, V, S>, ShapeTag::Mapping, Keyed::mapping,
    into: IntoCursor<K, V> => (K, V),
    iter: Cursor<'a, K, V> => (&'a K, &'a V),
);
