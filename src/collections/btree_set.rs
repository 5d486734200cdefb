//! Cursors for [`BTreeSet`].
//!
//! This module corresponds to [`std::collections::btree_set`].

use std::collections::{BTreeSet, btree_set};

use super::{Members, iterable_impl};
use crate::{ShapeTag, kind};

/// The cursor of a [`BTreeSet`] adapted by value.
pub type IntoCursor<T> = Members<btree_set::IntoIter<T>, kind::SortedSet>;

/// The cursor of a [`&BTreeSet`](BTreeSet).
pub type Cursor<'a, T> = Members<btree_set::Iter<'a, T>, kind::SortedSet>;

iterable_impl!(
    'a, BTreeSet<T>, ShapeTag::SetLike, Members::new,
    into: IntoCursor<T> => (T, T),
    iter: Cursor<'a, T> => (&'a T, &'a T),
    T: Clone,
);

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    #[test]
    fn filter_rebuilds_a_set() {
        let set = BTreeSet::from([5, 1, 4, 2]);
        let even = crate::filter(&set, |v, _| *v % 2 == 0);
        assert_eq!(even, BTreeSet::from([&2, &4]));
    }
}
