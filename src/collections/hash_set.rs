//! Cursors for [`HashSet`].
//!
//! This module corresponds to [`std::collections::hash_set`].

use std::collections::{HashSet, hash_set};

use super::{Members, iterable_impl};
use crate::{ShapeTag, kind};

/// The cursor of a [`HashSet`] adapted by value.
pub type IntoCursor<T> = Members<hash_set::IntoIter<T>, kind::SetLike>;

/// The cursor of a [`&HashSet`](HashSet).
pub type Cursor<'a, T> = Members<hash_set::Iter<'a, T>, kind::SetLike>;

iterable_impl!(
    'a, HashSet<T, S>, ShapeTag::SetLike, Members::new,
    into: IntoCursor<T> => (T, T),
    iter: Cursor<'a, T> => (&'a T, &'a T),
    T: Clone,
);

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::prelude::*;

    #[test]
    fn keys_are_the_values() {
        let set = HashSet::from([7, 8]);
        let mut cursor = (&set).into_cursor();
        while let Some(element) = cursor.pull() {
            assert_eq!(element.key, element.value);
        }
    }

    #[test]
    fn map_collapses_duplicates() {
        let set = HashSet::from([1, 2, 3, 4]);
        let parity = crate::map(set, |v, _| v % 2);
        assert_eq!(parity.len(), 2);
        assert!(parity.contains(&0) && parity.contains(&1));
    }
}
