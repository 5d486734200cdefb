//! Cursors for [`BTreeMap`].
//!
//! This module corresponds to [`std::collections::btree_map`].
//! Keys only need to be [`Ord`]: eager operations rebuild a `BTreeMap`.

use std::collections::{BTreeMap, btree_map};

use super::{Keyed, iterable_impl};
use crate::{ShapeTag, kind};

/// The cursor of a [`BTreeMap`] adapted by value.
pub type IntoCursor<K, V> = Keyed<btree_map::IntoIter<K, V>, kind::SortedMapping>;

/// The cursor of a [`&BTreeMap`](BTreeMap).
pub type Cursor<'a, K, V> = Keyed<btree_map::Iter<'a, K, V>, kind::SortedMapping>;

iterable_impl!(
    'a, BTreeMap<K, V>, ShapeTag::Mapping, Keyed::mapping,
    into: IntoCursor<K, V> => (K, V),
    iter: Cursor<'a, K, V> => (&'a K, &'a V),
);

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::prelude::*;

    #[test]
    fn walks_in_key_order() {
        let map = BTreeMap::from([(3, 'c'), (1, 'a'), (2, 'b')]);
        assert_eq!(crate::to_vec(&map), [&'a', &'b', &'c']);

        let upper = crate::map(map, |v, _| v.to_ascii_uppercase());
        assert_eq!(upper, BTreeMap::from([(1, 'A'), (2, 'B'), (3, 'C')]));
    }

    #[test]
    fn filter_keeps_keys() {
        let map = BTreeMap::from([("a", 1), ("b", 2), ("c", 3)]);
        let odd = crate::filter(map, |v, _| v % 2 == 1);
        assert_eq!(odd, BTreeMap::from([("a", 1), ("c", 3)]));
        assert_eq!(classify(&odd), ShapeTag::Mapping);
    }
}
