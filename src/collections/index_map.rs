//! Cursors for [`IndexMap`], the insertion-ordered mapping.

use indexmap::{IndexMap, map};

use super::{Keyed, iterable_impl};
use crate::{ShapeTag, kind};

/// The cursor of an [`IndexMap`] adapted by value.
pub type IntoCursor<K, V> = Keyed<map::IntoIter<K, V>, kind::Mapping>;

/// The cursor of a [`&IndexMap`](IndexMap).
pub type Cursor<'a, K, V> = Keyed<map::Iter<'a, K, V>, kind::Mapping>;

iterable_impl!(
    'a, IndexMap<K, V, S>, ShapeTag::Mapping, Keyed::mapping,
    into: IntoCursor<K, V> => (K, V),
    iter: Cursor<'a, K, V> => (&'a K, &'a V),
);

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use crate::prelude::*;

    #[test]
    fn keeps_insertion_order() {
        let map = IndexMap::from([("z", 1), ("a", 2), ("m", 3)]);
        let mut cursor = (&map).into_cursor();
        assert_eq!(cursor.hint(), ShapeTag::Mapping);

        let mut keys = vec![];
        while let Some(element) = cursor.pull() {
            keys.push(*element.key);
        }
        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(cursor.pull(), None);
    }
}
