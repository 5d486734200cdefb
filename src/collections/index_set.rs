//! Cursors for [`IndexSet`], the insertion-ordered set.

use indexmap::{IndexSet, set};

use super::{Members, iterable_impl};
use crate::{ShapeTag, kind};

/// The cursor of an [`IndexSet`] adapted by value.
pub type IntoCursor<T> = Members<set::IntoIter<T>, kind::SetLike>;

/// The cursor of a [`&IndexSet`](IndexSet).
pub type Cursor<'a, T> = Members<set::Iter<'a, T>, kind::SetLike>;

iterable_impl!(
    'a, IndexSet<T, S>, ShapeTag::SetLike, Members::new,
    into: IntoCursor<T> => (T, T),
    iter: Cursor<'a, T> => (&'a T, &'a T),
    T: Clone,
);

#[cfg(test)]
mod tests {
    use indexmap::IndexSet;

    #[test]
    fn fold_visits_members_in_order() {
        let set = IndexSet::from(["b", "a", "c"]);
        let joined = crate::fold(&set, String::new(), |acc, v, _| acc.push_str(v));
        assert_eq!(joined, "bac");
    }
}
