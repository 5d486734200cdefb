use std::fmt::Debug;

use crate::{Cursor, Element, ShapeTag};

use super::Fuse;

/// A lazy [`Cursor`] that calls a closure on the value of every element it pulls.
///
/// Keys and hints are forwarded unchanged.
///
/// This `struct` is created by [`Cursor::map()`] and [`imap()`](crate::imap).
/// See their documentation for more.
#[derive(Clone)]
pub struct Map<C, F> {
    cursor: Fuse<C>,
    f: F,
}

impl<C, F> Map<C, F>
where
    C: Cursor,
{
    pub(crate) fn new(cursor: C, f: F) -> Self {
        Self {
            cursor: Fuse::new(cursor),
            f,
        }
    }
}

impl<C, F, U> Cursor for Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Value, &C::Key) -> U,
{
    type Key = C::Key;
    type Value = U;
    type Kind = C::Kind;

    #[inline]
    fn pull(&mut self) -> Option<Element<Self::Key, Self::Value>> {
        let element = self.cursor.pull()?;
        Some(element.map_value(&mut self.f))
    }

    #[inline]
    fn hint(&self) -> ShapeTag {
        self.cursor.hint()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<C: Debug, F> Debug for Map<C, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("cursor", &self.cursor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::prelude::*;
    use crate::test_utils::Unfused;

    #[test]
    fn keeps_keys() {
        let scores = BTreeMap::from([("a", 1), ("b", 2)]);
        let mut cursor = scores.into_cursor().map(|v, k| format!("{k}{v}"));

        assert_eq!(
            cursor.pull().map(Element::into_parts),
            Some(("a1".to_owned(), "a"))
        );
        assert_eq!(
            cursor.pull().map(Element::into_parts),
            Some(("b2".to_owned(), "b"))
        );
        assert_eq!(cursor.pull(), None);
        assert_eq!(cursor.hint(), ShapeTag::Mapping);
    }

    #[test]
    fn exhaustion_is_idempotent() {
        let mut calls = 0;
        let mut cursor = Unfused::new([1, 2]).map(|v, _| {
            calls += 1;
            v
        });

        while cursor.pull().is_some() {}
        assert_eq!(cursor.pull(), None);
        assert_eq!(cursor.pull(), None);
        drop(cursor);
        assert_eq!(calls, 2);
    }
}
