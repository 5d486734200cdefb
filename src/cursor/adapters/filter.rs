use std::fmt::Debug;

use crate::{Cursor, Element, ShapeTag};

use super::Fuse;

/// A lazy [`Cursor`] that only yields the elements satisfying a predicate.
///
/// Every pull advances the underlying cursor until a match is found or it ends.
/// No element is pulled ahead of the one being returned.
///
/// This `struct` is created by [`Cursor::filter()`] and [`ifilter()`](crate::ifilter).
/// See their documentation for more.
#[derive(Clone)]
pub struct Filter<C, P> {
    cursor: Fuse<C>,
    pred: P,
}

impl<C, P> Filter<C, P>
where
    C: Cursor,
{
    pub(crate) fn new(cursor: C, pred: P) -> Self {
        Self {
            cursor: Fuse::new(cursor),
            pred,
        }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Value, &C::Key) -> bool,
{
    type Key = C::Key;
    type Value = C::Value;
    type Kind = C::Kind;

    fn pull(&mut self) -> Option<Element<Self::Key, Self::Value>> {
        while let Some(element) = self.cursor.pull() {
            if (self.pred)(&element.value, &element.key) {
                return Some(element);
            }
        }
        None
    }

    #[inline]
    fn hint(&self) -> ShapeTag {
        self.cursor.hint()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.cursor.size_hint();
        (0, upper)
    }
}

impl<C: Debug, P> Debug for Filter<C, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("cursor", &self.cursor)
            .finish()
    }
}
