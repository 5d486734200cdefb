use std::iter::FusedIterator;

use crate::{Cursor, Element, Fuse};

/// An [`Iterator`] over the elements of a [`Cursor`].
///
/// This `struct` is created by [`Cursor::elements()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Elements<C> {
    cursor: Fuse<C>,
}

impl<C> Elements<C>
where
    C: Cursor,
{
    pub(crate) fn new(cursor: C) -> Self {
        Self {
            cursor: Fuse::new(cursor),
        }
    }
}

impl<C> Iterator for Elements<C>
where
    C: Cursor,
{
    type Item = Element<C::Key, C::Value>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.pull()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<C> FusedIterator for Elements<C> where C: Cursor {}
