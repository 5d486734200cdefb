use std::fmt::Debug;

use crate::{Cursor, Element, Iterable, KindOf, ShapeTag, kind::Kind};

use super::Fuse;

/// A lazy [`Cursor`] that concatenates any number of inputs of the same type.
///
/// Inputs are adapted one at a time, only when the previous one has ended,
/// so a [`Generator`](crate::Generator) further down the list is not invoked early.
///
/// This `struct` is created by [`chain()`](crate::chain). See its documentation for more.
pub struct ChainAll<I>
where
    I: Iterable,
{
    pending: std::vec::IntoIter<I>,
    current: Option<Fuse<I::Cursor>>,
}

impl<I> ChainAll<I>
where
    I: Iterable,
{
    pub(crate) fn new(inputs: impl IntoIterator<Item = I>) -> Self {
        Self {
            pending: inputs.into_iter().collect::<Vec<_>>().into_iter(),
            current: None,
        }
    }
}

impl<I> Cursor for ChainAll<I>
where
    I: Iterable,
{
    type Key = I::Key;
    type Value = I::Value;
    type Kind = KindOf<I>;

    fn pull(&mut self) -> Option<Element<Self::Key, Self::Value>> {
        loop {
            if let Some(current) = &mut self.current
                && let Some(element) = current.pull()
            {
                return Some(element.or_hint(current.hint()));
            }

            // The current cursor is fused; it is only replaced, never pulled again.
            let next = self.pending.next()?;
            self.current = Some(Fuse::new(next.into_cursor()));
        }
    }

    #[inline]
    fn hint(&self) -> ShapeTag {
        <Self::Kind as Kind>::SHAPE
    }
}

impl<I> Debug for ChainAll<I>
where
    I: Iterable,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainAll")
            .field("pending", &self.pending.len())
            .finish()
    }
}
