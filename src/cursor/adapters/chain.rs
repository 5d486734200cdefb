use crate::{Cursor, Element, ShapeTag};

use super::Fuse;

/// A lazy [`Cursor`] that yields every element of the first cursor, then every element of the second.
///
/// Elements without a hint are tagged with the hint of the cursor they came from.
/// The [`Kind`](Cursor::Kind) is the one of the first cursor.
///
/// This `struct` is created by [`Cursor::chain()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: Fuse<A>,
    second: Fuse<B>,
}

impl<A, B> Chain<A, B>
where
    A: Cursor,
    B: Cursor,
{
    pub(crate) fn new(first: A, second: B) -> Self {
        Self {
            first: Fuse::new(first),
            second: Fuse::new(second),
        }
    }
}

impl<A, B> Cursor for Chain<A, B>
where
    A: Cursor,
    B: Cursor<Key = A::Key, Value = A::Value>,
{
    type Key = A::Key;
    type Value = A::Value;
    type Kind = A::Kind;

    fn pull(&mut self) -> Option<Element<Self::Key, Self::Value>> {
        // `first` is fused, so it is never pulled again once it has ended.
        if let Some(element) = self.first.pull() {
            return Some(element.or_hint(self.first.hint()));
        }

        let element = self.second.pull()?;
        Some(element.or_hint(self.second.hint()))
    }

    #[inline]
    fn hint(&self) -> ShapeTag {
        self.first.hint()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (first_lower, first_upper) = self.first.size_hint();
        let (second_lower, second_upper) = self.second.size_hint();

        let lower = first_lower.saturating_add(second_lower);
        let upper = match (first_upper, second_upper) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        (lower, upper)
    }
}
