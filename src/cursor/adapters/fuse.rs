use crate::{Cursor, Element, ShapeTag};

/// A [`Cursor`] that keeps reporting the end once its underlying cursor has reported it.
///
/// The underlying cursor is dropped at that point.
///
/// This `struct` is created by [`Cursor::fuse()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Fuse<C> {
    state: State<C>,
    hint: ShapeTag,
}

#[derive(Debug, Clone)]
enum State<C> {
    Ready(C),
    Exhausted,
}

impl<C> Fuse<C>
where
    C: Cursor,
{
    #[inline]
    pub(crate) fn new(cursor: C) -> Self {
        Self {
            hint: cursor.hint(),
            state: State::Ready(cursor),
        }
    }
}

impl<C> Fuse<C> {
    /// Returns `true` once the underlying cursor has reported its end.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted)
    }
}

impl<C> Cursor for Fuse<C>
where
    C: Cursor,
{
    type Key = C::Key;
    type Value = C::Value;
    type Kind = C::Kind;

    fn pull(&mut self) -> Option<Element<Self::Key, Self::Value>> {
        let State::Ready(cursor) = &mut self.state else {
            return None;
        };

        let element = cursor.pull();
        if element.is_none() {
            self.state = State::Exhausted;
        }
        element
    }

    #[inline]
    fn hint(&self) -> ShapeTag {
        self.hint
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Ready(cursor) => cursor.size_hint(),
            State::Exhausted => (0, Some(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::test_utils::Unfused;

    #[test]
    fn stays_exhausted_over_unfused_cursor() {
        let mut cursor = Unfused::new([1, 2]).fuse();

        assert_eq!(cursor.pull().map(|e| e.value), Some(1));
        assert_eq!(cursor.pull().map(|e| e.value), Some(2));
        assert_eq!(cursor.pull(), None);
        assert!(cursor.is_exhausted());

        // `Unfused` would start over here.
        assert_eq!(cursor.pull(), None);
        assert_eq!(cursor.pull(), None);
        assert_eq!(cursor.size_hint(), (0, Some(0)));
    }

    #[test]
    fn keeps_hint_after_exhaustion() {
        let mut cursor = vec![1].into_cursor().fuse();
        while cursor.pull().is_some() {}
        assert_eq!(cursor.hint(), ShapeTag::Sequence);
    }
}
