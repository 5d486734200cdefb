use crate::{Cursor, Element, ShapeTag};

/// A lazy [`Cursor`] that pairs up the values of two cursors positionally.
///
/// It ends as soon as either cursor ends; the second cursor is not pulled when the first
/// has already ended. Keys and hints come from the first cursor.
///
/// This `struct` is created by [`Cursor::zip()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    first: A,
    second: B,
    exhausted: bool,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            exhausted: false,
        }
    }
}

impl<A, B> Cursor for Zip<A, B>
where
    A: Cursor,
    B: Cursor,
{
    type Key = A::Key;
    type Value = (A::Value, B::Value);
    type Kind = A::Kind;

    fn pull(&mut self) -> Option<Element<Self::Key, Self::Value>> {
        if self.exhausted {
            return None;
        }

        let pair = self
            .first
            .pull()
            .and_then(|a| self.second.pull().map(|b| (a, b)));

        let Some((a, b)) = pair else {
            self.exhausted = true;
            return None;
        };

        Some(Element {
            value: (a.value, b.value),
            key: a.key,
            hint: a.hint,
        })
    }

    #[inline]
    fn hint(&self) -> ShapeTag {
        self.first.hint()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }

        let (a_lower, a_upper) = self.first.size_hint();
        let (b_lower, b_upper) = self.second.size_hint();
        let upper = match (a_upper, b_upper) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (upper, None) | (None, upper) => upper,
        };
        (a_lower.min(b_lower), upper)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::test_utils::Counting;

    #[test]
    fn stops_at_shorter() {
        let mut cursor = vec!["a", "b", "c"].into_cursor().zip(vec![1, 2]);

        assert_eq!(cursor.pull().map(Element::into_parts), Some((("a", 1), 0)));
        assert_eq!(cursor.pull().map(Element::into_parts), Some((("b", 2), 1)));
        assert_eq!(cursor.pull(), None);
        assert_eq!(cursor.pull(), None);
    }

    #[test]
    fn second_is_not_pulled_past_first() {
        let mut second = Counting::new(vec![1, 2, 3]);
        let mut cursor = vec![1].into_cursor().zip(&mut second);

        while cursor.pull().is_some() {}
        assert_eq!(cursor.pull(), None);
        drop(cursor);
        assert_eq!(second.pulls(), 1);
    }
}
