//! [`Iterable`] implementations for [`Vec`], slices and arrays.
//!
//! All of them are classified as [`ShapeTag::Sequence`] and adapted into a [`Positional`]
//! cursor, whose keys are the 0-based positions.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
};

use crate::{Cursor, Element, Iterable, ShapeTag, kind};

/// A cursor over the items of an iterator, keyed by position.
///
/// It is created by adapting a [`Vec`], a slice, an array or a
/// [`VecDeque`](std::collections::VecDeque), and by [`from_iter()`](crate::from_iter).
#[derive(Clone)]
pub struct Positional<It> {
    iter: It,
    position: usize,
    hint: ShapeTag,
}

impl<It> Positional<It>
where
    It: FusedIterator,
{
    #[inline]
    pub(crate) const fn new(iter: It, hint: ShapeTag) -> Self {
        Self {
            iter,
            position: 0,
            hint,
        }
    }

    #[inline]
    pub(crate) const fn sequence(iter: It) -> Self {
        Self::new(iter, ShapeTag::Sequence)
    }

    /// The number of elements pulled so far, which is also the key of the next one.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<It> Cursor for Positional<It>
where
    It: FusedIterator,
{
    type Key = usize;
    type Value = It::Item;
    type Kind = kind::Sequence;

    #[inline]
    fn pull(&mut self) -> Option<Element<usize, It::Item>> {
        let value = self.iter.next()?;
        let key = self.position;
        self.position += 1;
        Some(Element::new(value, key))
    }

    #[inline]
    fn hint(&self) -> ShapeTag {
        self.hint
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<It: Debug> Debug for Positional<It> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Positional")
            .field("iter", &self.iter)
            .field("position", &self.position)
            .field("hint", &self.hint)
            .finish()
    }
}

impl<T> Iterable for Vec<T> {
    type Key = usize;
    type Value = T;
    type Cursor = Positional<std::vec::IntoIter<T>>;

    #[inline]
    fn shape(&self) -> ShapeTag {
        ShapeTag::Sequence
    }

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        Positional::sequence(self.into_iter())
    }
}

impl<'a, T> Iterable for &'a Vec<T> {
    type Key = usize;
    type Value = &'a T;
    type Cursor = Positional<std::slice::Iter<'a, T>>;

    #[inline]
    fn shape(&self) -> ShapeTag {
        ShapeTag::Sequence
    }

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        Positional::sequence(self.iter())
    }
}

impl<'a, T> Iterable for &'a [T] {
    type Key = usize;
    type Value = &'a T;
    type Cursor = Positional<std::slice::Iter<'a, T>>;

    #[inline]
    fn shape(&self) -> ShapeTag {
        ShapeTag::Sequence
    }

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        Positional::sequence(self.iter())
    }
}

impl<T, const N: usize> Iterable for [T; N] {
    type Key = usize;
    type Value = T;
    type Cursor = Positional<std::array::IntoIter<T, N>>;

    #[inline]
    fn shape(&self) -> ShapeTag {
        ShapeTag::Sequence
    }

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        Positional::sequence(self.into_iter())
    }
}

impl<'a, T, const N: usize> Iterable for &'a [T; N] {
    type Key = usize;
    type Value = &'a T;
    type Cursor = Positional<std::slice::Iter<'a, T>>;

    #[inline]
    fn shape(&self) -> ShapeTag {
        ShapeTag::Sequence
    }

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        Positional::sequence(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn keys_are_positions() {
        let mut cursor = ["a", "b", "c"].into_cursor();
        let mut keys = vec![];
        while let Some(element) = cursor.pull() {
            keys.push(element.key);
        }
        assert_eq!(keys, [0, 1, 2]);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn exhaustion_is_idempotent() {
        let mut cursor = vec![1].into_cursor();
        assert!(cursor.pull().is_some());
        for _ in 0..3 {
            assert_eq!(cursor.pull(), None);
        }
    }

    #[test]
    fn borrowed_inputs_are_repeatable() {
        let values = vec![4, 5];
        assert_eq!(crate::to_vec(&values), [&4, &5]);
        assert_eq!(crate::to_vec(&values), [&4, &5]);
        assert_eq!(crate::to_vec(values.as_slice()), [&4, &5]);
    }
}
