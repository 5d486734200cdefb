//! Inputs backed by a native [`Iterator`].
//!
//! - [`from_iter()`] wraps any iterator as an external cursor with positional keys.
//! - [`from_entries()`] wraps an iterator of `(key, value)` pairs as a mapping.
//! - [`from_elements()`] wraps an iterator that already produces whole [`Element`]s,
//!   passing key, value and hint through verbatim.
//!
//! The iterators are [fused](Iterator::fuse) on adaptation, so each of these cursors
//! terminates idempotently whatever the upstream does after its end.

use std::{
    fmt::{self, Debug},
    iter::{self, FusedIterator},
};

use crate::{Cursor, Element, Iterable, Keyed, Positional, ShapeTag, kind};

/// Wraps an iterator as an external cursor.
///
/// Keys are 0-based positions and eager operations rebuild a [`Vec`].
/// The cursor is one-shot: pulling it consumes the iterator.
///
/// # Examples
///
/// ```
/// use polyiter::prelude::*;
///
/// let words = polyiter::from_iter("a bb ccc".split(' '));
/// assert_eq!(classify(&words), ShapeTag::ExternalCursor);
/// assert_eq!(polyiter::map(words, |w, _| w.len()), [1, 2, 3]);
/// ```
#[inline]
pub fn from_iter<I>(iter: I) -> Positional<iter::Fuse<I::IntoIter>>
where
    I: IntoIterator,
{
    Positional::new(iter.into_iter().fuse(), ShapeTag::ExternalCursor)
}

/// An iterator of `(key, value)` pairs, classified as a mapping.
///
/// This struct is created by [`from_entries()`].
#[derive(Debug, Clone)]
pub struct Entries<It>(It);

/// Wraps an iterator of `(key, value)` pairs as a mapping.
///
/// Eager operations rebuild an [`IndexMap`](indexmap::IndexMap), in the order the pairs were produced.
/// A repeated key overwrites the earlier value in place.
///
/// # Examples
///
/// ```
/// use polyiter::prelude::*;
///
/// let entries = polyiter::from_entries([("ten", 10), ("twenty", 20)]);
/// assert_eq!(classify(&entries), ShapeTag::Mapping);
///
/// let halved = polyiter::map(entries, |v, _| v / 2);
/// assert_eq!(halved["twenty"], 10);
/// ```
#[inline]
pub fn from_entries<I, K, V>(entries: I) -> Entries<I::IntoIter>
where
    I: IntoIterator<Item = (K, V)>,
{
    Entries(entries.into_iter())
}

impl<It, K, V> Iterable for Entries<It>
where
    It: Iterator<Item = (K, V)>,
{
    type Key = K;
    type Value = V;
    type Cursor = Keyed<iter::Fuse<It>, kind::Mapping>;

    #[inline]
    fn shape(&self) -> ShapeTag {
        ShapeTag::Mapping
    }

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        Keyed::mapping(self.0.fuse())
    }
}

/// A cursor over an iterator of whole [`Element`]s.
///
/// This struct is created by [`from_elements()`].
#[derive(Clone)]
pub struct Verbatim<It> {
    iter: It,
}

/// Wraps an iterator of [`Element`]s as an external cursor.
///
/// Keys, values and per-element hints are passed through untouched.
/// Eager operations rebuild a [`Collection`](crate::Collection) whose variant is decided by the
/// hint of the first element kept, so an upstream that tags its elements as mapping entries
/// gets a mapping back.
///
/// # Examples
///
/// ```
/// use polyiter::{prelude::*, Collection};
///
/// let tagged = [
///     Element::with_hint(1, "one", ShapeTag::Mapping),
///     Element::with_hint(2, "two", ShapeTag::Mapping),
/// ];
/// let doubled = polyiter::map(polyiter::from_elements(tagged), |v, _| v * 2);
///
/// let Collection::Mapping(map) = doubled else { unreachable!() };
/// assert_eq!(map["two"], 4);
/// ```
#[inline]
pub fn from_elements<I, K, V>(elements: I) -> Verbatim<iter::Fuse<I::IntoIter>>
where
    I: IntoIterator<Item = Element<K, V>>,
{
    Verbatim {
        iter: elements.into_iter().fuse(),
    }
}

impl<It, K, V> Cursor for Verbatim<It>
where
    It: FusedIterator<Item = Element<K, V>>,
{
    type Key = K;
    type Value = V;
    type Kind = kind::Inferred;

    #[inline]
    fn pull(&mut self) -> Option<Element<K, V>> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<It: Debug> Debug for Verbatim<It> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verbatim").field("iter", &self.iter).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Collection;

    #[test]
    fn from_iter_is_one_shot() {
        let mut cursor = from_iter(vec![1, 2]);
        assert_eq!(cursor.hint(), ShapeTag::ExternalCursor);
        assert_eq!(crate::to_vec(&mut cursor), [1, 2]);
        assert_eq!(crate::to_vec(&mut cursor), Vec::<i32>::new());
    }

    #[test]
    fn from_iter_fuses_upstream() {
        let mut flip = false;
        let mut cursor = from_iter(std::iter::from_fn(move || {
            flip = !flip;
            flip.then_some(())
        }));
        assert!(cursor.pull().is_some());
        assert!(cursor.pull().is_none());
        assert!(cursor.pull().is_none());
    }

    #[test]
    fn entries_overwrite_repeated_keys() {
        let map = crate::collect(from_entries([("a", 1), ("b", 2), ("a", 3)]));
        assert_eq!(map.into_iter().collect::<Vec<_>>(), [("a", 3), ("b", 2)]);
    }

    #[test]
    fn elements_without_hint_rebuild_a_sequence() {
        let elements = [Element::new('x', 4_u8), Element::new('y', 9_u8)];
        let kept = crate::filter(from_elements(elements), |&v, _| v == 'y');
        assert_eq!(kept, Collection::Sequence(vec!['y']));
    }

    #[test]
    fn elements_pass_through_verbatim() {
        let tagged = Element::with_hint(5, "k", ShapeTag::SetLike);
        let mut cursor = from_elements([tagged]);
        assert_eq!(cursor.pull(), Some(tagged));
        assert_eq!(cursor.pull(), None);
    }
}
