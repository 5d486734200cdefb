use crate::{ShapeTag, collector::Collector, kind::Kind};

use super::{Chain, Element, Elements, Filter, Fuse, Iterable, Map, Zip, assert_cursor};

/// A stateful, single-use, forward-only pull object.
///
/// This trait requires one core method:
///
/// - [`pull`](Cursor::pull): produces the next [`Element`], or `None` once the end is reached.
///
/// Besides the elements, a cursor carries a *materialization-type hint*
/// ([`hint()`](Cursor::hint)), which names the shape of the input it was created from,
/// and a [`Kind`], which decides what container an eager operation rebuilds
/// from its output (a sequence stays a sequence, a mapping stays a mapping...).
///
/// # Implementing
///
/// Pick a [`Kind`] for the output of eager operations and implement `pull`.
///
/// ```
/// use polyiter::{prelude::*, kind};
///
/// /// Counts down to one.
/// struct Countdown(u32);
///
/// impl Cursor for Countdown {
///     type Key = usize;
///     type Value = u32;
///     type Kind = kind::Sequence;
///
///     fn pull(&mut self) -> Option<Element<usize, u32>> {
///         if self.0 == 0 {
///             return None;
///         }
///         self.0 -= 1;
///         Some(Element::new(self.0 + 1, 0))
///     }
///
///     fn hint(&self) -> ShapeTag {
///         ShapeTag::ExternalCursor
///     }
/// }
///
/// assert_eq!(polyiter::map(Countdown(3), |n, _| n * 2), [6, 4, 2]);
/// ```
pub trait Cursor {
    /// The key type of the produced elements.
    type Key;

    /// The value type of the produced elements.
    type Value;

    /// Which container eager operations rebuild from this cursor.
    type Kind: Kind;

    /// Pulls the next element, or returns `None` if the cursor has reached its end.
    fn pull(&mut self) -> Option<Element<Self::Key, Self::Value>>;

    /// The shape of the input this cursor was created from.
    ///
    /// The default implementation returns the shape of [`Self::Kind`](Cursor::Kind).
    #[inline]
    fn hint(&self) -> ShapeTag {
        <Self::Kind as Kind>::SHAPE
    }

    /// Returns the bounds on the remaining number of elements.
    ///
    /// It has the same meaning as [`Iterator::size_hint()`].
    /// The default implementation returns `(0, None)`.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    /// Drives this cursor into a collector until the collector stops accumulating
    /// or the cursor ends, then returns the collector's output.
    ///
    /// This is the pull loop every eager operation is built on.
    #[inline]
    fn feed_into<C>(self, collector: C) -> C::Output
    where
        Self: Sized,
        C: Collector<Self::Key, Self::Value>,
    {
        collector.collect_then_finish(self)
    }

    /// Borrows this cursor, so that an adapter or operation can advance it
    /// without consuming it.
    #[inline]
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Creates a cursor that keeps reporting the end once it has reported it.
    #[inline]
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        assert_cursor(Fuse::new(self))
    }

    /// Creates a lazy cursor that transforms every value, keeping its key and hint.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyiter::prelude::*;
    ///
    /// let doubled = polyiter::collect(vec![1, 2, 3].into_cursor().map(|v, _| v * 2));
    /// assert_eq!(doubled, [2, 4, 6]);
    /// ```
    #[inline]
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Value, &Self::Key) -> U,
    {
        assert_cursor(Map::new(self, f))
    }

    /// Creates a lazy cursor that only yields elements satisfying the predicate.
    #[inline]
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Value, &Self::Key) -> bool,
    {
        assert_cursor(Filter::new(self, pred))
    }

    /// Creates a lazy cursor that yields every element of this cursor, then every element of `other`.
    ///
    /// Each element is tagged with the hint of the cursor it came from,
    /// unless it already carries one.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyiter::prelude::*;
    ///
    /// let chained = polyiter::to_vec(vec![1, 2].into_cursor().chain([3, 4]));
    /// assert_eq!(chained, [1, 2, 3, 4]);
    /// ```
    #[inline]
    fn chain<I>(self, other: I) -> Chain<Self, I::Cursor>
    where
        Self: Sized,
        I: Iterable<Key = Self::Key, Value = Self::Value>,
    {
        assert_cursor(Chain::new(self, other.into_cursor()))
    }

    /// Creates a lazy cursor that pairs up values of this cursor and `other` positionally,
    /// stopping as soon as either ends. Keys come from this cursor.
    #[inline]
    fn zip<I>(self, other: I) -> Zip<Self, I::Cursor>
    where
        Self: Sized,
        I: Iterable,
    {
        assert_cursor(Zip::new(self, other.into_cursor()))
    }

    /// Views this cursor as an [`Iterator`] of [`Element`]s.
    #[inline]
    fn elements(self) -> Elements<Self>
    where
        Self: Sized,
    {
        Elements::new(self)
    }
}

impl<C> Cursor for &mut C
where
    C: Cursor + ?Sized,
{
    type Key = C::Key;
    type Value = C::Value;
    type Kind = C::Kind;

    #[inline]
    fn pull(&mut self) -> Option<Element<Self::Key, Self::Value>> {
        C::pull(self)
    }

    #[inline]
    fn hint(&self) -> ShapeTag {
        C::hint(self)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        C::size_hint(self)
    }
}
