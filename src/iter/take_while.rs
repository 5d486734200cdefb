use std::{
    convert::Infallible,
    fmt::{self, Debug},
    ops::ControlFlow,
};

use tracing::trace;

use crate::{
    Accumulator, Collector, Cursor, Element, Iterable, KindOf, Materializer, Rebuilt,
    collector::assert_collector, materialize::accumulator_for,
};

use super::into_ok;

/// A collector that inserts elements into an [`Accumulator`] while a fallible predicate holds.
///
/// The first element failing the predicate is not inserted, and the collector
/// returns [`Break`](ControlFlow::Break) on it.
/// Its [`Output`](Collector::Output) is the finalized accumulator, or the first error.
pub struct TakeWhile<A, P, E> {
    accumulator: A,
    pred: P,
    taking: bool,
    error: Option<E>,
}

impl<A, P, E> TakeWhile<A, P, E> {
    /// Creates an instance of this collector inserting into `accumulator`.
    #[inline]
    pub const fn new<K, V>(accumulator: A, pred: P) -> Self
    where
        A: Accumulator<K, V>,
        P: FnMut(&V, &K) -> Result<bool, E>,
    {
        assert_collector::<_, K, V>(Self {
            accumulator,
            pred,
            taking: true,
            error: None,
        })
    }
}

impl<K, V, A, P, E> Collector<K, V> for TakeWhile<A, P, E>
where
    A: Accumulator<K, V>,
    P: FnMut(&V, &K) -> Result<bool, E>,
{
    type Output = Result<A::Output, E>;

    fn collect(&mut self, element: Element<K, V>) -> ControlFlow<()> {
        if !self.taking {
            return ControlFlow::Break(());
        }

        match (self.pred)(&element.value, &element.key) {
            Ok(true) => {
                self.accumulator
                    .insert(element.value, element.key, element.hint);
                ControlFlow::Continue(())
            }
            Ok(false) => {
                self.taking = false;
                ControlFlow::Break(())
            }
            Err(error) => {
                self.taking = false;
                self.error = Some(error);
                ControlFlow::Break(())
            }
        }
    }

    #[inline]
    fn finish(self) -> Self::Output {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.accumulator.finalize()),
        }
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if self.taking {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }
}

impl<A: Debug, P, E: Debug> Debug for TakeWhile<A, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhile")
            .field("accumulator", &self.accumulator)
            .field("taking", &self.taking)
            .field("error", &self.error)
            .finish()
    }
}

/// A collector that inserts the first `n` elements into an [`Accumulator`].
pub struct Take<A> {
    accumulator: A,
    remaining: usize,
}

impl<A> Take<A> {
    /// Creates an instance of this collector inserting at most `n` elements into `accumulator`.
    #[inline]
    pub const fn new<K, V>(accumulator: A, n: usize) -> Self
    where
        A: Accumulator<K, V>,
    {
        assert_collector::<_, K, V>(Self {
            accumulator,
            remaining: n,
        })
    }
}

impl<K, V, A> Collector<K, V> for Take<A>
where
    A: Accumulator<K, V>,
{
    type Output = A::Output;

    fn collect(&mut self, element: Element<K, V>) -> ControlFlow<()> {
        // Only reachable through `collect()` called after a break.
        if self.remaining == 0 {
            return ControlFlow::Break(());
        }

        self.accumulator
            .insert(element.value, element.key, element.hint);
        self.remaining -= 1;
        self.break_hint()
    }

    #[inline]
    fn finish(self) -> Self::Output {
        self.accumulator.finalize()
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if self.remaining == 0 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<A: Debug> Debug for Take<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Take")
            .field("accumulator", &self.accumulator)
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// Keeps the leading elements of `input` for which `pred(value, key)` holds,
/// in a container of the same kind as `input`.
///
/// Pulling stops at the first element failing `pred`, which is not kept.
///
/// # Examples
///
/// ```
/// let head = polyiter::take_while(vec![10, 20, 30, 40, 50], |&v, _| v < 40);
/// assert_eq!(head, [10, 20, 30]);
/// ```
pub fn take_while<I, P>(input: I, mut pred: P) -> Rebuilt<I, I::Value>
where
    I: Iterable,
    KindOf<I>: Materializer<I::Key, I::Value>,
    P: FnMut(&I::Value, &I::Key) -> bool,
{
    into_ok(try_take_while(input, |value, key| Ok::<_, Infallible>(pred(value, key))))
}

/// The fallible form of [`take_while()`].
pub fn try_take_while<I, E, P>(input: I, pred: P) -> Result<Rebuilt<I, I::Value>, E>
where
    I: Iterable,
    KindOf<I>: Materializer<I::Key, I::Value>,
    P: FnMut(&I::Value, &I::Key) -> Result<bool, E>,
{
    trace!(shape = %input.shape(), "take_while");
    let cursor = input.into_cursor();
    let accumulator = accumulator_for::<_, I::Value>(&cursor);
    cursor.feed_into(TakeWhile::new(accumulator, pred))
}

/// Keeps the first `n` elements of `input`, in a container of the same kind as `input`.
///
/// Pulling stops right after the `n`-th element, so `take` is safe on unbounded cursors.
///
/// # Examples
///
/// ```
/// let squares = polyiter::imap(polyiter::range(0_u32, u32::MAX, 1)?, |v, _| v * v);
/// assert_eq!(polyiter::take(squares, 4), [0, 1, 4, 9]);
/// # Ok::<(), polyiter::IterError>(())
/// ```
pub fn take<I>(input: I, n: usize) -> Rebuilt<I, I::Value>
where
    I: Iterable,
    KindOf<I>: Materializer<I::Key, I::Value>,
{
    trace!(shape = %input.shape(), n, "take");
    let cursor = input.into_cursor();
    let accumulator = accumulator_for::<_, I::Value>(&cursor);
    cursor.feed_into(Take::new(accumulator, n))
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::test_utils::Counting;

    #[test]
    fn stops_at_the_first_failure() {
        let mut counting = Counting::new(vec![1, 2, 9, 3]);
        assert_eq!(take_while(&mut counting, |&v, _| v < 5), [1, 2]);
        assert_eq!(counting.pulls(), 3);
    }

    #[test]
    fn error_stops_pulling() {
        let mut counting = Counting::new(vec![1, 2, 3, 4]);
        let result = try_take_while(&mut counting, |&v, _| match v {
            1 => Ok(true),
            _ => Err(v),
        });
        assert_eq!(result, Err(2));
        assert_eq!(counting.pulls(), 2);
    }

    #[test]
    fn mapping_stays_a_mapping() {
        let map = IndexMap::from([("a", 1), ("b", 2), ("c", 3)]);
        let head = take_while(map, |_, &k| k != "c");
        assert_eq!(head, IndexMap::from([("a", 1), ("b", 2)]));
    }

    #[test]
    fn take_pulls_exactly_n() {
        let mut counting = Counting::new(vec![1, 2, 3, 4]);
        assert_eq!(take(&mut counting, 2), [1, 2]);
        assert_eq!(counting.pulls(), 2);

        let mut counting = Counting::new(vec![1]);
        assert!(take(&mut counting, 0).is_empty());
        assert_eq!(counting.pulls(), 0);
    }

    #[test]
    fn take_more_than_available() {
        assert_eq!(take(vec!['x'], 5), ['x']);
    }
}
