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

/// A collector that ignores elements while a fallible predicate holds,
/// then inserts every element from the first failure on into an [`Accumulator`].
///
/// Once it has started inserting, the predicate is never called again.
/// Its [`Output`](Collector::Output) is the finalized accumulator, or the first error.
pub struct DropWhile<A, P, E> {
    accumulator: A,
    pred: Option<P>,
    error: Option<E>,
}

impl<A, P, E> DropWhile<A, P, E> {
    /// Creates an instance of this collector inserting into `accumulator`.
    #[inline]
    pub const fn new<K, V>(accumulator: A, pred: P) -> Self
    where
        A: Accumulator<K, V>,
        P: FnMut(&V, &K) -> Result<bool, E>,
    {
        assert_collector::<_, K, V>(Self {
            accumulator,
            pred: Some(pred),
            error: None,
        })
    }
}

impl<K, V, A, P, E> Collector<K, V> for DropWhile<A, P, E>
where
    A: Accumulator<K, V>,
    P: FnMut(&V, &K) -> Result<bool, E>,
{
    type Output = Result<A::Output, E>;

    fn collect(&mut self, element: Element<K, V>) -> ControlFlow<()> {
        if let Some(pred) = &mut self.pred {
            match pred(&element.value, &element.key) {
                Ok(true) => return ControlFlow::Continue(()),
                Ok(false) => self.pred = None,
                Err(error) => {
                    self.error = Some(error);
                    return ControlFlow::Break(());
                }
            }
        }

        self.accumulator
            .insert(element.value, element.key, element.hint);
        ControlFlow::Continue(())
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
        if self.error.is_some() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<A: Debug, P, E: Debug> Debug for DropWhile<A, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropWhile")
            .field("accumulator", &self.accumulator)
            .field("dropping", &self.pred.is_some())
            .field("error", &self.error)
            .finish()
    }
}

/// A collector that ignores the first `n` elements and inserts the rest into an [`Accumulator`].
pub struct Skip<A> {
    accumulator: A,
    remaining: usize,
}

impl<A> Skip<A> {
    /// Creates an instance of this collector ignoring `n` elements, then inserting into `accumulator`.
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

impl<K, V, A> Collector<K, V> for Skip<A>
where
    A: Accumulator<K, V>,
{
    type Output = A::Output;

    #[inline]
    fn collect(&mut self, element: Element<K, V>) -> ControlFlow<()> {
        if self.remaining > 0 {
            self.remaining -= 1;
        } else {
            self.accumulator
                .insert(element.value, element.key, element.hint);
        }
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Self::Output {
        self.accumulator.finalize()
    }
}

impl<A: Debug> Debug for Skip<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Skip")
            .field("accumulator", &self.accumulator)
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// Drops the leading elements of `input` for which `pred(value, key)` holds and keeps the rest,
/// in a container of the same kind as `input`.
///
/// Once an element fails `pred`, it and everything after it are kept,
/// even elements for which `pred` would hold again.
///
/// # Examples
///
/// ```
/// let tail = polyiter::drop_while(vec![10, 20, 30, 40, 50, 10], |&v, _| v < 40);
/// assert_eq!(tail, [40, 50, 10]);
/// ```
pub fn drop_while<I, P>(input: I, mut pred: P) -> Rebuilt<I, I::Value>
where
    I: Iterable,
    KindOf<I>: Materializer<I::Key, I::Value>,
    P: FnMut(&I::Value, &I::Key) -> bool,
{
    into_ok(try_drop_while(input, |value, key| Ok::<_, Infallible>(pred(value, key))))
}

/// The fallible form of [`drop_while()`].
pub fn try_drop_while<I, E, P>(input: I, pred: P) -> Result<Rebuilt<I, I::Value>, E>
where
    I: Iterable,
    KindOf<I>: Materializer<I::Key, I::Value>,
    P: FnMut(&I::Value, &I::Key) -> Result<bool, E>,
{
    trace!(shape = %input.shape(), "drop_while");
    let cursor = input.into_cursor();
    let accumulator = accumulator_for::<_, I::Value>(&cursor);
    cursor.feed_into(DropWhile::new(accumulator, pred))
}

/// Drops the first `n` elements of `input` and keeps the rest,
/// in a container of the same kind as `input`.
///
/// Keys are kept: skipping into a sequence does not renumber it.
///
/// # Examples
///
/// ```
/// assert_eq!(polyiter::skip(vec![1, 2, 3, 4], 2), [3, 4]);
/// assert!(polyiter::skip(vec![1, 2], 5).is_empty());
/// ```
pub fn skip<I>(input: I, n: usize) -> Rebuilt<I, I::Value>
where
    I: Iterable,
    KindOf<I>: Materializer<I::Key, I::Value>,
{
    trace!(shape = %input.shape(), n, "skip");
    let cursor = input.into_cursor();
    let accumulator = accumulator_for::<_, I::Value>(&cursor);
    cursor.feed_into(Skip::new(accumulator, n))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use super::*;
    use crate::{take_while, test_utils::Counting};

    #[test]
    fn error_stops_pulling() {
        let mut counting = Counting::new(vec![1, 2, 3, 4]);
        let result = try_drop_while(&mut counting, |&v, _| match v {
            1 => Ok(true),
            _ => Err(v),
        });
        assert_eq!(result, Err(2));
        assert_eq!(counting.pulls(), 2);
    }

    #[test]
    fn predicate_is_not_called_after_the_first_failure() {
        let calls = Cell::new(0);
        let tail = drop_while(vec![1, 5, 1, 1], |&v, _| {
            calls.set(calls.get() + 1);
            v < 3
        });
        assert_eq!(tail, [5, 1, 1]);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn skip_keeps_mapping_keys() {
        let map = indexmap::IndexMap::from([("a", 1), ("b", 2), ("c", 3)]);
        let tail = skip(map, 1);
        assert_eq!(tail.keys().copied().collect::<Vec<_>>(), ["b", "c"]);
    }

    proptest! {
        #[test]
        fn take_while_then_drop_while_is_the_input(nums in propvec(0_u8..10, ..=24), bound in 0_u8..10) {
            let mut rebuilt = take_while(nums.clone(), |&v, _| v < bound);
            rebuilt.extend(drop_while(nums.clone(), |&v, _| v < bound));
            prop_assert_eq!(rebuilt, nums);
        }

        #[test]
        fn skip_agrees_with_iterator_skip(nums in propvec(any::<u8>(), ..=16), n in 0_usize..20) {
            let expected: Vec<_> = nums.iter().copied().skip(n).collect();
            prop_assert_eq!(skip(nums, n), expected);
        }
    }
}
