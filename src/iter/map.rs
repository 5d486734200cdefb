use std::{
    convert::Infallible,
    fmt::{self, Debug},
    ops::ControlFlow,
};

use tracing::trace;

use crate::{
    Accumulator, Collector, Cursor, Element, Iterable, KindOf, Materializer, Rebuilt,
    collector::assert_collector, izip, materialize::accumulator_for,
};

use super::into_ok;

/// A collector that transforms every value with a fallible function
/// and inserts the result into an [`Accumulator`] under the same key.
///
/// Its [`Output`](Collector::Output) is the finalized accumulator, or the first error.
pub struct MapInto<A, F, E> {
    accumulator: A,
    f: F,
    error: Option<E>,
}

impl<A, F, E> MapInto<A, F, E> {
    /// Creates an instance of this collector inserting into `accumulator`.
    #[inline]
    pub const fn new<K, V, U>(accumulator: A, f: F) -> Self
    where
        A: Accumulator<K, U>,
        F: FnMut(V, &K) -> Result<U, E>,
    {
        assert_collector::<_, K, V>(Self {
            accumulator,
            f,
            error: None,
        })
    }
}

impl<K, V, U, A, F, E> Collector<K, V> for MapInto<A, F, E>
where
    A: Accumulator<K, U>,
    F: FnMut(V, &K) -> Result<U, E>,
{
    type Output = Result<A::Output, E>;

    fn collect(&mut self, element: Element<K, V>) -> ControlFlow<()> {
        match (self.f)(element.value, &element.key) {
            Ok(value) => {
                self.accumulator.insert(value, element.key, element.hint);
                ControlFlow::Continue(())
            }
            Err(error) => {
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
}

impl<A: Debug, F, E: Debug> Debug for MapInto<A, F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapInto")
            .field("accumulator", &self.accumulator)
            .field("error", &self.error)
            .finish()
    }
}

/// Transforms every value of `input` with `f(value, key)`, keeping keys,
/// into a container of the same kind as `input`.
///
/// Mapping a set may collapse values that became equal.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
///
/// assert_eq!(polyiter::map(vec![1_usize, 2, 3], |v, k| v * 10 + k), [10, 21, 32]);
///
/// let prices = IndexMap::from([("tea", 3), ("cake", 5)]);
/// let doubled = polyiter::map(prices, |v, _| v * 2);
/// assert_eq!(doubled, IndexMap::from([("tea", 6), ("cake", 10)]));
/// ```
#[inline]
pub fn map<I, U, F>(input: I, mut f: F) -> Rebuilt<I, U>
where
    I: Iterable,
    KindOf<I>: Materializer<I::Key, U>,
    F: FnMut(I::Value, &I::Key) -> U,
{
    into_ok(try_map(input, |value, key| Ok::<_, Infallible>(f(value, key))))
}

/// The fallible form of [`map()`].
///
/// # Examples
///
/// ```
/// let parsed = polyiter::try_map(vec!["4", "2"], |v, _| v.parse::<u8>());
/// assert_eq!(parsed, Ok(vec![4, 2]));
///
/// let parsed = polyiter::try_map(vec!["4", "two"], |v, _| v.parse::<u8>());
/// assert!(parsed.is_err());
/// ```
pub fn try_map<I, U, E, F>(input: I, f: F) -> Result<Rebuilt<I, U>, E>
where
    I: Iterable,
    KindOf<I>: Materializer<I::Key, U>,
    F: FnMut(I::Value, &I::Key) -> Result<U, E>,
{
    trace!(shape = %input.shape(), "map");
    let cursor = input.into_cursor();
    let accumulator = accumulator_for::<_, U>(&cursor);
    cursor.feed_into(MapInto::new(accumulator, f))
}

/// Reads one element from each of two inputs and combines their values with `f(a, b, key)`.
///
/// It stops as soon as either input ends. Keys come from `a`,
/// and the result is a container of the same kind as `a`.
///
/// # Examples
///
/// ```
/// let sums = polyiter::map2(vec![1, 2, 3], vec![10, 20], |a, b, _| a + b);
/// assert_eq!(sums, [11, 22]);
/// ```
#[inline]
pub fn map2<A, B, U, F>(a: A, b: B, mut f: F) -> Rebuilt<A, U>
where
    A: Iterable,
    B: Iterable,
    KindOf<A>: Materializer<A::Key, U>,
    F: FnMut(A::Value, B::Value, &A::Key) -> U,
{
    map(a.into_cursor().zip(b), |(a, b), key| f(a, b, key))
}

/// Reads one element from each input and combines their values with `f(values, key)`.
///
/// `values` holds one value per input, in input order. It stops as soon as any input ends.
/// Keys come from the first input, and the result is a container of its kind.
///
/// # Examples
///
/// ```
/// let totals = polyiter::map_n([vec![1, 2, 3], vec![10, 20, 30], vec![100, 200]], |vs, _| {
///     vs.into_iter().sum::<i32>()
/// });
/// assert_eq!(totals, [111, 222]);
/// ```
#[inline]
pub fn map_n<I, U, F>(inputs: impl IntoIterator<Item = I>, f: F) -> Rebuilt<I, U>
where
    I: Iterable,
    KindOf<I>: Materializer<I::Key, U>,
    F: FnMut(Vec<I::Value>, &I::Key) -> U,
{
    map(izip(inputs), f)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use super::*;
    use crate::test_utils::Counting;

    #[test]
    fn mapping_keeps_keys() {
        let map_in = BTreeMap::from([(1_usize, "one"), (2, "two")]);
        let lens = map(&map_in, |v, k| v.len() + **k);
        assert_eq!(lens, BTreeMap::from([(&1, 4), (&2, 5)]));
    }

    #[test]
    fn error_stops_pulling() {
        let mut counting = Counting::new(vec![1, 2, 3]);
        let result = try_map(&mut counting, |v, _| if v > 1 { Err(v) } else { Ok(v) });
        assert_eq!(result, Err(2));
        assert_eq!(counting.pulls(), 2);
    }

    #[test]
    fn map2_over_mapping_and_sequence() {
        let names = indexmap::IndexMap::from([("x", 1), ("y", 2), ("z", 3)]);
        let scaled = map2(names, vec![10, 100], |a, b, _| a * b);
        assert_eq!(scaled.into_iter().collect::<Vec<_>>(), [("x", 10), ("y", 200)]);
    }

    #[test]
    fn map_n_stops_at_the_shortest() {
        let result = map_n([vec![1, 2, 3], vec![10, 20]], |vs, _| vs[0] + vs[1]);
        assert_eq!(result, [11, 22]);
    }

    proptest! {
        #[test]
        fn agrees_with_iterator_map(nums in propvec(any::<i32>(), ..=32)) {
            let expected: Vec<_> = nums.iter().map(|v| v.wrapping_mul(3)).collect();
            prop_assert_eq!(map(nums, |v, _| v.wrapping_mul(3)), expected);
        }

        #[test]
        fn map2_length_is_the_shorter(a in propvec(any::<u8>(), ..=16), b in propvec(any::<u8>(), ..=16)) {
            let expected = a.len().min(b.len());
            prop_assert_eq!(map2(a, b, |x, y, _| (x, y)).len(), expected);
        }
    }
}
