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

/// A collector that inserts the elements satisfying a fallible predicate into an [`Accumulator`].
///
/// Its [`Output`](Collector::Output) is the finalized accumulator, or the first error.
pub struct Retain<A, P, E> {
    accumulator: A,
    pred: P,
    error: Option<E>,
}

impl<A, P, E> Retain<A, P, E> {
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
            error: None,
        })
    }
}

impl<K, V, A, P, E> Collector<K, V> for Retain<A, P, E>
where
    A: Accumulator<K, V>,
    P: FnMut(&V, &K) -> Result<bool, E>,
{
    type Output = Result<A::Output, E>;

    fn collect(&mut self, element: Element<K, V>) -> ControlFlow<()> {
        match (self.pred)(&element.value, &element.key) {
            Ok(true) => {
                self.accumulator
                    .insert(element.value, element.key, element.hint);
                ControlFlow::Continue(())
            }
            Ok(false) => ControlFlow::Continue(()),
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

impl<A: Debug, P, E: Debug> Debug for Retain<A, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Retain")
            .field("accumulator", &self.accumulator)
            .field("error", &self.error)
            .finish()
    }
}

/// Keeps the elements of `input` for which `pred(value, key)` holds,
/// in a container of the same kind as `input`.
///
/// Keys are kept: filtering a mapping gives a mapping with a subset of its keys.
/// When nothing matches, the result is an empty container of that kind.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// assert_eq!(polyiter::filter(vec![1, 2, 3, 4], |v, _| v % 2 == 0), [2, 4]);
///
/// let scores = BTreeMap::from([("ana", 7), ("bo", 3)]);
/// let passed = polyiter::filter(scores, |&v, _| v >= 5);
/// assert_eq!(passed, BTreeMap::from([("ana", 7)]));
/// ```
#[inline]
pub fn filter<I, P>(input: I, mut pred: P) -> Rebuilt<I, I::Value>
where
    I: Iterable,
    KindOf<I>: Materializer<I::Key, I::Value>,
    P: FnMut(&I::Value, &I::Key) -> bool,
{
    into_ok(try_filter(input, |value, key| Ok::<_, Infallible>(pred(value, key))))
}

/// The fallible form of [`filter()`].
///
/// # Examples
///
/// ```
/// let words = vec!["1", "22", "x"];
/// let long = polyiter::try_filter(words, |w, _| Ok::<_, &str>(w.len() > 1));
/// assert_eq!(long, Ok(vec!["22"]));
/// ```
pub fn try_filter<I, E, P>(input: I, pred: P) -> Result<Rebuilt<I, I::Value>, E>
where
    I: Iterable,
    KindOf<I>: Materializer<I::Key, I::Value>,
    P: FnMut(&I::Value, &I::Key) -> Result<bool, E>,
{
    trace!(shape = %input.shape(), "filter");
    let cursor = input.into_cursor();
    let accumulator = accumulator_for::<_, I::Value>(&cursor);
    cursor.feed_into(Retain::new(accumulator, pred))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use indexmap::IndexMap;
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use super::*;
    use crate::ShapeTag;

    #[test]
    fn mapping_keeps_matching_keys() {
        let map = IndexMap::from([("ten", 10), ("twenty", 20), ("thirty", 30)]);
        let kept = filter(map, |&v, _| v != 20);
        assert_eq!(kept, IndexMap::from([("ten", 10), ("thirty", 30)]));
    }

    #[test]
    fn empty_result_is_an_empty_container() {
        let kept = filter(HashSet::from([1, 2]), |_, _| false);
        assert!(kept.is_empty());
        assert_eq!(crate::classify(&kept), ShapeTag::SetLike);
    }

    #[test]
    fn error_discards_partial_result() {
        let result = try_filter(vec![1, 2, 3], |&v, _| match v {
            3 => Err(v),
            _ => Ok(true),
        });
        assert_eq!(result, Err(3));
    }

    proptest! {
        #[test]
        fn keeps_order_and_only_matches(nums in propvec(any::<i16>(), ..=32)) {
            let kept = filter(nums.clone(), |&v, _| v % 3 == 0);
            prop_assert!(kept.iter().all(|v| v % 3 == 0));
            let expected: Vec<_> = nums.into_iter().filter(|v| *v % 3 == 0).collect();
            prop_assert_eq!(kept, expected);
        }
    }
}
