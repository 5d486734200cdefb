use std::{
    convert::Infallible,
    fmt::{self, Debug},
    ops::ControlFlow,
};

use tracing::trace;

use crate::{Collector, Cursor, Element, Iterable, collector::assert_collector};

use super::into_ok;

/// A collector that keeps the most recent element satisfying a fallible predicate.
///
/// It only stops early on a predicate error: the last match is only known once the input has ended.
/// Its [`Output`](Collector::Output) is `Ok(None)` if nothing matched, or the first error.
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
/// use polyiter::{prelude::*, iter::Last};
///
/// let mut collector = Last::new(|&v: &char, _: &usize| Ok::<_, Infallible>(v.is_ascii_digit()));
///
/// assert!(collector.collect(Element::new('7', 0)).is_continue());
/// assert!(collector.collect(Element::new('x', 1)).is_continue());
/// assert!(collector.collect(Element::new('3', 2)).is_continue());
/// assert!(collector.collect(Element::new('y', 3)).is_continue());
///
/// assert_eq!(collector.finish(), Ok(Some(('3', 2))));
/// ```
#[derive(Clone)]
pub struct Last<K, V, P, E> {
    pred: P,
    found: Option<(V, K)>,
    error: Option<E>,
}

impl<K, V, P, E> Last<K, V, P, E>
where
    P: FnMut(&V, &K) -> Result<bool, E>,
{
    /// Creates an instance of this collector with a given predicate.
    #[inline]
    pub const fn new(pred: P) -> Self {
        assert_collector::<_, K, V>(Self {
            pred,
            found: None,
            error: None,
        })
    }
}

impl<K, V, P, E> Collector<K, V> for Last<K, V, P, E>
where
    P: FnMut(&V, &K) -> Result<bool, E>,
{
    type Output = Result<Option<(V, K)>, E>;

    #[inline]
    fn collect(&mut self, element: Element<K, V>) -> ControlFlow<()> {
        match (self.pred)(&element.value, &element.key) {
            Ok(true) => {
                self.found = Some(element.into_parts());
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
            None => Ok(self.found),
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

impl<K: Debug, V: Debug, P, E: Debug> Debug for Last<K, V, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Last")
            .field("found", &self.found)
            .field("error", &self.error)
            .finish()
    }
}

/// Returns the `(value, key)` of the last element of `input` satisfying `pred(value, key)`.
///
/// The whole input is pulled.
///
/// # Examples
///
/// ```
/// assert_eq!(polyiter::last(vec![3, 8, 9, 1], |&v, _| v > 5), Some((9, 2)));
/// assert_eq!(polyiter::last(vec![3], |&v, _| v > 5), None);
/// ```
#[inline]
pub fn last<I, P>(input: I, mut pred: P) -> Option<(I::Value, I::Key)>
where
    I: Iterable,
    P: FnMut(&I::Value, &I::Key) -> bool,
{
    into_ok(try_last(input, |value, key| Ok::<_, Infallible>(pred(value, key))))
}

/// The fallible form of [`last()`].
///
/// The first error stops pulling, even if a later element would have matched.
pub fn try_last<I, E, P>(input: I, pred: P) -> Result<Option<(I::Value, I::Key)>, E>
where
    I: Iterable,
    P: FnMut(&I::Value, &I::Key) -> Result<bool, E>,
{
    trace!(shape = %input.shape(), "last");
    input.into_cursor().feed_into(Last::new(pred))
}

/// Returns the value of the last element of `input` satisfying `pred(value, key)`.
///
/// # Examples
///
/// ```
/// let words = vec!["apple", "bean", "avocado", "corn"];
/// assert_eq!(polyiter::find_last(words, |w, _| w.starts_with('a')), Some("avocado"));
/// ```
#[inline]
pub fn find_last<I, P>(input: I, pred: P) -> Option<I::Value>
where
    I: Iterable,
    P: FnMut(&I::Value, &I::Key) -> bool,
{
    last(input, pred).map(|(value, _)| value)
}

/// The fallible form of [`find_last()`].
#[inline]
pub fn try_find_last<I, E, P>(input: I, pred: P) -> Result<Option<I::Value>, E>
where
    I: Iterable,
    P: FnMut(&I::Value, &I::Key) -> Result<bool, E>,
{
    try_last(input, pred).map(|found| found.map(|(value, _)| value))
}

#[cfg(test)]
mod tests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use super::*;
    use crate::test_utils::Counting;

    #[test]
    fn error_stops_pulling() {
        let mut counting = Counting::new(vec![4, 5, 6, 7]);
        let result = try_find_last(&mut counting, |&v, _| match v {
            6 => Err("six"),
            v => Ok(v > 4),
        });
        assert_eq!(result, Err("six"));
        assert_eq!(counting.pulls(), 3);
    }

    #[test]
    fn mapping_keys() {
        let map = indexmap::IndexMap::from([("a", 1), ("b", 2), ("c", 1)]);
        assert_eq!(last(map, |&v, _| v == 1), Some((1, "c")));
    }

    proptest! {
        #[test]
        fn agrees_with_iterator_rposition(nums in propvec(0_u8..4, ..=16)) {
            let expected = nums.iter().rposition(|&v| v == 0).map(|k| (0, k));
            prop_assert_eq!(last(nums, |&v, _| v == 0), expected);
        }
    }
}
