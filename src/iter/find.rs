use std::{
    convert::Infallible,
    fmt::{self, Debug},
    ops::ControlFlow,
};

use tracing::trace;

use crate::{Collector, Cursor, Element, Iterable, collector::assert_collector};

use super::into_ok;

/// A collector that searches for the first element satisfying a fallible predicate.
///
/// If no matching element has been found, its [`Output`](Collector::Output) is `Ok(None)`.
/// When the collector encounters an element that makes the predicate return `true`,
/// it returns [`Break`](ControlFlow::Break), and the output becomes that element's `(value, key)`.
/// A predicate error also stops it, and becomes the output.
///
/// This collector corresponds to [`Iterator::find()`].
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
/// use polyiter::{prelude::*, iter::First};
///
/// let mut collector = First::new(|&v: &i32, _: &usize| Ok::<_, Infallible>(v % 3 == 0));
///
/// assert!(collector.collect(Element::new(1, 0)).is_continue());
/// assert!(collector.collect(Element::new(5, 1)).is_continue());
///
/// // Found!
/// assert!(collector.collect(Element::new(6, 2)).is_break());
///
/// assert_eq!(collector.finish(), Ok(Some((6, 2))));
/// ```
#[derive(Clone)]
pub struct First<K, V, P, E> {
    state: State<K, V, P, E>,
}

#[derive(Clone)]
enum State<K, V, P, E> {
    Searching(P),
    Found(V, K),
    Failed(E),
}

impl<K, V, P, E> First<K, V, P, E>
where
    P: FnMut(&V, &K) -> Result<bool, E>,
{
    /// Creates an instance of this collector with a given predicate.
    #[inline]
    pub const fn new(pred: P) -> Self {
        assert_collector::<_, K, V>(Self {
            state: State::Searching(pred),
        })
    }
}

impl<K, V, P, E> Collector<K, V> for First<K, V, P, E>
where
    P: FnMut(&V, &K) -> Result<bool, E>,
{
    type Output = Result<Option<(V, K)>, E>;

    fn collect(&mut self, element: Element<K, V>) -> ControlFlow<()> {
        let State::Searching(pred) = &mut self.state else {
            return ControlFlow::Break(());
        };

        match pred(&element.value, &element.key) {
            Ok(true) => {
                self.state = State::Found(element.value, element.key);
                ControlFlow::Break(())
            }
            Ok(false) => ControlFlow::Continue(()),
            Err(error) => {
                self.state = State::Failed(error);
                ControlFlow::Break(())
            }
        }
    }

    #[inline]
    fn finish(self) -> Self::Output {
        match self.state {
            State::Found(value, key) => Ok(Some((value, key))),
            State::Searching(_) => Ok(None),
            State::Failed(error) => Err(error),
        }
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if matches!(self.state, State::Searching(_)) {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }
}

impl<K: Debug, V: Debug, P, E: Debug> Debug for First<K, V, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (found, error) = match &self.state {
            State::Found(value, key) => (Some((value, key)), None),
            State::Searching(_) => (None, None),
            State::Failed(error) => (None, Some(error)),
        };
        f.debug_struct("First")
            .field("found", &found)
            .field("error", &error)
            .finish()
    }
}

/// Returns the `(value, key)` of the first element of `input` satisfying `pred(value, key)`.
///
/// Pulling stops at the match. `None` means nothing matched, which stays distinct from
/// a match whose value is itself `None`.
///
/// # Examples
///
/// ```
/// assert_eq!(polyiter::first(vec![3, 8, 9], |&v, _| v > 5), Some((8, 1)));
///
/// let options = vec![Some(1), None];
/// assert_eq!(polyiter::first(options, |v, _| v.is_none()), Some((None, 1)));
/// ```
#[inline]
pub fn first<I, P>(input: I, mut pred: P) -> Option<(I::Value, I::Key)>
where
    I: Iterable,
    P: FnMut(&I::Value, &I::Key) -> bool,
{
    into_ok(try_first(input, |value, key| Ok::<_, Infallible>(pred(value, key))))
}

/// The fallible form of [`first()`].
///
/// # Examples
///
/// ```
/// let found = polyiter::try_first(vec!["7", "12", "x"], |s, _| s.parse::<u8>().map(|n| n > 9));
/// assert_eq!(found, Ok(Some(("12", 1))));
/// ```
pub fn try_first<I, E, P>(input: I, pred: P) -> Result<Option<(I::Value, I::Key)>, E>
where
    I: Iterable,
    P: FnMut(&I::Value, &I::Key) -> Result<bool, E>,
{
    trace!(shape = %input.shape(), "first");
    input.into_cursor().feed_into(First::new(pred))
}

/// Returns the value of the first element of `input` satisfying `pred(value, key)`.
///
/// Pulling stops at the match.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// let ages = BTreeMap::from([("ana", 31), ("bo", 17), ("cy", 12)]);
/// assert_eq!(polyiter::find(&ages, |&&v, _| v < 18), Some(&17));
/// ```
#[inline]
pub fn find<I, P>(input: I, pred: P) -> Option<I::Value>
where
    I: Iterable,
    P: FnMut(&I::Value, &I::Key) -> bool,
{
    first(input, pred).map(|(value, _)| value)
}

/// The fallible form of [`find()`].
#[inline]
pub fn try_find<I, E, P>(input: I, pred: P) -> Result<Option<I::Value>, E>
where
    I: Iterable,
    P: FnMut(&I::Value, &I::Key) -> Result<bool, E>,
{
    try_first(input, pred).map(|found| found.map(|(value, _)| value))
}

#[cfg(test)]
mod tests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use super::*;
    use crate::test_utils::Counting;

    #[test]
    fn stops_at_the_match() {
        let mut counting = Counting::new(vec![10, 20, 30, 40]);
        assert_eq!(first(&mut counting, |&v, _| v >= 20), Some((20, 1)));
        assert_eq!(counting.pulls(), 2);
        // The rest is still there.
        assert_eq!(crate::to_vec(&mut counting), [30, 40]);
    }

    #[test]
    fn error_stops_the_search() {
        let mut counting = Counting::new(vec![1, 2, 3]);
        let result = try_find(&mut counting, |&v, _| match v {
            2 => Err(v * 10),
            _ => Ok(false),
        });
        assert_eq!(result, Err(20));
        assert_eq!(counting.pulls(), 2);
    }

    #[test]
    fn no_match() {
        assert_eq!(find(vec![1, 2], |_, _| false), None);
    }

    proptest! {
        #[test]
        fn agrees_with_iterator_position(nums in propvec(any::<u8>(), ..=16), needle in any::<u8>()) {
            let expected = nums.iter().position(|&v| v == needle).map(|k| (needle, k));
            prop_assert_eq!(first(nums, |&v, _| v == needle), expected);
        }
    }
}
