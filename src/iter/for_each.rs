use std::{
    convert::Infallible,
    fmt::{self, Debug},
    ops::ControlFlow,
};

use tracing::trace;

use crate::{Collector, Cursor, Element, Iterable, collector::assert_collector};

use super::into_ok;

/// A collector that calls a fallible function on every element, stopping at the first error.
///
/// Its [`Output`](Collector::Output) is `Ok(())`, or the first error.
///
/// # Examples
///
/// ```
/// use polyiter::{prelude::*, iter::ForEach};
///
/// let mut seen = vec![];
/// let mut collector = ForEach::new(|v: i32, k: &usize| {
///     if v < 0 {
///         return Err(*k);
///     }
///     seen.push(v);
///     Ok(())
/// });
///
/// assert!(collector.collect(Element::new(1, 0)).is_continue());
/// assert!(collector.collect(Element::new(-1, 1)).is_break());
/// assert_eq!(collector.finish(), Err(1));
/// assert_eq!(seen, [1]);
/// ```
pub struct ForEach<F, E> {
    f: F,
    error: Option<E>,
}

impl<F, E> ForEach<F, E> {
    /// Creates an instance of this collector with a given function.
    #[inline]
    pub const fn new<K, V>(f: F) -> Self
    where
        F: FnMut(V, &K) -> Result<(), E>,
    {
        assert_collector::<_, K, V>(Self { f, error: None })
    }
}

impl<K, V, F, E> Collector<K, V> for ForEach<F, E>
where
    F: FnMut(V, &K) -> Result<(), E>,
{
    type Output = Result<(), E>;

    #[inline]
    fn collect(&mut self, element: Element<K, V>) -> ControlFlow<()> {
        match (self.f)(element.value, &element.key) {
            Ok(()) => ControlFlow::Continue(()),
            Err(error) => {
                self.error = Some(error);
                ControlFlow::Break(())
            }
        }
    }

    #[inline]
    fn finish(self) -> Self::Output {
        self.error.map_or(Ok(()), Err)
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

impl<F, E: Debug> Debug for ForEach<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForEach")
            .field("error", &self.error)
            .finish()
    }
}

/// Calls `f(value, key)` for every element of `input`, in cursor order.
///
/// # Examples
///
/// ```
/// let mut total = 0;
/// polyiter::for_each(vec![1, 2, 3], |v, _| total += v);
/// assert_eq!(total, 6);
/// ```
#[inline]
pub fn for_each<I, F>(input: I, mut f: F)
where
    I: Iterable,
    F: FnMut(I::Value, &I::Key),
{
    into_ok(try_for_each(input, |value, key| {
        f(value, key);
        Ok::<_, Infallible>(())
    }));
}

/// Calls `f(value, key)` for every element of `input`, stopping at the first error and returning it.
///
/// # Examples
///
/// ```
/// let mut seen = vec![];
/// let result = polyiter::try_for_each(vec!["1", "x", "3"], |v, _| {
///     seen.push(v.parse::<i32>()?);
///     Ok::<_, std::num::ParseIntError>(())
/// });
///
/// assert!(result.is_err());
/// assert_eq!(seen, [1]);
/// ```
pub fn try_for_each<I, E, F>(input: I, f: F) -> Result<(), E>
where
    I: Iterable,
    F: FnMut(I::Value, &I::Key) -> Result<(), E>,
{
    trace!(shape = %input.shape(), "for_each");
    input.into_cursor().feed_into(ForEach::new(f))
}

/// Pulls every element of `input` and discards it.
///
/// This is mostly useful to run the side effects of a lazy cursor.
///
/// # Examples
///
/// ```
/// use polyiter::prelude::*;
///
/// let mut log = vec![];
/// polyiter::exhaust(polyiter::imap(vec![1, 2], |v, _| log.push(v)));
/// assert_eq!(log, [1, 2]);
/// ```
#[inline]
pub fn exhaust<I>(input: I)
where
    I: Iterable,
{
    for_each(input, |_, _| {});
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::test_utils::Counting;

    #[test]
    fn empty_input_makes_no_call() {
        let mut calls = 0;
        for_each(Vec::<i32>::new(), |_, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn passes_keys() {
        let map = BTreeMap::from([("a", 1), ("b", 2)]);
        let mut pairs = vec![];
        for_each(&map, |v, k| pairs.push((**k, *v)));
        assert_eq!(pairs, [("a", 1), ("b", 2)]);
    }

    #[test]
    fn error_stops_pulling() {
        let mut counting = Counting::new(vec![1, 2, 3, 4]);
        let result = try_for_each(&mut counting, |v, _| if v == 2 { Err("two") } else { Ok(()) });
        assert_eq!(result, Err("two"));
        assert_eq!(counting.pulls(), 2);
    }

    #[test]
    fn exhaust_drains_a_cursor() {
        let mut counting = Counting::new(vec![1, 2, 3]);
        exhaust(&mut counting);
        assert_eq!(counting.pull(), None);
    }
}
