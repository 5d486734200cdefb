use std::{
    convert::Infallible,
    fmt::{self, Debug},
    ops::ControlFlow,
};

use tracing::trace;

use crate::{Collector, Cursor, Element, Iterable, collector::assert_collector};

use super::into_ok;

/// A collector that accumulates elements into a value using a fallible function.
///
/// This collector corresponds to [`Iterator::try_fold()`], except that
/// the accumulated value is mutated in place.
///
/// # Examples
///
/// ```
/// use polyiter::{prelude::*, iter::Fold};
///
/// let mut collector = Fold::new(0, |sum: &mut i32, v: i32, _: &usize| {
///     *sum = sum.checked_add(v).ok_or("overflow")?;
///     Ok(())
/// });
///
/// assert!(collector.collect(Element::new(i32::MAX - 1, 0)).is_continue());
/// assert!(collector.collect(Element::new(1, 1)).is_continue());
/// assert!(collector.collect(Element::new(1, 2)).is_break());
/// assert_eq!(collector.finish(), Err("overflow"));
/// ```
pub struct Fold<A, F, E> {
    accum: A,
    f: F,
    error: Option<E>,
}

impl<A, F, E> Fold<A, F, E> {
    /// Creates an instance of this collector with an initial value and an accumulating function.
    #[inline]
    pub const fn new<K, V>(init: A, f: F) -> Self
    where
        F: FnMut(&mut A, V, &K) -> Result<(), E>,
    {
        assert_collector::<_, K, V>(Self {
            accum: init,
            f,
            error: None,
        })
    }
}

impl<K, V, A, F, E> Collector<K, V> for Fold<A, F, E>
where
    F: FnMut(&mut A, V, &K) -> Result<(), E>,
{
    type Output = Result<A, E>;

    #[inline]
    fn collect(&mut self, element: Element<K, V>) -> ControlFlow<()> {
        match (self.f)(&mut self.accum, element.value, &element.key) {
            Ok(()) => ControlFlow::Continue(()),
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
            None => Ok(self.accum),
        }
    }
}

impl<A: Clone, F: Clone, E: Clone> Clone for Fold<A, F, E> {
    fn clone(&self) -> Self {
        Self {
            accum: self.accum.clone(),
            f: self.f.clone(),
            error: self.error.clone(),
        }
    }
}

impl<A: Debug, F, E: Debug> Debug for Fold<A, F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fold")
            .field("accum", &self.accum)
            .field("error", &self.error)
            .finish()
    }
}

/// Folds `input` left to right into `init`, calling `f(&mut accum, value, key)` for every element.
///
/// An empty input returns `init` untouched.
///
/// # Examples
///
/// ```
/// let total = polyiter::fold(vec![1, 2, 3], 10, |sum, v, _| *sum += v);
/// assert_eq!(total, 16);
///
/// assert_eq!(polyiter::fold(Vec::<i32>::new(), 10, |sum, v, _| *sum += v), 10);
/// ```
#[inline]
pub fn fold<I, A, F>(input: I, init: A, mut f: F) -> A
where
    I: Iterable,
    F: FnMut(&mut A, I::Value, &I::Key),
{
    into_ok(try_fold(input, init, |accum, value, key| {
        f(accum, value, key);
        Ok::<_, Infallible>(())
    }))
}

/// The fallible form of [`fold()`].
pub fn try_fold<I, A, E, F>(input: I, init: A, f: F) -> Result<A, E>
where
    I: Iterable,
    F: FnMut(&mut A, I::Value, &I::Key) -> Result<(), E>,
{
    trace!(shape = %input.shape(), "fold");
    input.into_cursor().feed_into(Fold::new(init, f))
}
