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

/// A collector that splits elements between two [`Accumulator`]s depending on a fallible predicate.
///
/// Elements satisfying the predicate go to the first accumulator, the rest to the second.
/// Its [`Output`](Collector::Output) is a pair of both finalized accumulators, in that order,
/// or the first error.
pub struct Partition<A, P, E> {
    kept: A,
    rejected: A,
    pred: P,
    error: Option<E>,
}

impl<A, P, E> Partition<A, P, E> {
    /// Creates an instance of this collector.
    #[inline]
    pub const fn new<K, V>(kept: A, rejected: A, pred: P) -> Self
    where
        A: Accumulator<K, V>,
        P: FnMut(&V, &K) -> Result<bool, E>,
    {
        assert_collector::<_, K, V>(Self {
            kept,
            rejected,
            pred,
            error: None,
        })
    }
}

impl<K, V, A, P, E> Collector<K, V> for Partition<A, P, E>
where
    A: Accumulator<K, V>,
    P: FnMut(&V, &K) -> Result<bool, E>,
{
    type Output = Result<(A::Output, A::Output), E>;

    fn collect(&mut self, element: Element<K, V>) -> ControlFlow<()> {
        let side = match (self.pred)(&element.value, &element.key) {
            Ok(true) => &mut self.kept,
            Ok(false) => &mut self.rejected,
            Err(error) => {
                self.error = Some(error);
                return ControlFlow::Break(());
            }
        };
        side.insert(element.value, element.key, element.hint);
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Self::Output {
        match self.error {
            Some(error) => Err(error),
            None => Ok((self.kept.finalize(), self.rejected.finalize())),
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

impl<A: Debug, P, E: Debug> Debug for Partition<A, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partition")
            .field("kept", &self.kept)
            .field("rejected", &self.rejected)
            .field("error", &self.error)
            .finish()
    }
}

/// Splits `input` into the elements satisfying `pred(value, key)` and the rest,
/// both in containers of the same kind as `input`.
///
/// Keys are kept on both sides.
///
/// # Examples
///
/// ```
/// let (even, odd) = polyiter::partition(vec![1, 2, 3, 4, 5], |v, _| v % 2 == 0);
/// assert_eq!(even, [2, 4]);
/// assert_eq!(odd, [1, 3, 5]);
/// ```
pub fn partition<I, P>(input: I, mut pred: P) -> (Rebuilt<I, I::Value>, Rebuilt<I, I::Value>)
where
    I: Iterable,
    KindOf<I>: Materializer<I::Key, I::Value>,
    P: FnMut(&I::Value, &I::Key) -> bool,
{
    into_ok(try_partition(input, |value, key| Ok::<_, Infallible>(pred(value, key))))
}

/// The fallible form of [`partition()`].
#[allow(clippy::type_complexity)]
pub fn try_partition<I, E, P>(
    input: I,
    pred: P,
) -> Result<(Rebuilt<I, I::Value>, Rebuilt<I, I::Value>), E>
where
    I: Iterable,
    KindOf<I>: Materializer<I::Key, I::Value>,
    P: FnMut(&I::Value, &I::Key) -> Result<bool, E>,
{
    trace!(shape = %input.shape(), "partition");
    let cursor = input.into_cursor();
    let kept = accumulator_for::<_, I::Value>(&cursor);
    let rejected = accumulator_for::<_, I::Value>(&cursor);
    cursor.feed_into(Partition::new(kept, rejected, pred))
}
