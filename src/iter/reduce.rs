use std::{
    fmt::{self, Debug},
    ops::ControlFlow,
};

use tracing::{debug, trace};

use crate::{
    Collector, Cursor, Element, InvalidOperation, IterError, Iterable, Result,
    collector::assert_collector,
};

/// A collector that reduces all elements into a single value
/// by repeatedly applying a fallible reduction function.
///
/// The first value becomes the accumulator and reduction starts from the second one.
/// Its [`Output`](Collector::Output) is `Ok(None)` if no element was collected.
///
/// This collector corresponds to [`Iterator::reduce()`].
///
/// # Examples
///
/// ```
/// use polyiter::{prelude::*, iter::Reduce};
///
/// let mut collector = Reduce::new(|a: i32, b, _: &usize| Ok::<_, ()>(a.max(b)));
///
/// assert!(collector.collect(Element::new(3, 0)).is_continue());
/// assert!(collector.collect(Element::new(8, 1)).is_continue());
/// assert!(collector.collect(Element::new(5, 2)).is_continue());
///
/// assert_eq!(collector.finish(), Ok(Some(8)));
/// ```
#[derive(Clone)]
pub struct Reduce<V, F, E> {
    accum: Option<V>,
    f: F,
    error: Option<E>,
}

impl<V, F, E> Reduce<V, F, E> {
    /// Creates an instance of this collector with a given reduction function.
    #[inline]
    pub const fn new<K>(f: F) -> Self
    where
        F: FnMut(V, V, &K) -> std::result::Result<V, E>,
    {
        assert_collector::<_, K, V>(Self {
            accum: None,
            f,
            error: None,
        })
    }
}

impl<K, V, F, E> Collector<K, V> for Reduce<V, F, E>
where
    F: FnMut(V, V, &K) -> std::result::Result<V, E>,
{
    type Output = std::result::Result<Option<V>, E>;

    fn collect(&mut self, element: Element<K, V>) -> ControlFlow<()> {
        let Some(accum) = self.accum.take() else {
            self.accum = Some(element.value);
            return ControlFlow::Continue(());
        };

        match (self.f)(accum, element.value, &element.key) {
            Ok(accum) => {
                self.accum = Some(accum);
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
            None => Ok(self.accum),
        }
    }
}

impl<V: Debug, F, E: Debug> Debug for Reduce<V, F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reduce")
            .field("accum", &self.accum)
            .field("error", &self.error)
            .finish()
    }
}

/// Reduces `input` left to right with `f(accum, value, key)`, seeding with its first value.
///
/// # Errors
///
/// [`InvalidOperation::NoInitialValue`] if `input` is empty.
/// Use [`fold()`](crate::fold) to reduce from an explicit seed.
///
/// # Examples
///
/// ```
/// use polyiter::{IterError, InvalidOperation};
///
/// let longest = polyiter::reduce(vec!["ab", "abcd", "abc"], |a, b, _| if b.len() > a.len() { b } else { a });
/// assert_eq!(longest, Ok("abcd"));
///
/// let empty = polyiter::reduce(Vec::<i32>::new(), |a, b, _| a + b);
/// assert_eq!(empty, Err(IterError::InvalidOperation(InvalidOperation::NoInitialValue("reduce"))));
/// ```
#[inline]
pub fn reduce<I, F>(input: I, mut f: F) -> Result<I::Value>
where
    I: Iterable,
    F: FnMut(I::Value, I::Value, &I::Key) -> I::Value,
{
    try_reduce(input, |accum, value, key| Ok(f(accum, value, key)))
}

/// The fallible form of [`reduce()`].
///
/// Errors of the callback and the error of an empty input share one type `E`,
/// which has to be able to hold an [`IterError`].
pub fn try_reduce<I, E, F>(input: I, f: F) -> std::result::Result<I::Value, E>
where
    I: Iterable,
    E: From<IterError>,
    F: FnMut(I::Value, I::Value, &I::Key) -> std::result::Result<I::Value, E>,
{
    trace!(shape = %input.shape(), "reduce");
    match input.into_cursor().feed_into(Reduce::new(f))? {
        Some(accum) => Ok(accum),
        None => {
            debug!("reduce rejected: empty input without initial value");
            Err(IterError::from(InvalidOperation::NoInitialValue("reduce")).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use super::*;
    use crate::test_utils::init_tracing;

    #[test]
    fn empty_without_seed_is_invalid() {
        init_tracing();
        let result = reduce(Vec::<i32>::new(), |a, b, _| a + b);
        assert!(result.unwrap_err().is_invalid_operation());
    }

    #[test]
    fn single_value_is_returned_as_is() {
        assert_eq!(reduce(vec![7], |_, _, _| unreachable!()), Ok(7));
    }

    #[derive(Debug, PartialEq)]
    enum Failure {
        Iter(IterError),
        Negative(i32),
    }

    impl From<IterError> for Failure {
        fn from(error: IterError) -> Self {
            Failure::Iter(error)
        }
    }

    #[test]
    fn callback_and_library_errors_share_a_type() {
        let result = try_reduce(vec![1, -2, 3], |a, b, _| {
            if b < 0 { Err(Failure::Negative(b)) } else { Ok(a + b) }
        });
        assert_eq!(result, Err(Failure::Negative(-2)));

        let result = try_reduce(Vec::<i32>::new(), |a, b, _| Ok::<_, Failure>(a + b));
        assert!(matches!(result, Err(Failure::Iter(error)) if error.is_invalid_operation()));
    }

    proptest! {
        #[test]
        fn agrees_with_iterator_reduce(nums in propvec(any::<i32>(), 1..=32)) {
            let expected = nums.iter().copied().reduce(|a, b| a ^ b);
            prop_assert_eq!(reduce(nums, |a, b, _| a ^ b).ok(), expected);
        }
    }
}
