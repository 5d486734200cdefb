use std::{
    convert::Infallible,
    fmt::{self, Debug},
    ops::ControlFlow,
};

use tracing::trace;

use crate::{Collector, Cursor, Element, Iterable, collector::assert_collector};

use super::into_ok;

/// Shared state of [`Any`] and [`All`]: the answer is `DEFAULT` until an element
/// makes the predicate return `!DEFAULT`.
#[derive(Clone)]
struct RawAllAny<P, E, const DEFAULT: bool> {
    pred: P,
    result: bool,
    error: Option<E>,
}

impl<P, E, const DEFAULT: bool> RawAllAny<P, E, DEFAULT> {
    #[inline]
    const fn new(pred: P) -> Self {
        Self {
            pred,
            result: DEFAULT,
            error: None,
        }
    }

    #[inline]
    fn collect<K, V>(&mut self, element: Element<K, V>) -> ControlFlow<()>
    where
        P: FnMut(V, &K) -> Result<bool, E>,
    {
        match (self.pred)(element.value, &element.key) {
            Ok(answer) if answer == DEFAULT => ControlFlow::Continue(()),
            Ok(_) => {
                self.result = !DEFAULT;
                ControlFlow::Break(())
            }
            Err(error) => {
                self.error = Some(error);
                ControlFlow::Break(())
            }
        }
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if self.result == DEFAULT && self.error.is_none() {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }

    #[inline]
    fn finish(self) -> Result<bool, E> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.result),
        }
    }
}

/// A [`Collector`] that tests whether any element satisfies a fallible predicate.
///
/// Its answer is `false` until an element makes the predicate `true`,
/// at which point it returns [`Break`](ControlFlow::Break).
/// Its [`Output`](Collector::Output) is the answer, or the first error.
///
/// This collector corresponds to [`Iterator::any()`].
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
/// use polyiter::{prelude::*, iter::Any};
///
/// let mut collector = Any::new(|v: i32, _: &usize| Ok::<_, Infallible>(v < 0));
///
/// assert!(collector.collect(Element::new(1, 0)).is_continue());
/// assert!(collector.collect(Element::new(-1, 1)).is_break());
/// assert_eq!(collector.finish(), Ok(true));
/// ```
#[derive(Clone)]
pub struct Any<P, E> {
    inner: RawAllAny<P, E, false>,
}

/// A [`Collector`] that tests whether every element satisfies a fallible predicate.
///
/// Its answer is `true` until an element makes the predicate `false`,
/// at which point it returns [`Break`](ControlFlow::Break).
/// Its [`Output`](Collector::Output) is the answer, or the first error.
///
/// This collector corresponds to [`Iterator::all()`].
#[derive(Clone)]
pub struct All<P, E> {
    inner: RawAllAny<P, E, true>,
}

macro_rules! all_any_impl {
    ($name:ident) => {
        impl<P, E> $name<P, E> {
            /// Creates an instance of this collector with a given predicate.
            #[inline]
            pub const fn new<K, V>(pred: P) -> Self
            where
                P: FnMut(V, &K) -> Result<bool, E>,
            {
                assert_collector::<_, K, V>(Self {
                    inner: RawAllAny::new(pred),
                })
            }

            /// Returns the current answer.
            #[inline]
            pub const fn get(&self) -> bool {
                self.inner.result
            }
        }

        impl<K, V, P, E> Collector<K, V> for $name<P, E>
        where
            P: FnMut(V, &K) -> Result<bool, E>,
        {
            type Output = Result<bool, E>;

            #[inline]
            fn collect(&mut self, element: Element<K, V>) -> ControlFlow<()> {
                self.inner.collect(element)
            }

            #[inline]
            fn finish(self) -> Self::Output {
                self.inner.finish()
            }

            #[inline]
            fn break_hint(&self) -> ControlFlow<()> {
                self.inner.break_hint()
            }
        }

        impl<P, E: Debug> Debug for $name<P, E> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("result", &self.get())
                    .field("error", &self.inner.error)
                    .finish()
            }
        }
    };
}

all_any_impl!(Any);
all_any_impl!(All);

/// Whether `pred(value, key)` holds for at least one element of `input`.
///
/// Pulling stops at the first match. An empty input gives `false`.
///
/// # Examples
///
/// ```
/// assert!(polyiter::some(vec![1, 5, 2], |v, _| v > 4));
/// assert!(!polyiter::some(Vec::<i32>::new(), |_, _| true));
/// ```
#[inline]
pub fn some<I, P>(input: I, mut pred: P) -> bool
where
    I: Iterable,
    P: FnMut(I::Value, &I::Key) -> bool,
{
    into_ok(try_some(input, |value, key| Ok::<_, Infallible>(pred(value, key))))
}

/// The fallible form of [`some()`].
///
/// # Examples
///
/// ```
/// let parsed = polyiter::try_some(vec!["4", "x", "9"], |s, _| s.parse::<u8>().map(|n| n > 8));
/// assert!(parsed.is_err());
/// ```
pub fn try_some<I, E, P>(input: I, pred: P) -> Result<bool, E>
where
    I: Iterable,
    P: FnMut(I::Value, &I::Key) -> Result<bool, E>,
{
    trace!(shape = %input.shape(), "some");
    input.into_cursor().feed_into(Any::new(pred))
}

/// Whether `pred(value, key)` holds for every element of `input`.
///
/// Pulling stops at the first element failing it. An empty input gives `true`.
///
/// # Examples
///
/// ```
/// assert!(polyiter::every(vec![2, 4], |v, _| v % 2 == 0));
/// assert!(polyiter::every(Vec::<i32>::new(), |_, _| false));
/// ```
#[inline]
pub fn every<I, P>(input: I, mut pred: P) -> bool
where
    I: Iterable,
    P: FnMut(I::Value, &I::Key) -> bool,
{
    into_ok(try_every(input, |value, key| Ok::<_, Infallible>(pred(value, key))))
}

/// The fallible form of [`every()`].
pub fn try_every<I, E, P>(input: I, pred: P) -> Result<bool, E>
where
    I: Iterable,
    P: FnMut(I::Value, &I::Key) -> Result<bool, E>,
{
    trace!(shape = %input.shape(), "every");
    input.into_cursor().feed_into(All::new(pred))
}
