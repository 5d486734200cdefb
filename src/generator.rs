//! Zero-argument factories as inputs.
//!
//! A [`Generator`] is classified as [`ShapeTag::GeneratorFactory`]. Adapting it invokes
//! the factory and adapts whatever it returned, so every operation walks a fresh result.
//! Nothing is cached between adaptations.

use std::fmt::{self, Debug};

use tracing::trace;

use crate::{Iterable, ShapeTag};

/// A factory producing a fresh input on every adaptation.
///
/// This struct is created by [`generator()`].
#[derive(Clone, Copy)]
pub struct Generator<F> {
    factory: F,
}

/// Wraps a zero-argument factory as an input.
///
/// Adapting `&Generator` leaves the generator usable, so an operation can be run
/// over it any number of times. Each run invokes `factory` exactly once.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use polyiter::prelude::*;
///
/// let calls = Cell::new(0);
/// let squares = generator(|| {
///     calls.set(calls.get() + 1);
///     (1..=3).map(|n| n * n).collect::<Vec<_>>()
/// });
///
/// assert_eq!(classify(&squares), ShapeTag::GeneratorFactory);
/// assert_eq!(polyiter::sum(&squares).unwrap(), 14);
/// assert_eq!(polyiter::map(&squares, |v, _| v + 1), [2, 5, 10]);
/// assert_eq!(calls.get(), 2);
/// ```
#[inline]
pub fn generator<F, R>(factory: F) -> Generator<F>
where
    F: Fn() -> R,
    R: Iterable,
{
    Generator { factory }
}

impl<F, R> Generator<F>
where
    F: Fn() -> R,
    R: Iterable,
{
    #[inline]
    fn invoke(&self) -> R {
        trace!("invoking generator factory");
        (self.factory)()
    }
}

impl<F, R> Iterable for Generator<F>
where
    F: Fn() -> R,
    R: Iterable,
{
    type Key = R::Key;
    type Value = R::Value;
    type Cursor = R::Cursor;

    #[inline]
    fn shape(&self) -> ShapeTag {
        ShapeTag::GeneratorFactory
    }

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        self.invoke().into_cursor()
    }
}

impl<F, R> Iterable for &Generator<F>
where
    F: Fn() -> R,
    R: Iterable,
{
    type Key = R::Key;
    type Value = R::Value;
    type Cursor = R::Cursor;

    #[inline]
    fn shape(&self) -> ShapeTag {
        ShapeTag::GeneratorFactory
    }

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        self.invoke().into_cursor()
    }
}

impl<F> Debug for Generator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, collections::BTreeMap};

    use crate::{prelude::*, test_utils::init_tracing};

    #[test]
    fn each_adaptation_invokes_once() {
        init_tracing();
        let calls = Cell::new(0);
        let make = generator(|| {
            calls.set(calls.get() + 1);
            vec![calls.get(); 2]
        });

        let first = (&make).into_cursor();
        assert_eq!(calls.get(), 1);
        let second = (&make).into_cursor();
        assert_eq!(calls.get(), 2);

        assert_eq!(crate::to_vec(first), [1, 1]);
        assert_eq!(crate::to_vec(second), [2, 2]);
    }

    #[test]
    fn result_decides_the_output_kind() {
        let make = generator(|| BTreeMap::from([("k", 1)]));
        let mapped = crate::map(&make, |v, _| v * 3);
        assert_eq!(mapped, BTreeMap::from([("k", 3)]));
    }

    #[test]
    fn generator_of_cursor_is_fresh_each_time() {
        let make = generator(|| crate::from_iter(0..2));
        assert_eq!(crate::to_vec(&make), [0, 1]);
        assert_eq!(crate::to_vec(&make), [0, 1]);
    }
}
