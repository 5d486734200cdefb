//! Arithmetic progressions as lazy cursors.

use num_traits::{Bounded, Num};
use tracing::debug;

use crate::{Cursor, Element, InvalidOperation, Result, kind};

/// A lazy cursor over `start, start + step, start + 2 * step, ...` up to a stop bound.
///
/// Keys are 0-based positions. A step that would overflow `T` ends the progression
/// instead of wrapping or panicking.
///
/// This struct is created by [`range()`] and [`range_inclusive()`].
#[derive(Debug, Clone)]
pub struct Range<T> {
    next: Option<T>,
    stop: T,
    step: T,
    inclusive: bool,
    position: usize,
}

/// Creates a lazy cursor from `start` towards `stop`, excluding `stop`.
///
/// # Errors
///
/// [`InvalidOperation::ZeroStep`] if `step` is zero, and [`InvalidOperation::StepAwayFromStop`]
/// if `step` has the wrong sign to ever reach `stop` from `start`.
///
/// # Examples
///
/// ```
/// let evens = polyiter::to_vec(polyiter::range(0, 10, 2)?);
/// assert_eq!(evens, [0, 2, 4, 6, 8]);
///
/// let down = polyiter::to_vec(polyiter::range(3, 0, -1)?);
/// assert_eq!(down, [3, 2, 1]);
///
/// assert!(polyiter::range(0, 10, 0).is_err());
/// assert!(polyiter::range(0, 10, -1).is_err());
/// # Ok::<(), polyiter::IterError>(())
/// ```
pub fn range<T>(start: T, stop: T, step: T) -> Result<Range<T>>
where
    T: Num + Bounded + PartialOrd + Copy,
{
    Range::new(start, stop, step, false)
}

/// Creates a lazy cursor from `start` towards `stop`, including `stop` if it is reached exactly.
///
/// # Errors
///
/// The same as [`range()`].
///
/// # Examples
///
/// ```
/// let evens = polyiter::to_vec(polyiter::range_inclusive(0, 10, 2)?);
/// assert_eq!(evens, [0, 2, 4, 6, 8, 10]);
///
/// let single = polyiter::to_vec(polyiter::range_inclusive(5_u8, 5, 1)?);
/// assert_eq!(single, [5]);
/// # Ok::<(), polyiter::IterError>(())
/// ```
pub fn range_inclusive<T>(start: T, stop: T, step: T) -> Result<Range<T>>
where
    T: Num + Bounded + PartialOrd + Copy,
{
    Range::new(start, stop, step, true)
}

impl<T> Range<T>
where
    T: Num + Bounded + PartialOrd + Copy,
{
    fn new(start: T, stop: T, step: T, inclusive: bool) -> Result<Self> {
        let zero = T::zero();
        if step == zero {
            debug!("range rejected: zero step");
            return Err(InvalidOperation::ZeroStep.into());
        }
        if start != stop && (stop > start) != (step > zero) {
            debug!("range rejected: step points away from the stop bound");
            return Err(InvalidOperation::StepAwayFromStop.into());
        }

        let mut range = Self {
            next: None,
            stop,
            step,
            inclusive,
            position: 0,
        };
        range.next = range.admits(start).then_some(start);
        Ok(range)
    }

    fn ascending(&self) -> bool {
        self.step > T::zero()
    }

    /// Whether `value` lies within the bound.
    fn admits(&self, value: T) -> bool {
        match (self.ascending(), self.inclusive) {
            (true, false) => value < self.stop,
            (true, true) => value <= self.stop,
            (false, false) => value > self.stop,
            (false, true) => value >= self.stop,
        }
    }

    /// The value after `value`, if it lies within the bound.
    fn successor(&self, value: T) -> Option<T> {
        let overflows = if self.ascending() {
            value > T::max_value() - self.step
        } else {
            value < T::min_value() - self.step
        };
        if overflows {
            return None;
        }
        let next = value + self.step;
        // A float step below the spacing at `value` leaves it unchanged.
        let advances = if self.ascending() { next > value } else { next < value };
        (advances && self.admits(next)).then_some(next)
    }
}

impl<T> Cursor for Range<T>
where
    T: Num + Bounded + PartialOrd + Copy,
{
    type Key = usize;
    type Value = T;
    type Kind = kind::Sequence;

    fn pull(&mut self) -> Option<Element<usize, T>> {
        let value = self.next.take()?;
        self.next = self.successor(value);
        let key = self.position;
        self.position += 1;
        Some(Element::new(value, key))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next.is_some() {
            (1, None)
        } else {
            (0, Some(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::IterError;

    #[test]
    fn exclusive_stop() {
        let values = crate::to_vec(range(0, 10, 2).unwrap());
        assert_eq!(values, [0, 2, 4, 6, 8]);
    }

    #[test]
    fn inclusive_stop() {
        let values = crate::to_vec(range_inclusive(0, 10, 2).unwrap());
        assert_eq!(values, [0, 2, 4, 6, 8, 10]);
        let values = crate::to_vec(range_inclusive(0, 9, 2).unwrap());
        assert_eq!(values, [0, 2, 4, 6, 8]);
    }

    #[test]
    fn empty_when_start_is_stop() {
        let mut cursor = range(4, 4, 1).unwrap();
        assert_eq!(cursor.pull(), None);
        assert_eq!(cursor.pull(), None);
    }

    #[test]
    fn keys_are_positions() {
        let mut cursor = range(10, 13, 1).unwrap();
        assert_eq!(cursor.pull().map(Element::into_parts), Some((10, 0)));
        assert_eq!(cursor.pull().map(Element::into_parts), Some((11, 1)));
        assert_eq!(cursor.pull().map(Element::into_parts), Some((12, 2)));
        assert_eq!(cursor.pull(), None);
    }

    #[test]
    fn rejects_bad_steps() {
        assert_eq!(
            range(0, 5, 0).unwrap_err(),
            IterError::InvalidOperation(InvalidOperation::ZeroStep)
        );
        assert_eq!(
            range(5, 0, 1).unwrap_err(),
            IterError::InvalidOperation(InvalidOperation::StepAwayFromStop)
        );
        assert!(range_inclusive(0.0, 1.0, -0.5).is_err());
    }

    #[test]
    fn no_overflow_at_the_limit() {
        let values = crate::to_vec(range_inclusive(250_u8, 255, 5).unwrap());
        assert_eq!(values, [250, 255]);
        let values = crate::to_vec(range_inclusive(-126_i8, i8::MIN, -1).unwrap());
        assert_eq!(values, [-126, -127, -128]);
    }

    #[test]
    fn floats() {
        let values = crate::to_vec(range(0.0, 1.0, 0.25).unwrap());
        assert_eq!(values, [0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn float_step_below_spacing_ends() {
        assert_eq!(crate::take(range(1e16_f64, 1e17, 1.0).unwrap(), 4), [1e16]);
        assert_eq!(crate::to_vec(range(-1e16_f64, -1e17, -1.0).unwrap()), [-1e16]);
    }

    proptest! {
        #[test]
        fn agrees_with_step_by(start in -50_i32..50, len in 0_i32..50, step in 1_i32..7) {
            let stop = start + len;
            let expected: Vec<_> = (start..stop).step_by(step as usize).collect();
            prop_assert_eq!(crate::to_vec(range(start, stop, step).unwrap()), expected);

            let expected: Vec<_> = (start..=stop).step_by(step as usize).collect();
            prop_assert_eq!(crate::to_vec(range_inclusive(start, stop, step).unwrap()), expected);
        }
    }
}
