use std::{
    convert::Infallible,
    ops::{Add, AddAssign},
};

use tracing::{debug, trace};

use crate::{Cursor, InvalidOperation, Iterable, Result};

use super::{Reduce, fold, into_ok};

/// Adds up the values of `input` with `+`, starting from the first value.
///
/// Addition keeps its native meaning for the value type: nothing is coerced.
///
/// # Errors
///
/// [`InvalidOperation::NoInitialValue`] if `input` is empty. Use [`sum_from()`] to start from a seed.
///
/// # Examples
///
/// ```
/// assert_eq!(polyiter::sum(vec![10, 20, 30, 40, 50]), Ok(150));
/// assert!(polyiter::sum(Vec::<f64>::new()).is_err());
/// ```
pub fn sum<I>(input: I) -> Result<I::Value>
where
    I: Iterable,
    I::Value: Add<Output = I::Value>,
{
    trace!(shape = %input.shape(), "sum");
    let reduce = Reduce::new(|a: I::Value, b, _: &I::Key| Ok::<_, Infallible>(a + b));
    match into_ok(input.into_cursor().feed_into(reduce)) {
        Some(total) => Ok(total),
        None => {
            debug!("sum rejected: empty input without initial value");
            Err(InvalidOperation::NoInitialValue("sum").into())
        }
    }
}

/// Adds every value of `input` into `seed` with `+=`.
///
/// # Examples
///
/// ```
/// assert_eq!(polyiter::sum_from(vec![10, 20, 30], 5), 65);
/// assert_eq!(polyiter::sum_from(Vec::<u8>::new(), 5), 5);
///
/// let sentence = polyiter::sum_from(vec!["to", " ", "be"], String::new());
/// assert_eq!(sentence, "to be");
/// ```
#[inline]
pub fn sum_from<I, A>(input: I, seed: A) -> A
where
    I: Iterable,
    A: AddAssign<I::Value>,
{
    fold(input, seed, |total, value, _| *total += value)
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::IterError;

    #[test]
    fn sums_a_mapping() {
        let map = IndexMap::from([("a", 1.5), ("b", 2.5)]);
        assert_eq!(sum(map), Ok(4.0));
    }

    #[test]
    fn sums_borrowed_values_from_a_seed() {
        let values = vec![1, 2, 3];
        assert_eq!(sum_from(&values, 0), 6);
    }

    #[test]
    fn empty_error_names_sum() {
        let error = sum(Vec::<i32>::new()).unwrap_err();
        assert_eq!(error, IterError::from(InvalidOperation::NoInitialValue("sum")));
    }
}
