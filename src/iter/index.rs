use std::{borrow::Borrow, convert::Infallible};

use tracing::{debug, trace};

use crate::{Cursor, IterError, Iterable, Result, ShapeTag};

use super::{First, Last, into_ok};

/// Rejects one-shot inputs, which cannot be searched for a position safely.
fn check_repeatable<I>(operation: &'static str, input: &I) -> Result<()>
where
    I: Iterable,
{
    let shape = input.shape();
    trace!(%shape, "{operation}");
    if shape == ShapeTag::ExternalCursor {
        debug!(%shape, "{operation} rejected: input is a one-shot cursor");
        return Err(IterError::UnsupportedShape { operation, shape });
    }
    Ok(())
}

/// Returns the key of the first element of `input` satisfying `pred(value, key)`,
/// or `None` if nothing matches.
///
/// Pulling stops at the match.
///
/// # Errors
///
/// [`IterError::UnsupportedShape`] if `input` is classified as an external cursor
/// (a native iterator, or any [`Cursor`], lazy cursors included).
///
/// # Examples
///
/// ```
/// use polyiter::from_iter;
///
/// assert_eq!(polyiter::find_index(vec![5, 6, 7], |&v, _| v > 5), Ok(Some(1)));
/// assert_eq!(polyiter::find_index(vec![5, 6, 7], |&v, _| v > 9), Ok(None));
///
/// let one_shot = from_iter(vec![5, 6, 7]);
/// assert!(polyiter::find_index(one_shot, |&v, _| v > 5).unwrap_err().is_unsupported_shape());
/// ```
pub fn find_index<I, P>(input: I, mut pred: P) -> Result<Option<I::Key>>
where
    I: Iterable,
    P: FnMut(&I::Value, &I::Key) -> bool,
{
    try_find_index(input, |value, key| Ok::<_, IterError>(pred(value, key)))
}

/// The fallible form of [`find_index()`].
///
/// Errors of the callback and the rejection of a one-shot input share one type `E`,
/// which has to be able to hold an [`IterError`].
pub fn try_find_index<I, E, P>(input: I, pred: P) -> std::result::Result<Option<I::Key>, E>
where
    I: Iterable,
    E: From<IterError>,
    P: FnMut(&I::Value, &I::Key) -> std::result::Result<bool, E>,
{
    check_repeatable("find_index", &input)?;
    let found = input.into_cursor().feed_into(First::new(pred))?;
    Ok(found.map(|(_, key)| key))
}

/// Returns the key of the last element of `input` satisfying `pred(value, key)`,
/// or `None` if nothing matches.
///
/// # Errors
///
/// The same as [`find_index()`].
pub fn find_last_index<I, P>(input: I, mut pred: P) -> Result<Option<I::Key>>
where
    I: Iterable,
    P: FnMut(&I::Value, &I::Key) -> bool,
{
    try_find_last_index(input, |value, key| Ok::<_, IterError>(pred(value, key)))
}

/// The fallible form of [`find_last_index()`].
pub fn try_find_last_index<I, E, P>(input: I, pred: P) -> std::result::Result<Option<I::Key>, E>
where
    I: Iterable,
    E: From<IterError>,
    P: FnMut(&I::Value, &I::Key) -> std::result::Result<bool, E>,
{
    check_repeatable("find_last_index", &input)?;
    let found = input.into_cursor().feed_into(Last::new(pred))?;
    Ok(found.map(|(_, key)| key))
}

/// Returns the key of the first element of `input` equal to `needle`, or `None` if there is none.
///
/// # Errors
///
/// The same as [`find_index()`].
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
///
/// let numbers = IndexMap::from([("ten", 10), ("twenty", 20), ("thirty", 30)]);
/// assert_eq!(polyiter::index_of(&numbers, &30), Ok(Some(&"thirty")));
/// assert_eq!(polyiter::index_of(vec![1, 2], &3), Ok(None));
/// ```
pub fn index_of<I, T>(input: I, needle: &T) -> Result<Option<I::Key>>
where
    I: Iterable,
    I::Value: Borrow<T>,
    T: PartialEq + ?Sized,
{
    check_repeatable("index_of", &input)?;
    let found = input
        .into_cursor()
        .feed_into(First::new(|value: &I::Value, _: &I::Key| {
            Ok::<_, Infallible>(Borrow::<T>::borrow(value) == needle)
        }));
    Ok(into_ok(found).map(|(_, key)| key))
}

/// Returns the key of the last element of `input` equal to `needle`, or `None` if there is none.
///
/// # Errors
///
/// The same as [`find_index()`].
///
/// # Examples
///
/// ```
/// assert_eq!(polyiter::last_index_of(vec!['a', 'b', 'a'], &'a'), Ok(Some(2)));
/// ```
pub fn last_index_of<I, T>(input: I, needle: &T) -> Result<Option<I::Key>>
where
    I: Iterable,
    I::Value: Borrow<T>,
    T: PartialEq + ?Sized,
{
    check_repeatable("last_index_of", &input)?;
    let found = input
        .into_cursor()
        .feed_into(Last::new(|value: &I::Value, _: &I::Key| {
            Ok::<_, Infallible>(Borrow::<T>::borrow(value) == needle)
        }));
    Ok(into_ok(found).map(|(_, key)| key))
}
