//! Lazy combinators over any input.
//!
//! Each of these adapts its input(s) and returns a new [`Cursor`] right away.
//! No element is pulled from upstream until the returned cursor itself is pulled,
//! so they compose over unbounded inputs such as [`range()`](crate::range).
//!
//! They are the free-function forms of the adapter methods of [`Cursor`],
//! except [`chain()`] and [`izip()`], which take any number of inputs.

use tracing::trace;

use crate::{ChainAll, Cursor, Filter, Iterable, Map, ZipAll, assert_cursor};

/// Lazily transforms every value of `input`, keeping keys and hints.
///
/// # Examples
///
/// ```
/// use polyiter::prelude::*;
///
/// let mut squares = polyiter::imap(polyiter::range(1_u64, u64::MAX, 1)?, |n, _| n * n);
/// assert_eq!(squares.pull().map(|e| e.value), Some(1));
/// assert_eq!(squares.pull().map(|e| e.value), Some(4));
/// assert_eq!(squares.pull().map(|e| e.value), Some(9));
/// # Ok::<(), polyiter::IterError>(())
/// ```
#[inline]
pub fn imap<I, U, F>(input: I, f: F) -> Map<I::Cursor, F>
where
    I: Iterable,
    F: FnMut(I::Value, &I::Key) -> U,
{
    trace!(shape = %input.shape(), "imap");
    input.into_cursor().map(f)
}

/// Lazily keeps the elements of `input` satisfying `pred`.
///
/// Pulling the returned cursor pulls upstream until a match or the upstream end,
/// and never further.
///
/// # Examples
///
/// ```
/// use polyiter::prelude::*;
///
/// let odd = polyiter::ifilter(vec![1, 2, 3, 4, 5], |v, _| v % 2 == 1);
/// assert_eq!(polyiter::to_vec(odd), [1, 3, 5]);
/// ```
#[inline]
pub fn ifilter<I, P>(input: I, pred: P) -> Filter<I::Cursor, P>
where
    I: Iterable,
    P: FnMut(&I::Value, &I::Key) -> bool,
{
    trace!(shape = %input.shape(), "ifilter");
    input.into_cursor().filter(pred)
}

/// Lazily concatenates any number of inputs of the same type.
///
/// Each input is adapted only once the previous one has ended. The result ends once all of them have.
/// Elements are tagged with the hint of the input they came from.
///
/// Use [`Cursor::chain()`] to concatenate inputs of different types.
///
/// # Examples
///
/// ```
/// use polyiter::prelude::*;
///
/// let mut cursor = polyiter::chain([vec![1, 2], vec![3], vec![4, 5]]);
/// for expected in 1..=5 {
///     assert_eq!(cursor.pull().map(|e| e.value), Some(expected));
/// }
/// assert_eq!(cursor.pull(), None);
/// ```
#[inline]
pub fn chain<I>(inputs: impl IntoIterator<Item = I>) -> ChainAll<I>
where
    I: Iterable,
{
    assert_cursor(ChainAll::new(inputs))
}

/// Lazily reads one element from each input and yields their values together.
///
/// The result ends as soon as any input does. Keys come from the first input.
///
/// # Examples
///
/// ```
/// use polyiter::prelude::*;
///
/// let rows = polyiter::izip([vec![10, 20, 30], vec![1, 2, 3], vec![100, 200]]);
/// assert_eq!(
///     polyiter::to_vec(rows),
///     [vec![10, 1, 100], vec![20, 2, 200]],
/// );
/// ```
#[inline]
pub fn izip<I>(inputs: impl IntoIterator<Item = I>) -> ZipAll<I::Cursor>
where
    I: Iterable,
{
    let cursors: Vec<_> = inputs.into_iter().map(Iterable::into_cursor).collect();
    trace!(width = cursors.len(), "izip");
    assert_cursor(ZipAll::new(cursors))
}
