use tracing::trace;

use crate::{Iterable, KindOf, Materializer, Rebuilt, izip};

/// Reads one element from each input in turn and collects their values as rows,
/// in a container of the same kind as the first input.
///
/// Collecting stops as soon as any input ends, so the result is as long as the shortest input.
/// Keys come from the first input. Zipping a single input yields single-value rows,
/// and zipping no input yields an empty container.
///
/// Use [`map_n()`](crate::map_n) to combine each row on the fly.
///
/// # Examples
///
/// ```
/// let rows = polyiter::zip([vec!['a', 'b', 'c'], vec!['x', 'y']]);
/// assert_eq!(rows, [vec!['a', 'x'], vec!['b', 'y']]);
/// ```
pub fn zip<I>(inputs: impl IntoIterator<Item = I>) -> Rebuilt<I, Vec<I::Value>>
where
    I: Iterable,
    KindOf<I>: Materializer<I::Key, Vec<I::Value>>,
{
    trace!("zip");
    crate::collect(izip(inputs))
}
