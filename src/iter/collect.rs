use std::convert::Infallible;

use tracing::trace;

use crate::{Cursor, Iterable, KindOf, Materializer, Rebuilt};

use super::{MapInto, into_ok, map};

/// Rebuilds `input` into a container of its own kind.
///
/// This is how a lazy cursor is materialized.
///
/// # Examples
///
/// ```
/// use polyiter::prelude::*;
///
/// let cursor = vec![3, 1, 2].into_cursor().filter(|&v, _| v > 1);
/// assert_eq!(polyiter::collect(cursor), [3, 2]);
/// ```
#[inline]
pub fn collect<I>(input: I) -> Rebuilt<I, I::Value>
where
    I: Iterable,
    KindOf<I>: Materializer<I::Key, I::Value>,
{
    map(input, |value, _| value)
}

/// Collects the values of `input` into a [`Vec`], whatever its kind. Keys are dropped.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
///
/// let map = IndexMap::from([("b", 2), ("a", 1)]);
/// assert_eq!(polyiter::to_vec(map), [2, 1]);
/// ```
pub fn to_vec<I>(input: I) -> Vec<I::Value>
where
    I: Iterable,
{
    trace!(shape = %input.shape(), "to_vec");
    let cursor = input.into_cursor();
    let (lower, _) = cursor.size_hint();
    let collector = MapInto::new(Vec::with_capacity(lower), |value, _: &I::Key| {
        Ok::<_, Infallible>(value)
    });
    into_ok(cursor.feed_into(collector))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn collect_keeps_the_kind() {
        let set = collect(HashSet::from([1, 2, 3]).into_cursor().map(|v, _| v % 2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn to_vec_of_an_empty_input() {
        assert!(to_vec(Vec::<u8>::new()).is_empty());
    }
}
