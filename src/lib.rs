//! Uniform eager and lazy operations over every kind of iterable input.
//!
//! Sequences, keyed mappings, sets, one-shot cursors and generator factories are all
//! walked through one protocol, a [`Cursor`] pulling `(value, key)` [`Element`]s.
//! Every operation is written once against that protocol, and containers are rebuilt
//! in the same kind as what was received: filtering a [`Vec`] gives a [`Vec`],
//! filtering a map gives a map with the surviving keys.
//!
//! # Overview
//!
//! An operation always goes through the same steps:
//!
//! 1. The input is *classified* into a [`ShapeTag`] by its [`Iterable`] implementation.
//! 2. The input is *adapted* into a [`Cursor`] ([`Iterable::into_cursor()`]).
//! 3. Eager operations drive the cursor into a [`Collector`] ([`Cursor::feed_into()`]),
//!    which inserts kept elements into an [`Accumulator`] picked by the cursor's
//!    [`Kind`](kind::Kind). Lazy operations return a new cursor instead and do nothing
//!    until it is pulled.
//!
//! ```
//! use indexmap::IndexMap;
//!
//! let prices = IndexMap::from([("apple", 3), ("pear", 5), ("plum", 2)]);
//!
//! // A mapping stays a mapping, and callbacks receive `(value, key)`.
//! let cheap = polyiter::filter(&prices, |&&price, _| price < 4);
//! assert_eq!(cheap.keys().copied().collect::<Vec<_>>(), [&"apple", &"plum"]);
//!
//! // Same kind, transformed values.
//! let labels = polyiter::map(prices.clone(), |price, fruit| format!("{fruit}: {price}"));
//! assert_eq!(labels["pear"], "pear: 5");
//!
//! // Scalar results build nothing.
//! assert_eq!(polyiter::index_of(&prices, &5)?, Some(&"pear"));
//! assert_eq!(polyiter::sum_from(polyiter::to_vec(&prices), 0), 10);
//! # Ok::<(), polyiter::IterError>(())
//! ```
//!
//! # Lazy operations
//!
//! [`imap()`], [`ifilter()`], [`chain()`], [`izip()`] and [`range()`] return cursors.
//! Nothing upstream is pulled before the returned cursor is, and every eager operation
//! accepts a cursor as input, so pipelines can be built from unbounded sources:
//!
//! ```
//! let evens = polyiter::ifilter(polyiter::range(0_u64, u64::MAX, 1)?, |v, _| v % 2 == 0);
//! let squares = polyiter::imap(evens, |v, _| v * v);
//!
//! assert_eq!(polyiter::take(squares, 4), [0, 4, 16, 36]);
//! # Ok::<(), polyiter::IterError>(())
//! ```
//!
//! # Generators
//!
//! A [`generator()`] wraps a zero-argument factory. It is invoked afresh every time the
//! generator is adapted, so a generator can be walked by as many operations as needed,
//! while a [`Cursor`] can only be walked once:
//!
//! ```
//! let numbers = polyiter::generator(|| polyiter::from_iter([3, 1, 2]));
//!
//! assert_eq!(polyiter::index_of(&numbers, &2)?, Some(2));
//! assert_eq!(polyiter::to_vec(&numbers), [3, 1, 2]);
//!
//! // The same iterator handed over directly is a one-shot cursor.
//! assert!(polyiter::index_of(polyiter::from_iter([3, 1, 2]), &2).is_err());
//! # Ok::<(), polyiter::IterError>(())
//! ```
//!
//! # Errors
//!
//! Misuse detected by this crate is reported as an [`IterError`]. Errors of caller-supplied
//! callbacks go through the `try_` forms of the operations untouched.
//!
//! # Features
//!
//! - `json` (default): implements [`Record`] for [`serde_json::Value`], so that
//!   [`pluck()`] can walk JSON documents.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod collections;
mod collector;
mod cursor;
mod error;
mod external;
mod generator;
pub mod iter;
mod lazy;
mod materialize;
mod path;
pub mod prelude;
mod range;
mod shape;
#[cfg(test)]
mod test_utils;
mod vec;

pub use collections::{Keyed, Members};
pub use collector::*;
pub use cursor::*;
pub use error::*;
pub use external::*;
pub use generator::*;
pub use iter::*;
pub use lazy::*;
pub use materialize::{Accumulator, Collection, Inferring, Materializer, Rebuilt, kind};
pub use path::*;
pub use range::*;
pub use shape::*;
pub use vec::*;

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet, VecDeque};

    use indexmap::{IndexMap, IndexSet};
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::{test_utils::Unfused, *};

    fn assert_exhausts_twice<C: Cursor>(mut cursor: C) {
        while cursor.pull().is_some() {}
        assert!(cursor.pull().is_none());
        assert!(cursor.pull().is_none());
    }

    #[test]
    fn exhaustion_is_idempotent_on_every_shape() {
        assert_exhausts_twice(vec![1, 2].into_cursor());
        assert_exhausts_twice([1, 2].into_cursor());
        assert_exhausts_twice(VecDeque::from([1]).into_cursor());
        assert_exhausts_twice(IndexMap::from([("a", 1)]).into_cursor());
        assert_exhausts_twice(BTreeMap::from([(1, 'a')]).into_cursor());
        assert_exhausts_twice(IndexSet::from([1]).into_cursor());
        assert_exhausts_twice(HashSet::from([1]).into_cursor());
        assert_exhausts_twice(from_iter([1, 2]));
        assert_exhausts_twice(from_entries([("k", 1)]).into_cursor());
        assert_exhausts_twice(from_elements([Element::new(1, 0)]));
        assert_exhausts_twice(generator(|| vec![1]).into_cursor());
        assert_exhausts_twice(range(0, 3, 1).unwrap());
        assert_exhausts_twice(Unfused::new([1, 2]).fuse());
        assert_exhausts_twice(imap(Unfused::new([1, 2]).fuse(), |v, _| v));
        assert_exhausts_twice(chain([vec![1], vec![2]]));
        assert_exhausts_twice(izip([vec![1], vec![2, 3]]));
    }

    #[test]
    fn map_stops_at_the_shortest_input() {
        assert_eq!(map2(vec![1, 2, 3], vec![10, 20], |a, b, _| a + b), [11, 22]);
    }

    #[test]
    fn take_while_and_drop_while_split() {
        let input = vec![10, 20, 30, 40, 50];
        assert_eq!(take_while(&input, |&&v, _| v < 40), [&10, &20, &30]);
        assert_eq!(drop_while(&input, |&&v, _| v < 40), [&40, &50]);
    }

    #[test]
    fn zip_three_sequences() {
        let rows = zip([vec![10, 20, 30], vec![1, 2, 3], vec![100, 200, 300]]);
        assert_eq!(rows, [vec![10, 1, 100], vec![20, 2, 200], vec![30, 3, 300]]);
    }

    #[test]
    fn chain_boundaries() {
        let values: Vec<_> = chain([vec![1, 2], vec![3], vec![4, 5]])
            .elements()
            .map(|e| e.value)
            .collect();
        assert_eq!(values, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn index_of_mapping_and_missing() {
        let map = IndexMap::from([("ten", 10), ("twenty", 20), ("thirty", 30)]);
        assert_eq!(index_of(&map, &30), Ok(Some(&"thirty")));
        assert_eq!(index_of(vec![1, 2], &9), Ok(None));
    }

    #[test]
    fn sums() {
        assert_eq!(sum(vec![10, 20, 30, 40, 50]), Ok(150));
        assert_eq!(sum_from(vec![10, 20, 30], 5), 65);
    }

    #[test]
    fn reduce_seed_rules() {
        assert_eq!(
            reduce(Vec::<i32>::new(), |a, b, _| a + b),
            Err(IterError::from(InvalidOperation::NoInitialValue("reduce")))
        );
        assert_eq!(fold(Vec::<i32>::new(), 10, |acc, v, _| *acc += v), 10);
    }

    #[test]
    fn range_is_exclusive() {
        assert_eq!(to_vec(range(0, 10, 2).unwrap()), [0, 2, 4, 6, 8]);
        assert_eq!(to_vec(range_inclusive(0, 10, 2).unwrap()), [0, 2, 4, 6, 8, 10]);
    }

    proptest! {
        #[test]
        fn filter_keeps_order_and_kind(nums in propvec(any::<i32>(), ..=32)) {
            let kept: Vec<i32> = filter(nums.clone(), |v, _| v % 3 == 0);
            prop_assert!(kept.iter().all(|v| v % 3 == 0));
            let expected: Vec<_> = nums.into_iter().filter(|v| v % 3 == 0).collect();
            prop_assert_eq!(kept, expected);
        }

        #[test]
        fn mapping_keys_survive(entries in propvec((0_u8..32, any::<i16>()), ..=24)) {
            let input: IndexMap<u8, i16> = entries.into_iter().collect();

            let doubled = map(&input, |&v, _| i32::from(v) * 2);
            prop_assert!(doubled.keys().copied().eq(input.keys()));

            let positive = filter(&input, |&&v, _| v > 0);
            prop_assert!(positive.keys().all(|k| input[*k] > 0));
            prop_assert_eq!(positive.len(), input.values().filter(|&&v| v > 0).count());
        }
    }
}
