//! Cursors for [`VecDeque`].
//!
//! This module corresponds to [`std::collections::vec_deque`].
//! A `VecDeque` is a sequence walked from front to back.

use std::collections::{VecDeque, vec_deque};

use super::iterable_impl;
use crate::{Positional, ShapeTag};

/// The cursor of a [`VecDeque`] adapted by value.
pub type IntoCursor<T> = Positional<vec_deque::IntoIter<T>>;

/// The cursor of a [`&VecDeque`](VecDeque).
pub type Cursor<'a, T> = Positional<vec_deque::Iter<'a, T>>;

iterable_impl!(
    'a, VecDeque<T>, ShapeTag::Sequence, Positional::sequence,
    into: IntoCursor<T> => (usize, T),
    iter: Cursor<'a, T> => (usize, &'a T),
);

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::prelude::*;

    #[test]
    fn walks_front_to_back() {
        let mut deque = VecDeque::from([2, 3]);
        deque.push_front(1);
        assert_eq!(classify(&deque), ShapeTag::Sequence);
        assert_eq!(crate::map(deque, |v, k| v * 10 + *k as i32), [10, 21, 32]);
    }
}
