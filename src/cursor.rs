//! Module contains the [`Cursor`] protocol, the [`Iterable`] conversion into it,
//! and the lazy adapters built on top of it.
//!
//! # Termination
//!
//! A cursor reports its end by returning `None` from [`Cursor::pull()`].
//! Unless stated otherwise by a cursor's implementation, pulling again after the end
//! is unspecified, just like [`Iterator::next()`] after `None`.
//! Every cursor produced by this crate (the built-in adapters for collections, the lazy
//! adapters, ranges) is *fused*: once it reported the end, it keeps reporting the end.
//! Wrap a foreign cursor with [`fuse()`](Cursor::fuse) to get the same guarantee.
//!
//! # Early exit
//!
//! There is no error used as a control-flow signal. An eager operation that found what it
//! needed ([`first()`](crate::first), [`some()`](crate::some), [`take_while()`](crate::take_while)...)
//! has its collector return [`Break`](std::ops::ControlFlow::Break), the driver stops pulling,
//! and the cursor is dropped.
//!
//! # Example
//!
//! ```
//! use polyiter::prelude::*;
//!
//! let mut cursor = vec![1, 2, 3]
//!     .into_cursor()
//!     .map(|value, _| value * 10)
//!     .filter(|&value, _| value != 20);
//!
//! assert_eq!(cursor.pull().map(Element::into_parts), Some((10, 0)));
//! assert_eq!(cursor.pull().map(Element::into_parts), Some((30, 2)));
//! assert_eq!(cursor.pull(), None);
//! // Exhaustion is idempotent.
//! assert_eq!(cursor.pull(), None);
//! ```

mod adapters;
#[allow(clippy::module_inception)]
mod cursor;
mod element;
mod iterable;

pub use adapters::*;
pub use cursor::*;
pub use element::*;
pub use iterable::*;

#[inline(always)]
pub(crate) const fn assert_cursor<C>(cursor: C) -> C
where
    C: Cursor,
{
    cursor
}
