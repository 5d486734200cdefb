//! Module contains the [`Collector`] trait, the consuming half of every eager operation.
//!
//! A [`Cursor`] describes *how elements are produced*. A collector describes *how they are consumed*:
//! it receives elements one at a time through [`collect()`](Collector::collect) and tells the driver
//! whether it wants more. Once it returns [`Break(())`], the driver stops pulling and calls
//! [`finish()`](Collector::finish).
//!
//! # Unspecified behaviors
//!
//! Unless stated otherwise by the collector's implementation, after
//! [`Collector::collect()`] or [`Collector::break_hint()`] have returned [`Break(())`] once,
//! behaviors of subsequent calls to any method other than [`finish()`](Collector::finish)
//! are unspecified. The drivers of this crate never do so.
//!
//! # Example
//!
//! ```
//! use std::ops::ControlFlow;
//! use polyiter::prelude::*;
//!
//! /// Concatenates keys until an empty value shows up.
//! struct Keys(String);
//!
//! impl Collector<&'static str, i32> for Keys {
//!     type Output = String;
//!
//!     fn collect(&mut self, element: Element<&'static str, i32>) -> ControlFlow<()> {
//!         if element.value == 0 {
//!             return ControlFlow::Break(());
//!         }
//!         self.0.push_str(element.key);
//!         ControlFlow::Continue(())
//!     }
//!
//!     fn finish(self) -> String {
//!         self.0
//!     }
//! }
//!
//! let input = polyiter::from_entries([("a", 1), ("b", 2), ("c", 0), ("d", 4)]);
//! assert_eq!(input.into_cursor().feed_into(Keys(String::new())), "ab");
//! ```
//!
//! [`Break(())`]: std::ops::ControlFlow::Break

use std::ops::ControlFlow;

use crate::{Cursor, Element};

/// Consumes [`Element`]s pulled from a [`Cursor`].
pub trait Collector<K, V> {
    /// The result of the consumption.
    type Output;

    /// Consumes one element.
    ///
    /// Returns [`Break(())`](ControlFlow::Break) once the collector needs no more elements.
    fn collect(&mut self, element: Element<K, V>) -> ControlFlow<()>;

    /// Consumes the collector and produces its output.
    fn finish(self) -> Self::Output;

    /// Whether the collector is already done without being fed any element.
    ///
    /// The default implementation returns [`Continue(())`](ControlFlow::Continue).
    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Pulls every element of `cursor` into this collector, stopping early
    /// once the collector returns [`Break(())`](ControlFlow::Break).
    ///
    /// No element is pulled past the one that made the collector stop.
    fn collect_many<C>(&mut self, mut cursor: C) -> ControlFlow<()>
    where
        Self: Sized,
        C: Cursor<Key = K, Value = V>,
    {
        self.break_hint()?;
        while let Some(element) = cursor.pull() {
            self.collect(element)?;
        }
        ControlFlow::Continue(())
    }

    /// Pulls `cursor` into this collector, then finishes it.
    fn collect_then_finish<C>(self, cursor: C) -> Self::Output
    where
        Self: Sized,
        C: Cursor<Key = K, Value = V>,
    {
        let mut this = self;

        // Whether it broke or depleted the cursor, there is nothing left to do but finish.
        let _ = this.collect_many(cursor);
        this.finish()
    }
}

impl<K, V, C> Collector<K, V> for &mut C
where
    C: Collector<K, V>,
{
    type Output = ();

    #[inline]
    fn collect(&mut self, element: Element<K, V>) -> ControlFlow<()> {
        C::collect(self, element)
    }

    #[inline]
    fn finish(self) -> Self::Output {}

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        C::break_hint(self)
    }
}

#[inline(always)]
pub(crate) const fn assert_collector<C, K, V>(collector: C) -> C
where
    C: Collector<K, V>,
{
    collector
}
