//! Eager operations.
//!
//! Every operation here follows the same steps: classify the input, adapt it into a
//! [`Cursor`](crate::Cursor), drive the cursor into the operation's [`Collector`](crate::Collector)
//! with [`feed_into()`](crate::Cursor::feed_into), and return what the collector finished with.
//!
//! Operations building a container rebuild one of the same kind as their input
//! (see [`Materializer`](crate::Materializer)). Operations returning a scalar build nothing.
//!
//! Operations taking a callback have a `try_` form whose callback returns a [`Result`].
//! The first `Err` stops the pull loop and is returned as is; whatever was accumulated
//! so far is dropped.

mod all_any;
mod collect;
mod drop_while;
mod find;
mod fold;
mod for_each;
mod index;
mod last;
mod map;
mod partition;
mod reduce;
mod retain;
mod sum;
mod take_while;
mod zip;

pub use all_any::*;
pub use collect::*;
pub use drop_while::*;
pub use find::*;
pub use fold::*;
pub use for_each::*;
pub use index::*;
pub use last::*;
pub use map::*;
pub use partition::*;
pub use reduce::*;
pub use retain::*;
pub use sum::*;
pub use take_while::*;
pub use zip::*;

use std::convert::Infallible;

/// Unwraps the result of a `try_` operation fed an infallible callback.
#[inline(always)]
fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
