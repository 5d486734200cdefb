//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the traits needed to call cursor methods
//! and the constructors for inputs that are not containers.
//!
//! # Example
//!
//! ```
//! use polyiter::prelude::*;
//!
//! let mut cursor = vec![1, 2].into_cursor();
//! assert_eq!(cursor.pull().map(|e| e.value), Some(1));
//! ```

pub use crate::{
    Collector, Cursor, Element, Iterable, ShapeTag, classify, from_elements, from_entries,
    from_iter, generator,
};
