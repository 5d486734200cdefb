//! Classification of inputs.
//!
//! Every input accepted by this crate is classified once into a [`ShapeTag`].
//! The classification is decided by which [`Iterable`] implementation a type has,
//! so there is no runtime probing: the tag is produced by [`Iterable::shape()`]
//! and matched exhaustively by everything downstream.
//!
//! The precedence between overlapping shapes follows this order:
//!
//! 1. A [`Generator`](crate::Generator) is invoked on adaptation and its result is adapted instead.
//! 2. An iterator of `(key, value)` pairs ([`from_entries()`](crate::from_entries)) is a mapping.
//! 3. A native iterator ([`from_iter()`](crate::from_iter), [`from_elements()`](crate::from_elements))
//!    is an external cursor.
//! 4. A [`Cursor`](crate::Cursor) is an external cursor, adapted to itself.
//! 5. Indexable collections (`Vec`, slices, arrays, `VecDeque`) are sequences.
//! 6. Keyed collections (`IndexMap`, `HashMap`, `BTreeMap`) are mappings.
//!
//! Set collections (`IndexSet`, `HashSet`, `BTreeSet`) are set-likes.

use std::fmt::{self, Display};

use crate::Iterable;

/// The shape category an input belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeTag {
    /// Integer-indexed, contiguous. Keys are 0-based positions.
    Sequence,
    /// Keyed. Keys are the field names (or map keys), in insertion order.
    Mapping,
    /// A set. Keys are the values themselves.
    SetLike,
    /// A one-shot cursor whose state is managed elsewhere.
    ExternalCursor,
    /// A zero-argument factory invoked afresh for every adaptation.
    GeneratorFactory,
}

impl ShapeTag {
    /// Every tag, in declaration order.
    pub const ALL: [ShapeTag; 5] = [
        ShapeTag::Sequence,
        ShapeTag::Mapping,
        ShapeTag::SetLike,
        ShapeTag::ExternalCursor,
        ShapeTag::GeneratorFactory,
    ];

    /// Human readable name of the tag.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            ShapeTag::Sequence => "sequence",
            ShapeTag::Mapping => "mapping",
            ShapeTag::SetLike => "set-like",
            ShapeTag::ExternalCursor => "external cursor",
            ShapeTag::GeneratorFactory => "generator factory",
        }
    }

    /// Whether an input of this shape can be walked again after a full walk.
    ///
    /// Only an external cursor is one-shot: its state lives outside this crate.
    /// A generator factory is repeatable since every adaptation re-invokes it.
    #[inline]
    pub const fn is_repeatable(self) -> bool {
        !matches!(self, ShapeTag::ExternalCursor)
    }
}

impl Display for ShapeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies an input without adapting it.
///
/// # Examples
///
/// ```
/// use std::collections::{HashMap, HashSet};
/// use polyiter::{ShapeTag, classify, from_iter, generator};
///
/// assert_eq!(classify(&vec![1, 2, 3]), ShapeTag::Sequence);
/// assert_eq!(classify(&HashMap::<&str, i32>::new()), ShapeTag::Mapping);
/// assert_eq!(classify(&HashSet::<i32>::new()), ShapeTag::SetLike);
/// assert_eq!(classify(&from_iter(0..3)), ShapeTag::ExternalCursor);
/// assert_eq!(classify(&generator(|| vec![1])), ShapeTag::GeneratorFactory);
/// ```
#[inline]
pub fn classify<I>(input: &I) -> ShapeTag
where
    I: Iterable + ?Sized,
{
    input.shape()
}
