use crate::{Cursor, ShapeTag};

/// Conversion into a [`Cursor`].
///
/// This trait unites the two steps every operation of this crate starts with:
/// classifying the input ([`shape()`](Iterable::shape)) and adapting it into a cursor
/// ([`into_cursor()`](Iterable::into_cursor)).
///
/// Each supported container type registers its own implementation,
/// so the classification is a property of the type rather than a runtime probe.
/// A new container kind is supported by implementing this trait for it.
///
/// # Usage in trait bounds
///
/// Using `Iterable` in trait bounds allows a function to be generic over both
/// [`Cursor`]s and containers. Callers then never have to adapt the input themselves.
///
/// # Cursors
///
/// Every [`Cursor`] is `Iterable`, classified as [`ShapeTag::ExternalCursor`], and is
/// adapted into itself: no wrapping happens.
///
/// ```
/// use polyiter::prelude::*;
///
/// let mut cursor = polyiter::from_iter(["a", "b"].into_iter());
/// let address: *const _ = &cursor;
///
/// let adapted = (&mut cursor).into_cursor();
/// assert!(std::ptr::eq(adapted, address));
/// ```
pub trait Iterable {
    /// The key type of the produced elements.
    type Key;

    /// The value type of the produced elements.
    type Value;

    /// Which cursor being produced?
    type Cursor: Cursor<Key = Self::Key, Value = Self::Value>;

    /// Classifies this input.
    fn shape(&self) -> ShapeTag;

    /// Adapts this input into a cursor.
    fn into_cursor(self) -> Self::Cursor
    where
        Self: Sized;
}

impl<C> Iterable for C
where
    C: Cursor,
{
    type Key = C::Key;

    type Value = C::Value;

    type Cursor = C;

    #[inline]
    fn shape(&self) -> ShapeTag {
        ShapeTag::ExternalCursor
    }

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        self
    }
}

/// The [`Kind`](crate::kind::Kind) eager operations rebuild an [`Iterable`] into.
pub type KindOf<I> = <<I as Iterable>::Cursor as Cursor>::Kind;

/// Adapts an input into its cursor.
///
/// This is the same as [`Iterable::into_cursor()`].
///
/// # Examples
///
/// ```
/// use polyiter::prelude::*;
///
/// let mut cursor = polyiter::cursor(vec!['x', 'y']);
/// assert_eq!(cursor.hint(), ShapeTag::Sequence);
/// assert_eq!(cursor.pull().map(Element::into_parts), Some(('x', 0)));
/// assert_eq!(cursor.pull().map(Element::into_parts), Some(('y', 1)));
/// assert_eq!(cursor.pull(), None);
/// ```
#[inline]
pub fn cursor<I>(input: I) -> I::Cursor
where
    I: Iterable,
{
    input.into_cursor()
}
