use crate::{Cursor, Element, ShapeTag, kind::Kind};

/// A lazy [`Cursor`] that reads one element from each of several cursors of the same type
/// and yields their values together, in input order.
///
/// It ends as soon as any cursor ends. Keys and hints come from the first cursor.
///
/// This `struct` is created by [`izip()`](crate::izip). See its documentation for more.
#[derive(Debug, Clone)]
pub struct ZipAll<C> {
    cursors: Vec<C>,
    exhausted: bool,
}

impl<C> ZipAll<C>
where
    C: Cursor,
{
    pub(crate) fn new(cursors: Vec<C>) -> Self {
        Self {
            exhausted: cursors.is_empty(),
            cursors,
        }
    }
}

impl<C> Cursor for ZipAll<C>
where
    C: Cursor,
{
    type Key = C::Key;
    type Value = Vec<C::Value>;
    type Kind = C::Kind;

    fn pull(&mut self) -> Option<Element<Self::Key, Self::Value>> {
        if self.exhausted {
            return None;
        }

        let width = self.cursors.len();
        let mut row: Option<Element<C::Key, Vec<C::Value>>> = None;

        for cursor in &mut self.cursors {
            let Some(element) = cursor.pull() else {
                self.exhausted = true;
                return None;
            };

            match &mut row {
                Some(row) => row.value.push(element.value),
                None => {
                    let mut values = Vec::with_capacity(width);
                    values.push(element.value);
                    row = Some(Element {
                        value: values,
                        key: element.key,
                        hint: element.hint,
                    });
                }
            }
        }

        row
    }

    fn hint(&self) -> ShapeTag {
        self.cursors
            .first()
            .map_or(<C::Kind as Kind>::SHAPE, Cursor::hint)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }

        self.cursors
            .iter()
            .map(Cursor::size_hint)
            .fold((usize::MAX, None), |(lower, upper), (l, u)| {
                let upper = match (upper, u) {
                    (Some(a), Some(b)) => Some(std::cmp::min(a, b)),
                    (a, None) => a,
                    (None, b) => b,
                };
                (lower.min(l), upper)
            })
    }
}
