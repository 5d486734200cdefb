use crate::ShapeTag;

/// One `(value, key)` pair produced by a [`Cursor`](crate::Cursor).
///
/// - For a sequence, `key` is the 0-based position.
/// - For a mapping, `key` is the field name (or map key).
/// - For a set, `key` is the value itself.
///
/// `hint` optionally names the kind of container the element originally came from.
/// Lazy adapters forward it untouched, and [`chain`](crate::Cursor::chain) fills it in
/// from the source cursor so that a [`kind::Inferred`](crate::kind::Inferred) accumulator
/// can decide which container to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element<K, V> {
    /// The value.
    pub value: V,
    /// The key, index, or (for sets) a copy of the value.
    pub key: K,
    /// Per-element materialization hint.
    pub hint: Option<ShapeTag>,
}

impl<K, V> Element<K, V> {
    /// Creates an element with no hint.
    #[inline]
    pub const fn new(value: V, key: K) -> Self {
        Self {
            value,
            key,
            hint: None,
        }
    }

    /// Creates an element carrying an explicit hint.
    #[inline]
    pub const fn with_hint(value: V, key: K, hint: ShapeTag) -> Self {
        Self {
            value,
            key,
            hint: Some(hint),
        }
    }

    /// Replaces the value, keeping the key and the hint.
    #[inline]
    pub fn map_value<U>(self, f: impl FnOnce(V, &K) -> U) -> Element<K, U> {
        Element {
            value: f(self.value, &self.key),
            key: self.key,
            hint: self.hint,
        }
    }

    /// Sets the hint if there is none yet.
    #[inline]
    pub(crate) fn or_hint(mut self, hint: ShapeTag) -> Self {
        self.hint.get_or_insert(hint);
        self
    }

    /// Splits the element into `(value, key)`.
    #[inline]
    pub fn into_parts(self) -> (V, K) {
        (self.value, self.key)
    }
}

impl<K, V> From<(K, V)> for Element<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(value, key)
    }
}
