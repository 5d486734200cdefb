use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::{Cursor, Element, kind};

/// A sequence cursor counting how many times it was pulled, the end included.
#[derive(Debug, Clone)]
pub struct Counting<V> {
    values: std::vec::IntoIter<V>,
    position: usize,
    pulls: usize,
}

impl<V> Counting<V> {
    pub fn new(values: Vec<V>) -> Self {
        Self {
            values: values.into_iter(),
            position: 0,
            pulls: 0,
        }
    }

    pub fn pulls(&self) -> usize {
        self.pulls
    }
}

impl<V> Cursor for Counting<V> {
    type Key = usize;
    type Value = V;
    type Kind = kind::Sequence;

    fn pull(&mut self) -> Option<Element<usize, V>> {
        self.pulls += 1;
        let value = self.values.next()?;
        self.position += 1;
        Some(Element::new(value, self.position - 1))
    }
}

/// A badly behaved cursor: after reporting its end once, it starts over.
#[derive(Debug, Clone)]
pub struct Unfused<V, const N: usize> {
    values: [V; N],
    position: usize,
}

impl<V, const N: usize> Unfused<V, N> {
    pub fn new(values: [V; N]) -> Self {
        Self {
            values,
            position: 0,
        }
    }
}

impl<V: Clone, const N: usize> Cursor for Unfused<V, N> {
    type Key = usize;
    type Value = V;
    type Kind = kind::Sequence;

    fn pull(&mut self) -> Option<Element<usize, V>> {
        let Some(value) = self.values.get(self.position) else {
            self.position = 0;
            return None;
        };
        self.position += 1;
        Some(Element::new(value.clone(), self.position - 1))
    }
}

/// Installs a subscriber printing through the test harness, once per test binary.
///
/// The level is taken from `RUST_LOG`, `trace` by default.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfused_starts_over() {
        let mut cursor = Unfused::new([7]);
        assert_eq!(cursor.pull().map(|e| e.value), Some(7));
        assert_eq!(cursor.pull(), None);
        assert_eq!(cursor.pull().map(|e| e.value), Some(7));
    }

    #[test]
    fn counting_counts_the_end() {
        let mut cursor = Counting::new(vec!['a']);
        while cursor.pull().is_some() {}
        assert_eq!(cursor.pulls(), 2);
    }
}
