//! Structural-equality memo.
//!
//! Holds the last derived value together with the key it was derived from.
//! Re-evaluating with the same key skips the computation; a recomputation
//! that produces an equal value is not reported as a change.

#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    key: Option<K>,
    value: V,
}

impl<K: PartialEq, V: PartialEq + Default> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            key: None,
            value: V::default(),
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn is_fresh(&self, key: &K) -> bool {
        self.key.as_ref() == Some(key)
    }

    /// Returns `true` only when the stored value changed.
    pub fn evaluate(&mut self, key: K, compute: impl FnOnce() -> V) -> bool {
        if self.is_fresh(&key) {
            return false;
        }
        let next = compute();
        self.key = Some(key);
        if next == self.value {
            return false;
        }
        self.value = next;
        true
    }
}

impl<K: PartialEq, V: PartialEq + Default> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
