//! Payloads for unordered containers.
//!
//! Uniqueness of set elements and map keys is defined by the comparison
//! engine's equality (so `1`, `1.0` and `True` are one key), which lives in
//! the evaluator. These types therefore trust their caller: the evaluator's
//! builders deduplicate before calling `from_distinct`.

use super::Value;

/// Elements of a set or frozen set, in first-insertion order.
#[derive(Clone, Debug, Default)]
pub struct SetValue {
    items: Vec<Value>,
}

impl SetValue {
    /// Wrap elements already known to be pairwise unequal.
    pub fn from_distinct(items: Vec<Value>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a SetValue {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Key/value entries of a mapping, in first-insertion order of the keys.
#[derive(Clone, Debug, Default)]
pub struct MapValue {
    entries: Vec<(Value, Value)>,
}

impl MapValue {
    /// Wrap entries whose keys are already known to be pairwise unequal.
    pub fn from_distinct(entries: Vec<(Value, Value)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }
}
