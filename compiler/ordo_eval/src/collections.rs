//! Set and map construction.
//!
//! Elements and keys must be hashable, and uniqueness follows comparison
//! equality: `1`, `1.0` and `True` are one element. Sets keep the first
//! occurrence; maps keep the first key with the last value.

use ordo_value::{unhashable, CompareError, MapValue, SetValue, Value};

use crate::compare::Comparator;

impl Comparator {
    /// Build a set from `items`, dropping duplicates.
    pub fn build_set(&self, items: Vec<Value>) -> Result<Value, CompareError> {
        self.distinct(items).map(Value::set)
    }

    /// Build a frozen set from `items`, dropping duplicates.
    pub fn build_frozen_set(&self, items: Vec<Value>) -> Result<Value, CompareError> {
        self.distinct(items).map(Value::frozen_set)
    }

    /// Build a map from `entries`; a repeated key overwrites the value.
    pub fn build_map(&self, entries: Vec<(Value, Value)>) -> Result<Value, CompareError> {
        let mut unique: Vec<(Value, Value)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            check_hashable(&key)?;
            match self.position(unique.iter().map(|(k, _)| k), &key, 0)? {
                Some(index) => unique[index].1 = value,
                None => unique.push((key, value)),
            }
        }
        Ok(Value::map(MapValue::from_distinct(unique)))
    }

    fn distinct(&self, items: Vec<Value>) -> Result<SetValue, CompareError> {
        let mut unique: Vec<Value> = Vec::with_capacity(items.len());
        for item in items {
            check_hashable(&item)?;
            if self.position(unique.iter(), &item, 0)?.is_none() {
                unique.push(item);
            }
        }
        Ok(SetValue::from_distinct(unique))
    }
}

/// Set elements and map keys must be hashable all the way down.
pub(crate) fn check_hashable(value: &Value) -> Result<(), CompareError> {
    match value.first_unhashable() {
        Some(inner) => Err(unhashable(inner.type_name())),
        None => Ok(()),
    }
}
