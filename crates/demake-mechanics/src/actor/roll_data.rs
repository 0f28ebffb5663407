//! Flat numeric view of actor data for formula evaluation.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

/// Numbers available to pool formulas, keyed by dotted path or shorthand.
///
/// Values keep any fractional part so that formulas can reject
/// non-whole pool sizes instead of rounding them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RollData(BTreeMap<String, f64>);

impl RollData {
    /// Create empty roll data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a `system` object.
    ///
    /// Every numeric leaf is stored under its dotted path, and every object
    /// with a numeric `value` field is also stored under its own path.
    pub fn from_system(system: &Map<String, Value>) -> Self {
        let mut data = Self::new();
        data.flatten_into(None, system);
        data
    }

    fn flatten_into(&mut self, prefix: Option<&str>, map: &Map<String, Value>) {
        for (key, value) in map {
            let path = match prefix {
                Some(p) => format!("{p}.{key}"),
                None => key.clone(),
            };
            match value {
                Value::Object(inner) => {
                    if let Some(n) = inner.get("value").and_then(numeric) {
                        self.insert(path.clone(), n);
                    }
                    self.flatten_into(Some(&path), inner);
                }
                other => {
                    if let Some(n) = numeric(other) {
                        self.insert(path, n);
                    }
                }
            }
        }
    }

    /// Set a value, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), value);
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Iterate over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for RollData {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Read a finite JSON number.
pub(crate) fn numeric(value: &Value) -> Option<f64> {
    value.as_f64().filter(|f| f.is_finite())
}
