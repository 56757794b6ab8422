use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open property bag attached to nodes and relationships.
///
/// Accessors never fail: a missing key or a value of the wrong type reads as
/// the type's empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag(Map<String, Value>);

impl PropertyBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// String value for `key`, or `""` when absent or not a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// Like [`get_str`](Self::get_str) but maps the empty string to `None`.
    #[must_use]
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        Some(self.get_str(key)).filter(|s| !s.is_empty())
    }

    /// Integer value for `key`, or `0` when absent or not a number.
    /// Floating point values are truncated toward zero.
    #[must_use]
    pub fn get_int(&self, key: &str) -> i64 {
        match self.0.get(key) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or(0),
            _ => 0,
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
