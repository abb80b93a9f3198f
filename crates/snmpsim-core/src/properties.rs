//! Textual key/value properties a modifier is configured from.
//!
//! Loading these from a device description file is the caller's job;
//! this type only stores raw strings and offers typed lookups over them.

use indexmap::IndexMap;

use crate::error::PropertyError;

/// Insertion-ordered raw properties for one modifier.
///
/// Values are kept as written and parsed on lookup, so a malformed
/// entry only fails when a modifier actually asks for it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModifierProperties {
    entries: IndexMap<String, String>,
}

impl ModifierProperties {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning the previous raw value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> Option<String> {
        self.entries.insert(key.into(), value.to_string())
    }

    /// The raw value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up `key` as a signed 64-bit integer.
    ///
    /// Returns `Ok(None)` if the key is absent. Surrounding whitespace is
    /// ignored and a leading `+` is accepted.
    ///
    /// # Errors
    ///
    /// [`PropertyError::NotAnInteger`] if the key is present but its value
    /// does not parse as an `i64`.
    pub fn get_long(&self, key: &str) -> Result<Option<i64>, PropertyError> {
        let Some(raw) = self.entries.get(key) else {
            return Ok(None);
        };
        raw.trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|source| PropertyError::NotAnInteger {
                key: key.to_string(),
                value: raw.clone(),
                source,
            })
    }

    /// Look up `key` as an `i64`, falling back to `default` when absent.
    ///
    /// # Errors
    ///
    /// Same as [`get_long`](Self::get_long).
    pub fn get_long_or(&self, key: &str, default: i64) -> Result<i64, PropertyError> {
        Ok(self.get_long(key)?.unwrap_or(default))
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no properties are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, raw value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for ModifierProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

impl<K: Into<String>, V: ToString> Extend<(K, V)> for ModifierProperties {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
