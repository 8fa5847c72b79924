// File: src/raw.rs
// Purpose: Decoded form bodies (key -> one or more string values)

use std::collections::HashMap;

/// A decoded form body as handed over by the HTTP layer.
///
/// Keys may repeat; lookups return the first value seen for a key, the same
/// way a form value lookup works on a classic HTTP server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawValues {
    values: HashMap<String, Vec<String>>,
}

impl RawValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `application/x-www-form-urlencoded` string.
    ///
    /// Never fails: `+` becomes a space, bad percent escapes are kept as-is and
    /// invalid UTF-8 is replaced. Pairs without `=` map to an empty value.
    pub fn from_urlencoded(input: &str) -> Self {
        let mut raw = Self::new();
        raw.extend_urlencoded(input);
        raw
    }

    /// Decode raw body bytes, see [`RawValues::from_urlencoded`].
    pub fn from_urlencoded_bytes(input: &[u8]) -> Self {
        Self::from_urlencoded(&String::from_utf8_lossy(input))
    }

    /// Append the pairs of another urlencoded string after the existing ones.
    pub fn extend_urlencoded(&mut self, input: &str) {
        for pair in input.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            self.append(decode_component(key), decode_component(value));
        }
    }

    /// Add a value for `key` after any values already present.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    /// First value submitted for `key`
    pub fn first(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values submitted for `key`
    pub fn all(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn decode_component(component: &str) -> String {
    let spaced = component.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

impl From<HashMap<String, String>> for RawValues {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<HashMap<String, Vec<String>>> for RawValues {
    fn from(values: HashMap<String, Vec<String>>) -> Self {
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for RawValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut raw = Self::new();
        for (key, value) in iter {
            raw.append(key, value);
        }
        raw
    }
}
