use std::{
    borrow::Cow,
    collections::{hash_map, HashMap},
};

use crate::{Value, Values};

/// Keyed storage for placeholder values.
///
/// Keys are unique and the most recent insertion for a key wins. Insertion
/// order is never observable.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlaceholderStore {
    entries: HashMap<String, Value>,
}

impl PlaceholderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value for `key`, replacing any previous one.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Merge every pair into the store, overwriting existing keys.
    pub fn put_all<K, V>(&mut self, values: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.entries.extend(
            values
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.entries.iter()
    }
}

impl Values for PlaceholderStore {
    fn get_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.lookup(key).map(Value::as_text)
    }
}

impl<K, V> Extend<(K, V)> for PlaceholderStore
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.put_all(iter);
    }
}

impl<K, V> FromIterator<(K, V)> for PlaceholderStore
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.put_all(iter);
        store
    }
}

impl IntoIterator for PlaceholderStore {
    type Item = (String, Value);
    type IntoIter = hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlaceholderStore {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use crate::{PlaceholderStore, Value, Values};

    #[test]
    fn put_overwrites() {
        let mut store = PlaceholderStore::new();
        store.put("k", "first");
        store.put("k", 2);
        assert_eq!(store.lookup("k"), Some(&Value::Int(2)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn put_all_merges() {
        let mut store = PlaceholderStore::new();
        store.put("keep", "kept");
        store.put("a", "old");

        let mut incoming = HashMap::new();
        incoming.insert("a", "new");
        incoming.insert("b", "added");
        store.put_all(incoming);

        assert_eq!(store.get_value("keep").as_deref(), Some("kept"));
        assert_eq!(store.get_value("a").as_deref(), Some("new"));
        assert_eq!(store.get_value("b").as_deref(), Some("added"));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn clear_unmaps_everything() {
        let mut store: PlaceholderStore = [("a", 1), ("b", 2)].into_iter().collect();
        assert!(!store.is_empty());

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.lookup("a"), None);
    }

    #[test]
    fn remove_and_contains() {
        let mut store = PlaceholderStore::new();
        store.extend([("x", 'x')]);
        assert!(store.contains_key("x"));
        assert_eq!(store.remove("x"), Some(Value::Char('x')));
        assert!(!store.contains_key("x"));
    }

    #[test]
    fn empty_key_is_a_key() {
        let mut store = PlaceholderStore::new();
        store.put("", "blank");
        assert_eq!(store.get_value("").as_deref(), Some("blank"));
    }

    #[test]
    fn values_render_as_text() {
        let mut store = PlaceholderStore::new();
        store.put("n", 4.25);
        store.put("b", false);
        assert_eq!(store.get_value("n").as_deref(), Some("4.25"));
        assert_eq!(store.get_value("b").as_deref(), Some("false"));
    }
}
