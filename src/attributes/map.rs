//! The ordered attribute mapping a session is reconstituted into.

use indexmap::IndexMap;
use serde::Serialize;

use super::AttrValue;

/// Ordered mapping from attribute name to [`AttrValue`].
///
/// A fresh map is built per decode; callers may rely on enumeration order
/// matching document field order. Re-inserting an existing key replaces the
/// value but keeps the key's original position, the same contract the flat
/// decode path depends on when nested objects collide with earlier keys.
///
/// `AttributeMap` serializes transparently as a JSON object. It deliberately
/// does not implement `Deserialize`: rebuilding a map from text must go
/// through [`crate::JsonCodec::decode_attributes`] so the principal rule and
/// the numeric split apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttributeMap {
    entries: IndexMap<String, AttrValue>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, returning the previous value if the name was
    /// already present. The name keeps its first-seen position.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    /// Remove an attribute, preserving the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.entries.shift_remove(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, AttrValue)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (String, AttrValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, AttrValue)> for AttributeMap {
    fn extend<I: IntoIterator<Item = (String, AttrValue)>>(&mut self, iter: I) {
        self.entries.extend(iter)
    }
}

impl IntoIterator for AttributeMap {
    type Item = (String, AttrValue);
    type IntoIter = indexmap::map::IntoIter<String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = indexmap::map::Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut map = AttributeMap::new();
        map.insert("z", 1);
        map.insert("a", 2);
        map.insert("m", 3);

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn reinsert_replaces_value_but_keeps_position() {
        let mut map = AttributeMap::new();
        map.insert("first", 1);
        map.insert("second", 2);
        let old = map.insert("first", 10);

        assert_eq!(old, Some(AttrValue::Int(1)));
        assert_eq!(map.get("first"), Some(&AttrValue::Int(10)));
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["first", "second"]);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut map = AttributeMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("c", 3);
        map.remove("b");

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn serializes_as_plain_object_in_order() {
        let mut map = AttributeMap::new();
        map.insert("user", "alice");
        map.insert("visits", 3);
        map.insert("authenticated", true);

        let text = serde_json::to_string(&map).unwrap();
        assert_eq!(text, r#"{"user":"alice","visits":3,"authenticated":true}"#);
    }

    #[test]
    fn empty_map_serializes_as_empty_object() {
        assert_eq!(serde_json::to_string(&AttributeMap::new()).unwrap(), "{}");
    }
}
