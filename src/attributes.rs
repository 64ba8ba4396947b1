use ahash::{HashMap, HashMapExt};

use crate::safe::SafeString;

/// An insertion-ordered attribute set.
///
/// Attributes render in the order they were first set; setting a name again
/// replaces its value in place. A `None` value renders the bare attribute
/// name (`disabled`), not `name="name"`: an absent value means valueless,
/// not omitted.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    entries: Vec<(String, Option<SafeString>)>,
    by_name: HashMap<String, usize>,
}

impl Attributes {
    pub fn new() -> Self {
        Attributes {
            entries: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Set an attribute value. Replaces in place when the name is known.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<SafeString>) {
        self.insert(name.into(), Some(value.into()));
    }

    /// Set a valueless attribute such as `disabled`.
    pub fn flag(&mut self, name: impl Into<String>) {
        self.insert(name.into(), None);
    }

    fn insert(&mut self, name: String, value: Option<SafeString>) {
        if let Some(&index) = self.by_name.get(&name) {
            self.entries[index].1 = value;
        } else {
            self.by_name.insert(name.clone(), self.entries.len());
            self.entries.push((name, value));
        }
    }

    /// Look up a value. The outer `Option` is presence, the inner one
    /// distinguishes a valueless attribute from a valued one.
    pub fn get(&self, name: &str) -> Option<&Option<SafeString>> {
        self.by_name.get(name).map(|&index| &self.entries[index].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&SafeString>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<SafeString>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}
