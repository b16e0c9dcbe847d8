use indexmap::IndexMap;

/// Named values registered by `Constants` blocks.
///
/// A constant named after a style key supplies that key's value when no
/// enclosing element cascades it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantElementDictionary {
    values: IndexMap<String, String>,
}

impl ConstantElementDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `value` under `name`, replacing an earlier definition.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}
