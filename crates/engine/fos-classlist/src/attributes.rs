//! Element Attributes
//!
//! Attribute storage for everything except `class`, which lives in the
//! element's token list.

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            value: value.into(),
        }
    }
}

/// Named node map (attribute collection)
///
/// Names are matched ASCII case-insensitively, as for HTML elements.
/// Insertion order is preserved.
#[derive(Debug, Clone, Default)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of attributes
    pub fn length(&self) -> usize {
        self.attributes.len()
    }

    /// Get attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.attributes[i].value.as_str())
    }

    /// Set attribute, returns the previous value
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Option<String> {
        match self.position(name) {
            Some(i) => Some(std::mem::replace(&mut self.attributes[i].value, value.to_string())),
            None => {
                self.attributes.push(Attr::new(name, value));
                None
            }
        }
    }

    /// Remove attribute by name
    pub fn remove_attribute(&mut self, name: &str) -> Option<Attr> {
        self.position(name).map(|i| self.attributes.remove(i))
    }

    /// Check if attribute exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterate over attributes
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name.eq_ignore_ascii_case(name))
    }
}
