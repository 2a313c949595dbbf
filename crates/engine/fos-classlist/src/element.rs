//! Element class access
//!
//! The [`ClassElement`] trait is the only thing the class helpers need from
//! a host element. [`Element`] is the engine's own implementation.

use crate::{DOMTokenList, NamedNodeMap};

/// Host element as seen by the class helpers
pub trait ClassElement {
    /// Class attribute as a plain string
    ///
    /// `None` when the host does not expose the class name as a string
    /// (SVG elements expose an animated string instead).
    fn class_name(&self) -> Option<&str>;

    /// Overwrite the class attribute verbatim
    fn set_class_name(&mut self, value: &str);

    /// Native token list view over the class attribute, if the host has one
    fn token_list(&self) -> Option<&DOMTokenList> {
        None
    }

    /// Mutable native token list view
    fn token_list_mut(&mut self) -> Option<&mut DOMTokenList> {
        None
    }
}

/// Element with attributes and a live class list
#[derive(Debug, Clone)]
pub struct Element {
    tag_name: String,
    attributes: NamedNodeMap,
    class_list: DOMTokenList,
    svg: bool,
    exposes_token_list: bool,
}

impl Element {
    /// Create an HTML element
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            attributes: NamedNodeMap::new(),
            class_list: DOMTokenList::new(),
            svg: false,
            exposes_token_list: true,
        }
    }

    /// Create an SVG element
    ///
    /// Its class name is not a plain string, so [`ClassElement::class_name`]
    /// returns `None`; the token list still works.
    pub fn svg(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            svg: true,
            ..Self::new(tag_name)
        }
    }

    /// Hide the native token list, as on hosts without classList
    pub fn without_token_list(mut self) -> Self {
        self.exposes_token_list = false;
        self
    }

    /// Set the initial class attribute
    pub fn with_class(mut self, value: &str) -> Self {
        self.class_list.set_value(value);
        self
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn is_svg(&self) -> bool {
        self.svg
    }

    /// Class list owned by this element, regardless of what the host exposes
    pub fn class_list(&self) -> &DOMTokenList {
        &self.class_list
    }

    /// Get attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        if is_class(name) {
            self.class_list.attribute()
        } else {
            self.attributes.get_attribute(name)
        }
    }

    /// Set attribute
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if is_class(name) {
            self.class_list.set_value(value);
        } else {
            self.attributes.set_attribute(name, value);
        }
    }

    /// Remove attribute, returns true if it was present
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        if is_class(name) {
            let present = self.class_list.attribute().is_some();
            self.class_list.clear_value();
            present
        } else {
            self.attributes.remove_attribute(name).is_some()
        }
    }

    /// Check if attribute exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    /// Non-class attributes
    pub fn attributes(&self) -> &NamedNodeMap {
        &self.attributes
    }
}

impl ClassElement for Element {
    fn class_name(&self) -> Option<&str> {
        if self.svg {
            None
        } else {
            Some(self.class_list.value())
        }
    }

    fn set_class_name(&mut self, value: &str) {
        self.class_list.set_value(value);
    }

    fn token_list(&self) -> Option<&DOMTokenList> {
        self.exposes_token_list.then_some(&self.class_list)
    }

    fn token_list_mut(&mut self) -> Option<&mut DOMTokenList> {
        if self.exposes_token_list {
            Some(&mut self.class_list)
        } else {
            None
        }
    }
}

fn is_class(name: &str) -> bool {
    name.eq_ignore_ascii_case("class")
}
