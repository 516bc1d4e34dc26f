//! Generic XML tree structures
//!
//! Attributes and child elements of an element share one key space. A child
//! that occurs once is stored as a bare value; a key that occurs more than
//! once becomes an [`XmlValue::List`] in document order.

use std::str::FromStr;

use indexmap::IndexMap;

use crate::utils::list::{Sequence, to_list};

/// Key used for text content that sits next to attributes or child elements.
pub const TEXT_KEY: &str = "#text";

/// A value in the generic XML tree.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlValue {
    /// Attribute value, or an element that only holds text.
    Text(String),
    /// An element with attributes and/or children.
    Element(XmlElement),
    /// A key that occurred more than once.
    List(Vec<XmlValue>),
}

/// An element: attributes and children collapsed into ordered key/value pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    fields: IndexMap<String, XmlValue>,
}

impl XmlValue {
    /// The element behind this value, if it is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            XmlValue::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The scalar text behind this value, if it is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            XmlValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Sequence for XmlValue {
    fn as_items(&self) -> Option<&[Self]> {
        match self {
            XmlValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl XmlElement {
    /// Creates an empty element.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, turning a repeated key into a list.
    pub fn insert(&mut self, key: impl Into<String>, value: XmlValue) {
        let key = key.into();
        match self.fields.get_mut(&key) {
            Some(XmlValue::List(items)) => items.push(value),
            Some(existing) => {
                let first = std::mem::replace(existing, XmlValue::List(Vec::new()));
                *existing = XmlValue::List(vec![first, value]);
            }
            None => {
                self.fields.insert(key, value);
            }
        }
    }

    /// Raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&XmlValue> {
        self.fields.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Child element stored under `key`.
    ///
    /// Returns `None` when the key is absent, holds text, or repeats.
    #[must_use]
    pub fn element(&self, key: &str) -> Option<&XmlElement> {
        self.get(key).and_then(XmlValue::as_element)
    }

    /// All child elements stored under `key`, in document order.
    ///
    /// Absent keys give an empty list; text-only entries are skipped.
    #[must_use]
    pub fn elements(&self, key: &str) -> Vec<&XmlElement> {
        to_list(self.get(key))
            .into_iter()
            .filter_map(XmlValue::as_element)
            .collect()
    }

    /// Scalar text stored under `key`.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(XmlValue::as_text)
    }

    /// Parse the scalar stored under `key`.
    ///
    /// Returns `None` when the key is absent, `Some(Err(raw))` when it does not parse.
    pub fn number<T: FromStr>(&self, key: &str) -> Option<std::result::Result<T, &str>> {
        self.text(key)
            .map(|raw| raw.trim().parse::<T>().map_err(|_| raw))
    }

    /// Whether the element has no attributes, children or text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> XmlValue {
        XmlValue::Text(value.to_string())
    }

    #[test]
    fn test_insert_repeated_key_becomes_list() {
        let mut element = XmlElement::new();
        element.insert("frame", text("1"));
        assert_eq!(element.get("frame"), Some(&text("1")));

        element.insert("frame", text("2"));
        element.insert("frame", text("3"));
        assert_eq!(
            element.get("frame"),
            Some(&XmlValue::List(vec![text("1"), text("2"), text("3")]))
        );
        assert_eq!(element.keys().collect::<Vec<_>>(), vec!["frame"]);
    }

    #[test]
    fn test_number_access() {
        let mut element = XmlElement::new();
        element.insert("x", text(" 12 "));
        element.insert("ink", text("ADD"));

        assert_eq!(element.number::<i32>("x"), Some(Ok(12)));
        assert_eq!(element.number::<i32>("ink"), Some(Err("ADD")));
        assert_eq!(element.number::<i32>("y"), None);
    }

    #[test]
    fn test_elements_skips_text_entries() {
        let mut layer = XmlElement::new();
        layer.insert("id", text("0"));

        let mut layers = XmlElement::new();
        layers.insert("layer", XmlValue::Element(layer.clone()));
        layers.insert("layer", text("stray"));

        assert_eq!(layers.elements("layer"), vec![&layer]);
        assert!(layers.elements("missing").is_empty());
        assert!(layers.element("layer").is_none());
    }
}
