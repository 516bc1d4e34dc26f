//! File format handlers
//!
//! Furniture documents are plain XML; `xml` turns them into the generic
//! attribute/element tree the extractors in [`crate::offset`] consume.

pub mod xml;

// Re-export main document types
pub use xml::{XmlElement, XmlValue, parse_xml};
