//! Generic XML tree format module

mod document;
mod reader;

pub use document::{TEXT_KEY, XmlElement, XmlValue};
pub use reader::parse_xml;
