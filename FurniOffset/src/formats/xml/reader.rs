//! XML tree reading
//!
//! Streams `quick-xml` events into an [`XmlElement`] tree. The returned
//! document element holds the top-level element(s) under their tag names.

use super::document::{TEXT_KEY, XmlElement, XmlValue};
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// An element that has been opened but not closed yet.
struct OpenElement {
    name: String,
    element: XmlElement,
    text: String,
}

impl OpenElement {
    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut element = XmlElement::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            element.insert(key, XmlValue::Text(value));
        }
        Ok(OpenElement {
            name,
            element,
            text: String::new(),
        })
    }

    /// Collapse into a tree value: text-only elements become scalars.
    fn into_value(self) -> XmlValue {
        let OpenElement {
            mut element, text, ..
        } = self;
        if text.is_empty() {
            XmlValue::Element(element)
        } else if element.is_empty() {
            XmlValue::Text(text)
        } else {
            element.insert(TEXT_KEY, XmlValue::Text(text));
            XmlValue::Element(element)
        }
    }
}

/// Parse an XML string into a generic tree
///
/// # Errors
/// Returns an error if the XML is malformed or contains no element.
pub fn parse_xml(content: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut document = XmlElement::new();
    let mut stack: Vec<OpenElement> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                stack.push(OpenElement::from_start(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let open = OpenElement::from_start(&e)?;
                let name = open.name.clone();
                attach(&mut stack, &mut document, name, open.into_value());
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let Some(open) = stack.pop() else {
                    return Err(Error::MalformedXml(format!("unexpected closing tag </{name}>")));
                };
                if open.name != name {
                    return Err(Error::MalformedXml(format!(
                        "expected </{}>, found </{name}>",
                        open.name
                    )));
                }
                let name = open.name.clone();
                attach(&mut stack, &mut document, name, open.into_value());
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape()?;
                push_text(&mut stack, &text)?;
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                push_text(&mut stack, &text)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlError(e)),
            // Declarations, comments, processing instructions, doctype
            Ok(_) => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(Error::MalformedXml(format!("unclosed element <{}>", open.name)));
    }
    if document.is_empty() {
        return Err(Error::EmptyDocument);
    }

    tracing::trace!("Parsed XML document with root(s): {:?}", document.keys().collect::<Vec<_>>());
    Ok(document)
}

fn attach(stack: &mut [OpenElement], document: &mut XmlElement, name: String, value: XmlValue) {
    match stack.last_mut() {
        Some(parent) => parent.element.insert(name, value),
        None => document.insert(name, value),
    }
}

fn push_text(stack: &mut [OpenElement], text: &str) -> Result<()> {
    let Some(open) = stack.last_mut() else {
        return Err(Error::MalformedXml(format!(
            "text outside of root element: {:?}",
            text.chars().take(32).collect::<String>()
        )));
    };
    open.text.push_str(text);
    Ok(())
}
