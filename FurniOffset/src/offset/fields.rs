//! Typed field access shared by the extractors
//!
//! `path` is the dotted location of `element` in its document and only feeds
//! error messages.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::formats::xml::XmlElement;

pub(crate) fn required_element<'a>(
    element: &'a XmlElement,
    key: &str,
    path: &str,
) -> Result<&'a XmlElement> {
    element
        .element(key)
        .ok_or_else(|| Error::missing(format!("{path}.{key}")))
}

pub(crate) fn required_text(element: &XmlElement, key: &str, path: &str) -> Result<String> {
    element
        .text(key)
        .map(str::to_string)
        .ok_or_else(|| Error::missing(format!("{path}.{key}")))
}

pub(crate) fn required_number<T: FromStr>(
    element: &XmlElement,
    key: &str,
    path: &str,
) -> Result<T> {
    optional_number(element, key, path)?.ok_or_else(|| Error::missing(format!("{path}.{key}")))
}

pub(crate) fn required_float(element: &XmlElement, key: &str, path: &str) -> Result<f64> {
    optional_float(element, key, path)?.ok_or_else(|| Error::missing(format!("{path}.{key}")))
}

/// Like [`optional_number`]; `NaN` and infinities are `InvalidValue`.
pub(crate) fn optional_float(
    element: &XmlElement,
    key: &str,
    path: &str,
) -> Result<Option<f64>> {
    match optional_number::<f64>(element, key, path)? {
        Some(value) if !value.is_finite() => Err(Error::InvalidValue {
            path: format!("{path}.{key}"),
            value: element.text(key).unwrap_or_default().to_string(),
        }),
        value => Ok(value),
    }
}

/// Absent → `Ok(None)`; present but unparsable → `InvalidValue`.
pub(crate) fn optional_number<T: FromStr>(
    element: &XmlElement,
    key: &str,
    path: &str,
) -> Result<Option<T>> {
    match element.number::<T>(key) {
        None => Ok(None),
        Some(Ok(value)) => Ok(Some(value)),
        Some(Err(raw)) => Err(Error::InvalidValue {
            path: format!("{path}.{key}"),
            value: raw.to_string(),
        }),
    }
}
