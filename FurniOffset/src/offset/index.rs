//! Index extraction
//!
//! ```xml
//! <object type="chair" visualization="furniture_static" logic="furniture_basic"/>
//! ```

use super::fields::{required_element, required_text};
use super::types::IndexRecord;
use crate::error::Result;
use crate::formats::xml::parse_xml;

/// Copy the three cross-reference keys from an index document.
///
/// # Errors
/// Returns an error if the XML is malformed, the `object` root is missing,
/// or one of the keys is absent.
pub fn generate_index_from_xml(raw_xml: &str) -> Result<IndexRecord> {
    let document = parse_xml(raw_xml)?;
    let object = required_element(&document, "object", "document")?;

    Ok(IndexRecord {
        logic: required_text(object, "logic", "object")?,
        furni_type: required_text(object, "type", "object")?,
        visualization: required_text(object, "visualization", "object")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, FailureKind};

    #[test]
    fn test_keys_copied_verbatim() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<object type="rare_dragonlamp*4" visualization="furniture_animated"
        logic="furniture_multistate"/>"#;
        let index = generate_index_from_xml(xml).unwrap();

        assert_eq!(index.furni_type, "rare_dragonlamp*4");
        assert_eq!(index.visualization, "furniture_animated");
        assert_eq!(index.logic, "furniture_multistate");
    }

    #[test]
    fn test_wrong_root_fails() {
        let err = generate_index_from_xml(r#"<index type="a"/>"#).unwrap_err();
        assert!(matches!(err, Error::MissingElement { ref path } if path == "document.object"));
    }

    #[test]
    fn test_malformed_fails() {
        let err = generate_index_from_xml("<object type=").unwrap_err();
        assert_eq!(err.kind(), FailureKind::Parse);
    }
}
