//! Error types for `FurniOffset`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `FurniOffset` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== XML Parse Errors ====================
    /// XML parsing error reported by the reader.
    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttrError(String),

    /// The document is not well-formed (stray end tag, unclosed element, text outside the root).
    #[error("malformed XML: {0}")]
    MalformedXml(String),

    /// The document contains no element at all.
    #[error("XML document is empty")]
    EmptyDocument,

    // ==================== Structure Errors ====================
    /// A required element or field is absent from the parsed tree.
    #[error("missing required element: {path}")]
    MissingElement {
        /// Dotted path of the missing element (e.g. `objectData.model.dimensions`).
        path: String,
    },

    /// A field is present but its value cannot be used (e.g. a non-numeric size).
    #[error("invalid value for {path}: {value:?}")]
    InvalidValue {
        /// Dotted path of the field.
        path: String,
        /// The raw text found in the document.
        value: String,
    },

    /// A mandatory visualization size variant is not declared.
    #[error("visualization for size {size} not found")]
    MissingVisualizationSize {
        /// The missing pixel size (1 or 64).
        size: u32,
    },

    // ==================== Folder / Config Errors ====================
    /// A furniture folder has no document ending with the expected suffix.
    #[error("no file ending with '{suffix}' in {folder}")]
    MissingSourceFile {
        /// The folder that was searched.
        folder: PathBuf,
        /// The expected file-name suffix.
        suffix: String,
    },

    /// Folder layout configuration could not be parsed.
    #[error("config error: {0}")]
    ConfigError(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid file path.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

/// Coarse classification of an [`Error`].
///
/// The conversion contract is binary (a record or nothing); this is the most
/// a caller should need to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The parser could not produce a tree.
    Parse,
    /// The tree parsed but a required substructure is missing or unusable.
    Structure,
    /// Reading inputs or writing outputs failed outside the core.
    Io,
}

impl Error {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Error::XmlError(_)
            | Error::XmlAttrError(_)
            | Error::MalformedXml(_)
            | Error::EmptyDocument => FailureKind::Parse,
            Error::MissingElement { .. }
            | Error::InvalidValue { .. }
            | Error::MissingVisualizationSize { .. } => FailureKind::Structure,
            Error::Io(_)
            | Error::MissingSourceFile { .. }
            | Error::ConfigError(_)
            | Error::JsonError(_)
            | Error::InvalidPath(_)
            | Error::WalkDirError(_) => FailureKind::Io,
        }
    }

    pub(crate) fn missing(path: impl Into<String>) -> Self {
        Error::MissingElement { path: path.into() }
    }
}

// Add conversion from quick_xml::events::attributes::AttrError
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttrError(err.to_string())
    }
}

// Add conversion from walkdir::Error
impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `FurniOffset` operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Error::EmptyDocument.kind(), FailureKind::Parse);
        assert_eq!(Error::missing("object").kind(), FailureKind::Structure);
        assert_eq!(
            Error::MissingVisualizationSize { size: 64 }.kind(),
            FailureKind::Structure
        );
        assert_eq!(
            Error::InvalidPath("x".to_string()).kind(),
            FailureKind::Io
        );
    }

    #[test]
    fn test_display() {
        let err = Error::InvalidValue {
            path: "visualization.size".to_string(),
            value: "big".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value for visualization.size: \"big\"");
    }
}
