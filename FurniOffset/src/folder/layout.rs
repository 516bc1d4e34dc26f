//! Furniture folder layout configuration
//!
//! Describes how the four documents and the sprite images of an extracted
//! furniture are named. The defaults match the usual extraction output;
//! a TOML file can override any subset of them:
//!
//! ```toml
//! visualization_suffix = "_visualization.xml"
//! image_extensions = ["png", "gif"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// File naming rules for a furniture folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolderLayout {
    /// Suffix of the asset manifest (e.g., "chair_assets.xml")
    pub assets_suffix: String,
    /// Suffix of the logic document
    pub logic_suffix: String,
    /// Suffix of the visualization document
    pub visualization_suffix: String,
    /// Suffix of the index document
    pub index_suffix: String,
    /// Extensions of files listed as folder assets (without the dot)
    pub image_extensions: Vec<String>,
    /// File name written next to the documents when converting in place
    pub output_file: String,
}

impl Default for FolderLayout {
    fn default() -> Self {
        Self {
            assets_suffix: "assets.xml".to_string(),
            logic_suffix: "logic.xml".to_string(),
            visualization_suffix: "visualization.xml".to_string(),
            index_suffix: "index.xml".to_string(),
            image_extensions: vec!["png".to_string()],
            output_file: "furni.json".to_string(),
        }
    }
}

impl FolderLayout {
    /// Parse a layout from TOML; omitted keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a layout from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Whether `file_name` counts as a folder asset.
    #[must_use]
    pub fn is_image(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.image_extensions
                    .iter()
                    .any(|wanted| wanted.eq_ignore_ascii_case(ext))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, FailureKind};

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let layout = FolderLayout::from_toml_str(
            r#"
            visualization_suffix = "_visualization.xml"
            image_extensions = ["png", "GIF"]
            "#,
        )
        .unwrap();

        assert_eq!(layout.visualization_suffix, "_visualization.xml");
        assert_eq!(layout.assets_suffix, "assets.xml");
        assert_eq!(layout.output_file, "furni.json");
        assert!(layout.is_image("chair_64_a_0_0.gif"));
        assert!(layout.is_image("chair_64_a_0_0.PNG"));
        assert!(!layout.is_image("chair_assets.xml"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = FolderLayout::from_toml_str("asset_suffix = \"a.xml\"").unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
        assert_eq!(err.kind(), FailureKind::Io);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(FolderLayout::from_toml_str("").unwrap(), FolderLayout::default());
    }
}
