//! Extracted furniture folders
//!
//! A furniture folder holds the four XML documents of one item next to its
//! sprite images. This module reads them from disk and hands them to
//! [`crate::offset::generate_offset_from_xml`]; the conversion itself never
//! touches the file system.
//!
//! # Usage
//!
//! ```no_run
//! use furnioffset::folder::{FolderLayout, FurniFolder, write_offset_json};
//!
//! let layout = FolderLayout::default();
//! let folder = FurniFolder::load("extracted/chair", &layout)?;
//! let offset = folder.convert()?;
//! write_offset_json(&offset, "extracted/chair/furni.json", true)?;
//! # Ok::<(), furnioffset::Error>(())
//! ```

mod batch;
mod layout;

pub use batch::{BatchConvertResult, BatchProgress, batch_convert, find_furni_folders};
pub use layout::FolderLayout;

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::offset::{FurniOffset, generate_offset_from_xml};

/// The raw inputs of one furniture item, read from its folder
#[derive(Debug, Clone)]
pub struct FurniFolder {
    /// Folder the documents were read from
    pub path: PathBuf,
    /// Folder name (used for batch output file names)
    pub name: String,
    pub assets_xml: String,
    pub logic_xml: String,
    pub visualization_xml: String,
    pub index_xml: String,
    /// Image file names found below the folder, sorted
    pub folder_assets: Vec<String>,
}

impl FurniFolder {
    /// Read the four documents and the image listing of a furniture folder.
    ///
    /// # Errors
    /// Returns an error if a document is missing or a file cannot be read.
    pub fn load<P: AsRef<Path>>(dir: P, layout: &FolderLayout) -> Result<Self> {
        let dir = dir.as_ref();
        let name = folder_name(dir)?;

        let read = |suffix: &str| -> Result<String> {
            let path = find_document(dir, suffix)?;
            tracing::debug!("Reading {}", path.display());
            Ok(fs::read_to_string(path)?)
        };

        Ok(Self {
            path: dir.to_path_buf(),
            assets_xml: read(layout.assets_suffix.as_str())?,
            logic_xml: read(layout.logic_suffix.as_str())?,
            visualization_xml: read(layout.visualization_suffix.as_str())?,
            index_xml: read(layout.index_suffix.as_str())?,
            folder_assets: list_folder_assets(dir, layout)?,
            name,
        })
    }

    /// Run the conversion on the loaded documents.
    ///
    /// # Errors
    /// Returns an error if any document fails to convert.
    pub fn convert(&self) -> Result<FurniOffset> {
        generate_offset_from_xml(
            &self.assets_xml,
            &self.logic_xml,
            &self.visualization_xml,
            &self.index_xml,
            &self.folder_assets,
        )
    }
}

fn folder_name(dir: &Path) -> Result<String> {
    if let Some(name) = dir.file_name() {
        return Ok(name.to_string_lossy().into_owned());
    }
    // "." and friends have no file name until resolved
    let resolved = dir.canonicalize()?;
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::InvalidPath(dir.display().to_string()))
}

/// Find the first file (by name) directly in `dir` whose name ends with `suffix`.
///
/// Matching ignores ASCII case.
///
/// # Errors
/// Returns [`Error::MissingSourceFile`] when no file matches.
pub fn find_document(dir: &Path, suffix: &str) -> Result<PathBuf> {
    let suffix_lower = suffix.to_ascii_lowercase();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().to_ascii_lowercase();
        if file_name.ends_with(&suffix_lower) {
            return Ok(entry.into_path());
        }
    }

    Err(Error::MissingSourceFile {
        folder: dir.to_path_buf(),
        suffix: suffix.to_string(),
    })
}

/// List image file names below `dir` (recursively), sorted.
///
/// # Errors
/// Returns an error if the directory cannot be walked.
pub fn list_folder_assets(dir: &Path, layout: &FolderLayout) -> Result<Vec<String>> {
    let mut assets = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        if layout.is_image(&file_name) {
            assets.push(file_name.into_owned());
        }
    }
    assets.sort();
    Ok(assets)
}

/// Write a record as JSON.
///
/// # Errors
/// Returns an error if serialization or writing fails.
pub fn write_offset_json<P: AsRef<Path>>(
    offset: &FurniOffset,
    path: P,
    pretty: bool,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = if pretty {
        serde_json::to_string_pretty(offset)?
    } else {
        serde_json::to_string(offset)?
    };
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use tempfile::tempdir;

    #[test]
    fn test_find_document_case_insensitive_and_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b_Assets.XML"), "").unwrap();
        fs::write(dir.path().join("a_assets.xml"), "").unwrap();

        let found = find_document(dir.path(), "assets.xml").unwrap();
        assert_eq!(found.file_name().unwrap(), "a_assets.xml");
    }

    #[test]
    fn test_missing_document() {
        let dir = tempdir().unwrap();
        let err = find_document(dir.path(), "logic.xml").unwrap_err();
        assert!(matches!(err, Error::MissingSourceFile { ref suffix, .. }
            if suffix == "logic.xml"));
        assert_eq!(err.kind(), FailureKind::Io);
    }

    #[test]
    fn test_list_folder_assets_recursive_images_only() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("images").join("chair_64_a_0_0.png"), "").unwrap();
        fs::write(dir.path().join("chair_icon_a.png"), "").unwrap();
        fs::write(dir.path().join("chair_assets.xml"), "").unwrap();

        let assets = list_folder_assets(dir.path(), &FolderLayout::default()).unwrap();
        assert_eq!(assets, vec!["chair_64_a_0_0.png", "chair_icon_a.png"]);
    }
}
