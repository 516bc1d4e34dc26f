//! Batch furniture conversion
//!
//! Finds furniture folders below a root directory and converts them in
//! parallel. Every folder is an independent conversion: one failure is
//! counted and reported, never fatal for the rest.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use walkdir::WalkDir;

use super::{FolderLayout, FurniFolder, find_document, write_offset_json};
use crate::error::Result;

/// Result of a batch conversion
#[derive(Debug, Clone)]
pub struct BatchConvertResult {
    /// Number of successful conversions
    pub success_count: usize,
    /// Number of failed conversions
    pub fail_count: usize,
    /// Messages for each folder processed
    pub results: Vec<String>,
}

/// Progress update for a batch conversion
#[derive(Debug, Clone)]
pub struct BatchProgress {
    /// Folders started so far (1-based)
    pub current: usize,
    /// Total folders in the batch
    pub total: usize,
    /// Name of the folder being converted
    pub folder: String,
}

/// Find all furniture folders directly below `root`
///
/// A folder qualifies when it contains an index document.
///
/// # Returns
/// A sorted list of folder paths.
pub fn find_furni_folders<P: AsRef<Path>>(root: P, layout: &FolderLayout) -> Vec<PathBuf> {
    let mut folders: Vec<_> = WalkDir::new(root)
        .follow_links(true)
        .min_depth(1) // Skip the root directory itself
        .max_depth(1) // Only immediate subdirectories
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_dir())
        .filter(|e| find_document(e.path(), &layout.index_suffix).is_ok())
        .map(walkdir::DirEntry::into_path)
        .collect();

    folders.sort();
    folders
}

/// Convert furniture folders in parallel
///
/// With a `destination`, each record is written to
/// `<destination>/<folder name>.json`; otherwise it is written inside the
/// folder as `layout.output_file`.
///
/// # Arguments
/// * `folders` - Furniture folders to convert
/// * `layout` - File naming rules
/// * `destination` - Optional output directory
/// * `progress` - Callback for progress updates
///
/// # Returns
/// Summary of the batch conversion.
pub fn batch_convert<F>(
    folders: &[PathBuf],
    layout: &FolderLayout,
    destination: Option<&Path>,
    progress: F,
) -> BatchConvertResult
where
    F: Fn(&BatchProgress) + Send + Sync,
{
    let success_counter = AtomicUsize::new(0);
    let fail_counter = AtomicUsize::new(0);
    let processed = AtomicUsize::new(0);
    let total = folders.len();

    let results: Vec<String> = folders
        .par_iter()
        .map(|folder| {
            let label = folder
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| folder.display().to_string());

            let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
            progress(&BatchProgress {
                current,
                total,
                folder: label.clone(),
            });

            match convert_folder(folder, layout, destination) {
                Ok(output) => {
                    success_counter.fetch_add(1, Ordering::SeqCst);
                    format!("Converted {label} -> {}", output.display())
                }
                Err(e) => {
                    fail_counter.fetch_add(1, Ordering::SeqCst);
                    tracing::warn!("Failed to convert {}: {}", label, e);
                    format!("Failed {label}: {e}")
                }
            }
        })
        .collect();

    BatchConvertResult {
        success_count: success_counter.load(Ordering::SeqCst),
        fail_count: fail_counter.load(Ordering::SeqCst),
        results,
    }
}

fn convert_folder(
    folder: &Path,
    layout: &FolderLayout,
    destination: Option<&Path>,
) -> Result<PathBuf> {
    let furni = FurniFolder::load(folder, layout)?;
    let offset = furni.convert()?;

    let output = match destination {
        Some(dest) => dest.join(format!("{}.json", furni.name)),
        None => folder.join(&layout.output_file),
    };
    write_offset_json(&offset, &output, true)?;
    tracing::info!(
        "Converted {} ({} assets, sizes {:?})",
        furni.name,
        offset.assets.len(),
        offset.visualization.sizes()
    );
    Ok(output)
}
