//! Furni offset conversion
//!
//! Four independent extractors each turn one XML document into one section
//! of a [`FurniOffset`]:
//!
//! - **assets** - sprite offsets, flagged by presence in the folder listing
//! - **logic** - footprint dimensions and facing directions
//! - **index** - type / visualization / logic keys
//! - **visualization** - per-size layers, colors and animations
//!
//! [`generate_offset_from_xml`] runs all four and only returns a record when
//! every one succeeds.
//!
//! # Usage
//!
//! ```no_run
//! use furnioffset::offset::generate_offset_from_xml;
//!
//! # let (assets, logic, visualization, index) = ("", "", "", "");
//! let folder = ["chair_64_a_0_0.png", "chair_icon_a.png"];
//! let offset = generate_offset_from_xml(assets, logic, visualization, index, &folder)?;
//! println!("{} assets, sizes {:?}", offset.assets.len(), offset.visualization.sizes());
//! # Ok::<(), furnioffset::Error>(())
//! ```

mod assets;
mod fields;
mod index;
mod logic;
mod types;
mod visualization;

// Re-export types
pub use types::*;

// Re-export extractors
pub use assets::generate_assets_from_xml;
pub use index::generate_index_from_xml;
pub use logic::generate_logic_from_xml;
pub use visualization::generate_visualization_from_xml;

use crate::error::Result;

/// Convert the four furniture documents into one record
///
/// Each extractor runs on its own input; the first failure (in assets,
/// logic, visualization, index order) is returned and no partial record is
/// ever produced.
///
/// # Errors
/// Returns an error if any of the four documents fails to parse or lacks a
/// required structure.
pub fn generate_offset_from_xml<S: AsRef<str>>(
    assets_xml: &str,
    logic_xml: &str,
    visualization_xml: &str,
    index_xml: &str,
    folder_assets: &[S],
) -> Result<FurniOffset> {
    let assets = generate_assets_from_xml(assets_xml, folder_assets);
    let logic = generate_logic_from_xml(logic_xml);
    let visualization = generate_visualization_from_xml(visualization_xml);
    let index = generate_index_from_xml(index_xml);

    Ok(FurniOffset {
        assets: assets?,
        logic: logic?,
        visualization: visualization?,
        index: index?,
    })
}
