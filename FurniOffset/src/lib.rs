//! # FurniOffset
//!
//! A pure-Rust library that turns the XML description of a furniture item
//! into one typed record for the game client.
//!
//! ## Inputs
//!
//! - **assets** - sprite names and registration offsets
//! - **logic** - footprint dimensions and facing directions
//! - **visualization** - per-size layers, colors and animations
//! - **index** - type / visualization / logic keys
//! - **folder listing** - image files present next to the documents
//!
//! ## Quick Start
//!
//! ### Converting documents already in memory
//!
//! ```
//! use furnioffset::offset::generate_offset_from_xml;
//!
//! let assets = r#"<assets><asset name="chair_64_a_0_0" x="-32" y="12"/></assets>"#;
//! let logic = r#"<objectData><model><dimensions x="1" y="1" z="1"/></model></objectData>"#;
//! let visualization = r#"<visualizationData><graphics>
//!     <visualization size="1" layerCount="1" angle="45"/>
//!     <visualization size="64" layerCount="1" angle="45"/>
//! </graphics></visualizationData>"#;
//! let index =
//!     r#"<object type="chair" visualization="furniture_static" logic="furniture_basic"/>"#;
//!
//! let offset = generate_offset_from_xml(
//!     assets, logic, visualization, index, &["chair_64_a_0_0.png"],
//! )?;
//! assert!(offset.assets["chair_64_a_0_0"].exists);
//! assert_eq!(offset.visualization.sizes(), vec![1, 64]);
//! # Ok::<(), furnioffset::Error>(())
//! ```
//!
//! ### Converting an extracted folder
//!
//! ```no_run
//! use furnioffset::prelude::*;
//!
//! let folder = FurniFolder::load("extracted/chair", &FolderLayout::default())?;
//! let offset = folder.convert()?;
//! write_offset_json(&offset, "extracted/chair/furni.json", true)?;
//! # Ok::<(), furnioffset::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `furnioffset` command-line binary

pub mod error;
pub mod folder;
pub mod formats;
pub mod offset;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, FailureKind, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, FailureKind, Result};
    pub use crate::formats::xml::{XmlElement, XmlValue, parse_xml};
    pub use crate::utils::list::{Sequence, to_list};

    // Conversion
    pub use crate::offset::{
        AnimationDef, AnimationLayer, AssetDictionary, AssetRecord, ColorLayerRef, Dimensions,
        FurniOffset, IndexRecord, LayerMeta, LogicRecord, VisualizationSet, VisualizationVariant,
        generate_assets_from_xml, generate_index_from_xml, generate_logic_from_xml,
        generate_offset_from_xml, generate_visualization_from_xml,
    };

    // Folder collaborators
    pub use crate::folder::{
        BatchConvertResult, BatchProgress, FolderLayout, FurniFolder, batch_convert,
        find_furni_folders, write_offset_json,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
