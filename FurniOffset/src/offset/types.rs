//! Type definitions for the furni offset record
//!
//! Field names serialize in camelCase to match the `furni.json` layout the
//! client reads.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Pixel size of the icon visualization.
pub const ICON_SIZE: u32 = 1;
/// Pixel size of the small visualization.
pub const SMALL_SIZE: u32 = 32;
/// Pixel size of the large visualization.
pub const LARGE_SIZE: u32 = 64;

/// One sprite declared in the asset manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    /// Asset name (e.g., "chair_64_a_0_0")
    pub name: String,
    /// Whether an image for this asset is present in the furniture folder
    pub exists: bool,
    /// Horizontal registration offset
    pub x: i32,
    /// Vertical registration offset
    pub y: i32,
    /// Mirror flag (`1` when the sprite is drawn flipped)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flip_h: Option<i32>,
    /// Name of the asset whose image this one reuses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Assets keyed by name.
pub type AssetDictionary = IndexMap<String, AssetRecord>;

/// Footprint of the furniture in tiles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Geometry from the logic document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicRecord {
    pub dimensions: Dimensions,
    /// Valid facing directions, in source order
    pub directions: Vec<u32>,
}

/// Cross-reference keys from the index document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    /// Furniture class name
    #[serde(rename = "type")]
    pub furni_type: String,
    /// Visualization type key (e.g., "furniture_animated")
    pub visualization: String,
    /// Logic type key (e.g., "furniture_multistate")
    pub logic: String,
}

/// Rendering hints for one layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerMeta {
    pub layer_id: u32,
    /// Blend mode (e.g., "ADD")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_mouse: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

/// A layer tint inside a color definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorLayerRef {
    pub layer_id: u32,
    /// Hex color as written in the document (e.g., "FFCC00")
    pub color: String,
}

/// Frame sequences of one layer inside an animation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationLayer {
    pub layer_id: u32,
    /// One entry per `frameSequence` block, each a list of frame ids
    pub frame_sequence: Vec<Vec<u32>>,
}

/// An animation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationDef {
    pub id: u32,
    /// Animation to play after this one. Never filled in by the extractor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_to: Option<u32>,
    pub layers: Vec<AnimationLayer>,
}

/// One size-specific visualization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationVariant {
    pub angle: i32,
    pub layer_count: u32,
    pub size: u32,
    /// Declared directions, each seeded with an empty layer list
    pub directions: BTreeMap<u32, Vec<LayerMeta>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<LayerMeta>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<BTreeMap<u32, Vec<ColorLayerRef>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animations: Option<BTreeMap<u32, AnimationDef>>,
}

/// Visualizations keyed by pixel size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationSet {
    #[serde(rename = "1")]
    pub icon: VisualizationVariant,
    #[serde(rename = "32", default, skip_serializing_if = "Option::is_none")]
    pub small: Option<VisualizationVariant>,
    #[serde(rename = "64")]
    pub large: VisualizationVariant,
}

impl VisualizationSet {
    /// Look up a variant by pixel size.
    #[must_use]
    pub fn get(&self, size: u32) -> Option<&VisualizationVariant> {
        match size {
            ICON_SIZE => Some(&self.icon),
            SMALL_SIZE => self.small.as_ref(),
            LARGE_SIZE => Some(&self.large),
            _ => None,
        }
    }

    /// Sizes present in this set, ascending.
    #[must_use]
    pub fn sizes(&self) -> Vec<u32> {
        [ICON_SIZE, SMALL_SIZE, LARGE_SIZE]
            .into_iter()
            .filter(|size| self.get(*size).is_some())
            .collect()
    }
}

/// The complete record for one furniture item (`furni.json`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurniOffset {
    pub assets: AssetDictionary,
    pub logic: LogicRecord,
    pub visualization: VisualizationSet,
    pub index: IndexRecord,
}

impl FurniOffset {
    /// Assets whose image was not found in the folder listing.
    pub fn missing_assets(&self) -> impl Iterator<Item = &AssetRecord> {
        self.assets.values().filter(|asset| !asset.exists)
    }
}
