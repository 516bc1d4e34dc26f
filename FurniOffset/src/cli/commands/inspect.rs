//! CLI command for inspecting a furniture folder

use std::path::Path;

use console::style;

use crate::folder::{FolderLayout, FurniFolder};
use crate::offset::{FurniOffset, VisualizationVariant};

pub fn execute(source: &Path, missing: bool, config: Option<&Path>) -> anyhow::Result<()> {
    let layout = FolderLayout::load_or_default(config)?;
    let folder = FurniFolder::load(source, &layout)?;
    let offset = folder
        .convert()
        .map_err(|e| anyhow::anyhow!("Failed to convert {}: {e}", source.display()))?;

    print_summary(&folder, &offset);

    if missing {
        println!();
        let missing: Vec<_> = offset.missing_assets().collect();
        if missing.is_empty() {
            println!("All assets have an image in the folder.");
        } else {
            println!("Missing images ({}):", missing.len());
            for asset in missing {
                match &asset.source {
                    Some(source) => println!("  {} (source: {source})", asset.name),
                    None => println!("  {}", asset.name),
                }
            }
        }
    }

    Ok(())
}

fn print_summary(folder: &FurniFolder, offset: &FurniOffset) {
    let existing = offset.assets.values().filter(|a| a.exists).count();
    let dims = &offset.logic.dimensions;

    println!("{}", style(format!("Furniture: {}", folder.name)).bold());
    println!();
    println!("Type:          {}", offset.index.furni_type);
    println!("Visualization: {}", offset.index.visualization);
    println!("Logic:         {}", offset.index.logic);
    println!("Dimensions:    {} x {} x {}", dims.x, dims.y, dims.z);
    println!("Directions:    {:?}", offset.logic.directions);
    println!(
        "Assets:        {} ({} with image, {} without)",
        offset.assets.len(),
        existing,
        offset.assets.len() - existing
    );
    println!("Images:        {}", folder.folder_assets.len());
    println!();

    println!(
        "{:>6}  {:>6}  {:>6}  {:>6}  {:>6}  {:>10}",
        "SIZE", "ANGLE", "LAYERS", "COLORS", "ANIMS", "DIRECTIONS"
    );
    for size in offset.visualization.sizes() {
        if let Some(variant) = offset.visualization.get(size) {
            print_variant(variant);
        }
    }
}

fn print_variant(variant: &VisualizationVariant) {
    println!(
        "{:>6}  {:>6}  {:>6}  {:>6}  {:>6}  {:>10}",
        variant.size,
        variant.angle,
        variant.layer_count,
        variant.colors.as_ref().map_or(0, std::collections::BTreeMap::len),
        variant.animations.as_ref().map_or(0, std::collections::BTreeMap::len),
        variant.directions.len()
    );
}
