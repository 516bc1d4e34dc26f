//! CLI command for converting one furniture folder

use std::path::Path;

use crate::folder::{FolderLayout, FurniFolder, write_offset_json};

pub fn execute(
    source: &Path,
    output: Option<&Path>,
    compact: bool,
    config: Option<&Path>,
) -> anyhow::Result<()> {
    let layout = FolderLayout::load_or_default(config)?;
    let folder = FurniFolder::load(source, &layout)?;
    let offset = folder
        .convert()
        .map_err(|e| anyhow::anyhow!("Failed to convert {}: {e}", source.display()))?;

    if let Some(output) = output {
        write_offset_json(&offset, output, !compact)?;
        tracing::info!("Wrote {}", output.display());
        eprintln!(
            "Converted {} ({} assets) -> {}",
            folder.name,
            offset.assets.len(),
            output.display()
        );
    } else if compact {
        println!("{}", serde_json::to_string(&offset)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&offset)?);
    }

    Ok(())
}
