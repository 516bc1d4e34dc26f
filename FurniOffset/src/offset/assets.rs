//! Asset manifest extraction
//!
//! ```xml
//! <assets>
//!   <asset name="chair_64_a_0_0" x="-32" y="12"/>
//!   <asset name="chair_64_a_2_0" x="-32" y="12" flipH="1" source="chair_64_a_0_0"/>
//! </assets>
//! ```

use super::fields::{optional_number, required_element, required_number, required_text};
use super::types::{AssetDictionary, AssetRecord};
use crate::error::Result;
use crate::formats::xml::parse_xml;

/// Build the asset dictionary from an asset manifest
///
/// An asset `exists` when any entry of `folder_assets` contains its name.
/// Assets sharing a name overwrite earlier ones.
///
/// # Errors
/// Returns an error if the XML is malformed, the `assets` root is missing,
/// or an asset lacks its name or offsets.
pub fn generate_assets_from_xml<S: AsRef<str>>(
    raw_xml: &str,
    folder_assets: &[S],
) -> Result<AssetDictionary> {
    let document = parse_xml(raw_xml)?;
    let assets = required_element(&document, "assets", "document")?;

    let mut dictionary = AssetDictionary::new();
    for raw_asset in assets.elements("asset") {
        let name = required_text(raw_asset, "name", "assets.asset")?;
        let path = format!("assets.asset[{name}]");

        let record = AssetRecord {
            exists: asset_exists(&name, folder_assets),
            x: required_number(raw_asset, "x", &path)?,
            y: required_number(raw_asset, "y", &path)?,
            flip_h: optional_number(raw_asset, "flipH", &path)?,
            source: raw_asset.text("source").map(str::to_string),
            name,
        };

        if let Some(previous) = dictionary.insert(record.name.clone(), record) {
            tracing::debug!("Duplicate asset '{}' replaced", previous.name);
        }
    }

    Ok(dictionary)
}

/// Substring match of `name` against every folder entry.
fn asset_exists<S: AsRef<str>>(name: &str, folder_assets: &[S]) -> bool {
    folder_assets
        .iter()
        .any(|entry| entry.as_ref().contains(name))
}
