//! Logic (geometry) extraction
//!
//! ```xml
//! <objectData type="chair">
//!   <model>
//!     <dimensions x="1" y="1" z="1.1"/>
//!     <directions><direction id="2"/><direction id="4"/></directions>
//!   </model>
//! </objectData>
//! ```

use super::fields::{required_element, required_float, required_number};
use super::types::{Dimensions, LogicRecord};
use crate::error::Result;
use crate::formats::xml::parse_xml;

/// Build the logic record from a logic document
///
/// A model without a `directions` block yields an empty direction list.
///
/// # Errors
/// Returns an error if the XML is malformed or `objectData.model.dimensions`
/// is missing or incomplete.
pub fn generate_logic_from_xml(raw_xml: &str) -> Result<LogicRecord> {
    let document = parse_xml(raw_xml)?;
    let object_data = required_element(&document, "objectData", "document")?;
    let model = required_element(object_data, "model", "objectData")?;
    let dimensions = required_element(model, "dimensions", "objectData.model")?;

    let path = "objectData.model.dimensions";
    let dimensions = Dimensions {
        x: required_float(dimensions, "x", path)?,
        y: required_float(dimensions, "y", path)?,
        z: required_float(dimensions, "z", path)?,
    };

    let directions = match model.element("directions") {
        Some(directions) => directions
            .elements("direction")
            .into_iter()
            .map(|direction| {
                required_number(direction, "id", "objectData.model.directions.direction")
            })
            .collect::<Result<Vec<u32>>>()?,
        None => Vec::new(),
    };

    Ok(LogicRecord {
        dimensions,
        directions,
    })
}
