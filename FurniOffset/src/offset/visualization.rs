//! Visualization extraction
//!
//! A visualization document declares one `visualization` block per pixel
//! size, either under a `graphics` wrapper or directly below the root:
//!
//! ```xml
//! <visualizationData type="chair">
//!   <graphics>
//!     <visualization size="64" layerCount="2" angle="45">
//!       <layers><layer id="1" ink="ADD" alpha="128"/></layers>
//!       <directions><direction id="2"/><direction id="4"/></directions>
//!       <colors><color id="1"><colorLayer id="0" color="FFCC00"/></color></colors>
//!       <animations>
//!         <animation id="1">
//!           <animationLayer id="0">
//!             <frameSequence><frame id="0"/><frame id="1"/></frameSequence>
//!           </animationLayer>
//!         </animation>
//!       </animations>
//!     </visualization>
//!   </graphics>
//! </visualizationData>
//! ```

use std::collections::BTreeMap;

use super::fields::{
    optional_float, optional_number, required_element, required_number, required_text,
};
use super::types::{
    AnimationDef, AnimationLayer, ColorLayerRef, ICON_SIZE, LARGE_SIZE, LayerMeta, SMALL_SIZE,
    VisualizationSet, VisualizationVariant,
};
use crate::error::{Error, Result};
use crate::formats::xml::{XmlElement, parse_xml};

/// Build the size-keyed visualization set from a visualization document
///
/// The icon (size 1) and large (size 64) variants are mandatory; the small
/// (size 32) variant is kept when declared.
///
/// # Errors
/// Returns an error if the XML is malformed, `visualizationData` is missing,
/// a block has unusable fields, or the icon or large variant is absent.
pub fn generate_visualization_from_xml(raw_xml: &str) -> Result<VisualizationSet> {
    let document = parse_xml(raw_xml)?;
    let data = required_element(&document, "visualizationData", "document")?;

    let raw_visualizations = match data.element("graphics") {
        Some(graphics) => graphics.elements("visualization"),
        None => data.elements("visualization"),
    };

    let mut variants = raw_visualizations
        .into_iter()
        .map(parse_variant)
        .collect::<Result<Vec<_>>>()?;

    tracing::trace!(
        "Parsed visualization sizes: {:?}",
        variants.iter().map(|v| v.size).collect::<Vec<_>>()
    );

    let icon = take_size(&mut variants, ICON_SIZE)
        .ok_or(Error::MissingVisualizationSize { size: ICON_SIZE })?;
    let large = take_size(&mut variants, LARGE_SIZE)
        .ok_or(Error::MissingVisualizationSize { size: LARGE_SIZE })?;
    let small = take_size(&mut variants, SMALL_SIZE);

    Ok(VisualizationSet { icon, small, large })
}

/// Remove and return the first variant of the given size.
fn take_size(variants: &mut Vec<VisualizationVariant>, size: u32) -> Option<VisualizationVariant> {
    let position = variants.iter().position(|variant| variant.size == size)?;
    Some(variants.remove(position))
}

fn parse_variant(raw: &XmlElement) -> Result<VisualizationVariant> {
    let path = "visualization";
    let size: u32 = required_number(raw, "size", path)?;
    let path = format!("visualization[{size}]");

    Ok(VisualizationVariant {
        angle: required_number(raw, "angle", &path)?,
        layer_count: required_number(raw, "layerCount", &path)?,
        size,
        directions: parse_directions(raw, &path)?,
        layers: raw
            .element("layers")
            .filter(|layers| layers.contains("layer"))
            .map(|layers| parse_layers(layers, &path))
            .transpose()?,
        colors: raw
            .element("colors")
            .filter(|colors| colors.contains("color"))
            .map(|colors| parse_colors(colors, &path))
            .transpose()?,
        animations: raw
            .element("animations")
            .filter(|animations| animations.contains("animation"))
            .map(|animations| parse_animations(animations, &path))
            .transpose()?,
    })
}

/// Seed one empty layer list per declared direction.
// TODO: fill per-direction layer overrides once the client's expected shape is settled
fn parse_directions(raw: &XmlElement, path: &str) -> Result<BTreeMap<u32, Vec<LayerMeta>>> {
    let mut directions = BTreeMap::new();
    if let Some(declared) = raw.element("directions") {
        let path = format!("{path}.directions.direction");
        for direction in declared.elements("direction") {
            let id: u32 = required_number(direction, "id", &path)?;
            directions.insert(id, Vec::new());
        }
    }
    Ok(directions)
}

fn parse_layers(layers: &XmlElement, path: &str) -> Result<Vec<LayerMeta>> {
    let path = format!("{path}.layers.layer");
    layers
        .elements("layer")
        .into_iter()
        .map(|layer| -> Result<LayerMeta> {
            Ok(LayerMeta {
                layer_id: required_number(layer, "id", &path)?,
                ink: layer.text("ink").map(str::to_string),
                alpha: optional_number(layer, "alpha", &path)?,
                ignore_mouse: optional_number(layer, "ignoreMouse", &path)?,
                z: optional_float(layer, "z", &path)?,
            })
        })
        .collect()
}

fn parse_colors(colors: &XmlElement, path: &str) -> Result<BTreeMap<u32, Vec<ColorLayerRef>>> {
    let path = format!("{path}.colors.color");
    let mut parsed = BTreeMap::new();
    for color in colors.elements("color") {
        let id: u32 = required_number(color, "id", &path)?;
        let layer_path = format!("{path}[{id}].colorLayer");
        let layers = color
            .elements("colorLayer")
            .into_iter()
            .map(|layer| -> Result<ColorLayerRef> {
                Ok(ColorLayerRef {
                    layer_id: required_number(layer, "id", &layer_path)?,
                    color: required_text(layer, "color", &layer_path)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        parsed.insert(id, layers);
    }
    Ok(parsed)
}

fn parse_animations(animations: &XmlElement, path: &str) -> Result<BTreeMap<u32, AnimationDef>> {
    let path = format!("{path}.animations.animation");
    let mut parsed = BTreeMap::new();
    for animation in animations.elements("animation") {
        let id: u32 = required_number(animation, "id", &path)?;
        let layer_path = format!("{path}[{id}].animationLayer");
        let layers = animation
            .elements("animationLayer")
            .into_iter()
            .map(|layer| parse_animation_layer(layer, &layer_path))
            .collect::<Result<Vec<_>>>()?;
        parsed.insert(
            id,
            AnimationDef {
                id,
                transition_to: None,
                layers,
            },
        );
    }
    Ok(parsed)
}

fn parse_animation_layer(layer: &XmlElement, path: &str) -> Result<AnimationLayer> {
    let layer_id = required_number(layer, "id", path)?;
    let frame_path = format!("{path}[{layer_id}].frameSequence.frame");
    let frame_sequence = layer
        .elements("frameSequence")
        .into_iter()
        .map(|sequence| {
            sequence
                .elements("frame")
                .into_iter()
                .map(|frame| required_number(frame, "id", &frame_path))
                .collect::<Result<Vec<u32>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(AnimationLayer {
        layer_id,
        frame_sequence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    fn wrap(body: &str) -> String {
        format!(
            r#"<visualizationData type="test"><graphics>
                <visualization size="1" layerCount="1" angle="45"/>
                {body}
            </graphics></visualizationData>"#
        )
    }

    #[test]
    fn test_selects_sizes() {
        let xml = wrap(
            r#"<visualization size="32" layerCount="2" angle="45"/>
               <visualization size="64" layerCount="3" angle="45"/>"#,
        );
        let set = generate_visualization_from_xml(&xml).unwrap();
        assert_eq!(set.icon.size, 1);
        assert_eq!(set.small.as_ref().map(|v| v.layer_count), Some(2));
        assert_eq!(set.large.layer_count, 3);
    }

    #[test]
    fn test_small_is_optional() {
        let xml = wrap(r#"<visualization size="64" layerCount="3" angle="45"/>"#);
        let set = generate_visualization_from_xml(&xml).unwrap();
        assert!(set.small.is_none());
        assert_eq!(set.sizes(), vec![1, 64]);
    }

    #[test]
    fn test_first_variant_of_a_size_wins() {
        let xml = wrap(
            r#"<visualization size="64" layerCount="3" angle="45"/>
               <visualization size="64" layerCount="9" angle="90"/>"#,
        );
        let set = generate_visualization_from_xml(&xml).unwrap();
        assert_eq!(set.large.layer_count, 3);
    }

    #[test]
    fn test_root_level_visualizations() {
        let xml = r#"<visualizationData>
            <visualization size="64" layerCount="1" angle="45"/>
            <visualization size="1" layerCount="1" angle="45"/>
        </visualizationData>"#;
        let set = generate_visualization_from_xml(xml).unwrap();
        assert_eq!(set.icon.size, 1);
        assert_eq!(set.large.size, 64);
    }

    #[test]
    fn test_missing_mandatory_sizes() {
        let xml = wrap(r#"<visualization size="32" layerCount="1" angle="45"/>"#);
        let err = generate_visualization_from_xml(&xml).unwrap_err();
        assert!(matches!(err, Error::MissingVisualizationSize { size: 64 }));

        let xml = r#"<visualizationData><graphics>
            <visualization size="64" layerCount="1" angle="45"/>
        </graphics></visualizationData>"#;
        let err = generate_visualization_from_xml(xml).unwrap_err();
        assert!(matches!(err, Error::MissingVisualizationSize { size: 1 }));
        assert_eq!(err.kind(), FailureKind::Structure);
    }

    #[test]
    fn test_directions_are_seeded_empty() {
        let xml = wrap(
            r#"<visualization size="64" layerCount="1" angle="45">
                 <directions><direction id="4"/><direction id="2"/></directions>
               </visualization>"#,
        );
        let set = generate_visualization_from_xml(&xml).unwrap();
        let ids: Vec<_> = set.large.directions.keys().copied().collect();
        assert_eq!(ids, vec![2, 4]);
        assert!(set.large.directions.values().all(Vec::is_empty));
        assert!(set.icon.directions.is_empty());
    }

    #[test]
    fn test_layers_keep_only_present_fields() {
        let xml = wrap(
            r#"<visualization size="64" layerCount="2" angle="45">
                 <layers>
                   <layer id="0" z="-1"/>
                   <layer id="1" ink="ADD" alpha="128" ignoreMouse="1"/>
                 </layers>
               </visualization>"#,
        );
        let set = generate_visualization_from_xml(&xml).unwrap();
        let layers = set.large.layers.unwrap();

        assert_eq!(
            layers,
            vec![
                LayerMeta {
                    layer_id: 0,
                    ink: None,
                    alpha: None,
                    ignore_mouse: None,
                    z: Some(-1.0),
                },
                LayerMeta {
                    layer_id: 1,
                    ink: Some("ADD".to_string()),
                    alpha: Some(128),
                    ignore_mouse: Some(1),
                    z: None,
                },
            ]
        );
        assert!(set.icon.layers.is_none());
    }

    #[test]
    fn test_non_finite_layer_z_is_invalid() {
        let xml = wrap(
            r#"<visualization size="64" layerCount="1" angle="45">
                 <layers><layer id="0" z="NaN"/></layers>
               </visualization>"#,
        );
        let err = generate_visualization_from_xml(&xml).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref path, ref value }
            if path == "visualization[64].layers.layer.z" && value == "NaN"));
    }

    #[test]
    fn test_colors() {
        let xml = wrap(
            r#"<visualization size="64" layerCount="2" angle="45">
                 <colors>
                   <color id="1"><colorLayer id="0" color="FFCC00"/></color>
                   <color id="2">
                     <colorLayer id="0" color="0099FF"/>
                     <colorLayer id="1" color="FFFFFF"/>
                   </color>
                 </colors>
               </visualization>"#,
        );
        let set = generate_visualization_from_xml(&xml).unwrap();
        let colors = set.large.colors.unwrap();

        assert_eq!(colors.len(), 2);
        assert_eq!(
            colors[&1],
            vec![ColorLayerRef {
                layer_id: 0,
                color: "FFCC00".to_string()
            }]
        );
        assert_eq!(colors[&2].len(), 2);
        assert_eq!(colors[&2][1].color, "FFFFFF");
    }

    #[test]
    fn test_animation_frame_sequences_nest() {
        let xml = wrap(
            r#"<visualization size="64" layerCount="1" angle="45">
                 <animations>
                   <animation id="1">
                     <animationLayer id="0">
                       <frameSequence><frame id="1"/><frame id="2"/><frame id="3"/></frameSequence>
                       <frameSequence><frame id="4"/><frame id="5"/></frameSequence>
                     </animationLayer>
                   </animation>
                 </animations>
               </visualization>"#,
        );
        let set = generate_visualization_from_xml(&xml).unwrap();
        let animations = set.large.animations.unwrap();
        let animation = &animations[&1];

        assert_eq!(animation.id, 1);
        assert_eq!(animation.transition_to, None);
        assert_eq!(animation.layers.len(), 1);
        assert_eq!(animation.layers[0].layer_id, 0);
        assert_eq!(animation.layers[0].frame_sequence, vec![vec![1, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn test_single_frame_sequence() {
        let xml = wrap(
            r#"<visualization size="64" layerCount="1" angle="45">
                 <animations><animation id="0"><animationLayer id="2">
                   <frameSequence><frame id="7"/></frameSequence>
                 </animationLayer></animation></animations>
               </visualization>"#,
        );
        let set = generate_visualization_from_xml(&xml).unwrap();
        let animations = set.large.animations.unwrap();
        assert_eq!(animations[&0].layers[0].frame_sequence, vec![vec![7]]);
    }

    #[test]
    fn test_empty_substructures_are_absent() {
        let xml = wrap(
            r#"<visualization size="64" layerCount="1" angle="45">
                 <layers/><colors/><animations/>
               </visualization>"#,
        );
        let set = generate_visualization_from_xml(&xml).unwrap();
        assert!(set.large.layers.is_none());
        assert!(set.large.colors.is_none());
        assert!(set.large.animations.is_none());
    }

    #[test]
    fn test_malformed_fails() {
        let err = generate_visualization_from_xml("<visualizationData><graphics>").unwrap_err();
        assert_eq!(err.kind(), FailureKind::Parse);
    }
}
