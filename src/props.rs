//! Normalization of descriptor fields into assignable object properties.

use glam::Vec2;
use serde_json::{Map, Value};
use tracing::trace;

use crate::descriptor::Descriptor;
use crate::error::Error;
use crate::scene::SceneFactory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstraintType {
    Min,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Constraints {
    pub horizontal: ConstraintType,
    pub vertical: ConstraintType,
}

impl Constraints {
    /// Collapses source constraints into two buckets: `LEFT`/`TOP` become
    /// `MIN`, every other value (or none) becomes `MAX`.
    pub fn remap(source: &Value) -> Self {
        let bucket = |key: &str, min: &str| match source.get(key).and_then(Value::as_str) {
            Some(value) if value == min => ConstraintType::Min,
            _ => ConstraintType::Max,
        };

        Self {
            horizontal: bucket("horizontal", "LEFT"),
            vertical: bucket("vertical", "TOP"),
        }
    }
}

/// Moves a solid paint's alpha out of its color into `opacity`.
///
/// Paints without a color (gradients, images) are returned unchanged.
pub fn remap_paint(paint: &Value) -> Value {
    let (Some(fields), Some(color)) = (paint.as_object(), paint.get("color")) else {
        return paint.clone();
    };

    let mut remapped = fields.clone();

    if let Some(alpha) = color.get("a") {
        remapped.insert("opacity".to_owned(), alpha.clone());
    }

    let rgb: Map<String, Value> = ["r", "g", "b"]
        .into_iter()
        .filter_map(|channel| Some((channel.to_owned(), color.get(channel)?.clone())))
        .collect();
    remapped.insert("color".to_owned(), Value::Object(rgb));

    Value::Object(remapped)
}

#[derive(serde::Deserialize)]
struct Size {
    x: f32,
    y: f32,
}

/// A descriptor's properties after defaults and remapping.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeProps {
    pub size: Vec2,
    pub fields: Map<String, Value>,
}

pub fn map_props(data: &Descriptor) -> Result<NodeProps, Error> {
    let mut fields = data.fields().clone();

    for key in ["primaryAxisSizingMode", "counterAxisSizingMode"] {
        if matches!(fields.get(key), None | Some(Value::Null)) {
            fields.insert(key.to_owned(), Value::from("AUTO"));
        }
    }

    let constraints = Constraints::remap(&data.field::<Value>("constraints")?);
    fields.insert("constraints".to_owned(), serde_json::to_value(constraints)?);

    for key in ["fills", "strokes"] {
        let paints: Vec<Value> = data.field(key)?;
        let paints = paints.iter().map(remap_paint).collect();
        fields.insert(key.to_owned(), Value::Array(paints));
    }

    let size: Size = data.field("size")?;

    Ok(NodeProps {
        size: Vec2::new(size.x, size.y),
        fields,
    })
}

/// Resizes `node` and writes every normalized property it accepts.
///
/// Keys the object does not know are dropped.
pub fn assign_basic_props<F: SceneFactory>(
    factory: &mut F,
    node: F::Handle,
    data: &Descriptor,
) -> Result<(), Error> {
    let props = map_props(data)?;

    factory.resize(node, props.size.x, props.size.y)?;

    for (key, value) in props.fields {
        if factory.is_settable(node, &key) {
            factory.set_property(node, &key, value)?;
        } else {
            trace!(node = ?node, key = %key, "no such attribute, skipped");
        }
    }

    Ok(())
}
