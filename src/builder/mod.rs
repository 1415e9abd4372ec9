//! Per-type construction of scene objects from descriptors.

mod text;
mod vector;

use tracing::error;

use crate::descriptor::{Descriptor, NodeType};
use crate::error::Error;
use crate::props::assign_basic_props;
use crate::scene::SceneFactory;

pub use self::text::*;
pub use self::vector::*;

/// Builds the scene object for `data`.
///
/// Returns `Ok(None)` for node types that cannot be created; that refusal is
/// logged and is not an error.
pub async fn create_node<F: SceneFactory>(
    factory: &mut F,
    data: &Descriptor,
) -> Result<Option<F::Handle>, Error> {
    let Some(ty) = data.node_type() else {
        return Err(Error::MissingField {
            node: data.label(),
            field: "type",
        });
    };

    let node = match ty {
        NodeType::BooleanOperation
        | NodeType::ComponentSet
        | NodeType::Document
        | NodeType::Group => {
            error!(node = %data.label(), "creating '{ty}' not supported");
            return Ok(None);
        }
        NodeType::Component => factory.create_component(),
        NodeType::Ellipse => factory.create_ellipse(),
        NodeType::Frame | NodeType::Instance => factory.create_frame(),
        NodeType::Line => factory.create_line(),
        NodeType::Page => factory.create_page(),
        NodeType::Polygon => factory.create_polygon(),
        NodeType::Rectangle => factory.create_rectangle(),
        NodeType::Slice => factory.create_slice(),
        NodeType::Star => factory.create_star(),
        NodeType::Text => create_text(factory, data).await?,
        NodeType::Vector => create_vector(factory, data)?,
        NodeType::Canvas | NodeType::Other(_) => factory.create_frame(),
    };

    assign_basic_props(factory, node, data)?;

    Ok(Some(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::scene::{ObjectKind, Scene};
    use serde_json::json;

    fn build(scene: &mut Scene, value: serde_json::Value) -> Option<crate::scene::ObjectId> {
        let data = Descriptor::from_value(value).unwrap();
        pollster::block_on(create_node(scene, &data)).unwrap()
    }

    #[test]
    fn unsupported_types_are_refused() {
        let mut scene = Scene::new();

        for ty in ["BOOLEAN_OPERATION", "COMPONENT_SET", "DOCUMENT", "GROUP"] {
            assert_eq!(build(&mut scene, fixtures::node(ty, json!({}))), None);
        }

        assert!(scene.is_empty());
    }

    #[test]
    fn primitives_map_to_their_kind() {
        let cases = [
            ("COMPONENT", ObjectKind::Component),
            ("ELLIPSE", ObjectKind::Ellipse),
            ("FRAME", ObjectKind::Frame),
            ("INSTANCE", ObjectKind::Frame),
            ("LINE", ObjectKind::Line),
            ("PAGE", ObjectKind::Page),
            ("POLYGON", ObjectKind::Polygon),
            ("RECTANGLE", ObjectKind::Rectangle),
            ("SLICE", ObjectKind::Slice),
            ("STAR", ObjectKind::Star),
            ("STICKY", ObjectKind::Frame),
        ];

        let mut scene = Scene::new();

        for (ty, kind) in cases {
            let id = build(&mut scene, fixtures::node(ty, json!({}))).unwrap();
            assert_eq!(scene.object(id).unwrap().kind(), kind, "{ty}");
        }
    }

    #[test]
    fn common_props_are_applied() {
        let mut scene = Scene::new();
        let id = build(
            &mut scene,
            fixtures::node("FRAME", json!({ "name": "Header", "layoutMode": "HORIZONTAL" })),
        )
        .unwrap();

        let object = scene.object(id).unwrap();
        assert_eq!(object.property("name"), Some(&json!("Header")));
        assert_eq!(object.property("layoutMode"), Some(&json!("HORIZONTAL")));
        assert_eq!(object.property("primaryAxisSizingMode"), Some(&json!("AUTO")));
        assert_eq!(
            object.property("constraints"),
            Some(&json!({ "horizontal": "MIN", "vertical": "MIN" }))
        );
    }

    #[test]
    fn malformed_descriptor_fails() {
        let mut scene = Scene::new();
        let data = Descriptor::from_value(json!({ "type": "RECTANGLE" })).unwrap();

        let err = pollster::block_on(create_node(&mut scene, &data)).unwrap_err();

        assert!(matches!(err, Error::MissingField { .. }));
    }

    #[test]
    fn untyped_descriptor_fails() {
        let mut scene = Scene::new();
        let data = Descriptor::from_value(json!({ "id": "1" })).unwrap();

        let err = pollster::block_on(create_node(&mut scene, &data)).unwrap_err();

        assert!(matches!(err, Error::MissingField { field: "type", .. }));
    }
}
