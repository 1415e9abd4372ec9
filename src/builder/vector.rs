use tracing::debug;

use crate::descriptor::Descriptor;
use crate::error::Error;
use crate::scene::SceneFactory;

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillGeometry {
    pub path: String,
    pub winding_rule: String,
}

impl FillGeometry {
    pub fn to_svg(&self) -> String {
        format!(
            r#"<path fill-rule="{}" d="{}" fill="currentColor" />"#,
            self.winding_rule.to_lowercase(),
            self.path
        )
    }
}

/// Builds a vector from the first `fillGeometry` entry; further entries are
/// not used.
pub fn create_vector<F: SceneFactory>(factory: &mut F, data: &Descriptor) -> Result<F::Handle, Error> {
    let geometry: Vec<FillGeometry> = data.field("fillGeometry")?;

    let Some(first) = geometry.first() else {
        return Err(Error::MissingField {
            node: data.label(),
            field: "fillGeometry",
        });
    };

    if geometry.len() > 1 {
        debug!(node = %data.label(), paths = geometry.len(), "using first path only");
    }

    let svg = first.to_svg();
    debug!(%svg);

    Ok(factory.create_node_from_svg(&svg)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::scene::Scene;
    use serde_json::json;

    #[test]
    fn svg_path_markup() {
        let geometry = FillGeometry {
            path: "M0 0L10 0L10 10Z".to_owned(),
            winding_rule: "EVENODD".to_owned(),
        };

        assert_eq!(
            geometry.to_svg(),
            r#"<path fill-rule="evenodd" d="M0 0L10 0L10 10Z" fill="currentColor" />"#
        );
    }

    #[test]
    fn only_first_geometry_is_used() {
        let data = Descriptor::from_value(fixtures::node(
            "VECTOR",
            json!({
                "fillGeometry": [
                    { "path": "M0 0L1 1Z", "windingRule": "NONZERO" },
                    { "path": "M5 5L6 6Z", "windingRule": "EVENODD" }
                ]
            }),
        ))
        .unwrap();

        let mut scene = Scene::new();
        let node = create_vector(&mut scene, &data).unwrap();
        let svg = scene.object(node).unwrap().svg().unwrap();

        assert!(svg.contains(r#"d="M0 0L1 1Z""#));
        assert!(svg.contains(r#"fill-rule="nonzero""#));
        assert!(!svg.contains("M5 5L6 6Z"));
        assert!(!svg.contains("evenodd"));
    }

    #[test]
    fn empty_geometry_fails() {
        let data =
            Descriptor::from_value(fixtures::node("VECTOR", json!({ "fillGeometry": [] }))).unwrap();

        let mut scene = Scene::new();
        let err = create_vector(&mut scene, &data).unwrap_err();

        assert!(matches!(err, Error::MissingField { field: "fillGeometry", .. }));
        assert!(scene.is_empty());
    }
}
