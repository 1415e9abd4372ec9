use std::collections::BTreeMap;

mod factory;
mod fonts;
mod kind;
mod object;
mod text;

use glam::Vec2;
use serde_json::Value;
use slab::Slab;
use tracing::{debug, trace};

use crate::font::FontName;

pub use self::factory::*;
pub use self::fonts::*;
pub use self::kind::*;
pub use self::object::*;
pub use self::text::*;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum HostError {
    #[error("font {0} is not available")]
    FontUnavailable(FontName),

    #[error("font {0} is not loaded")]
    FontNotLoaded(FontName),

    #[error("unknown object {0}")]
    UnknownObject(String),

    #[error("{kind} objects have no writable `{key}`")]
    NotSettable { kind: String, key: String },

    #[error("{0} is not a text object")]
    NotText(String),

    #[error("{0} cannot contain children")]
    NotAContainer(String),

    #[error("appending {child} to {parent} would create a cycle")]
    Cycle { parent: String, child: String },

    #[error("invalid SVG: {0}")]
    InvalidSvg(String),
}

/// One call made against a [`Scene`], in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneOp {
    Create { object: ObjectId, kind: ObjectKind },
    Resize { object: ObjectId },
    Set { object: ObjectId, key: String },
    LoadFont(FontName),
    SetText { object: ObjectId },
    Append { parent: ObjectId, child: ObjectId },
}

/// In-memory host scene.
///
/// Objects live in a slab and are never removed. Freshly created objects sit
/// at the root until appended somewhere.
pub struct Scene {
    objects: Slab<SceneObject>,
    fonts: FontBook,
    default_font: FontName,
    journal: Vec<SceneOp>,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_fonts(FontBook::open())
    }

    pub fn with_fonts(fonts: FontBook) -> Self {
        Self {
            objects: Slab::new(),
            fonts,
            default_font: FontName::default(),
            journal: Vec::new(),
        }
    }

    fn add_object(&mut self, object: SceneObject) -> ObjectId {
        let kind = object.kind();
        let id = ObjectId::new(self.objects.insert(object));

        debug!(%id, %kind, "created object");
        self.journal.push(SceneOp::Create { object: id, kind });

        id
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.index)
    }

    fn object_mut(&mut self, id: ObjectId) -> Result<&mut SceneObject, HostError> {
        self.objects
            .get_mut(id.index)
            .ok_or_else(|| HostError::UnknownObject(id.to_string()))
    }

    fn get(&self, id: ObjectId) -> Result<&SceneObject, HostError> {
        self.object(id)
            .ok_or_else(|| HostError::UnknownObject(id.to_string()))
    }

    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects
            .iter()
            .map(|(index, object)| (ObjectId::new(index), object))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects without a parent, in creation order.
    pub fn roots(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects()
            .filter(|(_, object)| object.parent().is_none())
            .map(|(id, _)| id)
    }

    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }

    pub fn default_font(&self) -> &FontName {
        &self.default_font
    }

    pub fn journal(&self) -> &[SceneOp] {
        &self.journal
    }

    fn is_ancestor(&self, ancestor: ObjectId, mut node: ObjectId) -> bool {
        while let Some(parent) = self.object(node).and_then(SceneObject::parent) {
            if parent == ancestor {
                return true;
            }
            node = parent;
        }

        false
    }

    /// Serializable view of the whole forest, starting at the roots.
    pub fn snapshot(&self) -> Vec<ObjectSnapshot> {
        self.roots().filter_map(|id| self.snapshot_of(id)).collect()
    }

    pub fn snapshot_of(&self, id: ObjectId) -> Option<ObjectSnapshot> {
        let object = self.object(id)?;

        Some(ObjectSnapshot {
            id,
            kind: object.kind(),
            size: object.kind().has_size().then(|| object.size()),
            properties: object.properties().clone(),
            text: object.text().cloned(),
            svg: object.svg().map(str::to_owned),
            children: object
                .children()
                .iter()
                .filter_map(|child| self.snapshot_of(*child))
                .collect(),
        })
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneFactory for Scene {
    type Handle = ObjectId;

    fn create_component(&mut self) -> ObjectId {
        self.add_object(SceneObject::new(ObjectKind::Component))
    }

    fn create_ellipse(&mut self) -> ObjectId {
        self.add_object(SceneObject::new(ObjectKind::Ellipse))
    }

    fn create_frame(&mut self) -> ObjectId {
        self.add_object(SceneObject::new(ObjectKind::Frame))
    }

    fn create_line(&mut self) -> ObjectId {
        self.add_object(SceneObject::new(ObjectKind::Line))
    }

    fn create_page(&mut self) -> ObjectId {
        self.add_object(SceneObject::new(ObjectKind::Page))
    }

    fn create_polygon(&mut self) -> ObjectId {
        self.add_object(SceneObject::new(ObjectKind::Polygon))
    }

    fn create_rectangle(&mut self) -> ObjectId {
        self.add_object(SceneObject::new(ObjectKind::Rectangle))
    }

    fn create_slice(&mut self) -> ObjectId {
        self.add_object(SceneObject::new(ObjectKind::Slice))
    }

    fn create_star(&mut self) -> ObjectId {
        self.add_object(SceneObject::new(ObjectKind::Star))
    }

    fn create_text(&mut self) -> ObjectId {
        let text = SceneObject::new(ObjectKind::Text).with_font(self.default_font.clone());
        self.add_object(text)
    }

    fn create_node_from_svg(&mut self, svg: &str) -> Result<ObjectId, HostError> {
        if !svg.contains("<path") || !svg.contains(" d=\"") {
            return Err(HostError::InvalidSvg(svg.to_owned()));
        }

        Ok(self.add_object(SceneObject::new(ObjectKind::Svg).with_svg(svg)))
    }

    async fn load_font(&mut self, font: &FontName) -> Result<(), HostError> {
        self.journal.push(SceneOp::LoadFont(font.clone()));
        self.fonts.load(font)?;

        debug!(%font, "font loaded");

        Ok(())
    }

    fn set_default_font(&mut self, font: &FontName) {
        self.default_font = font.clone();
    }

    fn resize(&mut self, node: ObjectId, width: f32, height: f32) -> Result<(), HostError> {
        let object = self.object_mut(node)?;

        if object.kind().has_size() {
            object.set_size(Vec2::new(width, height));
        } else {
            debug!(%node, kind = %object.kind(), "object has no size, resize ignored");
        }

        self.journal.push(SceneOp::Resize { object: node });

        Ok(())
    }

    fn is_settable(&self, node: ObjectId, key: &str) -> bool {
        self.object(node)
            .map_or(false, |object| object.kind().is_settable(key))
    }

    fn set_property(&mut self, node: ObjectId, key: &str, value: Value) -> Result<(), HostError> {
        let object = self.get(node)?;
        let kind = object.kind();

        if !kind.is_settable(key) {
            return Err(HostError::NotSettable {
                kind: kind.to_string(),
                key: key.to_owned(),
            });
        }

        if kind == ObjectKind::Text && TEXT_FONT_BOUND.contains(&key) {
            if let Some(font) = object.font_name() {
                if !self.fonts.is_loaded(font) {
                    return Err(HostError::FontNotLoaded(font.clone()));
                }
            }
        }

        trace!(%node, key, %value, "set property");

        self.object_mut(node)?.set_property(key, value);
        self.journal.push(SceneOp::Set {
            object: node,
            key: key.to_owned(),
        });

        Ok(())
    }

    fn set_text_props(&mut self, node: ObjectId, props: &TextProps) -> Result<(), HostError> {
        if self.get(node)?.kind() != ObjectKind::Text {
            return Err(HostError::NotText(node.to_string()));
        }

        if !self.fonts.is_loaded(&props.font_name) {
            return Err(HostError::FontNotLoaded(props.font_name.clone()));
        }

        self.object_mut(node)?.set_text(props.clone());
        self.journal.push(SceneOp::SetText { object: node });

        Ok(())
    }

    fn append_child(&mut self, parent: ObjectId, child: ObjectId) -> Result<(), HostError> {
        if !self.get(parent)?.kind().can_have_children() {
            return Err(HostError::NotAContainer(parent.to_string()));
        }

        let previous = self.get(child)?.parent();

        if parent == child || self.is_ancestor(child, parent) {
            return Err(HostError::Cycle {
                parent: parent.to_string(),
                child: child.to_string(),
            });
        }

        if let Some(previous) = previous {
            self.object_mut(previous)?.detach_child(child);
        }

        self.object_mut(parent)?.attach_child(child);
        self.object_mut(child)?.set_parent(parent);
        self.journal.push(SceneOp::Append { parent, child });

        Ok(())
    }
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSnapshot {
    pub id: ObjectId,
    pub kind: ObjectKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec2>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ObjectSnapshot>,
}
