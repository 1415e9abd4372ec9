use std::collections::BTreeMap;
use std::fmt;

use glam::Vec2;
use serde_json::Value;

use crate::font::FontName;
use crate::scene::{ObjectKind, TextProps};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ObjectId {
    pub(super) index: usize,
}

impl ObjectId {
    pub const NONE: ObjectId = ObjectId { index: usize::MAX };

    pub(super) fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

#[derive(Debug, Clone)]
pub struct SceneObject {
    kind: ObjectKind,
    parent: ObjectId,
    children: Vec<ObjectId>,
    size: Vec2,
    properties: BTreeMap<String, Value>,
    font_name: Option<FontName>,
    text: Option<TextProps>,
    svg: Option<String>,
}

impl SceneObject {
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            kind,
            parent: ObjectId::NONE,
            children: Vec::new(),
            size: Vec2::new(100.0, 100.0),
            properties: BTreeMap::new(),
            font_name: (kind == ObjectKind::Text).then(FontName::default),
            text: None,
            svg: None,
        }
    }

    pub fn with_font(mut self, font: FontName) -> Self {
        self.font_name = Some(font);
        self
    }

    pub fn with_svg(mut self, svg: impl Into<String>) -> Self {
        self.svg = Some(svg.into());
        self
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn parent(&self) -> Option<ObjectId> {
        (self.parent != ObjectId::NONE).then_some(self.parent)
    }

    pub fn children(&self) -> &[ObjectId] {
        &self.children
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn properties(&self) -> &BTreeMap<String, Value> {
        &self.properties
    }

    /// The font the object currently renders with; `None` for non-text objects.
    pub fn font_name(&self) -> Option<&FontName> {
        self.font_name.as_ref()
    }

    pub fn text(&self) -> Option<&TextProps> {
        self.text.as_ref()
    }

    pub fn svg(&self) -> Option<&str> {
        self.svg.as_deref()
    }

    pub(super) fn set_parent(&mut self, parent: ObjectId) {
        self.parent = parent;
    }

    pub(super) fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    pub(super) fn set_property(&mut self, key: &str, value: Value) {
        self.properties.insert(key.to_owned(), value);
    }

    pub(super) fn set_text(&mut self, text: TextProps) {
        self.font_name = Some(text.font_name.clone());
        self.text = Some(text);
    }

    pub(super) fn attach_child(&mut self, child: ObjectId) {
        self.children.push(child);
    }

    pub(super) fn detach_child(&mut self, child: ObjectId) {
        let Some(position) = self.children.iter().position(|c| *c == child) else {
            return;
        };

        self.children.remove(position);
    }
}
