//! Untyped node records as they arrive in the input document.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeType {
    BooleanOperation,
    Canvas,
    Component,
    ComponentSet,
    Document,
    Ellipse,
    Frame,
    Group,
    Instance,
    Line,
    Page,
    Polygon,
    Rectangle,
    Slice,
    Star,
    Text,
    Vector,
    Other(String),
}

impl NodeType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "BOOLEAN_OPERATION" => NodeType::BooleanOperation,
            "CANVAS" => NodeType::Canvas,
            "COMPONENT" => NodeType::Component,
            "COMPONENT_SET" => NodeType::ComponentSet,
            "DOCUMENT" => NodeType::Document,
            "ELLIPSE" => NodeType::Ellipse,
            "FRAME" => NodeType::Frame,
            "GROUP" => NodeType::Group,
            "INSTANCE" => NodeType::Instance,
            "LINE" => NodeType::Line,
            "PAGE" => NodeType::Page,
            "POLYGON" => NodeType::Polygon,
            "RECTANGLE" => NodeType::Rectangle,
            "SLICE" => NodeType::Slice,
            "STAR" => NodeType::Star,
            "TEXT" => NodeType::Text,
            "VECTOR" => NodeType::Vector,
            other => NodeType::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeType::BooleanOperation => "BOOLEAN_OPERATION",
            NodeType::Canvas => "CANVAS",
            NodeType::Component => "COMPONENT",
            NodeType::ComponentSet => "COMPONENT_SET",
            NodeType::Document => "DOCUMENT",
            NodeType::Ellipse => "ELLIPSE",
            NodeType::Frame => "FRAME",
            NodeType::Group => "GROUP",
            NodeType::Instance => "INSTANCE",
            NodeType::Line => "LINE",
            NodeType::Page => "PAGE",
            NodeType::Polygon => "POLYGON",
            NodeType::Rectangle => "RECTANGLE",
            NodeType::Slice => "SLICE",
            NodeType::Star => "STAR",
            NodeType::Text => "TEXT",
            NodeType::Vector => "VECTOR",
            NodeType::Other(tag) => tag,
        }
    }

    /// Types that only give the tree its shape and never become scene objects.
    pub fn is_structural(&self) -> bool {
        matches!(self, NodeType::Canvas | NodeType::Document)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DescriptorId(String);

impl DescriptorId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<usize> for DescriptorId {
    fn from(value: usize) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for DescriptorId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for DescriptorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn id_from_value(value: &Value) -> Option<DescriptorId> {
    match value {
        Value::String(s) if !s.is_empty() => Some(DescriptorId(s.clone())),
        Value::Number(n) => Some(DescriptorId(n.to_string())),
        _ => None,
    }
}

/// Shared handle to the document a descriptor belongs to.
///
/// Holds the document's own fields without its subtree.
#[derive(Clone)]
pub struct DocumentRef(Arc<Map<String, Value>>);

impl DocumentRef {
    fn new(fields: &Map<String, Value>) -> Self {
        Self(Arc::new(fields.clone()))
    }

    pub fn ptr_eq(&self, other: &DocumentRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn id(&self) -> Option<DescriptorId> {
        self.0.get("id").and_then(id_from_value)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }
}

impl fmt::Debug for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentRef")
            .field("id", &self.id())
            .field("name", &self.name())
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Descriptor {
    #[serde(default)]
    children: Option<Vec<Descriptor>>,
    #[serde(default)]
    document: Option<Box<Descriptor>>,
    #[serde(flatten)]
    fields: Map<String, Value>,
    #[serde(skip)]
    document_ref: Option<DocumentRef>,
}

impl Descriptor {
    pub fn from_value(value: Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn node_type(&self) -> Option<NodeType> {
        self.fields
            .get("type")
            .and_then(Value::as_str)
            .map(NodeType::from_tag)
    }

    pub fn id(&self) -> Option<DescriptorId> {
        self.fields.get("id").and_then(id_from_value)
    }

    /// Writes a numeric id into the record and returns it.
    pub fn assign_id(&mut self, id: usize) -> DescriptorId {
        self.fields.insert("id".to_owned(), Value::from(id));
        DescriptorId::from(id)
    }

    pub fn children(&self) -> &[Descriptor] {
        self.children.as_deref().unwrap_or_default()
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Descriptor] {
        self.children.as_deref_mut().unwrap_or_default()
    }

    pub fn document(&self) -> Option<&Descriptor> {
        self.document.as_deref()
    }

    pub(crate) fn document_mut(&mut self) -> Option<&mut Descriptor> {
        self.document.as_deref_mut()
    }

    /// The `_document` reference set during traversal.
    pub fn document_ref(&self) -> Option<&DocumentRef> {
        self.document_ref.as_ref()
    }

    pub(crate) fn set_document_ref(&mut self, document: Option<DocumentRef>) {
        self.document_ref = document;
    }

    pub(crate) fn make_document_ref(&self) -> DocumentRef {
        DocumentRef::new(&self.fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Reads a required field, failing with a descriptive error when it is
    /// absent or has the wrong shape.
    pub fn field<T: DeserializeOwned>(&self, key: &'static str) -> Result<T, Error> {
        match self.fields.get(key) {
            Some(Value::Null) | None => Err(Error::MissingField {
                node: self.label(),
                field: key,
            }),
            Some(value) => self.decode(key, value),
        }
    }

    pub fn optional_field<T: DeserializeOwned>(&self, key: &'static str) -> Result<Option<T>, Error> {
        match self.fields.get(key) {
            Some(Value::Null) | None => Ok(None),
            Some(value) => self.decode(key, value).map(Some),
        }
    }

    fn decode<T: DeserializeOwned>(&self, key: &'static str, value: &Value) -> Result<T, Error> {
        T::deserialize(value).map_err(|source| Error::InvalidField {
            node: self.label(),
            field: key,
            source,
        })
    }

    /// Short human readable name used in logs and errors.
    pub fn label(&self) -> String {
        let ty = self
            .node_type()
            .map(|ty| ty.to_string())
            .unwrap_or_else(|| "<untyped>".to_owned());

        match self.id() {
            Some(id) => format!("{ty} {id}"),
            None => ty,
        }
    }
}
