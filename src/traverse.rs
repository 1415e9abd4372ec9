//! Depth-first walk over a descriptor tree.

use std::future::Future;
use std::pin::Pin;

use crate::descriptor::{Descriptor, NodeType};
use crate::error::Error;

#[allow(async_fn_in_trait)]
pub trait Visitor {
    /// Called once per typed descriptor, after all of its children.
    async fn visit(&mut self, node: &mut Descriptor) -> Result<(), Error>;
}

/// Walks `root`, visiting descriptors one at a time.
///
/// For each descriptor its `document` (if any) is walked first, then its
/// children in order, then the descriptor itself is visited if it has a
/// `type`. Every descriptor receives the `_document` reference of the
/// enclosing document. The first visitor error stops the walk.
pub async fn traverse<V: Visitor>(root: &mut Descriptor, visitor: &mut V) -> Result<(), Error> {
    walk(root, visitor).await
}

type Walk<'a> = Pin<Box<dyn Future<Output = Result<(), Error>> + 'a>>;

fn walk<'a, V: Visitor>(node: &'a mut Descriptor, visitor: &'a mut V) -> Walk<'a> {
    Box::pin(async move {
        if node.node_type() == Some(NodeType::Document) {
            let document = node.make_document_ref();
            node.set_document_ref(Some(document));
        }

        if let Some(document) = node.document_mut() {
            let document_ref = document.make_document_ref();
            document.set_document_ref(Some(document_ref));
            walk(document, &mut *visitor).await?;
        }

        let inherited = node.document_ref().cloned();
        for child in node.children_mut() {
            child.set_document_ref(inherited.clone());
            walk(child, &mut *visitor).await?;
        }

        if node.node_type().is_some() {
            visitor.visit(node).await?;
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{DescriptorId, DocumentRef};
    use serde_json::json;

    #[derive(Default)]
    struct Recorder {
        visited: Vec<String>,
        documents: Vec<Option<DocumentRef>>,
        fail_on: Option<String>,
    }

    impl Visitor for Recorder {
        async fn visit(&mut self, node: &mut Descriptor) -> Result<(), Error> {
            let name = node
                .get("name")
                .and_then(|name| name.as_str())
                .unwrap_or_default()
                .to_owned();

            if self.fail_on.as_deref() == Some(name.as_str()) {
                return Err(Error::MissingField {
                    node: name,
                    field: "size",
                });
            }

            self.visited.push(name);
            self.documents.push(node.document_ref().cloned());

            Ok(())
        }
    }

    fn file() -> Descriptor {
        Descriptor::from_value(json!({
            "name": "file",
            "document": {
                "type": "DOCUMENT",
                "id": "0:0",
                "name": "doc",
                "children": [{
                    "type": "CANVAS",
                    "name": "page",
                    "children": [
                        {
                            "type": "FRAME",
                            "name": "frame",
                            "children": [{ "type": "TEXT", "name": "label" }]
                        },
                        { "type": "RECTANGLE", "name": "box" }
                    ]
                }]
            }
        }))
        .unwrap()
    }

    #[test]
    fn children_before_parents() {
        let mut root = file();
        let mut recorder = Recorder::default();

        pollster::block_on(traverse(&mut root, &mut recorder)).unwrap();

        assert_eq!(recorder.visited, ["label", "frame", "box", "page", "doc"]);
    }

    #[test]
    fn document_reference_reaches_every_node() {
        let mut root = file();
        let mut recorder = Recorder::default();

        pollster::block_on(traverse(&mut root, &mut recorder)).unwrap();

        let documents: Vec<DocumentRef> = recorder.documents.into_iter().map(Option::unwrap).collect();
        let document = documents.last().unwrap();

        assert_eq!(document.name(), Some("doc"));
        assert_eq!(document.id(), Some(DescriptorId::from("0:0")));
        assert!(documents.iter().all(|d| d.ptr_eq(document)));
        assert!(root.document_ref().is_none());
    }

    #[test]
    fn untyped_wrappers_are_entered_but_not_visited() {
        let mut root = Descriptor::from_value(json!({
            "name": "wrapper",
            "children": [
                { "name": "bare", "children": [{ "type": "STAR", "name": "star" }] }
            ]
        }))
        .unwrap();
        let mut recorder = Recorder::default();

        pollster::block_on(traverse(&mut root, &mut recorder)).unwrap();

        assert_eq!(recorder.visited, ["star"]);
        assert!(recorder.documents[0].is_none());
    }

    #[test]
    fn document_root_refers_to_itself() {
        let mut root = Descriptor::from_value(json!({
            "type": "DOCUMENT",
            "name": "doc",
            "children": [{ "type": "LINE", "name": "line" }]
        }))
        .unwrap();
        let mut recorder = Recorder::default();

        pollster::block_on(traverse(&mut root, &mut recorder)).unwrap();

        let line = recorder.documents[0].as_ref().unwrap();
        let doc = recorder.documents[1].as_ref().unwrap();
        assert!(line.ptr_eq(doc));
        assert_eq!(doc.name(), Some("doc"));
    }

    #[test]
    fn visitor_error_stops_the_walk() {
        let mut root = file();
        let mut recorder = Recorder {
            fail_on: Some("frame".to_owned()),
            ..Default::default()
        };

        let result = pollster::block_on(traverse(&mut root, &mut recorder));

        assert!(result.is_err());
        assert_eq!(recorder.visited, ["label"]);
    }
}
