//! Turns a composed description into a [`DocumentNode`] tree.
//!
//! Resolution is a single recursive pass. Children resolve in sequence order
//! before their parent node is built, and the first error aborts the whole
//! document.

use crate::content_model::ContentModelViolation;
use crate::model::{Child, Composed, Content, DocumentNode, ElementDescription};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("structural violation: {0}")]
    Violation(ContentModelViolation),
    #[error("cannot resolve <{tag}>: {reason}")]
    Structural { tag: String, reason: String },
}

/// Resolve a composed description into a document tree.
pub fn resolve(composed: &Composed) -> Result<DocumentNode, ResolveError> {
    match composed {
        Composed::Element(element) => resolve_element(element),
        Composed::Violation(violation) => Err(ResolveError::Violation(violation.clone())),
    }
}

fn resolve_element(element: &ElementDescription) -> Result<DocumentNode, ResolveError> {
    let tag = element.kind.tag();

    let children = if element.kind.is_void() {
        if !matches!(element.content, Content::Empty) {
            return Err(structural(tag, "void elements cannot have content"));
        }
        None
    } else {
        let children = match &element.content {
            Content::Text(text) => vec![Child::Text(text.clone())],
            Content::Single(child) => vec![Child::Node(resolve(child)?)],
            Content::Sequence(items) if !items.is_empty() => items
                .iter()
                .map(|item| resolve(item).map(Child::Node))
                .collect::<Result<Vec<_>, _>>()?,
            Content::Sequence(_) | Content::Empty => {
                return Err(structural(tag, "content is required"));
            }
        };
        Some(children)
    };

    let attributes = (!element.attributes.is_empty()).then(|| {
        element
            .attributes
            .iter()
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect()
    });

    Ok(DocumentNode {
        tag: tag.to_string(),
        children,
        attributes,
    })
}

fn structural(tag: &str, reason: &str) -> ResolveError {
    ResolveError::Structural {
        tag: tag.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementKind, a, body, div, html, img, p};
    use pretty_assertions::assert_eq;

    fn text_node(tag: &str, text: &str) -> DocumentNode {
        DocumentNode {
            tag: tag.into(),
            children: Some(vec![Child::Text(text.into())]),
            attributes: None,
        }
    }

    #[test]
    fn text_content_becomes_single_text_child() {
        assert_eq!(resolve(&p("Hello")).unwrap(), text_node("p", "Hello"));
    }

    #[test]
    fn sequence_order_is_preserved() {
        let tree = resolve(&div([p("one"), p("two"), p("three")])).unwrap();
        assert_eq!(
            tree,
            DocumentNode {
                tag: "div".into(),
                children: Some(vec![
                    Child::Node(text_node("p", "one")),
                    Child::Node(text_node("p", "two")),
                    Child::Node(text_node("p", "three")),
                ]),
                attributes: None,
            }
        );
    }

    #[test]
    fn void_element_has_no_children() {
        let tree = resolve(&img().with_attribute("src", "x.png")).unwrap();
        assert_eq!(
            tree,
            DocumentNode {
                tag: "img".into(),
                children: None,
                attributes: Some(vec![("src".into(), "x.png".into())]),
            }
        );
    }

    #[test]
    fn attribute_values_are_stringified() {
        let tree = resolve(
            &a("link")
                .with_attribute("href", "/")
                .with_attribute("tabindex", 2)
                .with_attribute("hidden", false),
        )
        .unwrap();
        assert_eq!(
            tree.attributes,
            Some(vec![
                ("href".into(), "/".into()),
                ("tabindex".into(), "2".into()),
                ("hidden".into(), "false".into()),
            ])
        );
    }

    #[test]
    fn nested_resolution() {
        let tree = resolve(&html(body(div(p("deep"))))).unwrap();
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.tag, "html");
    }

    #[test]
    fn violation_is_fatal() {
        let error = resolve(&html(body(div(body("x"))))).unwrap_err();
        let ResolveError::Violation(violation) = error else {
            panic!("expected a violation error");
        };
        assert_eq!(violation.parent, ElementKind::Div);
    }

    #[test]
    fn content_on_void_element_is_structural_error() {
        let composed = Composed::Element(ElementDescription {
            kind: ElementKind::Img,
            content: Content::Text("caption".into()),
            attributes: vec![],
        });
        assert_eq!(
            resolve(&composed).unwrap_err().to_string(),
            "cannot resolve <img>: void elements cannot have content"
        );
    }

    #[test]
    fn missing_content_is_structural_error() {
        let empty_div = crate::model::compose(ElementKind::Div, Content::Empty);
        assert_eq!(
            resolve(&empty_div).unwrap_err(),
            ResolveError::Structural {
                tag: "div".into(),
                reason: "content is required".into()
            }
        );
        assert!(resolve(&div(Vec::new())).is_err());
    }

    #[test]
    fn error_deep_in_tree_discards_siblings() {
        let tree = body([p("fine"), div([p("also fine"), img().with_attribute("src", "x")]), div(Vec::new())]);
        assert!(matches!(
            resolve(&tree),
            Err(ResolveError::Structural { ref tag, .. }) if tag == "div"
        ));
    }
}
