use std::fmt;

use crate::content_model::{self, ContentModelViolation};
use crate::model::ElementKind;

/// A scalar attribute value as written in a description.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Number(f64),
    Bool(bool),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => f.write_str(s),
            // f64's Display already drops a zero fraction: 20.0 -> "20"
            AttrValue::Number(n) => write!(f, "{n}"),
            AttrValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

/// The content of an element description.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    Single(Box<Composed>),
    Sequence(Vec<Composed>),
    Empty,
}

impl Content {
    /// True for absent content and for an empty sequence.
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Empty => true,
            Content::Sequence(items) => items.is_empty(),
            Content::Text(_) | Content::Single(_) => false,
        }
    }

    /// The immediate composed children: the single child or each sequence member.
    pub fn children(&self) -> &[Composed] {
        match self {
            Content::Single(child) => std::slice::from_ref(&**child),
            Content::Sequence(items) => items,
            Content::Text(_) | Content::Empty => &[],
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Composed> for Content {
    fn from(child: Composed) -> Self {
        Content::Single(Box::new(child))
    }
}

impl From<Vec<Composed>> for Content {
    fn from(items: Vec<Composed>) -> Self {
        Content::Sequence(items)
    }
}

impl<const N: usize> From<[Composed; N]> for Content {
    fn from(items: [Composed; N]) -> Self {
        Content::Sequence(items.into())
    }
}

/// A validated element: kind, content and attributes in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDescription {
    pub kind: ElementKind,
    pub content: Content,
    pub attributes: Vec<(String, AttrValue)>,
}

/// The outcome of composing an element: either a valid description or the
/// violation that replaced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Composed {
    Element(ElementDescription),
    Violation(ContentModelViolation),
}

impl Composed {
    /// Append an attribute. Violations are returned unchanged.
    pub fn with_attribute(self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        match self {
            Composed::Element(mut element) => {
                element.attributes.push((key.into(), value.into()));
                Composed::Element(element)
            }
            violation @ Composed::Violation(_) => violation,
        }
    }

    pub fn as_element(&self) -> Option<&ElementDescription> {
        match self {
            Composed::Element(element) => Some(element),
            Composed::Violation(_) => None,
        }
    }

    pub fn is_violation(&self) -> bool {
        matches!(self, Composed::Violation(_))
    }

    /// Every violation in this tree, depth-first in document order.
    ///
    /// Violations nested inside rejected content are reported as well.
    pub fn violations(&self) -> Vec<&ContentModelViolation> {
        let mut found = Vec::new();
        self.collect_violations(&mut found);
        found
    }

    fn collect_violations<'a>(&'a self, found: &mut Vec<&'a ContentModelViolation>) {
        let content = match self {
            Composed::Element(element) => &element.content,
            Composed::Violation(violation) => {
                found.push(violation);
                &violation.content
            }
        };
        for child in content.children() {
            child.collect_violations(found);
        }
    }
}

/// Compose an element of `kind`, running the content-model check.
///
/// Forbidden immediate content yields [`Composed::Violation`] instead of an
/// element; construction itself never fails.
pub fn compose(kind: ElementKind, content: impl Into<Content>) -> Composed {
    let content = content.into();
    match content_model::find_forbidden(kind, &content) {
        Some(offending) => {
            Composed::Violation(ContentModelViolation::new(kind, offending, content))
        }
        None => Composed::Element(ElementDescription {
            kind,
            content,
            attributes: Vec::new(),
        }),
    }
}

pub fn html(content: impl Into<Content>) -> Composed {
    compose(ElementKind::Html, content)
}

pub fn body(content: impl Into<Content>) -> Composed {
    compose(ElementKind::Body, content)
}

pub fn div(content: impl Into<Content>) -> Composed {
    compose(ElementKind::Div, content)
}

pub fn p(content: impl Into<Content>) -> Composed {
    compose(ElementKind::P, content)
}

pub fn h1(content: impl Into<Content>) -> Composed {
    compose(ElementKind::H1, content)
}

pub fn h2(content: impl Into<Content>) -> Composed {
    compose(ElementKind::H2, content)
}

pub fn h3(content: impl Into<Content>) -> Composed {
    compose(ElementKind::H3, content)
}

pub fn h4(content: impl Into<Content>) -> Composed {
    compose(ElementKind::H4, content)
}

pub fn h5(content: impl Into<Content>) -> Composed {
    compose(ElementKind::H5, content)
}

pub fn a(content: impl Into<Content>) -> Composed {
    compose(ElementKind::A, content)
}

/// An image. Void, so it never has content; use [`Composed::with_attribute`]
/// to set `src` and friends.
pub fn img() -> Composed {
    compose(ElementKind::Img, Content::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(AttrValue::from("x.png"), "x.png")]
    #[case(AttrValue::from(20), "20")]
    #[case(AttrValue::from(20.0), "20")]
    #[case(AttrValue::from(1.5), "1.5")]
    #[case(AttrValue::from(-3), "-3")]
    #[case(AttrValue::from(true), "true")]
    #[case(AttrValue::from(false), "false")]
    fn attr_value_display(#[case] value: AttrValue, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn constructors_set_kind_and_content() {
        let composed = p("Hello");
        let element = composed.as_element().unwrap();
        assert_eq!(element.kind, ElementKind::P);
        assert_eq!(element.content, Content::Text("Hello".into()));
        assert!(element.attributes.is_empty());
    }

    #[test]
    fn attributes_keep_declaration_order() {
        let composed = img()
            .with_attribute("src", "x.png")
            .with_attribute("alt", "logo")
            .with_attribute("width", 20);
        let keys: Vec<_> = composed
            .as_element()
            .unwrap()
            .attributes
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, vec!["src", "alt", "width"]);
    }

    #[test]
    fn with_attribute_on_violation_is_a_no_op() {
        let violation = div(body("x"));
        assert!(violation.is_violation());
        assert_eq!(violation.clone().with_attribute("id", "a"), violation);
    }

    #[test]
    fn content_conversions() {
        assert_eq!(Content::from("t"), Content::Text("t".into()));
        assert!(matches!(Content::from(p("a")), Content::Single(_)));
        assert!(matches!(Content::from([p("a"), p("b")]), Content::Sequence(ref v) if v.len() == 2));
        assert!(Content::Sequence(vec![]).is_empty());
        assert!(Content::Empty.is_empty());
        assert!(!Content::from("").is_empty());
    }

    #[test]
    fn violations_are_collected_depth_first() {
        let tree = html(body([div(html("a")), p("fine"), h1(p("b"))]));
        let found: Vec<_> = tree
            .violations()
            .into_iter()
            .map(|v| (v.parent, v.offending))
            .collect();
        assert_eq!(
            found,
            vec![
                (ElementKind::Div, ElementKind::Html),
                (ElementKind::H1, ElementKind::P),
            ]
        );
    }

    #[test]
    fn violations_inside_rejected_content_are_reported() {
        let tree = div(body(div(body("x"))));
        assert_eq!(tree.violations().len(), 2);
    }

    #[test]
    fn valid_tree_has_no_violations() {
        let tree = html(body([div([p("a"), p("b")]), img().with_attribute("src", "x")]));
        assert!(tree.violations().is_empty());
    }
}
