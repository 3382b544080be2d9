//! # Content Model
//!
//! Which element kinds may not appear as the *immediate* content of another.
//! The rules are a static table:
//!
//! | Container | Forbidden immediate content |
//! |-----------|-----------------------------|
//! | `html`, `a`, `img` | (none) |
//! | `body` | `html` |
//! | `div` | `html`, `body` |
//! | `p` | `div`, `html`, `body` |
//! | `h1` | `div`, `html`, `body`, `p` |
//! | `h2`..`h5` | as `h1`, plus every lower-numbered heading |
//!
//! Matching is on the shape of the content value itself, so only a single
//! element child is inspected. A sequence is never matched against an
//! element kind, and a forbidden kind wrapped in an allowed element is not
//! caught: `div([body(..)])` and `p(a(div(..)))` both pass.
//!
//! ```
//! use tagform_engine::content_model::check;
//! use tagform_engine::model::{ElementKind, Content, body, h3};
//!
//! assert!(check(ElementKind::Div, &Content::from(body("x"))).is_err());
//! assert!(check(ElementKind::H2, &Content::from(h3("x"))).is_ok());
//! ```

use crate::model::{Content, ElementKind};

/// Produced in place of an element whose immediate content breaks the rules.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} (found <{offending}>)")]
pub struct ContentModelViolation {
    /// The element that was being built
    pub parent: ElementKind,
    /// The first forbidden kind found in its content
    pub offending: ElementKind,
    pub message: String,
    /// The rejected content, kept for diagnostics
    pub content: Content,
}

impl ContentModelViolation {
    pub fn new(parent: ElementKind, offending: ElementKind, content: Content) -> Self {
        Self {
            parent,
            offending,
            message: message(parent),
            content,
        }
    }
}

/// Kinds forbidden as immediate content of `kind`, in evaluation order.
pub fn forbidden_children(kind: ElementKind) -> &'static [ElementKind] {
    use ElementKind::*;

    match kind {
        Html | A | Img => &[],
        Body => &[Html],
        Div => &[Html, Body],
        P => &[Div, Html, Body],
        H1 => &[Div, Html, Body, P],
        H2 => &[Div, Html, Body, P, H1],
        H3 => &[Div, Html, Body, P, H1, H2],
        H4 => &[Div, Html, Body, P, H1, H2, H3],
        H5 => &[Div, Html, Body, P, H1, H2, H3, H4],
    }
}

/// The fixed diagnostic for a container kind.
pub fn message(kind: ElementKind) -> String {
    let reason = match kind {
        ElementKind::Body => "<html> elements",
        ElementKind::Div => "<html> or <body> elements",
        _ => "block elements",
    };
    format!("<{kind}> cannot contain {reason}")
}

/// Check `content` against the rules for `kind`.
pub fn check(kind: ElementKind, content: &Content) -> Result<(), ContentModelViolation> {
    match find_forbidden(kind, content) {
        Some(offending) => Err(ContentModelViolation::new(kind, offending, content.clone())),
        None => Ok(()),
    }
}

/// The kind of a single element child, if it is forbidden for `kind`.
///
/// Text, sequences and children that are themselves violations never match.
pub(crate) fn find_forbidden(kind: ElementKind, content: &Content) -> Option<ElementKind> {
    let Content::Single(child) = content else {
        return None;
    };
    let child = child.as_element()?.kind;
    forbidden_children(kind).iter().copied().find(|&forbidden| forbidden == child)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Composed, a, body, compose, div, h1, h2, h3, h5, html, img, p};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// A minimal valid element of the given kind.
    fn sample(kind: ElementKind) -> Composed {
        if kind.is_void() {
            compose(kind, Content::Empty)
        } else {
            compose(kind, "x")
        }
    }

    #[test]
    fn every_pair_follows_the_table() {
        for parent in ElementKind::ALL {
            for child in ElementKind::ALL {
                let result = check(parent, &Content::from(sample(child)));
                let forbidden = forbidden_children(parent).contains(&child);
                assert_eq!(
                    result.is_err(),
                    forbidden,
                    "{parent} containing {child}"
                );
            }
        }
    }

    #[test]
    fn div_containing_body_is_a_violation() {
        let composed = div(body("x"));
        let Composed::Violation(violation) = composed else {
            panic!("expected a violation");
        };
        assert_eq!(violation.parent, ElementKind::Div);
        assert_eq!(violation.offending, ElementKind::Body);
        assert_eq!(violation.message, "<div> cannot contain <html> or <body> elements");
        assert_eq!(
            violation.to_string(),
            "<div> cannot contain <html> or <body> elements (found <body>)"
        );
        assert_eq!(violation.content, Content::from(body("x")));
    }

    #[test]
    fn h2_rejects_h1_but_accepts_h3() {
        assert!(h2(h1("x")).is_violation());
        assert!(!h2(h3("x")).is_violation());
    }

    #[rstest]
    #[case(ElementKind::Body, "<body> cannot contain <html> elements")]
    #[case(ElementKind::P, "<p> cannot contain block elements")]
    #[case(ElementKind::H4, "<h4> cannot contain block elements")]
    fn messages_per_parent(#[case] kind: ElementKind, #[case] expected: &str) {
        assert_eq!(message(kind), expected);
    }

    #[test]
    fn sequences_are_not_matched() {
        // Known limitation: only a single direct child is compared
        assert!(!div(vec![body(p("x"))]).is_violation());
        assert!(!p(vec![a("ok"), div("nope")]).is_violation());
        assert!(!body([html("a"), html("b")]).is_violation());
        assert!(check(ElementKind::Div, &Content::from(vec![body("x")])).is_ok());
    }

    #[test]
    fn single_child_still_rejected_inside_sequence_member() {
        let composed = div(vec![p("fine"), div(body("x"))]);
        assert!(!composed.is_violation());
        let violations = composed.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].offending, ElementKind::Body);
    }

    #[test]
    fn h5_forbids_all_lower_headings() {
        assert_eq!(
            forbidden_children(ElementKind::H5),
            &[
                ElementKind::Div,
                ElementKind::Html,
                ElementKind::Body,
                ElementKind::P,
                ElementKind::H1,
                ElementKind::H2,
                ElementKind::H3,
                ElementKind::H4,
            ]
        );
        assert!(!h5(a("fine")).is_violation());
    }

    #[test]
    fn grandchildren_are_not_checked() {
        // Forbidden kinds two levels down slip through the one-level check
        assert!(!p(a(div("nested block"))).is_violation());
        assert!(!h1(a(vec![p("x"), div("y")])).is_violation());
        assert!(!div(a(html("z"))).is_violation());
    }

    #[test]
    fn text_and_empty_content_pass() {
        assert!(check(ElementKind::H1, &Content::from("plain")).is_ok());
        assert!(check(ElementKind::Img, &Content::Empty).is_ok());
        assert!(!img().is_violation());
    }

    #[test]
    fn violation_children_are_skipped() {
        // The inner div(body) is already a violation; p does not see a div
        let composed = p(div(body("x")));
        assert!(!composed.is_violation());
        assert_eq!(composed.violations().len(), 1);
    }
}
