//! End-to-end tests: description files in `tests/fixtures` rendered and
//! compared against their expected markup.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rstest::rstest;
use tagform_engine::model::{ElementKind, body, div, h1, h2, h3, html, img, p};
use tagform_engine::{
    Composed, Error, Options, build_document, render_file, render_to_string, resolve,
};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn render(composed: &Composed) -> String {
    render_to_string(&resolve(composed).unwrap()).unwrap()
}

#[rstest]
#[case("complex")]
#[case("page")]
#[case("landing")]
fn fixture_renders_expected_markup(#[case] name: &str) {
    let source = fs::read_to_string(fixture(&format!("{name}.tags"))).unwrap();
    let expected = fs::read_to_string(fixture(&format!("{name}.html"))).unwrap();

    let document = build_document(&source, &Options::default()).unwrap();

    assert_eq!(render_to_string(&document).unwrap(), expected);
}

#[rstest]
#[case("complex")]
#[case("page")]
#[case("landing")]
fn fixture_render_file_matches(#[case] name: &str) {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("index.html");

    render_file(&fixture(&format!("{name}.tags")), &output, &Options::default()).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        fs::read_to_string(fixture(&format!("{name}.html"))).unwrap()
    );
}

#[rstest]
#[case("complex")]
#[case("page")]
#[case("landing")]
fn fixture_tags_balance(#[case] name: &str) {
    let markup = fs::read_to_string(fixture(&format!("{name}.html"))).unwrap();
    for kind in ElementKind::ALL.into_iter().filter(|k| !k.is_void()) {
        let tag = kind.tag();
        let opens = markup
            .lines()
            .filter(|l| l.trim_start().starts_with(&format!("<{tag}>")) || l.trim_start().starts_with(&format!("<{tag} ")))
            .count();
        let closes = markup.matches(&format!("</{tag}>")).count();
        assert_eq!(opens, closes, "<{tag}> in {name}");
    }
    assert!(!markup.contains("</img>"));
}

// === Scenarios ===

#[test]
fn div_containing_body_is_rejected() {
    let source = "type Bad = Div<Body<'x'>>;";
    let error = build_document(source, &Options::default()).unwrap_err();

    let Error::ContentModel(violations) = error else {
        panic!("expected a content model error");
    };
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].parent, ElementKind::Div);
    assert_eq!(violations[0].offending, ElementKind::Body);
}

#[test]
fn paragraph_with_text() {
    assert_eq!(render(&p("Hello")), "<p>\n  Hello\n</p>\n");
}

#[test]
fn heading_nesting_rules() {
    assert!(h2(h1("x")).is_violation());
    assert_eq!(render(&h2(h3("x"))), "<h2>\n  <h3>\n    x\n  </h3>\n</h2>\n");
}

#[test]
fn sibling_divs_render_in_order_one_level_below_body() {
    let output = render(&html(body([div(p("A")), div(p("B"))])));
    let lines: Vec<&str> = output.lines().collect();

    let a = lines.iter().position(|l| l.trim() == "A").unwrap();
    let b = lines.iter().position(|l| l.trim() == "B").unwrap();
    assert!(a < b);

    let body_indent = indent_of(lines.iter().find(|l| l.trim() == "<body>").unwrap());
    for div_line in lines.iter().filter(|l| l.trim() == "<div>") {
        assert_eq!(indent_of(div_line), body_indent + 2);
    }
}

#[test]
fn image_is_self_closing() {
    assert_eq!(
        render(&img().with_attribute("src", "x.png")),
        "<img src=\"x.png\" />\n"
    );
}

#[test]
fn forbidden_grandchild_is_not_caught() {
    // Only immediate content is checked
    let composed = p(tagform_engine::model::a(div("block inside inline")));
    assert!(composed.violations().is_empty());
    assert!(render(&composed).contains("<div>"));
}

#[test]
fn forbidden_kind_inside_sequence_is_not_caught() {
    // Only a single direct child is matched against the table
    let document = build_document("type A = Div<[Body<'x'>]>;", &Options::default()).unwrap();
    assert_eq!(
        render_to_string(&document).unwrap(),
        "<div>\n  <body>\n    x\n  </body>\n</div>\n"
    );
    assert!(build_document("type A = Div<Body<'x'>>;", &Options::default()).is_err());
}

#[test]
fn special_characters_are_emitted_verbatim() {
    let output = render(&p("<b>bold</b> & \"quoted\""));
    assert_eq!(output, "<p>\n  <b>bold</b> & \"quoted\"\n</p>\n");
}

#[test]
fn rerendering_is_byte_identical() {
    let source = fs::read_to_string(fixture("landing.tags")).unwrap();
    let first = render_to_string(&build_document(&source, &Options::default()).unwrap()).unwrap();
    let second = render_to_string(&build_document(&source, &Options::default()).unwrap()).unwrap();
    assert_eq!(first, second);
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}
