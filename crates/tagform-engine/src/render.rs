//! # Renderer
//!
//! Streams a [`DocumentNode`] tree to any [`Write`] sink as indented markup.
//!
//! ```text
//! <div class="box">      depth 0
//!   <p>                  depth 1
//!     Hello              text is indented one level past its parent
//!   </p>
//!   <img src="x.png" />  void: self-closing, no closing tag
//! </div>
//! ```
//!
//! Indentation is two spaces per level. Attributes are written as
//! `key="value"` in stored order.
//!
//! By default text and attribute values are written verbatim, so a `<` in
//! text ends up as a literal `<` in the output. [`Escape::Html`] switches on
//! entity escaping.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::model::{Child, DocumentNode};

/// How text and attribute values are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Escape {
    /// Emit content exactly as written
    #[default]
    None,
    /// Escape `&`, `<`, `>` in text, and quotes in attribute values
    Html,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    escape: Escape,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_escape(mut self, escape: Escape) -> Self {
        self.escape = escape;
        self
    }

    /// Write `node` and its subtree to `out`.
    ///
    /// Output goes straight to the sink; an error part way through leaves
    /// whatever was already written.
    pub fn render<W: Write>(&self, node: &DocumentNode, out: &mut W) -> io::Result<()> {
        self.render_node(node, 0, out)
    }

    /// Render into a `String`.
    pub fn render_to_string(&self, node: &DocumentNode) -> io::Result<String> {
        let mut buf = Vec::new();
        self.render(node, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn render_node<W: Write>(&self, node: &DocumentNode, depth: usize, out: &mut W) -> io::Result<()> {
        let indent = depth * 2;
        write!(out, "{:indent$}<{}", "", node.tag)?;
        for (key, value) in node.attributes.iter().flatten() {
            write!(out, " {}=\"{}\"", key, self.attribute_value(value))?;
        }

        let Some(children) = &node.children else {
            return writeln!(out, " />");
        };
        writeln!(out, ">")?;

        for child in children {
            match child {
                Child::Node(child) => self.render_node(child, depth + 1, out)?,
                Child::Text(text) => {
                    writeln!(out, "{:width$}{}", "", self.text(text), width = indent + 2)?
                }
            }
        }

        writeln!(out, "{:indent$}</{}>", "", node.tag)
    }

    fn text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.escape {
            Escape::None => Cow::Borrowed(text),
            Escape::Html => html_escape::encode_text(text),
        }
    }

    fn attribute_value<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match self.escape {
            Escape::None => Cow::Borrowed(value),
            Escape::Html => html_escape::encode_double_quoted_attribute(value),
        }
    }
}

/// Render with the default (verbatim) renderer.
pub fn render_to_string(node: &DocumentNode) -> io::Result<String> {
    Renderer::new().render_to_string(node)
}
