//! # Elaboration
//!
//! Turns description source into a [`Composed`] tree:
//!
//! 1. Parse with `tagform-syntax`; any syntax error stops here.
//! 2. Collect the `type` aliases. Names must be unique.
//! 3. Pick the entry alias: the one asked for, otherwise the last declared.
//! 4. Expand the entry, replacing every alias reference with a fresh copy of
//!    the alias body and composing each element through the content model.
//!    Expansion stops with an error once [`MAX_ELEMENTS`] elements have been
//!    built, since repeated references grow the tree exponentially.
//!
//! After this pass nothing refers back to the syntax tree. Content-model
//! violations are *not* errors here; they are embedded in the returned tree
//! as [`Composed::Violation`] and it is up to the caller to act on them.
//!
//! ```
//! use tagform_engine::elaborate::{elaborate, ElaborateOptions};
//!
//! let source = "type Intro = P<'Hi'>;\ntype Page = Div<[Intro, Intro]>;";
//! let composed = elaborate(source, &ElaborateOptions::default()).unwrap();
//! assert!(composed.violations().is_empty());
//! ```

use std::collections::HashMap;
use std::fmt;

use tagform_syntax::{SyntaxKind, SyntaxNode, SyntaxToken};

use crate::attributes::{self, AttributeIssue};
use crate::model::{AttrValue, Composed, Content, ElementKind, compose};

/// Upper bound on the elements one description may expand to.
pub const MAX_ELEMENTS: usize = 100_000;

#[derive(Debug, Clone, Default)]
pub struct ElaborateOptions {
    /// Alias to expand. Defaults to the last alias in the file.
    pub entry: Option<String>,
    /// Treat attribute vocabulary issues as errors instead of warnings
    pub strict_attributes: bool,
}

/// A 1-based line and column (in characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxDiagnostic {
    pub message: String,
    pub position: Position,
}

impl fmt::Display for SyntaxDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DescriptionError {
    #[error("{}", syntax_summary(.0))]
    Syntax(Vec<SyntaxDiagnostic>),
    #[error("description declares no type aliases")]
    NoAliases,
    #[error("{position}: alias `{name}` is declared more than once")]
    DuplicateAlias { name: String, position: Position },
    #[error("entry alias `{0}` is not declared")]
    MissingEntry(String),
    #[error("entry alias `{0}` must be an element, not text or a sequence")]
    EntryNotElement(String),
    #[error("{position}: unknown element `{name}`")]
    UnknownElement { name: String, position: Position },
    #[error("{position}: unknown alias `{name}`")]
    UnknownAlias { name: String, position: Position },
    #[error("cyclic alias reference: {}", .0.join(" -> "))]
    Cycle(Vec<String>),
    #[error("{position}: text cannot appear inside a sequence")]
    TextInSequence { position: Position },
    #[error("{position}: invalid number `{text}`")]
    InvalidNumber { text: String, position: Position },
    #[error("{position}: {issue}")]
    Attribute {
        issue: AttributeIssue,
        position: Position,
    },
    #[error("description expands to more than {limit} elements")]
    TooLarge { limit: usize },
    #[error("{position}: incomplete {what}")]
    Incomplete {
        what: &'static str,
        position: Position,
    },
}

fn syntax_summary(diagnostics: &[SyntaxDiagnostic]) -> String {
    match diagnostics {
        [] => "syntax error".to_string(),
        [only] => format!("syntax error at {only}"),
        [first, rest @ ..] => format!("syntax error at {first} (and {} more)", rest.len()),
    }
}

/// Parse and expand `source` into a composed tree rooted at the entry alias.
pub fn elaborate(source: &str, options: &ElaborateOptions) -> Result<Composed, DescriptionError> {
    let index = LineIndex::new(source);
    let parse = tagform_syntax::parse(source);
    if !parse.is_ok() {
        return Err(DescriptionError::Syntax(
            parse
                .errors()
                .iter()
                .map(|error| SyntaxDiagnostic {
                    message: error.message.clone(),
                    position: index.position(error.offset),
                })
                .collect(),
        ));
    }

    let tree = parse.tree();
    let aliases = collect_aliases(&tree, &index)?;
    let entry = match &options.entry {
        Some(name) => name.clone(),
        None => aliases
            .last()
            .map(|alias| alias.name.clone())
            .ok_or(DescriptionError::NoAliases)?,
    };
    log::debug!(
        "elaborating entry `{entry}` from {} alias(es)",
        aliases.len()
    );

    let mut elaborator = Elaborator {
        aliases: aliases
            .iter()
            .map(|alias| (alias.name.as_str(), alias))
            .collect(),
        stack: Vec::new(),
        elements: 0,
        index: &index,
        options,
    };
    let alias = elaborator
        .aliases
        .get(entry.as_str())
        .copied()
        .ok_or_else(|| DescriptionError::MissingEntry(entry.clone()))?;

    match elaborator.expand(alias)? {
        Value::Element(composed) => Ok(composed),
        Value::Text(_) | Value::Sequence(_) => Err(DescriptionError::EntryNotElement(entry)),
    }
}

struct Alias {
    name: String,
    body: SyntaxNode,
}

fn collect_aliases(tree: &SyntaxNode, index: &LineIndex) -> Result<Vec<Alias>, DescriptionError> {
    let mut aliases: Vec<Alias> = Vec::new();

    for node in tree.children().filter(|n| n.kind() == SyntaxKind::TYPE_ALIAS) {
        let position = index.position(offset(&node));
        let name = token(&node, SyntaxKind::IDENT)
            .ok_or(DescriptionError::Incomplete {
                what: "type alias",
                position,
            })?
            .text()
            .to_string();
        let body = node.children().next().ok_or(DescriptionError::Incomplete {
            what: "type alias",
            position,
        })?;

        if aliases.iter().any(|alias| alias.name == name) {
            return Err(DescriptionError::DuplicateAlias { name, position });
        }
        aliases.push(Alias { name, body });
    }

    Ok(aliases)
}

/// What an expression elaborates to.
enum Value {
    Text(String),
    Element(Composed),
    Sequence(Vec<Composed>),
}

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        match value {
            Value::Text(text) => Content::Text(text),
            Value::Element(child) => Content::from(child),
            Value::Sequence(items) => Content::Sequence(items),
        }
    }
}

struct Elaborator<'a> {
    aliases: HashMap<&'a str, &'a Alias>,
    /// Aliases currently being expanded, outermost first
    stack: Vec<String>,
    /// Elements built so far
    elements: usize,
    index: &'a LineIndex<'a>,
    options: &'a ElaborateOptions,
}

impl<'a> Elaborator<'a> {
    fn expand(&mut self, alias: &'a Alias) -> Result<Value, DescriptionError> {
        if let Some(start) = self.stack.iter().position(|name| *name == alias.name) {
            let mut chain = self.stack[start..].to_vec();
            chain.push(alias.name.clone());
            return Err(DescriptionError::Cycle(chain));
        }

        self.stack.push(alias.name.clone());
        let value = self.expr(&alias.body)?;
        self.stack.pop();
        Ok(value)
    }

    fn expr(&mut self, node: &SyntaxNode) -> Result<Value, DescriptionError> {
        match node.kind() {
            SyntaxKind::TEXT_LITERAL => {
                let literal = self.required_token(node, SyntaxKind::STRING, "text")?;
                Ok(Value::Text(unquote(literal.text())))
            }
            SyntaxKind::REFERENCE => {
                let name = self.required_token(node, SyntaxKind::IDENT, "reference")?;
                let alias = self
                    .aliases
                    .get(name.text())
                    .copied()
                    .ok_or_else(|| DescriptionError::UnknownAlias {
                        name: name.text().to_string(),
                        position: self.position(node),
                    })?;
                self.expand(alias)
            }
            SyntaxKind::ELEMENT => self.element(node).map(Value::Element),
            SyntaxKind::SEQUENCE => self.sequence(node).map(Value::Sequence),
            _ => Err(DescriptionError::Incomplete {
                what: "expression",
                position: self.position(node),
            }),
        }
    }

    fn element(&mut self, node: &SyntaxNode) -> Result<Composed, DescriptionError> {
        self.elements += 1;
        if self.elements > MAX_ELEMENTS {
            return Err(DescriptionError::TooLarge {
                limit: MAX_ELEMENTS,
            });
        }

        let name = self.required_token(node, SyntaxKind::IDENT, "element")?;
        let kind = ElementKind::from_name(name.text()).ok_or_else(|| {
            DescriptionError::UnknownElement {
                name: name.text().to_string(),
                position: self.position(node),
            }
        })?;

        let content = match node.children().find(|n| n.kind() != SyntaxKind::ATTRIBUTES) {
            Some(child) => Content::from(self.expr(&child)?),
            None => Content::Empty,
        };

        let mut composed = compose(kind, content);
        if let Composed::Violation(violation) = &composed {
            log::debug!("{}: {violation}", self.position(node));
        }

        if let Some(attrs) = node.children().find(|n| n.kind() == SyntaxKind::ATTRIBUTES) {
            for attr in attrs.children().filter(|n| n.kind() == SyntaxKind::ATTRIBUTE) {
                let (key, value) = self.attribute(&attr)?;
                composed = composed.with_attribute(key, value);
            }
        }

        Ok(composed)
    }

    fn sequence(&mut self, node: &SyntaxNode) -> Result<Vec<Composed>, DescriptionError> {
        let mut items = Vec::new();
        for child in node.children() {
            match self.expr(&child)? {
                Value::Element(composed) => items.push(composed),
                // A sequence alias used inside a sequence is spliced in place
                Value::Sequence(nested) => items.extend(nested),
                Value::Text(_) => {
                    return Err(DescriptionError::TextInSequence {
                        position: self.position(&child),
                    });
                }
            }
        }
        Ok(items)
    }

    fn attribute(&self, node: &SyntaxNode) -> Result<(String, AttrValue), DescriptionError> {
        let position = self.position(node);
        let tokens: Vec<SyntaxToken> = node
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .filter(|token| !token.kind().is_trivia())
            .collect();
        let [key, _colon, value] = tokens.as_slice() else {
            return Err(DescriptionError::Incomplete {
                what: "attribute",
                position,
            });
        };

        let key = match key.kind() {
            SyntaxKind::STRING => unquote(key.text()),
            _ => key.text().to_string(),
        };
        let value = match value.kind() {
            SyntaxKind::STRING => AttrValue::Str(unquote(value.text())),
            SyntaxKind::TRUE_KW => AttrValue::Bool(true),
            SyntaxKind::FALSE_KW => AttrValue::Bool(false),
            _ => AttrValue::Number(value.text().parse().map_err(|_| {
                DescriptionError::InvalidNumber {
                    text: value.text().to_string(),
                    position,
                }
            })?),
        };

        if let Err(issue) = attributes::check(&key, &value) {
            if self.options.strict_attributes {
                return Err(DescriptionError::Attribute { issue, position });
            }
            log::warn!("{position}: {issue}");
        }

        Ok((key, value))
    }

    fn required_token(
        &self,
        node: &SyntaxNode,
        kind: SyntaxKind,
        what: &'static str,
    ) -> Result<SyntaxToken, DescriptionError> {
        token(node, kind).ok_or_else(|| DescriptionError::Incomplete {
            what,
            position: self.position(node),
        })
    }

    fn position(&self, node: &SyntaxNode) -> Position {
        self.index.position(offset(node))
    }
}

/// The first direct child token of `kind`.
fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|element| element.into_token())
        .find(|token| token.kind() == kind)
}

fn offset(node: &SyntaxNode) -> usize {
    usize::from(node.text_range().start())
}

/// Strip the quotes from a string literal and process escapes.
fn unquote(literal: &str) -> String {
    let inner = literal
        .get(1..literal.len().saturating_sub(1))
        .unwrap_or_default();

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            // \' \" \\ and unknown escapes all yield the escaped character
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Maps byte offsets to line/column positions.
struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(source: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..offset)
            .map_or(0, |text| text.chars().count());
        Position {
            line: line + 1,
            column: column + 1,
        }
    }
}
