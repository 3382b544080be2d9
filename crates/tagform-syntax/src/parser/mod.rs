//! # Parser - Event-Based Tree Construction
//!
//! Transforms a token stream into a syntax tree using the **event-based**
//! architecture from rust-analyzer. Grammar rules emit a flat list of
//! [`Event`]s and the [`Sink`] builds the Rowan tree from them.
//!
//! ## Trivia
//!
//! Grammar rules never see whitespace, newlines or comments. Lookahead
//! (`current()`, `nth()`) skips trivia, and `bump()` first emits any pending
//! trivia tokens and then the significant token. `start()` flushes pending
//! trivia before opening a node, so every node's range begins at its first
//! significant token and leading comments stay with the enclosing node.
//!
//! ## The Marker System
//!
//! `parser.start()` returns a [`Marker`] that **must** be completed with
//! `marker.complete(parser, KIND)` or abandoned with `marker.abandon(parser)`.
//! Dropping it otherwise panics, which catches tree corruption early.
//!
//! ```ignore
//! let m = parser.start();
//! parser.bump();
//! m.complete(parser, SyntaxKind::REFERENCE);
//! ```
//!
//! ## Errors
//!
//! The parser never aborts. Problems go into the event stream and the sink
//! turns them into [`SyntaxError`]s carrying the byte offset of the
//! offending token. Unexpected tokens are wrapped in `ERROR` nodes so the
//! tree stays lossless.
//!
//! ```
//! use tagform_syntax::parse;
//!
//! let parse = parse("type Page = P<'Hello'>;\n");
//! assert!(parse.errors().is_empty());
//! assert_eq!(parse.tree().text().to_string(), "type Page = P<'Hello'>;\n");
//! ```

pub mod event;
pub mod sink;

mod grammar;

use std::fmt;

use crate::lexer::{Token, lex};
use crate::syntax_kind::{SyntaxKind, SyntaxNode};
use event::Event;
use sink::Sink;

/// A problem found while parsing, anchored at a byte offset in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub offset: usize,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.message, self.offset)
    }
}

/// The result of parsing: a lossless tree plus any errors encountered.
#[derive(Debug, Clone)]
pub struct Parse {
    tree: SyntaxNode,
    errors: Vec<SyntaxError>,
}

impl Parse {
    /// The root `ROOT` node.
    pub fn tree(&self) -> SyntaxNode {
        self.tree.clone()
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// True when the source parsed without errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Tokens after which the parser stops skipping when recovering from an
/// error, so that enclosing rules can pick up again.
const RECOVERY_SET: &[SyntaxKind] = &[
    SyntaxKind::COMMA,
    SyntaxKind::SEMICOLON,
    SyntaxKind::R_ANGLE,
    SyntaxKind::R_BRACKET,
    SyntaxKind::R_BRACE,
    SyntaxKind::TYPE_KW,
    SyntaxKind::EXPORT_KW,
    SyntaxKind::IMPORT_KW,
    SyntaxKind::EOF,
];

/// The parser state machine: the token stream, a position in it, and the
/// events emitted so far.
pub struct Parser<'t, 'input> {
    tokens: &'t [Token<'input>],
    pos: usize,
    events: Vec<Event>,
}

impl<'t, 'input> Parser<'t, 'input> {
    pub fn new(tokens: &'t [Token<'input>]) -> Self {
        Self {
            tokens,
            pos: 0,
            events: Vec::new(),
        }
    }

    /// Run the grammar from the root and build the tree.
    pub fn parse(mut self) -> Parse {
        grammar::root(&mut self);
        Sink::new(self.tokens, self.events).finish()
    }

    /// Start a new node and return a marker.
    ///
    /// Pending trivia is attached to the enclosing node first.
    pub fn start(&mut self) -> Marker {
        self.bump_trivia();
        self.start_here()
    }

    /// Start a node without first consuming pending trivia.
    fn start_here(&mut self) -> Marker {
        let pos = self.events.len();
        self.events.push(Event::Placeholder);
        Marker {
            pos,
            completed: false,
        }
    }

    /// Current significant token kind, or EOF if past end.
    pub fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    /// Look ahead n significant tokens.
    pub fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    /// Check if only trivia (or nothing) remains.
    pub fn at_end(&self) -> bool {
        self.current() == SyntaxKind::EOF
    }

    /// Check if current token is of given kind.
    pub fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    /// Check if current token is any of the given kinds.
    pub fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current())
    }

    /// Consume the current token if it matches.
    pub fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume the current token if it matches, otherwise record an error.
    pub fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {what}"));
            false
        }
    }

    /// Consume pending trivia and then the current significant token.
    pub fn bump(&mut self) {
        self.bump_trivia();
        if self.pos < self.tokens.len() {
            let kind = self.tokens[self.pos].kind;
            self.events.push(Event::token(kind));
            self.pos += 1;
        }
    }

    /// Consume whitespace, newlines and comments.
    pub fn bump_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos)
            && token.kind.is_trivia()
        {
            self.events.push(Event::token(token.kind));
            self.pos += 1;
        }
    }

    /// Record an error at the current significant token.
    pub fn error(&mut self, message: impl Into<String>) {
        self.events.push(Event::error(message));
    }

    /// Record an error and, unless the current token lets an enclosing rule
    /// recover, wrap it in an `ERROR` node.
    pub fn err_recover(&mut self, message: impl Into<String>) {
        self.error(message);
        if self.at_any(RECOVERY_SET) {
            return;
        }
        let m = self.start();
        self.bump();
        m.complete(self, SyntaxKind::ERROR);
    }

    /// Get the text of the current significant token.
    pub fn current_text(&self) -> &'input str {
        self.significant_index()
            .map(|i| self.tokens[i].text)
            .unwrap_or("")
    }

    fn significant_index(&self) -> Option<usize> {
        (self.pos..self.tokens.len()).find(|&i| !self.tokens[i].kind.is_trivia())
    }
}

/// A marker for a node being constructed.
///
/// When you call `parser.start()`, a `Placeholder` event is pushed and you
/// get a `Marker` pointing to it. It must be completed or abandoned; dropping
/// it otherwise panics.
#[must_use = "Markers must be completed or abandoned, dropping them is a bug"]
pub struct Marker {
    /// Position in the events vector where our Placeholder lives
    pos: usize,
    /// Tracks whether complete() or abandon() was called
    completed: bool,
}

impl Marker {
    /// Complete this marker, creating a node of the given kind.
    pub fn complete(mut self, p: &mut Parser<'_, '_>, kind: SyntaxKind) -> CompletedMarker {
        self.completed = true;
        let event_at_pos = &mut p.events[self.pos];
        assert!(matches!(event_at_pos, Event::Placeholder));
        *event_at_pos = Event::Start {
            kind,
            forward_parent: None,
        };
        p.events.push(Event::Finish);
        CompletedMarker { pos: self.pos }
    }

    /// Abandon this marker without creating a node.
    ///
    /// Only removes the placeholder if it's the last event; otherwise it
    /// becomes inert and the Sink ignores it.
    pub fn abandon(mut self, p: &mut Parser<'_, '_>) {
        self.completed = true;
        if self.pos == p.events.len() - 1 {
            match p.events.pop() {
                Some(Event::Placeholder) => {}
                _ => unreachable!(),
            }
        }
    }
}

impl Drop for Marker {
    fn drop(&mut self) {
        if !self.completed && !std::thread::panicking() {
            panic!("Marker must be either completed or abandoned");
        }
    }
}

/// A marker for a node that has been completed.
///
/// `precede()` wraps the completed node in a new parent.
#[derive(Debug, Clone, Copy)]
pub struct CompletedMarker {
    /// Position of the Start event for this completed node
    pos: usize,
}

impl CompletedMarker {
    /// Create a new parent node that will contain this node.
    pub fn precede(self, p: &mut Parser<'_, '_>) -> Marker {
        let new_pos = p.events.len();
        p.events.push(Event::Placeholder);

        if let Event::Start { forward_parent, .. } = &mut p.events[self.pos] {
            *forward_parent = Some(new_pos);
        }

        Marker {
            pos: new_pos,
            completed: false,
        }
    }
}

/// Parse description source into a syntax tree.
pub fn parse(source: &str) -> Parse {
    let tokens = lex(source);
    let parser = Parser::new(&tokens);
    parser.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_empty_input() {
        let parse = parse("");
        let tree = parse.tree();
        assert_eq!(tree.kind(), SyntaxKind::ROOT);
        assert_eq!(tree.children().count(), 0);
        assert!(parse.is_ok());
    }

    #[test]
    fn parse_preserves_all_text() {
        let input = "// just a comment\n\ntype A = 'x';\n";
        let tree = parse(input).tree();
        assert_eq!(tree.text(), input);
    }

    #[test]
    fn lookahead_skips_trivia() {
        let tokens = lex("  /* c */ type");
        let parser = Parser::new(&tokens);
        assert_eq!(parser.current(), SyntaxKind::TYPE_KW);
        assert_eq!(parser.current_text(), "type");
        assert_eq!(parser.nth(1), SyntaxKind::EOF);
    }

    #[test]
    fn error_offset_points_at_significant_token() {
        let tokens = lex("   >");
        let mut parser = Parser::new(&tokens);
        let root = parser.start_here();
        parser.error("boom");
        parser.bump();
        root.complete(&mut parser, SyntaxKind::ROOT);
        let parse = Sink::new(&tokens, parser.events).finish();
        assert_eq!(
            parse.errors(),
            &[SyntaxError {
                message: "boom".into(),
                offset: 3
            }]
        );
    }

    #[test]
    fn error_offset_at_end_of_input() {
        let tokens = lex("P<");
        let mut parser = Parser::new(&tokens);
        let root = parser.start_here();
        parser.bump();
        parser.bump();
        parser.error("expected `>`");
        root.complete(&mut parser, SyntaxKind::ROOT);
        let parse = Sink::new(&tokens, parser.events).finish();
        assert_eq!(parse.errors()[0].offset, 2);
    }

    #[test]
    fn marker_must_be_completed() {
        let result = std::panic::catch_unwind(|| {
            let tokens = lex("test");
            let mut parser = Parser::new(&tokens);
            let _marker = parser.start();
            // Marker dropped without completion - should panic
        });
        assert!(result.is_err());
    }

    #[test]
    fn marker_can_be_abandoned() {
        let tokens = lex("test");
        let mut parser = Parser::new(&tokens);
        let marker = parser.start();
        marker.abandon(&mut parser);
        assert!(parser.events.is_empty());
    }

    #[test]
    fn syntax_error_display() {
        let error = SyntaxError {
            message: "expected `]`".into(),
            offset: 12,
        };
        assert_eq!(error.to_string(), "expected `]` at byte 12");
    }
}
