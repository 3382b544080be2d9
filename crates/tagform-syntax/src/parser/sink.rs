//! Replays parser events into a Rowan green tree and anchors errors.

use rowan::GreenNodeBuilder;

use crate::lexer::Token;
use crate::parser::event::Event;
use crate::parser::{Parse, SyntaxError};
use crate::syntax_kind::{SyntaxKind, SyntaxNode};

pub struct Sink<'t, 'input> {
    builder: GreenNodeBuilder<'static>,
    tokens: &'t [Token<'input>],
    /// Index of the next token to attach
    cursor: usize,
    /// Bytes of source attached so far
    offset: usize,
    events: Vec<Event>,
    errors: Vec<SyntaxError>,
}

impl<'t, 'input> Sink<'t, 'input> {
    pub fn new(tokens: &'t [Token<'input>], events: Vec<Event>) -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
            tokens,
            cursor: 0,
            offset: 0,
            events,
            errors: Vec::new(),
        }
    }

    pub fn finish(mut self) -> Parse {
        for i in 0..self.events.len() {
            match std::mem::replace(&mut self.events[i], Event::Placeholder) {
                Event::Start {
                    kind,
                    forward_parent,
                } => self.start_with_parents(kind, forward_parent),
                Event::Token { kind } => self.token(kind),
                Event::Finish => self.builder.finish_node(),
                Event::Error { message } => {
                    let offset = self.next_significant_offset();
                    self.errors.push(SyntaxError { message, offset });
                }
                Event::Placeholder => {}
            }
        }

        Parse {
            tree: SyntaxNode::new_root(self.builder.finish()),
            errors: self.errors,
        }
    }

    /// Open `kind` and every node chained above it through forward parents,
    /// outermost first.
    fn start_with_parents(&mut self, kind: SyntaxKind, mut forward_parent: Option<usize>) {
        let mut kinds = vec![kind];
        while let Some(index) = forward_parent {
            match std::mem::replace(&mut self.events[index], Event::Placeholder) {
                Event::Start {
                    kind,
                    forward_parent: next,
                } => {
                    kinds.push(kind);
                    forward_parent = next;
                }
                _ => unreachable!("forward parent must point at a Start event"),
            }
        }
        for kind in kinds.into_iter().rev() {
            self.builder.start_node(kind.into());
        }
    }

    fn token(&mut self, kind: SyntaxKind) {
        let token = &self.tokens[self.cursor];
        self.builder.token(kind.into(), token.text);
        self.offset += token.text.len();
        self.cursor += 1;
    }

    /// Offset of the first non-trivia token not yet attached, or the end of
    /// the source.
    fn next_significant_offset(&self) -> usize {
        self.offset
            + self.tokens[self.cursor..]
                .iter()
                .take_while(|t| t.kind.is_trivia())
                .map(|t| t.text.len())
                .sum::<usize>()
    }
}
