//! # Parser Events
//!
//! The grammar never touches the tree. It appends to a flat event list which
//! the [`Sink`](super::sink::Sink) replays afterwards:
//!
//! ```text
//! Start(ELEMENT)
//!   Token(IDENT)         P
//!   Token(L_ANGLE)
//!   Start(TEXT_LITERAL)
//!     Token(STRING)      'x'
//!   Finish
//!   Error("expected `>`")
//! Finish
//! ```
//!
//! Errors travel in the same stream. They carry no position; the sink knows
//! how much source it has consumed when it reaches one and anchors the error
//! there.
//!
//! A `Start` may name a later `Start` as its `forward_parent`. That is how
//! `CompletedMarker::precede` wraps a node after the fact without shuffling
//! the list.

use crate::syntax_kind::SyntaxKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Open a node. `forward_parent` is the index of another `Start` to
    /// open around this one.
    Start {
        kind: SyntaxKind,
        forward_parent: Option<usize>,
    },

    /// Attach the next lexer token to the open node.
    Token { kind: SyntaxKind },

    /// Close the most recently opened node.
    Finish,

    /// Something was wrong at the next significant token.
    Error { message: String },

    /// Reserved slot for a `Start`; ignored if its marker was abandoned.
    Placeholder,
}

impl Event {
    pub fn start(kind: SyntaxKind) -> Self {
        Event::Start {
            kind,
            forward_parent: None,
        }
    }

    pub fn token(kind: SyntaxKind) -> Self {
        Event::Token { kind }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Event::Error {
            message: message.into(),
        }
    }
}
