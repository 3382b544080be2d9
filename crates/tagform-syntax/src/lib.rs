//! # tagform-syntax
//!
//! A lossless syntax tree for tagform description files using [Rowan] +
//! [Logos], following the [rust-analyzer] architecture model.
//!
//! [Rowan]: https://docs.rs/rowan
//! [Logos]: https://docs.rs/logos
//! [rust-analyzer]: https://rust-analyzer.github.io/book/contributing/syntax.html
//!
//! ## The Description Language
//!
//! A description file is a list of type aliases, each naming one document
//! fragment. Elements are written `Kind<content>` or
//! `Kind<content, { attributes }>`, sequences are `[a, b]` and text is a
//! quoted string:
//!
//! ```text
//! import type { Html, Body, P } from '../src/html';
//!
//! type Intro = P<'Welcome'>;
//! type Page = Html<Body<[Intro, Img<{ src: 'logo.png' }>]>>;
//! ```
//!
//! Imports are accepted and ignored, so the same file can also be fed to
//! other tooling. Comments (`//` and `/* */`) may appear anywhere.
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Events → Sink → Rowan Tree
//!               (Logos)          (Grammar)        (GreenNodeBuilder)
//! ```
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! Tokenizes input into a flat sequence of tokens. Every character becomes
//! part of some token, including whitespace and comments.
//!
//! ```text
//! "P<'a'>" → [IDENT, L_ANGLE, STRING, R_ANGLE]
//! ```
//!
//! ### 2. Parser ([`parser`] module)
//!
//! Consumes tokens and emits **events** (Start, Token, Finish, Error),
//! skipping over trivia during lookahead. Syntax errors go into the event
//! stream rather than aborting the parse.
//!
//! ### 3. Sink ([`parser::sink`] module)
//!
//! Consumes events, builds a Rowan green tree and gives each error the byte
//! offset of the token it refers to.
//!
//! ## Module Structure
//!
//! ```text
//! tagform-syntax/
//! ├── lib.rs           # This file - public API and tree shape tests
//! ├── syntax_kind.rs   # SyntaxKind enum (tokens + nodes) and Rowan integration
//! ├── lexer.rs         # Logos-based tokenizer
//! └── parser/
//!     ├── mod.rs       # Parser struct, Marker system, parse() and SyntaxError
//!     ├── event.rs     # Event enum (Start, Token, Finish, Error, Placeholder)
//!     ├── sink.rs      # Events to Rowan GreenNode, errors to byte offsets
//!     └── grammar/
//!         ├── mod.rs         # Root parsing
//!         ├── items.rs       # import declarations and type aliases
//!         └── expressions.rs # elements, sequences, text, references, attributes
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tagform_syntax::{parse, SyntaxKind};
//!
//! let parse = parse("type Page = P<'Hello'>;\n");
//! assert!(parse.is_ok());
//!
//! let tree = parse.tree();
//! assert_eq!(tree.text().to_string(), "type Page = P<'Hello'>;\n");
//!
//! let alias = tree.children().next().unwrap();
//! assert_eq!(alias.kind(), SyntaxKind::TYPE_ALIAS);
//! ```

pub mod lexer;
pub mod parser;
pub mod syntax_kind;

pub use parser::{Parse, SyntaxError, parse};
pub use syntax_kind::{DescriptionLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
