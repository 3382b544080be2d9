//! # Grammar Rules
//!
//! Each function takes a `&mut Parser` and uses its methods to:
//!
//! 1. Inspect the current token (`p.current()`, `p.at()`, `p.nth()`)
//! 2. Consume tokens (`p.bump()`, `p.eat()`, `p.expect()`)
//! 3. Build tree structure (`p.start()` → marker → `complete()`/`abandon()`)
//!
//! ## Module Structure
//!
//! - [`items`] - Top-level items (`import` declarations, `type` aliases)
//! - [`expressions`] - Element, sequence, text and reference expressions,
//!   plus attribute blocks
//!
//! ## Writing Grammar Rules
//!
//! ```ignore
//! fn sequence(p: &mut Parser) {
//!     let m = p.start();                  // 1. Start a node
//!     p.bump();                           // 2. Consume `[`
//!     while !p.at(SyntaxKind::R_BRACKET) {
//!         expressions::expr(p);           // 3. Call other grammar rules
//!         ...
//!     }
//!     p.expect(SyntaxKind::R_BRACKET, "`]`");
//!     m.complete(p, SyntaxKind::SEQUENCE); // 4. Complete the node
//! }
//! ```
//!
//! ## Error Recovery
//!
//! Grammar functions are lenient: they record a [`SyntaxError`] and keep
//! going. Every loop must consume at least one token per iteration or stop,
//! and unexpected tokens end up in `ERROR` nodes so all input bytes survive.
//!
//! [`SyntaxError`]: crate::parser::SyntaxError

mod expressions;
mod items;

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Parse the root document.
///
/// Creates a ROOT node containing every top-level item. Leading and trailing
/// trivia belong to ROOT itself.
pub fn root(p: &mut Parser<'_, '_>) {
    let m = p.start_here();

    while !p.at_end() {
        items::item(p);
    }
    p.bump_trivia();

    m.complete(p, SyntaxKind::ROOT);
}
