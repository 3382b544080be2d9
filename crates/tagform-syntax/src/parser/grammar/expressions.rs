//! # Expression Grammar
//!
//! An expression is what appears on the right of `type Name =` and inside
//! element brackets. Dispatch is on the current token:
//!
//! | Token | Expression |
//! |-------|------------|
//! | IDENT followed by `<` | Element `Kind<...>` |
//! | IDENT | Reference to another alias |
//! | STRING | Text literal |
//! | `[` | Sequence |
//!
//! Element arguments are either an attribute block alone, or content
//! optionally followed by an attribute block:
//!
//! ```text
//! Img<{ src: 'a.png' }>
//! P<'text'>
//! A<'label', { href: '/' }>
//! ```
//!
//! A trailing comma is accepted after the last argument. `Kind<>` parses
//! fine; rejecting empty content is left to later passes.

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Tokens that close an enclosing construct and end a sequence early.
const SEQUENCE_STOP: &[SyntaxKind] = &[
    SyntaxKind::R_ANGLE,
    SyntaxKind::R_BRACE,
    SyntaxKind::SEMICOLON,
    SyntaxKind::TYPE_KW,
    SyntaxKind::EXPORT_KW,
    SyntaxKind::IMPORT_KW,
];

/// Parse a single expression.
pub fn expr(p: &mut Parser<'_, '_>) {
    match p.current() {
        SyntaxKind::IDENT if p.nth(1) == SyntaxKind::L_ANGLE => element(p),
        SyntaxKind::IDENT => reference(p),
        SyntaxKind::STRING => text_literal(p),
        SyntaxKind::L_BRACKET => sequence(p),
        _ => p.err_recover("expected element, sequence, text or alias name"),
    }
}

fn element(p: &mut Parser<'_, '_>) {
    let m = p.start();
    // Kind name and `<`
    p.bump();
    p.bump();

    if !p.at(SyntaxKind::R_ANGLE) {
        element_args(p);
    }
    p.expect(SyntaxKind::R_ANGLE, "`>`");

    m.complete(p, SyntaxKind::ELEMENT);
}

fn element_args(p: &mut Parser<'_, '_>) {
    if p.at(SyntaxKind::L_BRACE) {
        attributes(p);
    } else {
        expr(p);
        if !p.eat(SyntaxKind::COMMA) || !p.at(SyntaxKind::L_BRACE) {
            return;
        }
        attributes(p);
    }
    p.eat(SyntaxKind::COMMA);
}

fn reference(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    m.complete(p, SyntaxKind::REFERENCE);
}

fn text_literal(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    m.complete(p, SyntaxKind::TEXT_LITERAL);
}

fn sequence(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();

    while !p.at_any(&[SyntaxKind::R_BRACKET, SyntaxKind::EOF]) && !p.at_any(SEQUENCE_STOP) {
        expr(p);
        if !p.at(SyntaxKind::R_BRACKET) && !p.expect(SyntaxKind::COMMA, "`,` or `]`") {
            break;
        }
    }
    p.expect(SyntaxKind::R_BRACKET, "`]`");

    m.complete(p, SyntaxKind::SEQUENCE);
}

/// Parse `{ key: value, ... }`. Entries may be separated by `,` or `;`.
fn attributes(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();

    while !p.at_any(&[
        SyntaxKind::R_BRACE,
        SyntaxKind::R_ANGLE,
        SyntaxKind::R_BRACKET,
        SyntaxKind::EOF,
    ]) {
        attribute(p);
        if p.at(SyntaxKind::R_BRACE) {
            break;
        }
        if !p.eat(SyntaxKind::COMMA) && !p.eat(SyntaxKind::SEMICOLON) {
            p.error("expected `,` or `}`");
            break;
        }
    }
    p.expect(SyntaxKind::R_BRACE, "`}`");

    m.complete(p, SyntaxKind::ATTRIBUTES);
}

fn attribute(p: &mut Parser<'_, '_>) {
    if !p.current().is_attribute_key() {
        p.err_recover("expected attribute name");
        return;
    }

    let m = p.start();
    p.bump();
    p.expect(SyntaxKind::COLON, "`:`");
    match p.current() {
        SyntaxKind::STRING | SyntaxKind::NUMBER | SyntaxKind::TRUE_KW | SyntaxKind::FALSE_KW => {
            p.bump()
        }
        _ => p.err_recover("expected string, number or boolean value"),
    }

    m.complete(p, SyntaxKind::ATTRIBUTE);
}
