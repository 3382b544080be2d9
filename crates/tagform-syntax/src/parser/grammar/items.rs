//! Top-level grammar rules.

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

use super::expressions;

/// Keywords that begin a new top-level item.
const ITEM_START: &[SyntaxKind] = &[
    SyntaxKind::TYPE_KW,
    SyntaxKind::EXPORT_KW,
    SyntaxKind::IMPORT_KW,
];

/// Parse one top-level item.
pub fn item(p: &mut Parser<'_, '_>) {
    match p.current() {
        SyntaxKind::IMPORT_KW => import_decl(p),
        SyntaxKind::TYPE_KW | SyntaxKind::EXPORT_KW => type_alias(p),
        // Empty statement
        SyntaxKind::SEMICOLON => p.bump(),
        _ => error_item(p),
    }
}

/// Parse an import declaration.
///
/// Imports only exist so description files can be type-checked elsewhere;
/// their contents are kept verbatim and ignored downstream. The declaration
/// ends at `;` or at the module string following `from`.
fn import_decl(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();

    let mut after_from = false;
    let mut terminated = false;
    while !p.at_end() && !p.at_any(&[SyntaxKind::IMPORT_KW, SyntaxKind::EXPORT_KW]) {
        match p.current() {
            SyntaxKind::SEMICOLON => {
                p.bump();
                terminated = true;
                break;
            }
            SyntaxKind::STRING if after_from => {
                p.bump();
                p.eat(SyntaxKind::SEMICOLON);
                terminated = true;
                break;
            }
            kind => {
                after_from = kind == SyntaxKind::FROM_KW;
                p.bump();
            }
        }
    }
    if !terminated {
        p.error("expected `from '<module>'` to end import");
    }

    m.complete(p, SyntaxKind::IMPORT_DECL);
}

/// Parse `export? type Name = expr;`.
fn type_alias(p: &mut Parser<'_, '_>) {
    let m = p.start();

    p.eat(SyntaxKind::EXPORT_KW);
    p.expect(SyntaxKind::TYPE_KW, "`type`");
    p.expect(SyntaxKind::IDENT, "alias name");
    p.expect(SyntaxKind::EQ, "`=`");
    expressions::expr(p);
    p.eat(SyntaxKind::SEMICOLON);

    m.complete(p, SyntaxKind::TYPE_ALIAS);
}

/// Wrap everything up to the next item keyword in an ERROR node.
fn error_item(p: &mut Parser<'_, '_>) {
    p.error("expected `type` alias or `import`");
    let m = p.start();

    p.bump();
    while !p.at_end() && !p.at_any(ITEM_START) {
        p.bump();
    }

    m.complete(p, SyntaxKind::ERROR);
}
