//! # Lexer - Tokenizing Description Source
//!
//! This module provides the first stage of parsing: breaking source text into
//! tokens using the [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! Every byte in the input appears in exactly one token. Whitespace, newlines
//! and comments are kept as trivia tokens, and characters the lexer does not
//! understand become `UNKNOWN` tokens instead of being dropped:
//!
//! ```
//! use tagform_syntax::lexer::lex;
//!
//! let input = "type Page = P<'Hello'>; // entry\n";
//! let tokens = lex(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Token Design
//!
//! Tokens are context-free. The lexer does not know whether an identifier
//! names an element kind, an alias or an attribute key; the parser and the
//! elaboration pass decide that.
//!
//! [`TokenKind::to_syntax_kind`] maps the Logos enum onto the shared
//! [`SyntaxKind`] used by the tree.
//!
//! [`SyntaxKind`]: crate::syntax_kind::SyntaxKind

use logos::Logos;

use crate::syntax_kind::SyntaxKind;

/// Token kinds produced by the Logos lexer.
///
/// Exists separately from [`SyntaxKind`] because Logos needs to derive on it.
///
/// [`SyntaxKind`]: crate::syntax_kind::SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Horizontal whitespace (spaces, tabs)
    #[regex(r"[ \t]+")]
    Whitespace,

    /// Line ending (LF or CRLF)
    #[regex(r"\r?\n")]
    Newline,

    /// Line or block comment
    #[regex(r"//[^\r\n]*")]
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    Comment,

    #[token("type")]
    Type,

    #[token("import")]
    Import,

    #[token("export")]
    Export,

    #[token("from")]
    From,

    #[token("true")]
    True,

    #[token("false")]
    False,

    /// Identifiers may contain `-` so attribute keys like `data-id` lex as one token
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$-]*")]
    Ident,

    /// Single or double quoted string, escapes allowed, no raw newlines
    #[regex(r#"'([^'\\\r\n]|\\.)*'"#)]
    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    String,

    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token("=")]
    Eq,

    #[token("*")]
    Star,
}

impl TokenKind {
    /// Convert to SyntaxKind.
    pub fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Whitespace => SyntaxKind::WHITESPACE,
            TokenKind::Newline => SyntaxKind::NEWLINE,
            TokenKind::Comment => SyntaxKind::COMMENT,
            TokenKind::Type => SyntaxKind::TYPE_KW,
            TokenKind::Import => SyntaxKind::IMPORT_KW,
            TokenKind::Export => SyntaxKind::EXPORT_KW,
            TokenKind::From => SyntaxKind::FROM_KW,
            TokenKind::True => SyntaxKind::TRUE_KW,
            TokenKind::False => SyntaxKind::FALSE_KW,
            TokenKind::Ident => SyntaxKind::IDENT,
            TokenKind::String => SyntaxKind::STRING,
            TokenKind::Number => SyntaxKind::NUMBER,
            TokenKind::LAngle => SyntaxKind::L_ANGLE,
            TokenKind::RAngle => SyntaxKind::R_ANGLE,
            TokenKind::LBracket => SyntaxKind::L_BRACKET,
            TokenKind::RBracket => SyntaxKind::R_BRACKET,
            TokenKind::LBrace => SyntaxKind::L_BRACE,
            TokenKind::RBrace => SyntaxKind::R_BRACE,
            TokenKind::Comma => SyntaxKind::COMMA,
            TokenKind::Colon => SyntaxKind::COLON,
            TokenKind::Semicolon => SyntaxKind::SEMICOLON,
            TokenKind::Eq => SyntaxKind::EQ,
            TokenKind::Star => SyntaxKind::STAR,
        }
    }
}

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    lex_with_spans(input)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Lex and return tokens along with their byte spans.
pub fn lex_with_spans(input: &str) -> Vec<(Token<'_>, std::ops::Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        let kind = match result {
            Ok(token_kind) => token_kind.to_syntax_kind(),
            Err(()) => SyntaxKind::UNKNOWN,
        };
        tokens.push((Token { kind, text }, span));
    }

    tokens
}
