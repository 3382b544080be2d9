//! SyntaxKind enum for all tokens and nodes in the description CST.
//!
//! Following the rust-analyzer model, all tokens and nodes share a single enum.
//! Every byte in the source must appear as a token in the tree.

/// All syntax kinds for the description CST.
///
/// This enum represents both tokens (lexer output) and composite nodes (parser output).
/// The `repr(u16)` ensures efficient storage in rowan's green tree.
///
/// We use SCREAMING_CASE following the rust-analyzer convention for SyntaxKind.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // === Trivia ===
    /// Horizontal whitespace (spaces, tabs)
    WHITESPACE,
    /// Line ending
    NEWLINE,
    /// `// ...` or `/* ... */`
    COMMENT,

    // === Tokens (lexer output) ===
    /// `type`
    TYPE_KW,
    /// `import`
    IMPORT_KW,
    /// `export`
    EXPORT_KW,
    /// `from`
    FROM_KW,
    /// `true`
    TRUE_KW,
    /// `false`
    FALSE_KW,
    /// Identifier (element names, alias names, attribute keys)
    IDENT,
    /// Quoted string literal, quotes included
    STRING,
    /// Numeric literal
    NUMBER,
    /// `<`
    L_ANGLE,
    /// `>`
    R_ANGLE,
    /// `[`
    L_BRACKET,
    /// `]`
    R_BRACKET,
    /// `{`
    L_BRACE,
    /// `}`
    R_BRACE,
    /// `,`
    COMMA,
    /// `:`
    COLON,
    /// `;`
    SEMICOLON,
    /// `=`
    EQ,
    /// `*`
    STAR,
    /// Any character the lexer does not recognise
    UNKNOWN,
    /// End of file marker
    EOF,

    // === Composite Nodes (parser output) ===
    /// Root document node
    ROOT,
    /// `import ... from '...';` (kept for compatibility, ignored downstream)
    IMPORT_DECL,
    /// `type Name = expr;`
    TYPE_ALIAS,
    /// `Kind<content, { attrs }>`
    ELEMENT,
    /// `[expr, expr]`
    SEQUENCE,
    /// A string literal in expression position
    TEXT_LITERAL,
    /// A bare identifier naming another alias
    REFERENCE,
    /// `{ key: value, ... }`
    ATTRIBUTES,
    /// `key: value`
    ATTRIBUTE,

    /// Error recovery node
    ERROR,
}

impl SyntaxKind {
    /// Returns true if this kind represents a token (lexer output).
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::EOF as u16)
    }

    /// Returns true if this kind represents a composite node.
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    /// Returns true if this kind is trivia (whitespace/newlines/comments).
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::NEWLINE | Self::COMMENT)
    }

    /// Returns true for keywords.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::TYPE_KW
                | Self::IMPORT_KW
                | Self::EXPORT_KW
                | Self::FROM_KW
                | Self::TRUE_KW
                | Self::FALSE_KW
        )
    }

    /// Tokens usable as an attribute key. Keywords are allowed so that
    /// attributes such as `type` can be written unquoted.
    pub fn is_attribute_key(self) -> bool {
        matches!(self, Self::IDENT | Self::STRING) || self.is_keyword()
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language definition for rowan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DescriptionLang {}

impl rowan::Language for DescriptionLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::ERROR as u16);
        // SAFETY: We check bounds above and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type alias for our syntax nodes.
pub type SyntaxNode = rowan::SyntaxNode<DescriptionLang>;
/// Type alias for our syntax tokens.
pub type SyntaxToken = rowan::SyntaxToken<DescriptionLang>;
/// Type alias for syntax elements (node or token).
pub type SyntaxElement = rowan::SyntaxElement<DescriptionLang>;
