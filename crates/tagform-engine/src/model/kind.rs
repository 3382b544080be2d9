use std::fmt;

/// The element kinds a description can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Html,
    Body,
    Div,
    P,
    H1,
    H2,
    H3,
    H4,
    H5,
    A,
    Img,
}

impl ElementKind {
    pub const ALL: [ElementKind; 11] = [
        ElementKind::Html,
        ElementKind::Body,
        ElementKind::Div,
        ElementKind::P,
        ElementKind::H1,
        ElementKind::H2,
        ElementKind::H3,
        ElementKind::H4,
        ElementKind::H5,
        ElementKind::A,
        ElementKind::Img,
    ];

    /// Lowercase tag name used in markup
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Html => "html",
            ElementKind::Body => "body",
            ElementKind::Div => "div",
            ElementKind::P => "p",
            ElementKind::H1 => "h1",
            ElementKind::H2 => "h2",
            ElementKind::H3 => "h3",
            ElementKind::H4 => "h4",
            ElementKind::H5 => "h5",
            ElementKind::A => "a",
            ElementKind::Img => "img",
        }
    }

    /// Void elements take no content and render without a closing tag.
    pub fn is_void(self) -> bool {
        matches!(self, ElementKind::Img)
    }

    /// Look up a kind by name, ignoring ASCII case (`Div`, `div` and `DIV` all match).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
