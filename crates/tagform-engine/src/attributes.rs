//! # Attribute Vocabulary
//!
//! The attribute names a description may use, grouped as in HTML (global,
//! event, form, link/resource, media, table, metadata, list, embedded), each
//! with the value type it expects. `data-*` and `aria-*` attributes accept
//! any value.
//!
//! Checking never changes what gets rendered. The elaboration pass logs
//! issues as warnings, or turns them into errors in strict mode.

use crate::model::AttrValue;

/// The value an attribute accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrType {
    Text,
    Number,
    Bool,
    /// A boolean, or the strings `"true"`/`"false"`
    BoolLike,
    TextOrNumber,
    TextOrBool,
    OneOf(&'static [&'static str]),
    /// One of the listed keywords, or any other text
    KeywordOrText(&'static [&'static str]),
}

impl AttrType {
    fn accepts(self, value: &AttrValue) -> bool {
        match (self, value) {
            (AttrType::Text, AttrValue::Str(_)) => true,
            (AttrType::Number, AttrValue::Number(_)) => true,
            (AttrType::Bool, AttrValue::Bool(_)) => true,
            (AttrType::BoolLike, AttrValue::Bool(_)) => true,
            (AttrType::BoolLike, AttrValue::Str(s)) => s == "true" || s == "false",
            (AttrType::TextOrNumber, AttrValue::Str(_) | AttrValue::Number(_)) => true,
            (AttrType::TextOrBool, AttrValue::Str(_) | AttrValue::Bool(_)) => true,
            (AttrType::OneOf(allowed), AttrValue::Str(s)) => allowed.contains(&s.as_str()),
            (AttrType::KeywordOrText(_), AttrValue::Str(_)) => true,
            _ => false,
        }
    }

    fn describe(self) -> String {
        match self {
            AttrType::Text => "text".into(),
            AttrType::Number => "a number".into(),
            AttrType::Bool => "a boolean".into(),
            AttrType::BoolLike => "a boolean".into(),
            AttrType::TextOrNumber => "text or a number".into(),
            AttrType::TextOrBool => "text or a boolean".into(),
            AttrType::OneOf(allowed) => format!("one of {}", quote_all(allowed)),
            AttrType::KeywordOrText(keywords) => format!("one of {} or text", quote_all(keywords)),
        }
    }
}

fn quote_all(values: &[&str]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("'{v}'")).collect();
    quoted.join(", ")
}

type Table = &'static [(&'static str, AttrType)];

use AttrType::*;

const TARGETS: &[&str] = &["_blank", "_self", "_parent", "_top"];

const GLOBAL: Table = &[
    ("id", Text),
    ("class", Text),
    ("style", Text),
    ("title", Text),
    ("lang", Text),
    ("dir", OneOf(&["ltr", "rtl", "auto"])),
    ("tabindex", Number),
    ("accesskey", Text),
    ("contenteditable", BoolLike),
    ("draggable", BoolLike),
    ("hidden", Bool),
    ("spellcheck", BoolLike),
    ("translate", OneOf(&["yes", "no"])),
    ("role", Text),
];

const EVENT: Table = &[
    ("onclick", Text),
    ("ondblclick", Text),
    ("onmousedown", Text),
    ("onmouseup", Text),
    ("onmouseover", Text),
    ("onmousemove", Text),
    ("onmouseout", Text),
    ("onkeydown", Text),
    ("onkeyup", Text),
    ("onkeypress", Text),
    ("onfocus", Text),
    ("onblur", Text),
    ("onchange", Text),
    ("onsubmit", Text),
    ("onload", Text),
    ("onunload", Text),
    ("onresize", Text),
    ("onscroll", Text),
];

const FORM: Table = &[
    ("name", Text),
    ("value", TextOrNumber),
    ("type", Text),
    ("placeholder", Text),
    ("required", Bool),
    ("disabled", Bool),
    ("readonly", Bool),
    ("checked", Bool),
    ("selected", Bool),
    ("maxlength", Number),
    ("minlength", Number),
    ("max", TextOrNumber),
    ("min", TextOrNumber),
    ("step", TextOrNumber),
    ("pattern", Text),
    // 'on' | 'off' | any string
    ("autocomplete", Text),
    ("autofocus", Bool),
    ("multiple", Bool),
    ("size", Number),
    ("form", Text),
    ("formaction", Text),
    ("formenctype", Text),
    ("formmethod", OneOf(&["get", "post"])),
    ("formnovalidate", Bool),
    ("formtarget", KeywordOrText(TARGETS)),
];

const LINK_RESOURCE: Table = &[
    ("href", Text),
    ("src", Text),
    ("srcset", Text),
    ("sizes", Text),
    ("media", Text),
    ("rel", Text),
    ("download", TextOrBool),
    ("target", KeywordOrText(TARGETS)),
    ("hreflang", Text),
    (
        "referrerpolicy",
        OneOf(&[
            "no-referrer",
            "no-referrer-when-downgrade",
            "origin",
            "origin-when-cross-origin",
            "same-origin",
            "strict-origin",
            "strict-origin-when-cross-origin",
            "unsafe-url",
        ]),
    ),
];

const MEDIA: Table = &[
    ("alt", Text),
    ("width", TextOrNumber),
    ("height", TextOrNumber),
    ("loading", OneOf(&["eager", "lazy"])),
    ("decoding", OneOf(&["sync", "async", "auto"])),
    ("crossorigin", OneOf(&["anonymous", "use-credentials"])),
    ("usemap", Text),
    ("ismap", Bool),
    ("autoplay", Bool),
    ("controls", Bool),
    ("loop", Bool),
    ("muted", Bool),
    ("preload", OneOf(&["none", "metadata", "auto"])),
    ("poster", Text),
];

const TABLE: Table = &[
    ("colspan", Number),
    ("rowspan", Number),
    ("headers", Text),
    ("scope", OneOf(&["row", "col", "rowgroup", "colgroup"])),
];

const METADATA: Table = &[
    ("charset", Text),
    ("content", Text),
    ("http-equiv", Text),
    ("property", Text),
];

const LIST: Table = &[("start", Number), ("reversed", Bool)];

const EMBEDDED: Table = &[
    ("sandbox", Text),
    ("allow", Text),
    ("allowfullscreen", Bool),
    ("allowpaymentrequest", Bool),
];

const GROUPS: &[Table] = &[
    GLOBAL,
    EVENT,
    FORM,
    LINK_RESOURCE,
    MEDIA,
    TABLE,
    METADATA,
    LIST,
    EMBEDDED,
];

/// Why an attribute was flagged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeIssue {
    #[error("unknown attribute `{name}`")]
    Unknown { name: String },
    #[error("attribute `{name}` expects {expected}, found `{found}`")]
    WrongType {
        name: String,
        expected: String,
        found: String,
    },
}

/// The expected type for `name`, or `None` if it is not in the vocabulary.
///
/// `data-*` and `aria-*` names are reported as [`AttrType::TextOrBool`]
/// but accept numbers too; use [`check`] to validate a value.
pub fn lookup(name: &str) -> Option<AttrType> {
    if is_open_prefix(name) {
        return Some(TextOrBool);
    }
    GROUPS
        .iter()
        .flat_map(|group| group.iter())
        .find(|(known, _)| *known == name)
        .map(|(_, ty)| *ty)
}

/// Check one attribute against the vocabulary.
pub fn check(name: &str, value: &AttrValue) -> Result<(), AttributeIssue> {
    if is_open_prefix(name) {
        return Ok(());
    }
    let ty = lookup(name).ok_or_else(|| AttributeIssue::Unknown {
        name: name.to_string(),
    })?;
    if ty.accepts(value) {
        Ok(())
    } else {
        Err(AttributeIssue::WrongType {
            name: name.to_string(),
            expected: ty.describe(),
            found: value.to_string(),
        })
    }
}

fn is_open_prefix(name: &str) -> bool {
    ["data-", "aria-"]
        .iter()
        .any(|prefix| name.len() > prefix.len() && name.starts_with(prefix))
}
