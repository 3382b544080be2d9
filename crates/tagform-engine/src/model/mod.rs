//! Data model: element kinds, pre-validation descriptions, and the resolved
//! document tree.

pub mod description;
pub mod kind;
pub mod node;

pub use description::*;
pub use kind::ElementKind;
pub use node::{Child, DocumentNode};
