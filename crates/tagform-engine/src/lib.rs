//! # tagform-engine
//!
//! Builds markup documents from typed element descriptions.
//!
//! A description is composed bottom-up from elements ([`model`]). Every
//! container is checked against the [`content_model`] as it is built, and a
//! forbidden nesting becomes a [`Composed::Violation`] in place of the
//! element. A tree free of violations is resolved into a
//! [`DocumentNode`] tree, which the [`render`] module streams out as
//! indented markup.
//!
//! Descriptions usually come from source files written in the description
//! language of `tagform-syntax`; the [`elaborate`](mod@elaborate) pass turns source into a
//! [`Composed`] tree and [`pipeline`] ties the stages together.
//!
//! ```
//! use tagform_engine::model::{body, div, html, img, p};
//! use tagform_engine::{render_to_string, resolve};
//!
//! let page = html(body([
//!     div(p("Hello")),
//!     img().with_attribute("src", "x.png"),
//! ]));
//! let document = resolve(&page).unwrap();
//! let markup = render_to_string(&document).unwrap();
//! assert!(markup.contains("<img src=\"x.png\" />"));
//! ```

pub mod attributes;
pub mod content_model;
pub mod elaborate;
pub mod error;
pub mod io;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod resolve;

pub use content_model::ContentModelViolation;
pub use elaborate::{DescriptionError, ElaborateOptions, elaborate};
pub use error::Error;
pub use io::IoError;
pub use model::{Child, Composed, Content, DocumentNode, ElementDescription, ElementKind};
pub use pipeline::{Options, build_document, render_file};
pub use render::{Escape, Renderer, render_to_string};
pub use resolve::{ResolveError, resolve};
