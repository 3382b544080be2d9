//! The end-to-end path from description source to a written document.
//!
//! ```text
//! source ─► elaborate ─► violation gate ─► resolve ─► DocumentNode ─► render ─► file
//! ```
//!
//! The output file is only touched once the document has fully resolved, so
//! a broken description never creates or truncates it.

use std::path::Path;

use crate::elaborate::{ElaborateOptions, elaborate};
use crate::error::Error;
use crate::io;
use crate::model::DocumentNode;
use crate::render::{Escape, Renderer};
use crate::resolve::resolve;

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Alias to render; the last alias in the file when `None`
    pub entry: Option<String>,
    pub strict_attributes: bool,
    pub escape: Escape,
}

impl Options {
    pub fn renderer(&self) -> Renderer {
        Renderer::new().with_escape(self.escape)
    }

    fn elaborate_options(&self) -> ElaborateOptions {
        ElaborateOptions {
            entry: self.entry.clone(),
            strict_attributes: self.strict_attributes,
        }
    }
}

/// Elaborate, validate and resolve `source` into a document tree.
pub fn build_document(source: &str, options: &Options) -> Result<DocumentNode, Error> {
    let composed = elaborate(source, &options.elaborate_options())?;

    let violations = composed.violations();
    if !violations.is_empty() {
        return Err(Error::ContentModel(
            violations.into_iter().cloned().collect(),
        ));
    }

    let document = resolve(&composed)?;
    log::debug!("resolved <{}> with {} elements", document.tag, document.node_count());
    Ok(document)
}

/// Read `input`, build its document and write the rendered markup to `output`.
///
/// Returns the resolved tree so callers can inspect or re-serialise it.
pub fn render_file(input: &Path, output: &Path, options: &Options) -> Result<DocumentNode, Error> {
    log::debug!("reading {}", input.display());
    let source = io::read_description(input)?;
    let document = build_document(&source, options)?;
    io::write_document(output, &document, &options.renderer())?;
    Ok(document)
}
