use crate::content_model::ContentModelViolation;
use crate::elaborate::DescriptionError;
use crate::io::IoError;
use crate::resolve::ResolveError;

/// Everything that can stop a description from becoming a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Description(#[from] DescriptionError),
    #[error("{}", violation_summary(.0))]
    ContentModel(Vec<ContentModelViolation>),
    #[error(transparent)]
    Resolution(#[from] ResolveError),
    #[error(transparent)]
    Io(#[from] IoError),
}

fn violation_summary(violations: &[ContentModelViolation]) -> String {
    let details: Vec<String> = violations.iter().map(ToString::to_string).collect();
    format!(
        "description breaks the content model: {}",
        details.join("; ")
    )
}
