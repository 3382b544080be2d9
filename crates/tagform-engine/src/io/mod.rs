use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::model::DocumentNode;
use crate::render::Renderer;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a description file
pub fn read_description(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Render a document into a file, creating parent directories as needed.
///
/// The file is created (or truncated) here, so callers should only get this
/// far once the document has resolved.
pub fn write_document(
    path: &Path,
    document: &DocumentNode,
    renderer: &Renderer,
) -> Result<(), IoError> {
    let write_error = |source| IoError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
    renderer.render(document, &mut writer).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    log::info!(
        "Wrote {} ({} elements)",
        path.display(),
        document.node_count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{div, p};
    use crate::resolve::resolve;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_description() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.tags");

        let error = read_description(&missing).unwrap_err();

        assert!(matches!(error, IoError::NotFound(ref path) if *path == missing));
    }

    #[test]
    fn test_read_description() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.tags");
        fs::write(&path, "type A = P<'x'>;").unwrap();

        assert_eq!(read_description(&path).unwrap(), "type A = P<'x'>;");
    }

    #[test]
    fn test_write_document_creates_parent_dirs() {
        // Given a resolved document
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/site/index.html");
        let document = resolve(&div(p("Hello"))).unwrap();

        // When writing it to a nested path
        write_document(&path, &document, &Renderer::new()).unwrap();

        // Then the file holds the rendered markup
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "<div>\n  <p>\n    Hello\n  </p>\n</div>\n"
        );
    }

    #[test]
    fn test_write_document_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, "old content that is much longer than the new one").unwrap();

        write_document(&path, &resolve(&p("new")).unwrap(), &Renderer::new()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>\n  new\n</p>\n");
    }

    #[test]
    fn test_write_into_directory_fails() {
        let dir = TempDir::new().unwrap();

        let error = write_document(dir.path(), &resolve(&p("x")).unwrap(), &Renderer::new())
            .unwrap_err();

        assert!(matches!(error, IoError::Write { .. }));
    }
}
