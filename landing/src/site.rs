//! Writing the rendered page to disk.
//!
//! The output directory is a plain static site: `index.html` at its root,
//! images and the logo served from the same origin by the asset server.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::render_page;

/// File name of the rendered landing page inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Failure while writing the static site.
#[derive(Debug, Error)]
pub enum SiteError {
    /// The output directory could not be created
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The page could not be written
    #[error("failed to write {}", path.display())]
    Write {
        /// File that was being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Render the landing page into `out_dir/index.html`.
///
/// Creates `out_dir` (and its parents) when missing and overwrites an existing
/// `index.html`. Returns the path of the written file.
pub fn write_site(out_dir: &Path) -> Result<PathBuf, SiteError> {
    fs::create_dir_all(out_dir).map_err(|source| SiteError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let html = render_page();
    let index = out_dir.join(INDEX_FILE);
    debug!(bytes = html.len(), "rendered landing page");

    fs::write(&index, &html).map_err(|source| SiteError::Write {
        path: index.clone(),
        source,
    })?;

    info!(path = %index.display(), "landing page written");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn writes_index_html() {
        let dir = TempDir::new().unwrap();
        let path = write_site(dir.path()).unwrap();

        assert_eq!(path, dir.path().join("index.html"));
        assert_eq!(fs::read_to_string(&path).unwrap(), render_page());
    }

    #[test]
    fn creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("public").join("www");

        let path = write_site(&nested).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn overwrites_previous_output() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(INDEX_FILE), "stale").unwrap();

        let path = write_site(dir.path()).unwrap();
        assert!(fs::read_to_string(path).unwrap().starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn reports_file_in_place_of_directory() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("dist");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_site(&blocker).unwrap_err();
        assert!(matches!(err, SiteError::CreateDir { .. }));
        assert!(err.to_string().contains("dist"));
    }
}
