//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use wingforge_core::{application::ports::Filesystem, error::WingforgeResult};

/// Production filesystem implementation using `std::fs`.
///
/// Rooted at the repository directory given at construction: every path
/// the core hands over is relative and resolved against that root, so the
/// core never sees or produces absolute paths.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    /// Create a local filesystem adapter rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> WingforgeResult<()> {
        std::fs::create_dir_all(self.resolve(path))
            .map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> WingforgeResult<()> {
        std::fs::write(self.resolve(path), content)
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> wingforge_core::error::WingforgeError {
    use wingforge_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
