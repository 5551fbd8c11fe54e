use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// A filesystem path guaranteed to be **relative**.
///
/// This type encodes an important invariant:
/// generated artifacts must never carry absolute paths.
///
/// Why?
/// - Absolute paths break portability
/// - They can overwrite arbitrary locations
/// - They are almost always a bug in scaffolding systems
///
/// `RelativePath` is a *semantic guardrail*, not a filesystem abstraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the provided path is absolute.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            !path.is_absolute(),
            "RelativePath cannot be absolute: {path:?}"
        );
        Self(path)
    }

    /// Try to create a relative path.
    ///
    /// This is the non-panicking variant.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    /// Join a path segment onto this relative path.
    ///
    /// # Panics
    /// Panics if the joined segment is absolute.
    pub fn join(&self, segment: impl AsRef<Path>) -> Self {
        let segment = segment.as_ref();
        assert!(
            !segment.is_absolute(),
            "cannot join absolute path to RelativePath"
        );
        Self(self.0.join(segment))
    }

    /// Borrow as a `Path`.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consume into a `PathBuf`.
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        RelativePath::new(s)
    }
}

impl From<String> for RelativePath {
    fn from(s: String) -> Self {
        RelativePath::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Write policy for a generated artifact.
///
/// This is the per-path lifecycle made explicit: a path is either `absent`
/// or `present`, and the policy decides what a generation run may do when
/// it is already `present`.
///
/// - `Once`: written only when absent. Later runs never overwrite — the
///   file belongs to the developer after first materialization.
/// - `Always`: rewritten on every run. The file belongs to the generator;
///   hand edits do not survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WritePolicy {
    Once,
    Always,
}

impl WritePolicy {
    /// Whether an existing file at the target path may be overwritten.
    pub const fn overwrites(&self) -> bool {
        matches!(self, Self::Always)
    }
}

impl fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Once => "write-once",
            Self::Always => "write-always",
        })
    }
}
