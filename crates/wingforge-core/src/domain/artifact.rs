//! Generated artifact carrier types.
//!
//! An artifact is the output of one content builder: a relative path, the
//! content to place there, and the write policy deciding whether a later
//! run may replace it. It contains no business logic, only data.

use serde::Serialize;

use crate::domain::common::{RelativePath, WritePolicy};

/// A (relative path, content) pair produced by a content builder.
///
/// Invariant: `path` is always relative to the owning sub-library's
/// output directory, never to the repository root.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedArtifact {
    pub path: RelativePath,
    pub content: ArtifactContent,
    pub policy: WritePolicy,
}

impl GeneratedArtifact {
    pub fn new(
        path: impl Into<RelativePath>,
        content: ArtifactContent,
        policy: WritePolicy,
    ) -> Self {
        Self {
            path: path.into(),
            content,
            policy,
        }
    }

    /// Render the content to the literal text written to disk.
    pub fn render(&self) -> String {
        self.content.render()
    }
}

/// Artifact content: either ordered text lines (files meant to look
/// human-authored) or a structured manifest document.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactContent {
    Lines(Vec<String>),
    Manifest(PackageManifest),
}

impl ArtifactContent {
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Lines(lines.into_iter().map(Into::into).collect())
    }

    pub fn render(&self) -> String {
        match self {
            Self::Lines(lines) => {
                let mut out = lines.join("\n");
                out.push('\n');
                out
            }
            // Struct field order is the serialized field order, so the
            // document stays byte-stable across runs.
            Self::Manifest(manifest) => {
                let mut out = serde_json::to_string_pretty(manifest)
                    .expect("manifest serialization cannot fail");
                out.push('\n');
                out
            }
        }
    }
}

/// The structured npm manifest generated for each sub-library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageManifest {
    pub name: String,
    pub description: String,
    pub version: String,
    pub repository: RepositoryRef,
    pub author: AuthorRef,
    pub wing: WingSection,
    pub license: String,
}

/// Repository pointer. `directory` makes the sub-library individually
/// addressable inside the shared monorepo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryRef {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub directory: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorRef {
    pub name: String,
    pub email: String,
}

/// Wing target-environment declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WingSection {
    pub platforms: Vec<String>,
}
