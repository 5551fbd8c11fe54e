//! Workspace context and the per-run sub-library entity.

use crate::domain::common::RelativePath;
use crate::domain::error::DomainError;
use crate::domain::name::LibName;

/// Repository-level context shared by every sub-library in a generation run.
///
/// All values are caller-supplied and read-only for the lifetime of a run.
/// Nothing here is derived from the environment — the generator owns no
/// configuration surface of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// npm owner scope: generated manifests are named `@<owner>/<name>`.
    owner: String,
    /// `repository.url` for every generated manifest.
    repository_url: String,
    author_name: String,
    author_email: String,
    /// SPDX identifier for generated packages (`license` manifest field).
    license: String,
    copyright_owner: String,
    copyright_period: String,
    /// Branch whose pushes trigger the release pipeline.
    default_branch: String,
    /// Node toolchain version installed by both pipelines.
    node_version: String,
    /// npm registry the pipelines authenticate against and publish to.
    npm_registry: String,
    /// Wing target platforms declared by every generated manifest.
    platforms: Vec<String>,
}

impl Workspace {
    /// Create a workspace with the defaults the generator ships with.
    ///
    /// `owner` is the npm scope (without the `@`), `repository_url` the git
    /// remote every manifest points back to. Everything else can be
    /// adjusted with the `with_*` methods.
    pub fn new(owner: impl Into<String>, repository_url: impl Into<String>) -> Self {
        let owner = owner.into();
        Self {
            copyright_owner: owner.clone(),
            owner,
            repository_url: repository_url.into(),
            author_name: String::new(),
            author_email: String::new(),
            license: "MIT".into(),
            copyright_period: "2023".into(),
            default_branch: "main".into(),
            node_version: "20.x".into(),
            npm_registry: "https://registry.npmjs.org".into(),
            platforms: vec!["sim".into()],
        }
    }

    pub fn with_author(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.author_name = name.into();
        self.author_email = email.into();
        self
    }

    pub fn with_copyright(mut self, owner: impl Into<String>, period: impl Into<String>) -> Self {
        self.copyright_owner = owner.into();
        self.copyright_period = period.into();
        self
    }

    pub fn with_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_branch = branch.into();
        self
    }

    pub fn with_node_version(mut self, version: impl Into<String>) -> Self {
        self.node_version = version.into();
        self
    }

    pub fn with_platforms(mut self, platforms: Vec<String>) -> Self {
        self.platforms = platforms;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.owner.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "owner" });
        }
        if self.repository_url.is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "repository_url",
            });
        }
        if self.default_branch.is_empty() {
            return Err(DomainError::InvalidWorkspace(
                "default branch is empty".into(),
            ));
        }
        if self.platforms.is_empty() {
            return Err(DomainError::InvalidWorkspace(
                "at least one target platform is required".into(),
            ));
        }
        Ok(())
    }

    // Getters

    pub fn owner(&self) -> &str {
        &self.owner
    }
    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }
    pub fn author_name(&self) -> &str {
        &self.author_name
    }
    pub fn author_email(&self) -> &str {
        &self.author_email
    }
    pub fn license(&self) -> &str {
        &self.license
    }
    pub fn copyright_owner(&self) -> &str {
        &self.copyright_owner
    }
    pub fn copyright_period(&self) -> &str {
        &self.copyright_period
    }
    pub fn default_branch(&self) -> &str {
        &self.default_branch
    }
    pub fn node_version(&self) -> &str {
        &self.node_version
    }
    pub fn npm_registry(&self) -> &str {
        &self.npm_registry
    }
    pub fn platforms(&self) -> &[String] {
        &self.platforms
    }
}

/// One independently publishable sub-library inside the workspace.
///
/// Created once at orchestration start, immutable for its lifetime.
/// Only the file-system projection of a run persists — this entity does not.
#[derive(Debug, Clone)]
pub struct SubLibrary<'a> {
    name: LibName,
    workspace: &'a Workspace,
}

impl<'a> SubLibrary<'a> {
    pub fn new(name: LibName, workspace: &'a Workspace) -> Self {
        Self { name, workspace }
    }

    pub fn name(&self) -> &LibName {
        &self.name
    }

    pub fn workspace(&self) -> &Workspace {
        self.workspace
    }

    /// Output directory, relative to the repository root: `<name>/`.
    pub fn dir(&self) -> RelativePath {
        RelativePath::new(self.name.as_str())
    }

    /// Scoped manifest name: `@<owner>/<name>`.
    pub fn scoped_name(&self) -> String {
        format!("@{}/{}", self.workspace.owner(), self.name)
    }

    /// Path glob covering everything under the sub-library's directory.
    pub fn path_glob(&self) -> String {
        format!("{}/**", self.name)
    }

    /// The sub-library's own dependency lock file.
    pub fn lock_file(&self) -> String {
        format!("{}/package-lock.json", self.name)
    }
}
