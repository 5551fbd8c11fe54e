//! npm manifest builder.

use crate::domain::{
    ArtifactContent, AuthorRef, GeneratedArtifact, PackageManifest, RepositoryRef, SubLibrary,
    WingSection, WritePolicy,
};

/// Version seed for a freshly scaffolded sub-library. Releases bump it in
/// the generated file, never here.
const VERSION_SEED: &str = "0.0.1";

/// Build `package.json` for a sub-library.
///
/// The `repository.directory` field equals the sub-library name so that
/// multiple sub-libraries can share one repository root while being
/// individually addressable and publishable.
pub fn build(lib: &SubLibrary<'_>) -> GeneratedArtifact {
    let ws = lib.workspace();

    let manifest = PackageManifest {
        name: lib.scoped_name(),
        description: format!("{} library for Wing", lib.name()),
        version: VERSION_SEED.into(),
        repository: RepositoryRef {
            kind: "git".into(),
            url: ws.repository_url().into(),
            directory: lib.name().as_str().into(),
        },
        author: AuthorRef {
            name: ws.author_name().into(),
            email: ws.author_email().into(),
        },
        wing: WingSection {
            platforms: ws.platforms().to_vec(),
        },
        license: ws.license().into(),
    };

    GeneratedArtifact::new(
        "package.json",
        ArtifactContent::Manifest(manifest),
        WritePolicy::Always,
    )
}
