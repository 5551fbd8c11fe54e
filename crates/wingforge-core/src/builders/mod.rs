//! Name-parameterized content builders.
//!
//! Each builder is a pure function `&SubLibrary -> GeneratedArtifact`: it
//! embeds the sub-library's name into a fixed template and returns the
//! literal content for one artifact. No side effects, no failure modes —
//! the name was validated at `LibName` construction.
//!
//! Builders decide the artifact's [`WritePolicy`](crate::domain::WritePolicy):
//! the source and test stubs are write-once (they belong to the developer
//! after the first run), everything else is write-always
//! (generator-owned).

pub mod license;
pub mod manifest;
pub mod readme;
pub mod stubs;

use crate::domain::{GeneratedArtifact, SubLibrary};

/// Run every content builder for one sub-library, in stable order.
pub fn all(lib: &SubLibrary<'_>) -> Vec<GeneratedArtifact> {
    vec![
        manifest::build(lib),
        license::build(lib),
        readme::build(lib),
        stubs::build_source(lib),
        stubs::build_test(lib),
    ]
}
