//! Readme builder.
//!
//! The readme is purely informational. Its structure is byte-identical
//! across sub-libraries; only the name substitutions differ.

use crate::domain::{ArtifactContent, GeneratedArtifact, SubLibrary, WritePolicy};

pub fn build(lib: &SubLibrary<'_>) -> GeneratedArtifact {
    let name = lib.name();

    let lines = vec![
        format!("# {name}"),
        String::new(),
        "## Prerequisites".into(),
        String::new(),
        "* [winglang](https://winglang.io).".into(),
        String::new(),
        "## Installation".into(),
        String::new(),
        "```sh".into(),
        format!("npm i {}", lib.scoped_name()),
        "```".into(),
        String::new(),
        "## Usage".into(),
        String::new(),
        "```sh".into(),
        format!("bring {name};"),
        String::new(),
        format!("let adder = new {name}.Adder();"),
        "```".into(),
        String::new(),
        "## Licence".into(),
        String::new(),
        "This library is licensed under the [MIT License](./LICENSE).".into(),
    ];

    GeneratedArtifact::new("README.md", ArtifactContent::Lines(lines), WritePolicy::Always)
}
