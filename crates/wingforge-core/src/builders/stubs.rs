//! Source and test stub builders.
//!
//! These exist solely to give a new sub-library a non-empty, runnable
//! starting point: a unit exposing one operation, and a test exercising
//! it. Both are write-once — after the first run the developer owns them.

use crate::domain::{ArtifactContent, GeneratedArtifact, SubLibrary, WritePolicy};

/// Build the `<name>.w` starter source file.
pub fn build_source(lib: &SubLibrary<'_>) -> GeneratedArtifact {
    let lines = [
        "pub class Adder {",
        "  pub inflight add (x: num, y: num): num {",
        "    return x + y;",
        "  }",
        "}",
    ];

    GeneratedArtifact::new(
        format!("{}.w", lib.name()),
        ArtifactContent::lines(lines),
        WritePolicy::Once,
    )
}

/// Build the `tests/<name>.test.w` starter test file.
pub fn build_test(lib: &SubLibrary<'_>) -> GeneratedArtifact {
    let name = lib.name();

    let lines = vec![
        "bring expect;".to_string(),
        format!("bring \"../{name}.w\" as l;"),
        String::new(),
        "let adder = new l.Adder();".into(),
        String::new(),
        "test \"add() adds two numbers\" {".into(),
        "  expect.equal(adder.add(1, 2), 3);".into(),
        "}".into(),
    ];

    GeneratedArtifact::new(
        format!("tests/{name}.test.w"),
        ArtifactContent::Lines(lines),
        WritePolicy::Once,
    )
}
