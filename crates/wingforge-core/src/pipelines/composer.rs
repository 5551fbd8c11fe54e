//! The two pipeline shapes.
//!
//! Both pipelines share a build prefix (checkout through pack); release
//! extends it with version extraction, publish, tag, and release-record
//! steps. Every sub-library-specific step binds its working directory to
//! the sub-library's subdirectory so multiple sub-libraries can share one
//! execution host without cross-contamination.

use crate::domain::{
    PathFilter, PermissionScope, PipelineDefinition, Step, StepValue, SubLibrary, Trigger,
};

const RUNNER: &str = "ubuntu-latest";

/// Name of the output binding carrying the extracted manifest version.
const VERSION_BINDING: &str = "WINGLIB_VERSION";

/// Compose the pull-request validation pipeline for a sub-library.
///
/// Triggers on proposed-change events touching the sub-library's
/// directory; runs with an empty permission scope; stops at the pack step.
pub fn compose_validation(lib: &SubLibrary<'_>) -> PipelineDefinition {
    PipelineDefinition::new(
        format!("{}-pull", lib.name()),
        Trigger::PullRequest {
            paths: PathFilter::new().include(lib.path_glob()),
        },
        PermissionScope::None,
        RUNNER,
        format!("build-{}", lib.name()),
        build_steps(lib),
    )
}

/// Compose the release pipeline for a sub-library.
///
/// Triggers only on pushes to the default branch touching the
/// sub-library's directory — excluding its own lock file, so dependency
/// churn alone cannot cause a publish. Extends the validation steps with
/// version extraction, publish, tag, and a release record. The version
/// capture must precede the tag and release steps, which consume it;
/// [`PipelineDefinition::validate`] enforces this.
pub fn compose_release(lib: &SubLibrary<'_>) -> PipelineDefinition {
    let ws = lib.workspace();
    let name = lib.name();

    let mut steps = build_steps(lib);

    steps.push(
        Step::capture(
            "Get package version",
            VERSION_BINDING,
            "node -p \"require('./package.json').version\"",
        )
        .in_dir(lib.dir()),
    );
    steps.push(Step::run(
        format!("Echo {VERSION_BINDING}"),
        format!("echo ${VERSION_BINDING}"),
    ));
    steps.push(
        Step::run(
            "Publish",
            format!(
                "npm publish --access=public --registry {} --tag latest *.tgz",
                ws.npm_registry()
            ),
        )
        .in_dir(lib.dir())
        .with_env("NODE_AUTH_TOKEN", StepValue::secret("NPM_TOKEN")),
    );
    steps.push(
        Step::uses("Tag commit", "tvdias/github-tagger@v0.0.1")
            .with_input("repo-token", StepValue::secret("GITHUB_TOKEN"))
            .with_input(
                "tag",
                StepValue::prefixed(format!("{name}-v"), VERSION_BINDING),
            ),
    );
    steps.push(
        Step::uses("Github release", "softprops/action-gh-release@v1")
            .with_input("name", StepValue::prefixed(format!("{name} v"), VERSION_BINDING))
            .with_input(
                "tag_name",
                StepValue::prefixed(format!("{name}-v"), VERSION_BINDING),
            )
            .with_input("files", StepValue::literal("*.tgz"))
            .with_input("token", StepValue::secret("GITHUB_TOKEN")),
    );

    PipelineDefinition::new(
        format!("{name}-release"),
        Trigger::Push {
            branches: vec![ws.default_branch().into()],
            paths: PathFilter::new()
                .include(lib.path_glob())
                .exclude(lib.lock_file()),
        },
        PermissionScope::Write,
        RUNNER,
        format!("build-{name}"),
        steps,
    )
}

/// Shared build prefix: checkout → toolchain → dependencies → test → pack.
///
/// The checkout is sparse, scoped to just the sub-library's directory.
fn build_steps(lib: &SubLibrary<'_>) -> Vec<Step> {
    let ws = lib.workspace();

    vec![
        Step::uses("Checkout", "actions/checkout@v3").with_input(
            "sparse-checkout",
            StepValue::literal(lib.name().as_str()),
        ),
        Step::uses("Setup Node.js", "actions/setup-node@v3")
            .with_input("node-version", StepValue::literal(ws.node_version()))
            .with_input("registry-url", StepValue::literal(ws.npm_registry())),
        Step::run("Install winglang", "npm i -g winglang"),
        Step::run("Install dependencies", "npm i --include=dev").in_dir(lib.dir()),
        Step::run("Test", "wing test").in_dir(lib.dir()),
        Step::run("Pack", "wing pack").in_dir(lib.dir()),
    ]
}
