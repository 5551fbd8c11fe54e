//! CI pipeline definition entities.
//!
//! A `PipelineDefinition` is a declarative, ordered description of steps,
//! a trigger and a permission scope, consumed by an external execution
//! environment. Deferred values (a version extracted by one step and used
//! by later ones) are modelled as first-class output bindings rather than
//! raw `${{ }}` string interpolation, so ordering dependencies stay
//! explicit and checkable. Rendering to any concrete CI syntax is an
//! adapter concern.

use crate::domain::common::RelativePath;
use crate::domain::error::DomainError;

/// Path filters restricting a trigger to a subtree of the repository.
///
/// Excludes are first-class entries, not escaped include strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl PathFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include.push(pattern.into());
        self
    }

    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    pub fn includes(&self) -> &[String] {
        &self.include
    }

    pub fn excludes(&self) -> &[String] {
        &self.exclude
    }

    /// Flatten to the wire form: includes verbatim, excludes `!`-prefixed.
    pub fn entries(&self) -> Vec<String> {
        self.include
            .iter()
            .cloned()
            .chain(self.exclude.iter().map(|p| format!("!{p}")))
            .collect()
    }
}

/// What activates a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Proposed-change events whose changed paths intersect the filter.
    PullRequest { paths: PathFilter },
    /// Pushes to one of `branches` whose changed paths intersect the filter.
    Push {
        branches: Vec<String>,
        paths: PathFilter,
    },
}

impl Trigger {
    pub fn paths(&self) -> &PathFilter {
        match self {
            Self::PullRequest { paths } | Self::Push { paths, .. } => paths,
        }
    }
}

/// Permission scope granted to a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionScope {
    /// Read-only check; no grants.
    None,
    /// Content write access (needed to tag and publish).
    Write,
}

/// A value passed to a step input or environment variable.
///
/// `Binding` and `Prefixed` consume an output captured by an earlier
/// step; `validate()` rejects pipelines where no earlier step captured
/// the referenced name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepValue {
    Literal(String),
    /// An externally supplied credential, resolved by the CI environment.
    Secret(String),
    /// The value captured under this name by an earlier step.
    Binding(String),
    /// Literal text glued to a binding, e.g. a `<name>-v<version>` tag.
    Prefixed { prefix: String, binding: String },
}

impl StepValue {
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    pub fn secret(name: impl Into<String>) -> Self {
        Self::Secret(name.into())
    }

    pub fn binding(name: impl Into<String>) -> Self {
        Self::Binding(name.into())
    }

    pub fn prefixed(prefix: impl Into<String>, binding: impl Into<String>) -> Self {
        Self::Prefixed {
            prefix: prefix.into(),
            binding: binding.into(),
        }
    }

    /// The output binding this value consumes, if any.
    pub fn consumed_binding(&self) -> Option<&str> {
        match self {
            Self::Binding(name) | Self::Prefixed { binding: name, .. } => Some(name),
            Self::Literal(_) | Self::Secret(_) => None,
        }
    }
}

/// Execution target of a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// A named external action with key/value inputs.
    Uses {
        action: String,
        with: Vec<(String, StepValue)>,
    },
    /// An inline command.
    Run { command: String },
    /// An inline command whose computed value is exported under `output`
    /// and becomes available to later steps.
    Capture { output: String, command: String },
}

/// One ordered pipeline step.
///
/// Ordering is a correctness invariant: a capture must precede every step
/// that consumes its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    name: String,
    action: StepAction,
    working_directory: Option<RelativePath>,
    env: Vec<(String, StepValue)>,
}

impl Step {
    pub fn uses(name: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            action: StepAction::Uses {
                action: action.into(),
                with: Vec::new(),
            },
            working_directory: None,
            env: Vec::new(),
        }
    }

    pub fn run(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            action: StepAction::Run {
                command: command.into(),
            },
            working_directory: None,
            env: Vec::new(),
        }
    }

    pub fn capture(
        name: impl Into<String>,
        output: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            action: StepAction::Capture {
                output: output.into(),
                command: command.into(),
            },
            working_directory: None,
            env: Vec::new(),
        }
    }

    /// Add an input parameter (only meaningful on `Uses` steps).
    pub fn with_input(mut self, key: impl Into<String>, value: StepValue) -> Self {
        if let StepAction::Uses { with, .. } = &mut self.action {
            with.push((key.into(), value));
        }
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: StepValue) -> Self {
        self.env.push((key.into(), value));
        self
    }

    /// Override the working directory for this step.
    pub fn in_dir(mut self, dir: RelativePath) -> Self {
        self.working_directory = Some(dir);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn action(&self) -> &StepAction {
        &self.action
    }

    pub fn working_directory(&self) -> Option<&RelativePath> {
        self.working_directory.as_ref()
    }

    pub fn env(&self) -> &[(String, StepValue)] {
        &self.env
    }

    /// The output binding this step exports, if it is a capture.
    pub fn exported_binding(&self) -> Option<&str> {
        match &self.action {
            StepAction::Capture { output, .. } => Some(output),
            _ => None,
        }
    }

    /// All bindings this step consumes, via inputs or env.
    fn consumed_bindings(&self) -> impl Iterator<Item = &str> {
        let inputs = match &self.action {
            StepAction::Uses { with, .. } => with.as_slice(),
            _ => &[],
        };
        inputs
            .iter()
            .chain(self.env.iter())
            .filter_map(|(_, v)| v.consumed_binding())
    }
}

/// A composed pipeline: trigger, permissions, runner, ordered steps.
///
/// Immutable once composed. Two exist per sub-library: validation and
/// release.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineDefinition {
    name: String,
    trigger: Trigger,
    permissions: PermissionScope,
    runs_on: String,
    job_id: String,
    steps: Vec<Step>,
}

impl PipelineDefinition {
    pub fn new(
        name: impl Into<String>,
        trigger: Trigger,
        permissions: PermissionScope,
        runs_on: impl Into<String>,
        job_id: impl Into<String>,
        steps: Vec<Step>,
    ) -> Self {
        Self {
            name: name.into(),
            trigger,
            permissions,
            runs_on: runs_on.into(),
            job_id: job_id.into(),
            steps,
        }
    }

    /// Check structural invariants: at least one step, no duplicate
    /// captures, every consumed binding captured by a strictly earlier step.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.steps.is_empty() {
            return Err(DomainError::EmptyPipeline {
                pipeline: self.name.clone(),
            });
        }

        let mut captured: Vec<&str> = Vec::new();
        for step in &self.steps {
            for binding in step.consumed_bindings() {
                if !captured.contains(&binding) {
                    return Err(DomainError::UnboundStepOutput {
                        pipeline: self.name.clone(),
                        step: step.name().to_string(),
                        binding: binding.to_string(),
                    });
                }
            }
            if let Some(output) = step.exported_binding() {
                if captured.contains(&output) {
                    return Err(DomainError::DuplicateStepOutput {
                        pipeline: self.name.clone(),
                        binding: output.to_string(),
                    });
                }
                captured.push(output);
            }
        }

        Ok(())
    }

    // Getters

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }
    pub fn permissions(&self) -> PermissionScope {
        self.permissions
    }
    pub fn runs_on(&self) -> &str {
        &self.runs_on
    }
    pub fn job_id(&self) -> &str {
        &self.job_id
    }
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Index of the first step with the given name, for ordering checks.
    pub fn step_index(&self, name: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pull_trigger() -> Trigger {
        Trigger::PullRequest {
            paths: PathFilter::new().include("lib/**"),
        }
    }

    #[test]
    fn path_filter_entries_prefix_excludes() {
        let filter = PathFilter::new()
            .include("dynamodb/**")
            .exclude("dynamodb/package-lock.json");
        assert_eq!(
            filter.entries(),
            vec![
                "dynamodb/**".to_string(),
                "!dynamodb/package-lock.json".to_string()
            ]
        );
    }

    #[test]
    fn validate_rejects_empty_pipeline() {
        let pipeline = PipelineDefinition::new(
            "lib-pull",
            pull_trigger(),
            PermissionScope::None,
            "ubuntu-latest",
            "build-lib",
            Vec::new(),
        );
        assert_eq!(
            pipeline.validate(),
            Err(DomainError::EmptyPipeline {
                pipeline: "lib-pull".into()
            })
        );
    }

    #[test]
    fn validate_rejects_binding_consumed_before_capture() {
        let steps = vec![
            Step::uses("Tag commit", "tagger@v1")
                .with_input("tag", StepValue::prefixed("lib-v", "VERSION")),
            Step::capture("Get version", "VERSION", "node -p \"1\""),
        ];
        let pipeline = PipelineDefinition::new(
            "lib-release",
            pull_trigger(),
            PermissionScope::Write,
            "ubuntu-latest",
            "build-lib",
            steps,
        );
        assert!(matches!(
            pipeline.validate(),
            Err(DomainError::UnboundStepOutput { step, binding, .. })
                if step == "Tag commit" && binding == "VERSION"
        ));
    }

    #[test]
    fn validate_accepts_capture_before_consumer() {
        let steps = vec![
            Step::capture("Get version", "VERSION", "node -p \"1\""),
            Step::uses("Tag commit", "tagger@v1")
                .with_input("tag", StepValue::prefixed("lib-v", "VERSION")),
        ];
        let pipeline = PipelineDefinition::new(
            "lib-release",
            pull_trigger(),
            PermissionScope::Write,
            "ubuntu-latest",
            "build-lib",
            steps,
        );
        assert!(pipeline.validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_captures() {
        let steps = vec![
            Step::capture("a", "VERSION", "cmd"),
            Step::capture("b", "VERSION", "cmd"),
        ];
        let pipeline = PipelineDefinition::new(
            "lib-release",
            pull_trigger(),
            PermissionScope::Write,
            "ubuntu-latest",
            "build-lib",
            steps,
        );
        assert!(matches!(
            pipeline.validate(),
            Err(DomainError::DuplicateStepOutput { .. })
        ));
    }

    #[test]
    fn env_bindings_are_checked_too() {
        let steps = vec![
            Step::run("Publish", "npm publish").with_env("VERSION", StepValue::binding("VERSION")),
        ];
        let pipeline = PipelineDefinition::new(
            "lib-release",
            pull_trigger(),
            PermissionScope::Write,
            "ubuntu-latest",
            "build-lib",
            steps,
        );
        assert!(pipeline.validate().is_err());
    }
}
