//! Rendering pipeline definitions to GitHub-Actions workflow YAML.
//!
//! The domain models deferred values as first-class output bindings; the
//! `${{ }}` expression syntax only appears here, at the wire boundary.
//! A `Capture` step renders to the `echo NAME=$(...) >> "$GITHUB_ENV"`
//! idiom, and `Binding`/`Secret` values render to `${{ env.NAME }}` /
//! `${{ secrets.NAME }}` expressions.

use std::collections::BTreeMap;

use serde::Serialize;

use wingforge_core::{
    application::ApplicationError,
    domain::{PermissionScope, PipelineDefinition, Step, StepAction, StepValue, Trigger},
    error::WingforgeResult,
};

/// Render a pipeline definition to a GitHub-Actions workflow document.
pub fn render(pipeline: &PipelineDefinition) -> WingforgeResult<String> {
    let doc = WorkflowDoc::from(pipeline);
    serde_yaml::to_string(&doc).map_err(|e| {
        ApplicationError::RenderingFailed {
            pipeline: pipeline.name().to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct WorkflowDoc {
    name: String,
    #[serde(rename = "on")]
    trigger: TriggerDoc,
    jobs: BTreeMap<String, JobDoc>,
}

#[derive(Debug, Serialize)]
struct TriggerDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pull_request: Option<PullRequestClause>,
    #[serde(skip_serializing_if = "Option::is_none")]
    push: Option<PushClause>,
}

#[derive(Debug, Serialize)]
struct PullRequestClause {
    paths: Vec<String>,
}

#[derive(Debug, Serialize)]
struct PushClause {
    branches: Vec<String>,
    paths: Vec<String>,
}

#[derive(Debug, Serialize)]
struct JobDoc {
    #[serde(rename = "runs-on")]
    runs_on: String,
    permissions: BTreeMap<String, String>,
    steps: Vec<StepDoc>,
}

#[derive(Debug, Serialize)]
struct StepDoc {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    uses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    run: Option<String>,
    #[serde(rename = "working-directory", skip_serializing_if = "Option::is_none")]
    working_directory: Option<String>,
    #[serde(rename = "with", skip_serializing_if = "Option::is_none")]
    with: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    env: Option<BTreeMap<String, String>>,
}

// ── Conversion ────────────────────────────────────────────────────────────────

impl From<&PipelineDefinition> for WorkflowDoc {
    fn from(pipeline: &PipelineDefinition) -> Self {
        let trigger = match pipeline.trigger() {
            Trigger::PullRequest { paths } => TriggerDoc {
                pull_request: Some(PullRequestClause {
                    paths: paths.entries(),
                }),
                push: None,
            },
            Trigger::Push { branches, paths } => TriggerDoc {
                pull_request: None,
                push: Some(PushClause {
                    branches: branches.clone(),
                    paths: paths.entries(),
                }),
            },
        };

        let mut permissions = BTreeMap::new();
        if pipeline.permissions() == PermissionScope::Write {
            permissions.insert("contents".to_string(), "write".to_string());
        }

        let job = JobDoc {
            runs_on: pipeline.runs_on().to_string(),
            permissions,
            steps: pipeline.steps().iter().map(render_step).collect(),
        };

        let mut jobs = BTreeMap::new();
        jobs.insert(pipeline.job_id().to_string(), job);

        Self {
            name: pipeline.name().to_string(),
            trigger,
            jobs,
        }
    }
}

fn render_step(step: &Step) -> StepDoc {
    let (uses, run, with) = match step.action() {
        StepAction::Uses { action, with } => {
            let inputs: BTreeMap<String, String> = with
                .iter()
                .map(|(k, v)| (k.clone(), render_value(v)))
                .collect();
            (
                Some(action.clone()),
                None,
                (!inputs.is_empty()).then_some(inputs),
            )
        }
        StepAction::Run { command } => (None, Some(command.clone()), None),
        StepAction::Capture { output, command } => (
            None,
            Some(format!("echo {output}=$({command}) >> \"$GITHUB_ENV\"")),
            None,
        ),
    };

    let env: BTreeMap<String, String> = step
        .env()
        .iter()
        .map(|(k, v)| (k.clone(), render_value(v)))
        .collect();

    StepDoc {
        name: step.name().to_string(),
        uses,
        run,
        working_directory: step.working_directory().map(ToString::to_string),
        with,
        env: (!env.is_empty()).then_some(env),
    }
}

fn render_value(value: &StepValue) -> String {
    match value {
        StepValue::Literal(s) => s.clone(),
        StepValue::Secret(name) => format!("${{{{ secrets.{name} }}}}"),
        StepValue::Binding(name) => format!("${{{{ env.{name} }}}}"),
        StepValue::Prefixed { prefix, binding } => {
            format!("{prefix}${{{{ env.{binding} }}}}")
        }
    }
}
