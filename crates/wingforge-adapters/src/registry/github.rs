//! GitHub workflow registry.
//!
//! Projects every registered pipeline definition to a workflow file under
//! `.github/workflows/`. Workflow files are generator-owned, so they are
//! rewritten on every registration (write-always).

use std::path::PathBuf;

use tracing::{debug, instrument};

use wingforge_core::{
    application::ports::{Filesystem, PipelineRegistry},
    domain::PipelineDefinition,
    error::WingforgeResult,
};

use crate::workflow;

const WORKFLOWS_DIR: &str = ".github/workflows";

/// Registry that materializes pipelines as GitHub-Actions workflow files.
pub struct GithubWorkflowRegistry {
    filesystem: Box<dyn Filesystem>,
}

impl GithubWorkflowRegistry {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    fn workflow_path(pipeline: &PipelineDefinition) -> PathBuf {
        PathBuf::from(WORKFLOWS_DIR).join(format!("{}.yml", pipeline.name()))
    }
}

impl PipelineRegistry for GithubWorkflowRegistry {
    #[instrument(skip_all, fields(pipeline = %pipeline.name()))]
    fn register(&self, pipeline: PipelineDefinition) -> WingforgeResult<()> {
        let rendered = workflow::render(&pipeline)?;
        let path = Self::workflow_path(&pipeline);

        self.filesystem.create_dir_all(WORKFLOWS_DIR.as_ref())?;
        self.filesystem.write_file(&path, &rendered)?;

        debug!(path = %path.display(), "workflow file written");
        Ok(())
    }
}
