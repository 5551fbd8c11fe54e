use crate::domain::{
    error::DomainError, name::LibName, pipeline::PipelineDefinition, workspace::Workspace,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_name(raw: &str) -> Result<LibName, DomainError> {
        LibName::new(raw)
    }

    pub fn validate_workspace(workspace: &Workspace) -> Result<(), DomainError> {
        workspace.validate()
    }

    pub fn validate_pipeline(pipeline: &PipelineDefinition) -> Result<(), DomainError> {
        pipeline.validate()
    }
}
