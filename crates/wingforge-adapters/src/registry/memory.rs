//! In-memory pipeline registry.

use std::sync::{Arc, RwLock};

use wingforge_core::{
    application::ports::PipelineRegistry, domain::PipelineDefinition, error::WingforgeResult,
};

/// Thread-safe in-memory pipeline registry.
///
/// The generation side only ever appends; the inspection helpers exist for
/// the registry's owner (the host orchestrator, or a test) to read the
/// collected definitions after a run.
#[derive(Clone, Default)]
pub struct InMemoryRegistry {
    inner: Arc<RwLock<Vec<PipelineDefinition>>>,
}

impl InMemoryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all registered pipelines, in registration order.
    pub fn pipelines(&self) -> Vec<PipelineDefinition> {
        self.inner.read().unwrap().clone()
    }

    /// Get the number of registered pipelines.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PipelineRegistry for InMemoryRegistry {
    fn register(&self, pipeline: PipelineDefinition) -> WingforgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| wingforge_core::application::ApplicationError::LockPoisoned)?;

        inner.push(pipeline);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wingforge_core::domain::{PathFilter, PermissionScope, Step, Trigger};

    fn pipeline(name: &str) -> PipelineDefinition {
        PipelineDefinition::new(
            name,
            Trigger::PullRequest {
                paths: PathFilter::new().include("lib/**"),
            },
            PermissionScope::None,
            "ubuntu-latest",
            "build-lib",
            vec![Step::run("Test", "wing test")],
        )
    }

    #[test]
    fn registrations_append_in_order() {
        let registry = InMemoryRegistry::new();
        registry.register(pipeline("lib-pull")).unwrap();
        registry.register(pipeline("lib-release")).unwrap();

        let names: Vec<_> = registry
            .pipelines()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, ["lib-pull", "lib-release"]);
    }

    #[test]
    fn clones_share_the_same_collection() {
        let registry = InMemoryRegistry::new();
        let handle = registry.clone();
        registry.register(pipeline("lib-pull")).unwrap();
        assert_eq!(handle.len(), 1);
    }
}
