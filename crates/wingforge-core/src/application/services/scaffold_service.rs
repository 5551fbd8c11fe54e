//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the per-sub-library workflow:
//! 1. Validate the sub-library name
//! 2. Run every content builder and materialize the result
//! 3. Compose both pipelines and register them with the CI integration point
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, PipelineRegistry},
    builders, pipelines,
    domain::{DomainValidator as validator, GeneratedArtifact, SubLibrary, Workspace},
    error::WingforgeResult,
};

/// Main scaffolding service.
///
/// Drives builders, the materializer, and the pipeline composer, once per
/// named sub-library. Holds no state of its own beyond the injected ports;
/// one service instance can serve any number of generation runs.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    registry: Box<dyn PipelineRegistry>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, registry: Box<dyn PipelineRegistry>) -> Self {
        Self {
            filesystem,
            registry,
        }
    }

    /// Generate scaffolds for every name, in the given order.
    ///
    /// Order across names does not affect correctness (each sub-library's
    /// artifacts are independent) but is kept stable for reproducible
    /// output diffs. Fail-fast: the first failing sub-library aborts the
    /// run; errors carry the offending name so the caller can resume with
    /// the remaining names if it wants partial-success semantics.
    #[instrument(skip_all)]
    pub fn generate<I, S>(&self, workspace: &Workspace, names: I) -> WingforgeResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        validator::validate_workspace(workspace)?;

        for raw in names {
            // An invalid name aborts before any file is written for it.
            let name = validator::validate_name(raw.as_ref())?;
            let lib = SubLibrary::new(name, workspace);
            self.scaffold(&lib)?;
        }

        Ok(())
    }

    /// Scaffold a single sub-library.
    #[instrument(skip_all, fields(lib = %lib.name()))]
    pub fn scaffold(&self, lib: &SubLibrary<'_>) -> WingforgeResult<()> {
        info!("Scaffolding sub-library");

        for artifact in builders::all(lib) {
            self.materialize(lib, &artifact)?;
        }

        let validation = pipelines::compose_validation(lib);
        let release = pipelines::compose_release(lib);
        validator::validate_pipeline(&validation)?;
        validator::validate_pipeline(&release)?;

        // Exactly two registrations per sub-library, never a read.
        self.registry.register(validation)?;
        self.registry.register(release)?;

        info!("Scaffold completed successfully");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write one artifact according to its write policy.
    ///
    /// Write-once artifacts are left untouched when a file already occupies
    /// their path; write-always artifacts are rewritten unconditionally.
    fn materialize(&self, lib: &SubLibrary<'_>, artifact: &GeneratedArtifact) -> WingforgeResult<()> {
        let target = lib.dir().join(&artifact.path);

        if !artifact.policy.overwrites() && self.filesystem.exists(target.as_path()) {
            debug!(path = %target, "write-once artifact already present, leaving as-is");
            return Ok(());
        }

        if let Some(parent) = target.as_path().parent() {
            if !parent.as_os_str().is_empty() {
                self.filesystem.create_dir_all(parent)?;
            }
        }

        self.filesystem.write_file(target.as_path(), &artifact.render())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::application::ports::output::{MockFilesystem, MockPipelineRegistry};
    use crate::application::ApplicationError;
    use crate::error::WingforgeError;

    fn workspace() -> Workspace {
        Workspace::new("winglibs", "https://github.com/winglibs/winglibs.git")
            .with_author("Wing Maintainers", "maintainers@winglang.io")
    }

    fn registry_expecting(pipelines: usize) -> MockPipelineRegistry {
        let mut registry = MockPipelineRegistry::new();
        registry
            .expect_register()
            .times(pipelines)
            .returning(|_| Ok(()));
        registry
    }

    #[test]
    fn fresh_run_writes_all_five_artifacts() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(5).returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), Box::new(registry_expecting(2)));
        service.generate(&workspace(), ["dynamodb"]).unwrap();
    }

    #[test]
    fn rerun_skips_only_the_two_write_once_stubs() {
        let mut fs = MockFilesystem::new();
        // Everything already exists on disk.
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        // Manifest, license, readme are still rewritten; the stubs are not.
        fs.expect_write_file()
            .times(3)
            .withf(|path, _| {
                path != Path::new("dynamodb/dynamodb.w")
                    && path != Path::new("dynamodb/tests/dynamodb.test.w")
            })
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), Box::new(registry_expecting(2)));
        service.generate(&workspace(), ["dynamodb"]).unwrap();
    }

    #[test]
    fn invalid_name_aborts_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        let mut registry = MockPipelineRegistry::new();
        registry.expect_register().never();

        let service = ScaffoldService::new(Box::new(fs), Box::new(registry));
        let err = service
            .generate(&workspace(), ["../escape"])
            .unwrap_err();
        assert!(matches!(err, WingforgeError::Domain(_)));
    }

    #[test]
    fn fail_fast_stops_at_the_first_bad_name() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        // Only the first (valid) name gets its artifacts written.
        fs.expect_write_file().times(5).returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), Box::new(registry_expecting(2)));
        let result = service.generate(&workspace(), ["dynamodb", "BAD NAME", "checks"]);
        assert!(result.is_err());
    }

    #[test]
    fn filesystem_failure_is_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });
        let mut registry = MockPipelineRegistry::new();
        registry.expect_register().never();

        let service = ScaffoldService::new(Box::new(fs), Box::new(registry));
        let err = service.generate(&workspace(), ["dynamodb"]).unwrap_err();
        assert!(matches!(err, WingforgeError::Application(_)));
    }

    #[test]
    fn registers_both_pipelines_per_sublibrary() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let mut registry = MockPipelineRegistry::new();
        let mut seq = mockall::Sequence::new();
        for expected in ["dynamodb-pull", "dynamodb-release", "checks-pull", "checks-release"] {
            registry
                .expect_register()
                .once()
                .in_sequence(&mut seq)
                .withf(move |p| p.name() == expected)
                .returning(|_| Ok(()));
        }

        let service = ScaffoldService::new(Box::new(fs), Box::new(registry));
        service
            .generate(&workspace(), ["dynamodb", "checks"])
            .unwrap();
    }
}
