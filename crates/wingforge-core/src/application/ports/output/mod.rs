//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `wingforge-adapters` crate provides implementations.

use crate::domain::PipelineDefinition;
use crate::error::WingforgeResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `wingforge_adapters::filesystem::LocalFilesystem` (production)
/// - `wingforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - All paths are relative to the repository root the adapter was
///   constructed with; the core never sees absolute paths
/// - Deliberately minimal: the materializer only ever checks existence,
///   creates parent directories, and writes whole files
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> WingforgeResult<()>;

    /// Write content to a file, replacing anything already there.
    fn write_file(&self, path: &Path, content: &str) -> WingforgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the shared CI integration point.
///
/// The orchestrator only ever appends to the registry — exactly twice per
/// sub-library — and never reads or removes entries, so implementations
/// need no ordering guarantees beyond append.
///
/// Implemented by:
/// - `wingforge_adapters::registry::InMemoryRegistry` (collection, testing)
/// - `wingforge_adapters::registry::GithubWorkflowRegistry` (YAML projection)
#[cfg_attr(test, mockall::automock)]
pub trait PipelineRegistry: Send + Sync {
    /// Register a composed pipeline definition.
    fn register(&self, pipeline: PipelineDefinition) -> WingforgeResult<()>;
}
