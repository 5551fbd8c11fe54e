//! Wingforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Wingforge
//! workspace scaffold generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │     host orchestrator (excluded)        │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Filesystem, PipelineRegistry) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    wingforge-adapters (Infrastructure)  │
//! │  (LocalFilesystem, InMemoryRegistry,    │
//! │   GithubWorkflowRegistry, etc)          │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (SubLibrary, GeneratedArtifact,        │
//! │   PipelineDefinition, builders,         │
//! │   pipeline composer)                    │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wingforge_core::{
//!     application::ScaffoldService,
//!     domain::Workspace,
//! };
//!
//! // 1. Describe the repository every sub-library belongs to
//! let workspace = Workspace::new("winglibs", "https://github.com/winglibs/winglibs.git")
//!     .with_author("Wing Maintainers", "maintainers@winglang.io");
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, registry);
//! service.generate(&workspace, ["dynamodb", "checks"]).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Name-parameterized content builders (pure)
pub mod builders;

// Pipeline step composition (pure)
pub mod pipelines;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{Filesystem, PipelineRegistry},
    };
    pub use crate::domain::{
        ArtifactContent, GeneratedArtifact, LibName, PackageManifest, PathFilter, PermissionScope,
        PipelineDefinition, Step, StepAction, StepValue, SubLibrary, Trigger, Workspace,
        WritePolicy,
    };
    pub use crate::error::{WingforgeError, WingforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
